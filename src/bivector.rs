// src/bivector.rs
//! A general bivector: a Euclidean line plus an ideal line.

use crate::entity::{named_entity, Entity};
use crate::error::Result;
use crate::line::{check_lane_zero, IdealLine, Line};
use crate::mask::EvenMask;
use crate::partition::Partition;
use std::ops::Index;

/// `a*e01 + b*e02 + c*e03 + d*e12 + e*e31 + f*e23`
///
/// p1: (1, e12, e31, e23) with the scalar lane zero
/// p2: (e0123, e01, e02, e03) with the pseudoscalar lane zero
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bivector(Entity<EvenMask>);

named_entity!(Bivector, EvenMask);

impl Bivector {
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self(Entity::from_partitions([
            Partition::new([0.0, d, e, f]),
            // Degenerate components follow the Euclidean ones
            Partition::new([0.0, a, b, c]),
        ]))
    }

    /// Convert, rejecting an entity with a scalar or pseudoscalar part.
    pub fn try_from_entity(e: Entity<EvenMask>) -> Result<Self> {
        check_lane_zero(&e, 1)?;
        check_lane_zero(&e, 2)?;
        Ok(Self(e))
    }

    /// Euclidean part.
    pub fn euclidean(&self) -> Line {
        Line::new(self.e12(), self.e31(), self.e23())
    }

    /// Ideal part.
    pub fn ideal(&self) -> IdealLine {
        IdealLine::new(self.e01(), self.e02(), self.e03())
    }
}

impl From<Entity<EvenMask>> for Bivector {
    #[inline(always)]
    fn from(e: Entity<EvenMask>) -> Self {
        Self(e)
    }
}

/// Stored lanes in memory order: `p1` lanes 0..4, then `p2` lanes 4..8.
impl Index<usize> for Bivector {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.0.partitions()[i / 4].as_array()[i % 4]
    }
}
