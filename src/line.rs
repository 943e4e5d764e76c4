// src/line.rs
//! Euclidean lines (`p1`) and ideal lines (`p2`).
//!
//! Both live in a partition whose first lane holds something other than a
//! bivector (the scalar for `p1`, the pseudoscalar for `p2`). For a line
//! that lane is exactly zero.

use crate::entity::{named_entity, Entity};
use crate::error::{PgaError, Result};
use crate::mask::{IdealLineMask, LineMask};
use crate::partition::Partition;

/// Euclidean line `d*e12 + e*e31 + f*e23`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Line(Entity<LineMask>);

named_entity!(Line, LineMask);

impl Line {
    #[inline]
    pub fn new(d: f32, e: f32, f: f32) -> Self {
        Self(Entity::from_partitions([Partition::new([0.0, d, e, f])]))
    }

    /// Convert, rejecting an entity with a scalar part.
    pub fn try_from_entity(e: Entity<LineMask>) -> Result<Self> {
        check_lane_zero(&e, 1)?;
        Ok(Self(e))
    }
}

/// Accepts the entity as-is; use [`Line::try_from_entity`] when the scalar
/// lane may be non-zero.
impl From<Entity<LineMask>> for Line {
    #[inline(always)]
    fn from(e: Entity<LineMask>) -> Self {
        Self(e)
    }
}

/// Ideal line (line at infinity) `a*e01 + b*e02 + c*e03`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IdealLine(Entity<IdealLineMask>);

named_entity!(IdealLine, IdealLineMask);

impl IdealLine {
    #[inline]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self(Entity::from_partitions([Partition::new([0.0, a, b, c])]))
    }

    /// Convert, rejecting an entity with a pseudoscalar part.
    pub fn try_from_entity(e: Entity<IdealLineMask>) -> Result<Self> {
        check_lane_zero(&e, 2)?;
        Ok(Self(e))
    }
}

impl From<Entity<IdealLineMask>> for IdealLine {
    #[inline(always)]
    fn from(e: Entity<IdealLineMask>) -> Self {
        Self(e)
    }
}

pub(crate) fn check_lane_zero<M: crate::mask::PartitionMask>(e: &Entity<M>, slot: usize) -> Result<()> {
    let value = e.lane(slot, 0);
    if value != 0.0 {
        log::debug!("rejecting entity {e}: lane 0 of p{slot} is {value}");
        return Err(PgaError::ScalarLaneNotZero { slot, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_line_layout() {
        let l = Line::new(1.0, 2.0, 3.0);
        assert_eq!(l.p1(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(l.e12(), 1.0);
        assert_eq!(l.e31(), 2.0);
        assert_eq!(l.e23(), 3.0);
        assert_eq!(l.scalar(), 0.0);
        assert_eq!(l.e01(), 0.0);
    }

    #[test]
    fn ideal_line_layout() {
        let l = IdealLine::new(1.0, 2.0, 3.0);
        assert_eq!(l.p2(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(l.e01(), 1.0);
        assert_eq!(l.e20(), -2.0);
        assert_eq!(l.e0123(), 0.0);
        assert_eq!(l.e12(), 0.0);
    }

    #[test]
    fn reverse_negates_lines() {
        let l = Line::new(1.0, -2.0, 3.0);
        assert_eq!(l.reverse(), -l);
        let i = IdealLine::new(0.5, 0.25, -4.0);
        assert_eq!(i.reverse(), -i);
    }

    #[test]
    fn checked_conversion() {
        let rotor = Entity::<LineMask>::from_partitions([Partition::new([1.0, 0.0, 0.0, 0.0])]);
        assert_eq!(
            Line::try_from_entity(rotor),
            Err(PgaError::ScalarLaneNotZero { slot: 1, value: 1.0 })
        );
        let pure = Entity::<LineMask>::from_partitions([Partition::new([0.0, 1.0, 0.0, 0.0])]);
        assert_eq!(Line::try_from_entity(pure).map(|l| l.e12()), Ok(1.0));
    }
}
