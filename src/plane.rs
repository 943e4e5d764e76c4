// src/plane.rs
//! Planes: the grade-1 elements, `a*e1 + b*e2 + c*e3 + d*e0`.
//!
//! In projective geometry the plane is the fundamental element. Lines are
//! the meet of two planes, points the meet of three.

use crate::entity::{named_entity, Entity};
use crate::mask::PlaneMask;
use crate::partition::Partition;

/// The plane `a*x + b*y + c*z + d = 0`, stored in `p0` as `(c, b, a, d)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane(Entity<PlaneMask>);

named_entity!(Plane, PlaneMask);

impl Plane {
    /// Plane from the coefficients of `a*x + b*y + c*z + d = 0`.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self(Entity::from_partitions([Partition::new([c, b, a, d])]))
    }

    /// x coefficient of the plane equation (e1).
    pub fn a(&self) -> f32 {
        self.e1()
    }

    /// y coefficient of the plane equation (e2).
    pub fn b(&self) -> f32 {
        self.e2()
    }

    /// z coefficient of the plane equation (e3).
    pub fn c(&self) -> f32 {
        self.e3()
    }

    /// Constant term of the plane equation (e0).
    pub fn d(&self) -> f32 {
        self.e0()
    }
}

impl From<Entity<PlaneMask>> for Plane {
    #[inline(always)]
    fn from(e: Entity<PlaneMask>) -> Self {
        Self(e)
    }
}
