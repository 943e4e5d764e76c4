// src/motor.rs
//! Motors: elements of the even subalgebra (rotor and translator parts).

use crate::entity::{named_entity, Entity};
use crate::mask::EvenMask;
use crate::partition::Partition;

/// General rotor + translator.
///
/// p1: (1, e12, e31, e23)
/// p2: (e0123, e01, e02, e03)
///
/// Unlike [`crate::Bivector`], neither first lane is constrained.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Motor(Entity<EvenMask>);

named_entity!(Motor, EvenMask);

impl Motor {
    /// Coefficients in storage order: `a + b*e12 + c*e31 + d*e23` and
    /// `e*e0123 + f*e01 + g*e02 + h*e03`.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32) -> Self {
        Self(Entity::from_partitions([
            Partition::new([a, b, c, d]),
            Partition::new([e, f, g, h]),
        ]))
    }

    /// The identity motor.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Compose with another motor: `self * rhs`, still a motor.
    pub fn compose(&self, rhs: &Motor) -> Motor {
        Motor(self.0.geometric_product(&rhs.0))
    }
}

impl From<Entity<EvenMask>> for Motor {
    #[inline(always)]
    fn from(e: Entity<EvenMask>) -> Self {
        Self(e)
    }
}
