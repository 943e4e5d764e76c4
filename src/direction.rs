// src/direction.rs
//! Directions: points at infinity, `x*e032 + y*e013 + z*e021`.

use crate::entity::{named_entity, Entity};
use crate::error::{PgaError, Result};
use crate::mask::PointMask;
use crate::partition::Partition;
use std::ops::{Index, IndexMut};

/// Largest homogeneous weight still accepted as ideal.
pub const IDEAL_TOLERANCE: f32 = 1e-7;

/// An ideal point, stored in `p3` as `(0, z, y, x)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Direction(Entity<PointMask>);

named_entity!(Direction, PointMask);

impl Direction {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Entity::from_partitions([Partition::new([0.0, z, y, x])]))
    }

    pub fn x(&self) -> f32 {
        self.e032()
    }

    pub fn y(&self) -> f32 {
        self.e013()
    }

    pub fn z(&self) -> f32 {
        self.e021()
    }

    /// Convert, rejecting a point whose weight is not within
    /// [`IDEAL_TOLERANCE`] of zero. Checked in every build.
    pub fn try_from_entity(e: Entity<PointMask>) -> Result<Self> {
        let weight = e.e123();
        // NaN is not ideal either
        if !(weight.abs() < IDEAL_TOLERANCE) {
            log::debug!("rejecting {e} as a direction: weight {weight}");
            return Err(PgaError::NonIdealDirection { weight });
        }
        Ok(Self(e))
    }
}

/// Asserts the weight is ideal in debug builds with the `validate`
/// feature; otherwise unchecked.
impl From<Entity<PointMask>> for Direction {
    #[inline]
    fn from(e: Entity<PointMask>) -> Self {
        #[cfg(feature = "validate")]
        debug_assert!(
            e.e123().abs() < IDEAL_TOLERANCE,
            "cannot initialize direction from non-ideal point"
        );
        Self(e)
    }
}

/// `d[0]`, `d[1]`, `d[2]`, `d[3]` are x, y, z and the weight.
impl Index<usize> for Direction {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        assert!(i < 4, "direction index {i} out of range");
        &self.0.partitions()[0].as_array()[3 - i]
    }
}

impl IndexMut<usize> for Direction {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        assert!(i < 4, "direction index {i} out of range");
        self.0.lane_mut(3, 3 - i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn layout_and_index() {
        let mut d = Direction::new(1.0, 2.0, 3.0);
        assert_eq!(d.p3(), [0.0, 3.0, 2.0, 1.0]);
        assert_eq!((d[0], d[1], d[2], d[3]), (1.0, 2.0, 3.0, 0.0));
        d[1] = -5.0;
        assert_eq!(d.y(), -5.0);
    }

    #[test]
    fn checked_conversion_rejects_finite_points() {
        let finite = Entity::<PointMask>::from_partitions([Partition::new([1.0, 0.0, 0.0, 1.0])]);
        assert_eq!(
            Direction::try_from_entity(finite),
            Err(PgaError::NonIdealDirection { weight: 1.0 })
        );
        let ideal = Entity::<PointMask>::from_partitions([Partition::new([0.0, 0.0, 0.0, 1.0])]);
        assert_eq!(Direction::try_from_entity(ideal).map(|d| d.x()), Ok(1.0));
    }

    #[test]
    fn checked_conversion_rejects_nan_weight() {
        let e = Entity::<PointMask>::from_partitions([Partition::new([f32::NAN, 0.0, 0.0, 1.0])]);
        assert!(matches!(
            Direction::try_from_entity(e),
            Err(PgaError::NonIdealDirection { weight }) if weight.is_nan()
        ));
    }

    #[test]
    #[should_panic(expected = "direction index 4 out of range")]
    fn index_past_weight_panics() {
        let d = Direction::new(1.0, 2.0, 3.0);
        let _ = d[4];
    }

    #[test]
    #[should_panic(expected = "direction index 7 out of range")]
    fn index_mut_past_weight_panics() {
        let mut d = Direction::new(1.0, 2.0, 3.0);
        d[7] = 1.0;
    }

    #[test]
    fn conversion_accepts_tiny_weight() {
        let e = Entity::<PointMask>::from_partitions([Partition::new([5e-8, 0.0, 1.0, 0.0])]);
        assert_eq!(Direction::from(e).y(), 1.0);
    }

    #[cfg(all(feature = "validate", debug_assertions))]
    #[test]
    #[should_panic(expected = "non-ideal point")]
    fn conversion_asserts_in_debug() {
        let finite = Entity::<PointMask>::from_partitions([Partition::new([1.0, 0.0, 0.0, 0.0])]);
        let _ = Direction::from(finite);
    }
}
