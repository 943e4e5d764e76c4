// src/multivector.rs
//! The fully general element: all four partitions materialized.

use crate::entity::{named_entity, Entity};
use crate::mask::FullMask;
use crate::partition::Partition;

/// All 16 coefficients of P(R*(3,0,1)).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Multivector(Entity<FullMask>);

named_entity!(Multivector, FullMask);

impl Multivector {
    /// From the raw lanes of `p0`, `p1`, `p2`, `p3`.
    pub fn new(p0: [f32; 4], p1: [f32; 4], p2: [f32; 4], p3: [f32; 4]) -> Self {
        Self(Entity::from_partitions([
            Partition::new(p0),
            Partition::new(p1),
            Partition::new(p2),
            Partition::new(p3),
        ]))
    }

    /// The zero multivector.
    pub fn zero() -> Self {
        Self(Entity::zero())
    }

    /// Widen any element to a full multivector; absent slots become zero.
    pub fn from_element<E: crate::entity::Element>(e: &E) -> Self {
        let e = e.entity();
        Self::new(e.p0(), e.p1(), e.p2(), e.p3())
    }
}

impl From<Entity<FullMask>> for Multivector {
    #[inline(always)]
    fn from(e: Entity<FullMask>) -> Self {
        Self(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, Point};

    #[test]
    fn widen_keeps_coefficients() {
        let m = Multivector::from_element(&Point::new(1.0, 2.0, 3.0));
        assert_eq!(m.e123(), 1.0);
        assert_eq!(m.e032(), 1.0);
        assert_eq!(m.p0(), [0.0; 4]);
        let l = Multivector::from_element(&Line::new(1.0, 0.0, 0.0));
        assert_eq!(l.e12(), 1.0);
        assert_eq!(l.e21(), -1.0);
    }

    #[test]
    fn full_reversion_involution() {
        let m = Multivector::new(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        );
        assert_eq!(m.reverse().reverse(), m);
        assert_eq!(m.reverse().scalar(), 5.0);
        assert_eq!(m.reverse().e0123(), 9.0);
        assert_eq!(m.reverse().e123(), -13.0);
    }
}
