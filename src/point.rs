// src/point.rs
//! Points: the grade-3 elements `x*e032 + y*e013 + z*e021 + w*e123`.

use crate::entity::{named_entity, Entity};
use crate::mask::PointMask;
use crate::partition::Partition;
use wide::f32x4;

/// A homogeneous point, stored in `p3` as `(w, z, y, x)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point(Entity<PointMask>);

named_entity!(Point, PointMask);

impl Point {
    /// The finite point `(x, y, z)` with weight 1.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::homogeneous(x, y, z, 1.0)
    }

    /// A point with explicit homogeneous weight `w`.
    #[inline]
    pub fn homogeneous(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Entity::from_partitions([Partition::new([w, z, y, x])]))
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

    /// Homogeneous weight (the e123 coefficient).
    pub fn w(&self) -> f32 {
        self.e123()
    }

    /// Divide through by the weight.
    ///
    /// Uses the fast reciprocal approximation; the maximum relative error is
    /// 1.5*2^-12 (~0.000366). The weight must be non-zero.
    pub fn normalize(&mut self) {
        let reg = self.0.partitions()[0].reg();
        let inv = f32x4::splat(self.w()).recip();
        self.0.set_slot(3, Partition::from_reg(reg * inv));
    }

    /// Copy of this point, normalized.
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }
}

impl From<Entity<PointMask>> for Point {
    #[inline(always)]
    fn from(e: Entity<PointMask>) -> Self {
        Self(e)
    }
}
