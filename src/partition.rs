// src/partition.rs
//! Four packed `f32` lanes, aligned for a single 128-bit load or store.

use std::fmt;
use std::ops::{Add, Index, Neg, Sub};
use wide::f32x4;

/// One 4-lane partition of a multivector.
///
/// The meaning of each lane depends on the slot the partition occupies; see
/// [`crate::layout`].
#[repr(C, align(16))]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Partition {
    data: [f32; 4],
}

impl Partition {
    /// All four lanes zero.
    pub const ZERO: Partition = Partition { data: [0.0; 4] };

    /// Build a partition from lanes in low-to-high order.
    #[inline(always)]
    pub const fn new(lanes: [f32; 4]) -> Self {
        Self { data: lanes }
    }

    /// Load into a SIMD register.
    #[inline(always)]
    pub fn reg(&self) -> f32x4 {
        f32x4::from(self.data)
    }

    /// Store from a SIMD register.
    #[inline(always)]
    pub fn from_reg(reg: f32x4) -> Self {
        Self { data: reg.to_array() }
    }

    /// Lanes in low-to-high order.
    #[inline(always)]
    pub fn to_array(&self) -> [f32; 4] {
        self.data
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        &self.data
    }

    #[inline(always)]
    pub(crate) fn as_mut_array(&mut self) -> &mut [f32; 4] {
        &mut self.data
    }

    /// Lane-wise multiply by a constant sign pattern.
    #[inline(always)]
    pub fn flip(&self, signs: [f32; 4]) -> Self {
        Self::from_reg(self.reg() * f32x4::from(signs))
    }
}

impl From<[f32; 4]> for Partition {
    #[inline(always)]
    fn from(lanes: [f32; 4]) -> Self {
        Self::new(lanes)
    }
}

impl From<Partition> for [f32; 4] {
    #[inline(always)]
    fn from(p: Partition) -> Self {
        p.data
    }
}

impl From<f32x4> for Partition {
    #[inline(always)]
    fn from(reg: f32x4) -> Self {
        Self::from_reg(reg)
    }
}

impl Index<usize> for Partition {
    type Output = f32;
    #[inline(always)]
    fn index(&self, lane: usize) -> &f32 {
        &self.data[lane]
    }
}

impl Add for Partition {
    type Output = Partition;
    #[inline(always)]
    fn add(self, rhs: Partition) -> Partition {
        Self::from_reg(self.reg() + rhs.reg())
    }
}

impl Sub for Partition {
    type Output = Partition;
    #[inline(always)]
    fn sub(self, rhs: Partition) -> Partition {
        Self::from_reg(self.reg() - rhs.reg())
    }
}

impl Neg for Partition {
    type Output = Partition;
    #[inline(always)]
    fn neg(self) -> Partition {
        Self::from_reg(-self.reg())
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.data;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_is_128_bits() {
        assert_eq!(std::mem::align_of::<Partition>(), 16);
        assert_eq!(std::mem::size_of::<Partition>(), 16);
    }

    #[test]
    fn lane_arithmetic() {
        let a = Partition::new([1.0, 2.0, 3.0, 4.0]);
        let b = Partition::new([0.5, -1.0, 2.0, 0.0]);
        assert_eq!((a + b).to_array(), [1.5, 1.0, 5.0, 4.0]);
        assert_eq!((a - b).to_array(), [0.5, 3.0, 1.0, 4.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(a.flip([1.0, -1.0, -1.0, -1.0]).to_array(), [1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn register_round_trip() {
        let a = Partition::new([1.0, -2.0, 3.5, 0.25]);
        assert_eq!(Partition::from_reg(a.reg()), a);
        assert_eq!(a[2], 3.5);
    }
}
