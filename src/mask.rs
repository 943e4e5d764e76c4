// src/mask.rs
//! Compile-time partition masks.
//!
//! Every entity type carries a `Mask<BITS>` marker. The marker fixes how
//! many partitions are stored, where each slot lives in storage, and (through
//! [`Union`] and [`Product`]) which mask the result of `+`, `-` and `*` has.

use crate::layout;
use crate::partition::Partition;
use std::fmt;

/// Zero-sized marker for a 4-bit partition mask.
///
/// Masks outside `0..=15` have no [`PartitionMask`] impl.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mask<const BITS: u8>;

/// Layout information derived from a partition mask.
pub trait PartitionMask: Copy + Default + fmt::Debug + 'static {
    /// The raw 4-bit mask.
    const BITS: u8;
    /// Number of stored partitions.
    const COUNT: usize = layout::partition_count(Self::BITS);
    /// Storage offset per logical slot.
    const OFFSETS: [usize; 4] = layout::partition_offsets(Self::BITS);

    /// Backing storage, always `[Partition; COUNT]`.
    type Storage: Copy
        + Default
        + PartialEq
        + fmt::Debug
        + AsRef<[Partition]>
        + AsMut<[Partition]>;

    /// Whether slot `slot` (0..4) is materialized.
    #[inline(always)]
    fn has(slot: usize) -> bool {
        Self::BITS & (1 << slot) != 0
    }
}

/// Output mask of addition and subtraction: `Self | Rhs`.
pub trait Union<Rhs: PartitionMask>: PartitionMask {
    type Output: PartitionMask;
}

/// Output mask of the geometric product `Self * Rhs`.
pub trait Product<Rhs: PartitionMask>: PartitionMask {
    type Output: PartitionMask;
}

macro_rules! impl_partition_mask {
    ($($bits:literal => $count:literal),* $(,)?) => {
        $(
            impl PartitionMask for Mask<$bits> {
                const BITS: u8 = $bits;
                type Storage = [Partition; $count];
            }
        )*
    };
}

impl_partition_mask! {
    0b0000 => 0,
    0b0001 => 1,
    0b0010 => 1,
    0b0011 => 2,
    0b0100 => 1,
    0b0101 => 2,
    0b0110 => 2,
    0b0111 => 3,
    0b1000 => 1,
    0b1001 => 2,
    0b1010 => 2,
    0b1011 => 3,
    0b1100 => 2,
    0b1101 => 3,
    0b1110 => 3,
    0b1111 => 4,
}

include!(concat!(env!("OUT_DIR"), "/mask_tables.rs"));

/// Mask of planes.
pub type PlaneMask = Mask<0b0001>;
/// Mask of Euclidean lines.
pub type LineMask = Mask<0b0010>;
/// Mask of ideal lines.
pub type IdealLineMask = Mask<0b0100>;
/// Mask of bivectors and motors.
pub type EvenMask = Mask<0b0110>;
/// Mask of points and directions.
pub type PointMask = Mask<0b1000>;
/// Mask of general multivectors.
pub type FullMask = Mask<0b1111>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{product_mask, union_mask, P0, P1, P2, P3};

    fn storage_len<M: PartitionMask>() -> usize {
        M::Storage::default().as_ref().len()
    }

    #[test]
    fn storage_matches_popcount() {
        assert_eq!(storage_len::<Mask<0>>(), 0);
        assert_eq!(storage_len::<Mask<0b0110>>(), 2);
        assert_eq!(storage_len::<Mask<0b1011>>(), 3);
        assert_eq!(storage_len::<Mask<0b1111>>(), 4);
        assert_eq!(<Mask<0b1011> as PartitionMask>::COUNT, 3);
    }

    #[test]
    fn offsets_pack_without_gaps() {
        assert_eq!(<Mask<0b1111> as PartitionMask>::OFFSETS, [0, 1, 2, 3]);
        assert_eq!(<Mask<0b1010> as PartitionMask>::OFFSETS[1], 0);
        assert_eq!(<Mask<0b1010> as PartitionMask>::OFFSETS[3], 1);
        assert_eq!(<Mask<0b1100> as PartitionMask>::OFFSETS[2], 0);
        assert_eq!(<Mask<0b1100> as PartitionMask>::OFFSETS[3], 1);
    }

    #[test]
    fn generated_types_agree_with_layout() {
        assert_eq!(<<Mask<0b0001> as Union<Mask<0b1000>>>::Output as PartitionMask>::BITS, 0b1001);
        assert_eq!(<<Mask<0b0001> as Product<Mask<0b0001>>>::Output as PartitionMask>::BITS, P1 | P2);
        assert_eq!(<<Mask<0b0100> as Product<Mask<0b0100>>>::Output as PartitionMask>::BITS, 0);
        assert_eq!(union_mask(P1, P2), 0b0110);
        assert_eq!(product_mask(P1, P1), P1);
        assert_eq!(product_mask(P2, P3), P0 | P3);
        assert_eq!(product_mask(0, 0b1111), 0);
    }
}
