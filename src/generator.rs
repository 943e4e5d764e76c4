// src/generator.rs
//! Basis generators, for building entities from symbolic expressions:
//!
//! ```rust
//! use pga_engine::generator::{E0, E1, E2, E3};
//! use pga_engine::Plane;
//!
//! // x + 2y + 3z - 4 = 0
//! let p = Plane::from(1.0 * E1 + 2.0 * E2 + 3.0 * E3 - 4.0 * E0);
//! assert_eq!(p, Plane::new(1.0, 2.0, 3.0, -4.0));
//! ```

use crate::entity::Entity;
use crate::kernels::{locate, Blade};
use crate::mask::{Mask, PartitionMask};
use std::ops::Mul;

/// Tag for the basis blade `BLADE` (e0 = bit 0 .. e3 = bit 3), oriented the
/// way its lane is named (so [`E31`] is `-e13`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Generator<const BLADE: u8>;

pub const E0: Generator<0b0001> = Generator;
pub const E1: Generator<0b0010> = Generator;
pub const E2: Generator<0b0100> = Generator;
pub const E3: Generator<0b1000> = Generator;
pub const E01: Generator<0b0011> = Generator;
pub const E02: Generator<0b0101> = Generator;
pub const E03: Generator<0b1001> = Generator;
pub const E12: Generator<0b0110> = Generator;
pub const E23: Generator<0b1100> = Generator;
pub const E31: Generator<0b1010> = Generator;
pub const E032: Generator<0b1101> = Generator;
pub const E013: Generator<0b1011> = Generator;
pub const E021: Generator<0b0111> = Generator;
pub const E123: Generator<0b1110> = Generator;
/// Pseudoscalar `e0123`.
pub const I: Generator<0b1111> = Generator;

fn weighted<M: PartitionMask>(blade: Blade, weight: f32) -> Entity<M> {
    let (slot, lane, _) = locate(blade);
    let mut e = Entity::<M>::zero();
    *e.lane_mut(slot, lane) = weight;
    e
}

macro_rules! generators {
    ($($blade:literal => $slot_mask:literal),* $(,)?) => {
        $(
            impl Generator<$blade> {
                /// Unit-weight entity for this blade.
                #[inline]
                pub fn entity(self) -> Entity<Mask<$slot_mask>> {
                    weighted($blade, 1.0)
                }
            }

            impl Mul<Generator<$blade>> for f32 {
                type Output = Entity<Mask<$slot_mask>>;
                #[inline]
                fn mul(self, _: Generator<$blade>) -> Self::Output {
                    weighted($blade, self)
                }
            }
        )*
    };
}

generators! {
    0b0001 => 0b0001,
    0b0010 => 0b0001,
    0b0100 => 0b0001,
    0b1000 => 0b0001,
    0b0110 => 0b0010,
    0b1010 => 0b0010,
    0b1100 => 0b0010,
    0b1111 => 0b0100,
    0b0011 => 0b0100,
    0b0101 => 0b0100,
    0b1001 => 0b0100,
    0b1110 => 0b1000,
    0b0111 => 0b1000,
    0b1011 => 0b1000,
    0b1101 => 0b1000,
}
