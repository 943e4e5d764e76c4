// src/layout.rs
//! Slot layout of the partitioned algebra, evaluated at compile time.
//!
//! The 16 basis blades of P(R*(3,0,1)) are packed into four partitions of
//! four lanes each:
//!
//! ```text
//!     LSB --> MSB
//! p0: (e3, e2, e1, e0)
//! p1: (1, e12, e31, e23)
//! p2: (e0123, e01, e02, e03)
//! p3: (e123, e021, e013, e032)
//! ```
//!
//! A partition mask has bit `i` set when slot `p{i}` is materialized.
//!
//! This file is also compiled by `build.rs`, so it must stay free of any
//! `crate::` paths.

/// Slot bit for `p0` (vector / plane coefficients).
pub const P0: u8 = 0b0001;
/// Slot bit for `p1` (scalar + Euclidean bivector).
pub const P1: u8 = 0b0010;
/// Slot bit for `p2` (pseudoscalar + ideal bivector).
pub const P2: u8 = 0b0100;
/// Slot bit for `p3` (trivector / point coefficients).
pub const P3: u8 = 0b1000;

/// Output slots written by each partition-pair kernel, indexed
/// `[lhs slot][rhs slot]`. Zero means the pair contributes nothing.
pub const DESTINATIONS: [[u8; 4]; 4] = [
    [P1 | P2, P0 | P3, P0 | P3, P1 | P2],
    [P0 | P3, P1, P2, P0 | P3],
    [P0 | P3, P2, 0, P0 | P3],
    [P1 | P2, P0 | P3, P0 | P3, P1 | P2],
];

/// Number of materialized partitions for `mask`.
pub const fn partition_count(mask: u8) -> usize {
    (mask & 0b1111).count_ones() as usize
}

/// Storage offset of each logical slot. Entries for absent slots point at
/// where the slot would have been inserted and must not be read.
pub const fn partition_offsets(mask: u8) -> [usize; 4] {
    let p0 = (mask & P0 != 0) as usize;
    let p1 = (mask & P1 != 0) as usize;
    let p2 = (mask & P2 != 0) as usize;
    [0, p0, p0 + p1, p0 + p1 + p2]
}

/// Mask of `a + b` and `a - b`.
pub const fn union_mask(a: u8, b: u8) -> u8 {
    (a | b) & 0b1111
}

/// Mask of the geometric product `a * b`: the union of the destinations of
/// every slot pair present in both operands.
///
/// p2 * p3 and p3 * p2 set p0 (`e0123 * e123 = -e0`), so `IdealLine * Point`
/// has mask `0b1001`. This departs on purpose from the hand-written p0 bit
/// formula of the C++ header, which leaves those pairs out and yields
/// `0b1000`; that formula would drop a non-zero `e0` coefficient.
pub const fn product_mask(a: u8, b: u8) -> u8 {
    let mut out = 0;
    let mut i = 0;
    while i < 4 {
        if a & (1 << i) != 0 {
            let mut j = 0;
            while j < 4 {
                if b & (1 << j) != 0 {
                    out |= DESTINATIONS[i][j];
                }
                j += 1;
            }
        }
        i += 1;
    }
    out
}
