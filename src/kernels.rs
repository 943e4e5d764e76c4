// src/kernels.rs
//! Partition-pair kernels of the geometric product.
//!
//! `gpIJ(a, b)` multiplies the contents of slot `pI` of the left operand with
//! slot `pJ` of the right operand and returns only the output slots listed in
//! [`crate::layout::DESTINATIONS`]. `p2 * p2` is identically zero (every lane
//! of `p2` contains the degenerate `e0`), so there is no `gp22`.
//!
//! The blade algebra is evaluated once at compile time: for each kernel,
//! each left lane and each output slot we store which right lane lands in
//! which output lane, and with which sign. At run time a kernel is four
//! broadcast-multiply-accumulate steps per output slot.

use wide::f32x4;

/// Basis blade as a set of basis vectors: e0 = bit 0, e1 = bit 1,
/// e2 = bit 2, e3 = bit 3. Canonical orientation is ascending index.
pub type Blade = u8;

/// Blade stored in each `[slot][lane]`, with its sign relative to the
/// canonical orientation (`e31 = -e13`, `e021 = -e012`, `e032 = -e023`).
pub const LANE_BLADES: [[(Blade, i8); 4]; 4] = [
    // p0: e3, e2, e1, e0
    [(0b1000, 1), (0b0100, 1), (0b0010, 1), (0b0001, 1)],
    // p1: 1, e12, e31, e23
    [(0b0000, 1), (0b0110, 1), (0b1010, -1), (0b1100, 1)],
    // p2: e0123, e01, e02, e03
    [(0b1111, 1), (0b0011, 1), (0b0101, 1), (0b1001, 1)],
    // p3: e123, e021, e013, e032
    [(0b1110, 1), (0b0111, -1), (0b1011, 1), (0b1101, -1)],
];

/// Product of two canonical blades: `(sign, blade)`, sign 0 when the
/// degenerate `e0` appears in both.
pub const fn blade_product(a: Blade, b: Blade) -> (i8, Blade) {
    if a & b & 1 != 0 {
        return (0, a ^ b);
    }
    // One transposition for every pair (x in a, y in b) with y < x.
    let mut swaps = 0u32;
    let mut bit = 0u32;
    while bit < 4 {
        if (a >> bit) & 1 != 0 {
            let lower = b & ((1u8 << bit) - 1);
            swaps += lower.count_ones();
        }
        bit += 1;
    }
    let sign = if swaps % 2 == 0 { 1 } else { -1 };
    (sign, a ^ b)
}

/// Slot, lane and lane sign holding `blade`.
pub const fn locate(blade: Blade) -> (usize, usize, i8) {
    let mut slot = 0;
    while slot < 4 {
        let mut lane = 0;
        while lane < 4 {
            let (b, s) = LANE_BLADES[slot][lane];
            if b == blade {
                return (slot, lane, s);
            }
            lane += 1;
        }
        slot += 1;
    }
    panic!("blade outside the 4-dimensional basis");
}

const fn sign_f32(s: i8) -> f32 {
    match s {
        1 => 1.0,
        -1 => -1.0,
        _ => 0.0,
    }
}

/// Right-operand lane gathered into each output lane, and its sign.
#[derive(Copy, Clone, Debug)]
struct Swizzle {
    src: [usize; 4],
    sign: [f32; 4],
}

const NONE: Swizzle = Swizzle {
    src: [0; 4],
    sign: [0.0; 4],
};

/// `[left lane][output slot]`
type KernelTable = [[Swizzle; 4]; 4];

const fn kernel_table(i: usize, j: usize) -> KernelTable {
    let mut table = [[NONE; 4]; 4];
    let mut a = 0;
    while a < 4 {
        let (blade_a, sign_a) = LANE_BLADES[i][a];
        let mut b = 0;
        while b < 4 {
            let (blade_b, sign_b) = LANE_BLADES[j][b];
            let (s, blade) = blade_product(blade_a, blade_b);
            if s != 0 {
                let (slot, lane, sign_out) = locate(blade);
                table[a][slot].src[lane] = b;
                table[a][slot].sign[lane] = sign_f32(s * sign_a * sign_b * sign_out);
            }
            b += 1;
        }
        a += 1;
    }
    table
}

const fn kernel_tables() -> [[KernelTable; 4]; 4] {
    let mut tables = [[[[NONE; 4]; 4]; 4]; 4];
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            tables[i][j] = kernel_table(i, j);
            j += 1;
        }
        i += 1;
    }
    tables
}

static KERNELS: [[KernelTable; 4]; 4] = kernel_tables();

#[inline(always)]
fn accumulate(i: usize, j: usize, slot: usize, a: f32x4, b: f32x4) -> f32x4 {
    let table = &KERNELS[i][j];
    let a = a.to_array();
    let b = b.to_array();
    let mut acc = f32x4::ZERO;
    for (lane, &coeff) in a.iter().enumerate() {
        let sw = &table[lane][slot];
        let gathered = f32x4::from([b[sw.src[0]], b[sw.src[1]], b[sw.src[2]], b[sw.src[3]]]);
        acc = acc + f32x4::splat(coeff) * (gathered * f32x4::from(sw.sign));
    }
    acc
}

/// Kernel output for pairs writing `p0` and `p3`.
#[derive(Copy, Clone, Debug)]
pub struct P0P3 {
    pub p0: f32x4,
    pub p3: f32x4,
}

/// Kernel output for pairs writing `p1` and `p2`.
#[derive(Copy, Clone, Debug)]
pub struct P1P2 {
    pub p1: f32x4,
    pub p2: f32x4,
}

/// Every output slot of `p{i} * p{j}`, including the ones the destination
/// table says stay zero. Used to check the table; the entity product calls
/// the named kernels.
pub fn product(i: usize, j: usize, a: f32x4, b: f32x4) -> [f32x4; 4] {
    [
        accumulate(i, j, 0, a, b),
        accumulate(i, j, 1, a, b),
        accumulate(i, j, 2, a, b),
        accumulate(i, j, 3, a, b),
    ]
}

macro_rules! kernel_p1p2 {
    ($($(#[$doc:meta])* $name:ident = ($i:literal, $j:literal);)*) => {
        $(
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(a: f32x4, b: f32x4) -> P1P2 {
                P1P2 {
                    p1: accumulate($i, $j, 1, a, b),
                    p2: accumulate($i, $j, 2, a, b),
                }
            }
        )*
    };
}

macro_rules! kernel_p0p3 {
    ($($(#[$doc:meta])* $name:ident = ($i:literal, $j:literal);)*) => {
        $(
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(a: f32x4, b: f32x4) -> P0P3 {
                P0P3 {
                    p0: accumulate($i, $j, 0, a, b),
                    p3: accumulate($i, $j, 3, a, b),
                }
            }
        )*
    };
}

kernel_p1p2! {
    /// plane * plane
    gp00 = (0, 0);
    /// plane * point
    gp03 = (0, 3);
    /// point * plane
    gp30 = (3, 0);
    /// point * point
    gp33 = (3, 3);
}

kernel_p0p3! {
    gp01 = (0, 1);
    gp02 = (0, 2);
    gp10 = (1, 0);
    gp13 = (1, 3);
    gp20 = (2, 0);
    gp23 = (2, 3);
    gp31 = (3, 1);
    gp32 = (3, 2);
}

/// Euclidean even part times Euclidean even part; stays in `p1`.
#[inline(always)]
pub fn gp11(a: f32x4, b: f32x4) -> f32x4 {
    accumulate(1, 1, 1, a, b)
}

#[inline(always)]
pub fn gp12(a: f32x4, b: f32x4) -> f32x4 {
    accumulate(1, 2, 2, a, b)
}

#[inline(always)]
pub fn gp21(a: f32x4, b: f32x4) -> f32x4 {
    accumulate(2, 1, 2, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DESTINATIONS;

    fn lanes(x: f32x4) -> [f32; 4] {
        x.to_array()
    }

    #[test]
    fn blade_squares() {
        assert_eq!(blade_product(0b0001, 0b0001).0, 0); // e0 e0
        assert_eq!(blade_product(0b0010, 0b0010), (1, 0)); // e1 e1
        assert_eq!(blade_product(0b0110, 0b0110), (-1, 0)); // e12 e12
        assert_eq!(blade_product(0b1110, 0b1110), (-1, 0)); // e123 e123
        assert_eq!(blade_product(0b1111, 0b1111).0, 0); // e0123 e0123
    }

    #[test]
    fn blade_anticommutes() {
        assert_eq!(blade_product(0b0010, 0b0100), (1, 0b0110)); // e1 e2 = e12
        assert_eq!(blade_product(0b0100, 0b0010), (-1, 0b0110)); // e2 e1 = -e12
        assert_eq!(blade_product(0b1000, 0b0001), (-1, 0b1001)); // e3 e0 = -e03
    }

    #[test]
    fn every_blade_has_one_lane() {
        let mut seen = [false; 16];
        for slot in LANE_BLADES.iter() {
            for &(blade, _) in slot.iter() {
                assert!(!seen[blade as usize], "blade {blade:#06b} stored twice");
                seen[blade as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(locate(0b1010), (1, 2, -1));
    }

    #[test]
    fn kernels_write_only_their_destinations() {
        let a = f32x4::from([1.0, -2.0, 3.0, 0.5]);
        let b = f32x4::from([-1.5, 2.5, 0.75, 4.0]);
        for i in 0..4 {
            for j in 0..4 {
                let out = product(i, j, a, b);
                for (slot, value) in out.iter().enumerate() {
                    if DESTINATIONS[i][j] & (1 << slot) == 0 {
                        assert_eq!(lanes(*value), [0.0; 4], "gp{i}{j} leaked into p{slot}");
                    }
                }
            }
        }
    }

    #[test]
    fn orthogonal_planes_meet_in_e12() {
        // e1 * e2 = e12
        let e1 = f32x4::from([0.0, 0.0, 1.0, 0.0]);
        let e2 = f32x4::from([0.0, 1.0, 0.0, 0.0]);
        let out = gp00(e1, e2);
        assert_eq!(lanes(out.p1), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(lanes(out.p2), [0.0; 4]);
    }

    #[test]
    fn euclidean_bivectors_follow_cyclic_rule() {
        // e12 * e31 = e23
        let e12 = f32x4::from([0.0, 1.0, 0.0, 0.0]);
        let e31 = f32x4::from([0.0, 0.0, 1.0, 0.0]);
        assert_eq!(lanes(gp11(e12, e31)), [0.0, 0.0, 0.0, 1.0]);
        // e31 * e12 = -e23
        assert_eq!(lanes(gp11(e31, e12)), [0.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn pseudoscalar_times_origin_is_e0() {
        // e0123 * e123 = -e0 (p2 * p3 reaches p0)
        let i = f32x4::from([1.0, 0.0, 0.0, 0.0]);
        let origin = f32x4::from([1.0, 0.0, 0.0, 0.0]);
        let out = gp23(i, origin);
        assert_eq!(lanes(out.p0), [0.0, 0.0, 0.0, -1.0]);
        assert_eq!(lanes(out.p3), [0.0; 4]);
    }
}
