// src/entity.rs
//! The masked entity: storage for the partitions selected by a mask, and the
//! operators between entities of any two masks.
//!
//! An `Entity<M>` stores exactly `M::COUNT` partitions, in slot order, with
//! no gaps. Absent slots read as zero everywhere. The mask of a result is a
//! type-level function of the operand masks (see [`crate::mask`]), so
//! `plane * plane` is statically an `Entity<Mask<0b0110>>`.

use crate::kernels::{self, P0P3, P1P2};
use crate::mask::{PartitionMask, Product, Union};
use crate::partition::Partition;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use wide::f32x4;

/// Reversion signs for `p1` and `p2`: the first lane (scalar, pseudoscalar)
/// is kept, the bivector lanes flip.
const REVERSE_EVEN: [f32; 4] = [1.0, -1.0, -1.0, -1.0];
/// Reversion signs for `p3`: every trivector lane flips.
const REVERSE_TRIVECTOR: [f32; 4] = [-1.0; 4];

/// Blade names per `[slot][lane]`, for display as `coefficient*name`.
const LANE_NAMES: [[&str; 4]; 4] = [
    ["e3", "e2", "e1", "e0"],
    ["1", "e12", "e31", "e23"],
    ["e0123", "e01", "e02", "e03"],
    ["e123", "e021", "e013", "e032"],
];

/// A multivector whose materialized partitions are fixed by `M`.
#[derive(Copy, Clone, PartialEq)]
pub struct Entity<M: PartitionMask> {
    parts: M::Storage,
}

/// Anything that is, or wraps, a masked entity. All operators accept any
/// `Element` on the right-hand side.
pub trait Element: Copy {
    type Mask: PartitionMask;
    fn entity(&self) -> &Entity<Self::Mask>;
}

impl<M: PartitionMask> Element for Entity<M> {
    type Mask = M;
    #[inline(always)]
    fn entity(&self) -> &Entity<M> {
        self
    }
}

impl<M: PartitionMask> Default for Entity<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: PartitionMask> Entity<M> {
    /// Every stored lane zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            parts: M::Storage::default(),
        }
    }

    /// Build from the stored partitions, in ascending slot order.
    #[inline(always)]
    pub fn from_partitions(parts: M::Storage) -> Self {
        Self { parts }
    }

    /// The raw 4-bit partition mask.
    #[inline(always)]
    pub fn partition_mask(&self) -> u8 {
        M::BITS
    }

    /// Number of stored partitions.
    #[inline(always)]
    pub fn partition_count(&self) -> usize {
        M::COUNT
    }

    /// Stored partitions in ascending slot order.
    #[inline(always)]
    pub fn partitions(&self) -> &[Partition] {
        self.parts.as_ref()
    }

    /// Partition held in logical slot `slot`, if materialized.
    #[inline]
    pub fn slot(&self, slot: usize) -> Option<&Partition> {
        if slot < 4 && M::has(slot) {
            Some(&self.parts.as_ref()[M::OFFSETS[slot]])
        } else {
            None
        }
    }

    /// Write a materialized slot. Absent slots cannot be written.
    #[inline]
    pub(crate) fn set_slot(&mut self, slot: usize, value: Partition) {
        debug_assert!(M::has(slot), "slot p{slot} is not part of mask {:#06b}", M::BITS);
        self.parts.as_mut()[M::OFFSETS[slot]] = value;
    }

    #[inline]
    pub(crate) fn lane_mut(&mut self, slot: usize, lane: usize) -> &mut f32 {
        debug_assert!(M::has(slot), "slot p{slot} is not part of mask {:#06b}", M::BITS);
        &mut self.parts.as_mut()[M::OFFSETS[slot]].as_mut_array()[lane]
    }

    /// Lane `lane` of slot `slot`, or 0 when the slot is absent.
    #[inline(always)]
    pub fn lane(&self, slot: usize, lane: usize) -> f32 {
        match self.slot(slot) {
            Some(p) => p[lane],
            None => 0.0,
        }
    }

    #[inline(always)]
    fn signed_lane(&self, slot: usize, lane: usize, sign: f32) -> f32 {
        match self.slot(slot) {
            Some(p) => sign * p[lane],
            None => 0.0,
        }
    }

    #[inline(always)]
    fn reg(&self, slot: usize) -> f32x4 {
        self.parts.as_ref()[M::OFFSETS[slot]].reg()
    }

    /// Raw `p0` lanes `(e3, e2, e1, e0)`; zero when absent.
    pub fn p0(&self) -> [f32; 4] {
        self.slot(0).map_or([0.0; 4], Partition::to_array)
    }

    /// Raw `p1` lanes `(1, e12, e31, e23)`; zero when absent.
    pub fn p1(&self) -> [f32; 4] {
        self.slot(1).map_or([0.0; 4], Partition::to_array)
    }

    /// Raw `p2` lanes `(e0123, e01, e02, e03)`; zero when absent.
    pub fn p2(&self) -> [f32; 4] {
        self.slot(2).map_or([0.0; 4], Partition::to_array)
    }

    /// Raw `p3` lanes `(e123, e021, e013, e032)`; zero when absent.
    pub fn p3(&self) -> [f32; 4] {
        self.slot(3).map_or([0.0; 4], Partition::to_array)
    }

    /// Multiply every coefficient by `s`.
    pub fn scaled(&self, s: f32) -> Self {
        let mut out = *self;
        let k = f32x4::splat(s);
        for p in out.parts.as_mut() {
            *p = Partition::from_reg(p.reg() * k);
        }
        out
    }

    /// Reversion: grade 0, 1 and 4 unchanged; grade 2 and 3 negated.
    pub fn reverse(&self) -> Self {
        let mut out = *self;
        if M::has(1) {
            out.set_slot(1, self.parts.as_ref()[M::OFFSETS[1]].flip(REVERSE_EVEN));
        }
        if M::has(2) {
            out.set_slot(2, self.parts.as_ref()[M::OFFSETS[2]].flip(REVERSE_EVEN));
        }
        if M::has(3) {
            out.set_slot(3, self.parts.as_ref()[M::OFFSETS[3]].flip(REVERSE_TRIVECTOR));
        }
        out
    }

    /// Lane-wise sum or difference, slot by slot in ascending order. A slot
    /// present on one side only is copied (or negated, for a right-hand
    /// slot under subtraction).
    fn combine<R, const ADD: bool>(&self, rhs: &Entity<R>) -> Entity<<M as Union<R>>::Output>
    where
        R: PartitionMask,
        M: Union<R>,
    {
        let mut out = Entity::<<M as Union<R>>::Output>::zero();
        let lhs = self.parts.as_ref();
        let rhs = rhs.parts.as_ref();
        let dst = out.parts.as_mut();
        let (mut o, mut l, mut r) = (0, 0, 0);
        for slot in 0..4 {
            let part = match (M::has(slot), R::has(slot)) {
                (true, true) => {
                    let (a, b) = (lhs[l], rhs[r]);
                    l += 1;
                    r += 1;
                    if ADD {
                        a + b
                    } else {
                        a - b
                    }
                }
                (true, false) => {
                    l += 1;
                    lhs[l - 1]
                }
                (false, true) => {
                    r += 1;
                    if ADD {
                        rhs[r - 1]
                    } else {
                        -rhs[r - 1]
                    }
                }
                (false, false) => continue,
            };
            dst[o] = part;
            o += 1;
        }
        out
    }

    /// Geometric product `self * rhs`.
    ///
    /// Only the kernels whose two input slots are both materialized run;
    /// their outputs are summed per destination slot. Operand order is kept
    /// (`gpIJ(self.pI, rhs.pJ)`), the product does not commute.
    pub fn geometric_product<R>(&self, rhs: &Entity<R>) -> Entity<<M as Product<R>>::Output>
    where
        R: PartitionMask,
        M: Product<R>,
    {
        // (e3, e2, e1, e0), (1, e12, e31, e23), (e0123, e01, e02, e03), (e123, e021, e013, e032)
        let mut p0 = f32x4::ZERO;
        let mut p1 = f32x4::ZERO;
        let mut p2 = f32x4::ZERO;
        let mut p3 = f32x4::ZERO;

        if M::has(0) {
            let a = self.reg(0);
            if R::has(0) {
                let P1P2 { p1: x, p2: y } = kernels::gp00(a, rhs.reg(0));
                p1 = p1 + x;
                p2 = p2 + y;
            }
            if R::has(1) {
                let P0P3 { p0: x, p3: y } = kernels::gp01(a, rhs.reg(1));
                p0 = p0 + x;
                p3 = p3 + y;
            }
            if R::has(2) {
                let P0P3 { p0: x, p3: y } = kernels::gp02(a, rhs.reg(2));
                p0 = p0 + x;
                p3 = p3 + y;
            }
            if R::has(3) {
                let P1P2 { p1: x, p2: y } = kernels::gp03(a, rhs.reg(3));
                p1 = p1 + x;
                p2 = p2 + y;
            }
        }

        if M::has(1) {
            let a = self.reg(1);
            if R::has(0) {
                let P0P3 { p0: x, p3: y } = kernels::gp10(a, rhs.reg(0));
                p0 = p0 + x;
                p3 = p3 + y;
            }
            if R::has(1) {
                p1 = p1 + kernels::gp11(a, rhs.reg(1));
            }
            if R::has(2) {
                p2 = p2 + kernels::gp12(a, rhs.reg(2));
            }
            if R::has(3) {
                let P0P3 { p0: x, p3: y } = kernels::gp13(a, rhs.reg(3));
                p0 = p0 + x;
                p3 = p3 + y;
            }
        }

        if M::has(2) {
            let a = self.reg(2);
            if R::has(0) {
                let P0P3 { p0: x, p3: y } = kernels::gp20(a, rhs.reg(0));
                p0 = p0 + x;
                p3 = p3 + y;
            }
            if R::has(1) {
                p2 = p2 + kernels::gp21(a, rhs.reg(1));
            }
            // p2 * p2 vanishes: every lane carries e0.
            if R::has(3) {
                let P0P3 { p0: x, p3: y } = kernels::gp23(a, rhs.reg(3));
                p0 = p0 + x;
                p3 = p3 + y;
            }
        }

        if M::has(3) {
            let a = self.reg(3);
            if R::has(0) {
                let P1P2 { p1: x, p2: y } = kernels::gp30(a, rhs.reg(0));
                p1 = p1 + x;
                p2 = p2 + y;
            }
            if R::has(1) {
                let P0P3 { p0: x, p3: y } = kernels::gp31(a, rhs.reg(1));
                p0 = p0 + x;
                p3 = p3 + y;
            }
            if R::has(2) {
                let P0P3 { p0: x, p3: y } = kernels::gp32(a, rhs.reg(2));
                p0 = p0 + x;
                p3 = p3 + y;
            }
            if R::has(3) {
                let P1P2 { p1: x, p2: y } = kernels::gp33(a, rhs.reg(3));
                p1 = p1 + x;
                p2 = p2 + y;
            }
        }

        Entity::assemble([p0, p1, p2, p3])
    }

    /// Keep the accumulated slots that belong to `M`, drop the rest.
    #[inline(always)]
    fn assemble(regs: [f32x4; 4]) -> Self {
        let mut out = Self::zero();
        for (slot, reg) in regs.into_iter().enumerate() {
            if M::has(slot) {
                out.set_slot(slot, Partition::from_reg(reg));
            }
        }
        out
    }
}

macro_rules! coefficient_accessors {
    ($($(#[$doc:meta])* $name:ident => ($slot:literal, $lane:literal, $sign:literal);)*) => {
        impl<M: PartitionMask> Entity<M> {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(&self) -> f32 {
                    self.signed_lane($slot, $lane, $sign)
                }
            )*
        }
    };
}

coefficient_accessors! {
    /// Grade-0 coefficient.
    scalar => (1, 0, 1.0);
    e0 => (0, 3, 1.0);
    e1 => (0, 2, 1.0);
    e2 => (0, 1, 1.0);
    e3 => (0, 0, 1.0);
    e12 => (1, 1, 1.0);
    e21 => (1, 1, -1.0);
    e31 => (1, 2, 1.0);
    e13 => (1, 2, -1.0);
    e23 => (1, 3, 1.0);
    e32 => (1, 3, -1.0);
    e01 => (2, 1, 1.0);
    e10 => (2, 1, -1.0);
    e02 => (2, 2, 1.0);
    e20 => (2, 2, -1.0);
    e03 => (2, 3, 1.0);
    e30 => (2, 3, -1.0);
    /// Pseudoscalar coefficient.
    e0123 => (2, 0, 1.0);
    e123 => (3, 0, 1.0);
    e021 => (3, 1, 1.0);
    e012 => (3, 1, -1.0);
    e013 => (3, 2, 1.0);
    e031 => (3, 2, -1.0);
    e032 => (3, 3, 1.0);
    e023 => (3, 3, -1.0);
}

impl<M: PartitionMask, R: Element> Add<R> for Entity<M>
where
    M: Union<R::Mask>,
{
    type Output = Entity<<M as Union<R::Mask>>::Output>;
    #[inline]
    fn add(self, rhs: R) -> Self::Output {
        self.combine::<R::Mask, true>(rhs.entity())
    }
}

impl<M: PartitionMask, R: Element> Sub<R> for Entity<M>
where
    M: Union<R::Mask>,
{
    type Output = Entity<<M as Union<R::Mask>>::Output>;
    #[inline]
    fn sub(self, rhs: R) -> Self::Output {
        self.combine::<R::Mask, false>(rhs.entity())
    }
}

impl<M: PartitionMask, R: Element> Mul<R> for Entity<M>
where
    M: Product<R::Mask>,
{
    type Output = Entity<<M as Product<R::Mask>>::Output>;
    #[inline]
    fn mul(self, rhs: R) -> Self::Output {
        self.geometric_product(rhs.entity())
    }
}

impl<M: PartitionMask> Neg for Entity<M> {
    type Output = Entity<M>;
    #[inline]
    fn neg(self) -> Entity<M> {
        let mut out = self;
        for p in out.parts.as_mut() {
            *p = -*p;
        }
        out
    }
}

impl<M: PartitionMask> fmt::Debug for Entity<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Entity")
            .field("mask", &format_args!("{:#06b}", M::BITS))
            .field("parts", &self.partitions())
            .finish()
    }
}

impl<M: PartitionMask> fmt::Display for Entity<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for slot in 0..4 {
            let Some(p) = self.slot(slot) else { continue };
            for (lane, &c) in p.as_array().iter().enumerate() {
                if c == 0.0 {
                    continue;
                }
                if first {
                    write!(f, "{c}")?;
                } else if c < 0.0 {
                    write!(f, " - {}", -c)?;
                } else {
                    write!(f, " + {c}")?;
                }
                if !(slot == 1 && lane == 0) {
                    write!(f, "*{}", LANE_NAMES[slot][lane])?;
                }
                first = false;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// Wires a named newtype over `Entity<$mask>` into the operator set:
/// `Element`, `Deref`, conversion back to the entity, `+ - *` against any
/// element, unary `-`, type-preserving `reverse()` and `Display`.
macro_rules! named_entity {
    ($ty:ident, $mask:ty) => {
        impl $crate::entity::Element for $ty {
            type Mask = $mask;
            #[inline(always)]
            fn entity(&self) -> &$crate::entity::Entity<$mask> {
                &self.0
            }
        }

        impl ::std::ops::Deref for $ty {
            type Target = $crate::entity::Entity<$mask>;
            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$ty> for $crate::entity::Entity<$mask> {
            #[inline(always)]
            fn from(v: $ty) -> Self {
                v.0
            }
        }

        impl $ty {
            /// Reversion, keeping the named type.
            #[inline]
            pub fn reverse(&self) -> Self {
                Self(self.0.reverse())
            }

            /// The underlying masked entity.
            #[inline(always)]
            pub fn into_entity(self) -> $crate::entity::Entity<$mask> {
                self.0
            }
        }

        impl<R: $crate::entity::Element> ::std::ops::Add<R> for $ty
        where
            $mask: $crate::mask::Union<R::Mask>,
        {
            type Output = $crate::entity::Entity<<$mask as $crate::mask::Union<R::Mask>>::Output>;
            #[inline]
            fn add(self, rhs: R) -> Self::Output {
                self.0 + rhs
            }
        }

        impl<R: $crate::entity::Element> ::std::ops::Sub<R> for $ty
        where
            $mask: $crate::mask::Union<R::Mask>,
        {
            type Output = $crate::entity::Entity<<$mask as $crate::mask::Union<R::Mask>>::Output>;
            #[inline]
            fn sub(self, rhs: R) -> Self::Output {
                self.0 - rhs
            }
        }

        impl<R: $crate::entity::Element> ::std::ops::Mul<R> for $ty
        where
            $mask: $crate::mask::Product<R::Mask>,
        {
            type Output = $crate::entity::Entity<<$mask as $crate::mask::Product<R::Mask>>::Output>;
            #[inline]
            fn mul(self, rhs: R) -> Self::Output {
                self.0 * rhs
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                Self(-self.0)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) use named_entity;
