//! Operators on refined values
//!
//! Arithmetic, comparison and bitwise operators treat a refined value as
//! its primitive. Results are bare primitives: most arithmetic does not
//! preserve a sign refinement (`-1 - -3` is positive), so nothing is
//! re-validated here. Use [`Refined::ensuring_valid_map`] or
//! [`Refined::try_map`] to get back into a refined type.
//!
//! Mixed kinds promote along `i32 < i64 < f32 < f64`:
//!
//! ```rust
//! use stillnum::refined::{NegativeI32, PositiveF32};
//!
//! let n = NegativeI32::ensuring_valid(-3);
//! let a: i32 = n + 1_i32;
//! let b: i64 = n * 2_i64;
//! let c: f64 = n - 0.5_f64;
//! let d: f32 = n / PositiveF32::ensuring_valid(2.0);
//! assert_eq!((a, b, c, d), (-2, -6, -3.5, -1.5));
//!
//! assert!(n < 0_i32);
//! assert!(n > -3.5_f64);
//! assert!(10_i64 > n);
//! ```
//!
//! Integer results wrap on overflow in every build profile, including
//! `MIN / -1` (gives `MIN`) and `MIN % -1` (gives `0`). Integer division
//! by zero panics as it does for the primitives.

#![allow(clippy::unnecessary_cast, clippy::cast_lossless)]

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use super::error::{self, RefinementError};
use super::predicates::numeric::Complement;
use super::{Predicate, Refined};
use crate::primitive::Primitive;

impl<T: Primitive, P: Complement<T>> Refined<T, P> {
    /// Negate into the complementary refined type, or `None` on overflow.
    ///
    /// Only integer `MIN` values overflow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NegativeI32;
    ///
    /// let n = NegativeI32::ensuring_valid(-1);
    /// assert_eq!(n.checked_neg().map(|p| p.get()), Some(1));
    /// assert!(NegativeI32::MIN_VALUE.checked_neg().is_none());
    /// ```
    pub fn checked_neg(self) -> Option<Refined<T, P::Output>> {
        self.value.checked_negate().and_then(Refined::from_value)
    }
}

impl<T: Primitive, P: Complement<T>> Neg for Refined<T, P> {
    type Output = Refined<T, P::Output>;

    /// # Panics
    ///
    /// Panics when negating an integer `MIN`, which has no positive
    /// counterpart.
    #[track_caller]
    fn neg(self) -> Self::Output {
        match self.value.checked_negate() {
            Some(negated) => Refined::ensuring_derived(negated, self),
            // Two's complement negation of MIN wraps back to MIN
            None => error::violation(
                &RefinementError::new::<T, P::Output>(self.value).with_origin(self),
            ),
        }
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $lhs:ty, $rhs:ty => $out:ty, |$a:ident, $b:ident| $body:expr) => {
        impl<P: Predicate<$lhs>> $trait<$rhs> for Refined<$lhs, P> {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                let ($a, $b) = (self.value as $out, rhs as $out);
                $body
            }
        }

        impl<P: Predicate<$lhs>, Q: Predicate<$rhs>> $trait<Refined<$rhs, Q>> for Refined<$lhs, P> {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: Refined<$rhs, Q>) -> $out {
                let ($a, $b) = (self.value as $out, rhs.value as $out);
                $body
            }
        }

        impl<Q: Predicate<$rhs>> $trait<Refined<$rhs, Q>> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: Refined<$rhs, Q>) -> $out {
                let ($a, $b) = (self as $out, rhs.value as $out);
                $body
            }
        }
    };
}

macro_rules! impl_comparison {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl<P: Predicate<$lhs>> PartialEq<$rhs> for Refined<$lhs, P> {
            #[inline]
            fn eq(&self, rhs: &$rhs) -> bool {
                (self.value as $out) == (*rhs as $out)
            }
        }

        impl<P: Predicate<$lhs>> PartialOrd<$rhs> for Refined<$lhs, P> {
            #[inline]
            fn partial_cmp(&self, rhs: &$rhs) -> Option<Ordering> {
                (self.value as $out).partial_cmp(&(*rhs as $out))
            }
        }

        impl<Q: Predicate<$lhs>> PartialEq<Refined<$lhs, Q>> for $rhs {
            #[inline]
            fn eq(&self, rhs: &Refined<$lhs, Q>) -> bool {
                (*self as $out) == (rhs.value as $out)
            }
        }

        impl<Q: Predicate<$lhs>> PartialOrd<Refined<$lhs, Q>> for $rhs {
            #[inline]
            fn partial_cmp(&self, rhs: &Refined<$lhs, Q>) -> Option<Ordering> {
                (*self as $out).partial_cmp(&(rhs.value as $out))
            }
        }
    };
}

// One row per (left kind, right kind) pair with the promoted result kind.
// Integer results wrap in two's complement; only division by zero panics.
macro_rules! promotion_table {
    (@int $($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl_binary_op!(Add, add, $lhs, $rhs => $out, |a, b| a.wrapping_add(b));
            impl_binary_op!(Sub, sub, $lhs, $rhs => $out, |a, b| a.wrapping_sub(b));
            impl_binary_op!(Mul, mul, $lhs, $rhs => $out, |a, b| a.wrapping_mul(b));
            impl_binary_op!(Div, div, $lhs, $rhs => $out, |a, b| a.wrapping_div(b));
            impl_binary_op!(Rem, rem, $lhs, $rhs => $out, |a, b| a.wrapping_rem(b));
            impl_comparison!($lhs, $rhs => $out);
        )+
    };
    (@float $($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl_binary_op!(Add, add, $lhs, $rhs => $out, |a, b| a + b);
            impl_binary_op!(Sub, sub, $lhs, $rhs => $out, |a, b| a - b);
            impl_binary_op!(Mul, mul, $lhs, $rhs => $out, |a, b| a * b);
            impl_binary_op!(Div, div, $lhs, $rhs => $out, |a, b| a / b);
            impl_binary_op!(Rem, rem, $lhs, $rhs => $out, |a, b| a % b);
            impl_comparison!($lhs, $rhs => $out);
        )+
    };
}

promotion_table! {
    @int
    i32, i32 => i32;
    i32, i64 => i64;
    i64, i32 => i64;
    i64, i64 => i64;
}

promotion_table! {
    @float
    i32, f32 => f32;
    i32, f64 => f64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

macro_rules! impl_bit_ops {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl_binary_op!(BitAnd, bitand, $lhs, $rhs => $out, |a, b| a & b);
            impl_binary_op!(BitOr, bitor, $lhs, $rhs => $out, |a, b| a | b);
            impl_binary_op!(BitXor, bitxor, $lhs, $rhs => $out, |a, b| a ^ b);
        )+
    };
}

impl_bit_ops! {
    i32, i32 => i32;
    i32, i64 => i64;
    i64, i32 => i64;
    i64, i64 => i64;
}

// Shifts keep the left operand's kind and mask the amount to its bit width
macro_rules! impl_shifts {
    (@amount $lhs:ty, $amount:ty) => {
        impl<P: Predicate<$lhs>> Shl<$amount> for Refined<$lhs, P> {
            type Output = $lhs;

            #[inline]
            fn shl(self, amount: $amount) -> $lhs {
                self.value.wrapping_shl(amount as u32)
            }
        }

        impl<P: Predicate<$lhs>> Shr<$amount> for Refined<$lhs, P> {
            type Output = $lhs;

            #[inline]
            fn shr(self, amount: $amount) -> $lhs {
                self.value.wrapping_shr(amount as u32)
            }
        }

        impl<P: Predicate<$lhs>, Q: Predicate<$amount>> Shl<Refined<$amount, Q>> for Refined<$lhs, P> {
            type Output = $lhs;

            #[inline]
            fn shl(self, amount: Refined<$amount, Q>) -> $lhs {
                self.value.wrapping_shl(amount.value as u32)
            }
        }

        impl<P: Predicate<$lhs>, Q: Predicate<$amount>> Shr<Refined<$amount, Q>> for Refined<$lhs, P> {
            type Output = $lhs;

            #[inline]
            fn shr(self, amount: Refined<$amount, Q>) -> $lhs {
                self.value.wrapping_shr(amount.value as u32)
            }
        }
    };
    ($($lhs:ty, $unsigned:ty;)+) => {
        $(
            impl_shifts!(@amount $lhs, i32);
            impl_shifts!(@amount $lhs, i64);

            impl<P: Predicate<$lhs>> Not for Refined<$lhs, P> {
                type Output = $lhs;

                #[inline]
                fn not(self) -> $lhs {
                    !self.value
                }
            }

            impl<P: Predicate<$lhs>> Refined<$lhs, P> {
                /// Logical (zero-filling) right shift; the amount is masked
                /// to the bit width.
                ///
                /// ```rust
                /// use stillnum::refined::NegativeI32;
                ///
                /// assert_eq!(NegativeI32::ensuring_valid(-1).logical_shr(28), 0xF);
                /// ```
                #[inline]
                pub fn logical_shr(self, amount: u32) -> $lhs {
                    (self.value as $unsigned).wrapping_shr(amount) as $lhs
                }
            }
        )+
    };
}

impl_shifts! {
    i32, u32;
    i64, u64;
}
