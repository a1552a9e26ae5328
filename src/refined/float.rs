//! Rounding and sign-preserving addition for refined floats
//!
//! Rounding a refined float lands in the refined type the result is known
//! to satisfy. `0.3` is positive but rounds to `0`, so `round` and `floor`
//! of a positive value are only non-negative; `ceil` keeps it positive.
//!
//! ```rust
//! use stillnum::refined::{NegativeF64, PositiveF32};
//!
//! let p = PositiveF32::ensuring_valid(0.3);
//! assert_eq!(p.round().get(), 0);
//! assert_eq!(p.ceil().get(), 1.0);
//! assert_eq!(p.floor().get(), 0.0);
//!
//! let n = NegativeF64::ensuring_valid(-2.5);
//! assert_eq!(n.round().get(), -3_i64);
//! assert_eq!(n.floor().get(), -3.0);
//! ```
//!
//! `round` is half-away-from-zero and saturates at the integer bounds.

use super::predicates::numeric::{Negative, NonNegative, NonPositive, NonZero, Positive};
use super::Refined;

macro_rules! impl_rounding {
    ($kind:ident => $int:ident {
        $($pred:ident: round $round:ident, ceil $ceil:ident, floor $floor:ident;)+
    }) => {
        $(
            impl Refined<$kind, $pred> {
                /// Round half away from zero to the nearest integer.
                #[track_caller]
                pub fn round(self) -> Refined<$int, $round> {
                    Refined::ensuring_derived(self.value.round() as $int, self)
                }

                /// Smallest integral value not less than `self`.
                #[track_caller]
                pub fn ceil(self) -> Refined<$kind, $ceil> {
                    Refined::ensuring_derived(self.value.ceil(), self)
                }

                /// Largest integral value not greater than `self`.
                #[track_caller]
                pub fn floor(self) -> Refined<$kind, $floor> {
                    Refined::ensuring_derived(self.value.floor(), self)
                }
            }
        )+

        // A non-zero value can round to zero
        impl Refined<$kind, NonZero> {
            /// Round half away from zero; the result may be `0`.
            pub fn round(self) -> $int {
                self.value.round() as $int
            }

            /// Smallest integral value not less than `self`; may be zero.
            pub fn ceil(self) -> $kind {
                self.value.ceil()
            }

            /// Largest integral value not greater than `self`; may be zero.
            pub fn floor(self) -> $kind {
                self.value.floor()
            }
        }
    };
}

impl_rounding!(f64 => i64 {
    Positive: round NonNegative, ceil Positive, floor NonNegative;
    NonNegative: round NonNegative, ceil NonNegative, floor NonNegative;
    Negative: round NonPositive, ceil NonPositive, floor Negative;
    NonPositive: round NonPositive, ceil NonPositive, floor NonPositive;
});

impl_rounding!(f32 => i32 {
    Positive: round NonNegative, ceil Positive, floor NonNegative;
    NonNegative: round NonNegative, ceil NonNegative, floor NonNegative;
    Negative: round NonPositive, ceil NonPositive, floor Negative;
    NonPositive: round NonPositive, ceil NonPositive, floor NonPositive;
});

macro_rules! impl_plus {
    (@kind $kind:ty, [$($pred:ident),+]) => {
        $(
            impl Refined<$kind, $pred> {
                /// Add two values of the same sign; the sum keeps that sign,
                /// overflowing to the infinity of the same sign.
                #[track_caller]
                pub fn plus(self, other: Self) -> Self {
                    Self::ensuring_derived(self.value + other.value, self)
                }
            }
        )+
    };
    ($($kind:ty),+; $preds:tt) => {
        $(impl_plus!(@kind $kind, $preds);)+
    };
}

impl_plus!(f32, f64; [Positive, NonNegative, Negative, NonPositive]);
