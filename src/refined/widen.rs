//! Widening conversions between refined types
//!
//! A refined value converts with `From`/`Into` to every refined type whose
//! kind is at least as wide and whose predicate is implied by its own:
//!
//! * kinds: `i32 -> i64 -> f32 -> f64`
//! * predicates: `Positive -> NonNegative`, `Positive -> NonZero`,
//!   `Negative -> NonPositive`, `Negative -> NonZero`
//!
//! Every pair is listed in the table below. Nothing that flips the sign
//! or narrows the kind is offered. Integer to float conversions may round
//! (`i32 -> f32`, `i64 -> f32`, `i64 -> f64`), but rounding never crosses
//! zero, so the target predicate still holds.
//!
//! ```rust
//! use stillnum::refined::{NonZeroI32, NonZeroI64};
//!
//! let n = NonZeroI32::ensuring_valid(7);
//! assert_eq!(n.to_f64(), 7.0);
//!
//! let wide: NonZeroI64 = n.into();
//! assert_eq!(wide.to_string(), "NonZeroI64(7i64)");
//! ```

#![allow(clippy::unnecessary_cast, clippy::cast_lossless)]

use super::predicates::numeric::{Negative, NonNegative, NonPositive, NonZero, Positive};
use super::{Predicate, Refined};

macro_rules! widening_table {
    ($($from:ident $pred:ident => $to:ident $target:ident;)+) => {
        $(
            impl From<Refined<$from, $pred>> for Refined<$to, $target> {
                #[inline]
                fn from(value: Refined<$from, $pred>) -> Self {
                    let widened = value.value as $to;
                    debug_assert!(<$target as Predicate<$to>>::is_valid(widened));
                    Refined::new_unchecked(widened)
                }
            }
        )+
    };
}

widening_table! {
    // Positive
    i32 Positive => i32 NonNegative;
    i32 Positive => i32 NonZero;
    i32 Positive => i64 Positive;
    i32 Positive => i64 NonNegative;
    i32 Positive => i64 NonZero;
    i32 Positive => f32 Positive;
    i32 Positive => f32 NonNegative;
    i32 Positive => f32 NonZero;
    i32 Positive => f64 Positive;
    i32 Positive => f64 NonNegative;
    i32 Positive => f64 NonZero;
    i64 Positive => i64 NonNegative;
    i64 Positive => i64 NonZero;
    i64 Positive => f32 Positive;
    i64 Positive => f32 NonNegative;
    i64 Positive => f32 NonZero;
    i64 Positive => f64 Positive;
    i64 Positive => f64 NonNegative;
    i64 Positive => f64 NonZero;
    f32 Positive => f32 NonNegative;
    f32 Positive => f32 NonZero;
    f32 Positive => f64 Positive;
    f32 Positive => f64 NonNegative;
    f32 Positive => f64 NonZero;
    f64 Positive => f64 NonNegative;
    f64 Positive => f64 NonZero;

    // NonNegative
    i32 NonNegative => i64 NonNegative;
    i32 NonNegative => f32 NonNegative;
    i32 NonNegative => f64 NonNegative;
    i64 NonNegative => f32 NonNegative;
    i64 NonNegative => f64 NonNegative;
    f32 NonNegative => f64 NonNegative;

    // Negative
    i32 Negative => i32 NonPositive;
    i32 Negative => i32 NonZero;
    i32 Negative => i64 Negative;
    i32 Negative => i64 NonPositive;
    i32 Negative => i64 NonZero;
    i32 Negative => f32 Negative;
    i32 Negative => f32 NonPositive;
    i32 Negative => f32 NonZero;
    i32 Negative => f64 Negative;
    i32 Negative => f64 NonPositive;
    i32 Negative => f64 NonZero;
    i64 Negative => i64 NonPositive;
    i64 Negative => i64 NonZero;
    i64 Negative => f32 Negative;
    i64 Negative => f32 NonPositive;
    i64 Negative => f32 NonZero;
    i64 Negative => f64 Negative;
    i64 Negative => f64 NonPositive;
    i64 Negative => f64 NonZero;
    f32 Negative => f32 NonPositive;
    f32 Negative => f32 NonZero;
    f32 Negative => f64 Negative;
    f32 Negative => f64 NonPositive;
    f32 Negative => f64 NonZero;
    f64 Negative => f64 NonPositive;
    f64 Negative => f64 NonZero;

    // NonPositive
    i32 NonPositive => i64 NonPositive;
    i32 NonPositive => f32 NonPositive;
    i32 NonPositive => f64 NonPositive;
    i64 NonPositive => f32 NonPositive;
    i64 NonPositive => f64 NonPositive;
    f32 NonPositive => f64 NonPositive;

    // NonZero
    i32 NonZero => i64 NonZero;
    i32 NonZero => f32 NonZero;
    i32 NonZero => f64 NonZero;
    i64 NonZero => f32 NonZero;
    i64 NonZero => f64 NonZero;
    f32 NonZero => f64 NonZero;
}

macro_rules! impl_kind_conversions {
    ($kind:ident => $($to:ident $method:ident),+) => {
        impl<P: Predicate<$kind>> Refined<$kind, P> {
            $(
                #[doc = concat!("The value widened to a bare `", stringify!($to), "`.")]
                #[inline]
                pub fn $method(self) -> $to {
                    self.value as $to
                }
            )+
        }

        $(
            impl<P: Predicate<$kind>> From<Refined<$kind, P>> for $to {
                #[inline]
                fn from(value: Refined<$kind, P>) -> $to {
                    value.$method()
                }
            }
        )+
    };
}

impl_kind_conversions!(i32 => i32 to_i32, i64 to_i64, f32 to_f32, f64 to_f64);
impl_kind_conversions!(i64 => i64 to_i64, f32 to_f32, f64 to_f64);
impl_kind_conversions!(f32 => f32 to_f32, f64 to_f64);
impl_kind_conversions!(f64 => f64 to_f64);
