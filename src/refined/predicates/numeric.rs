//! Numeric predicates for refined types
//!
//! This module provides the five sign predicates:
//! - [`Positive`]: value > 0
//! - [`NonNegative`]: value >= 0
//! - [`Negative`]: value < 0
//! - [`NonPositive`]: value <= 0
//! - [`NonZero`]: value != 0
//!
//! Each predicate is implemented once, generically over every
//! [`Primitive`] kind. Comparisons follow IEEE-754 for floats: NaN fails
//! every ordered comparison, so it is rejected by all predicates except
//! [`NonZero`], and `-0.0` compares equal to `0.0`.
//!
//! # Example
//!
//! ```rust
//! use stillnum::refined::{NonZero, Predicate, Positive};
//!
//! assert!(<Positive as Predicate<i32>>::is_valid(3));
//! assert!(!<Positive as Predicate<f64>>::is_valid(f64::NAN));
//! assert!(!<NonZero as Predicate<f64>>::is_valid(-0.0));
//! ```

use super::super::Predicate;
use crate::primitive::Primitive;

/// Value must be positive (> 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

/// Value must be non-negative (>= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegative;

/// Value must be negative (< 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

/// Value must be non-positive (<= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPositive;

/// Value must be non-zero (!= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero;

macro_rules! impl_sign_predicate {
    ($pred:ident, $name:literal, $desc:literal, |$v:ident| $check:expr) => {
        impl<T: Primitive> Predicate<T> for $pred {
            const NAME: &'static str = $name;

            #[inline]
            fn is_valid($v: T) -> bool {
                $check
            }

            fn description() -> &'static str {
                $desc
            }
        }
    };
}

impl_sign_predicate!(Positive, "Positive", "positive number (> 0)", |v| v > T::ZERO);
impl_sign_predicate!(
    NonNegative,
    "NonNegative",
    "non-negative number (>= 0)",
    |v| v >= T::ZERO
);
impl_sign_predicate!(Negative, "Negative", "negative number (< 0)", |v| v < T::ZERO);
impl_sign_predicate!(
    NonPositive,
    "NonPositive",
    "non-positive number (<= 0)",
    |v| v <= T::ZERO
);
impl_sign_predicate!(NonZero, "NonZero", "non-zero number (!= 0)", |v| v != T::ZERO);

/// The predicate satisfied by the negation of every value satisfying `Self`.
///
/// Negation is only offered between a predicate and its complement:
/// `Positive` and `Negative` swap, `NonNegative` and `NonPositive` swap,
/// `NonZero` maps to itself.
pub trait Complement<T: Primitive>: Predicate<T> {
    /// Predicate holding for negated values
    type Output: Predicate<T>;
}

impl<T: Primitive> Complement<T> for Positive {
    type Output = Negative;
}

impl<T: Primitive> Complement<T> for Negative {
    type Output = Positive;
}

impl<T: Primitive> Complement<T> for NonNegative {
    type Output = NonPositive;
}

impl<T: Primitive> Complement<T> for NonPositive {
    type Output = NonNegative;
}

impl<T: Primitive> Complement<T> for NonZero {
    type Output = NonZero;
}
