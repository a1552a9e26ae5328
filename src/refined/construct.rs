//! Construction entry points for refined values
//!
//! Every entry point runs the same [`Predicate::is_valid`] check and only
//! differs in how a rejected value is reported:
//!
//! | Method | On invalid input |
//! |---|---|
//! | [`Refined::is_valid`] | `false` |
//! | [`Refined::from_value`] | `None` |
//! | [`Refined::from_or_else`] | the supplied default |
//! | [`Refined::trying_valid`] / `TryFrom` | `Err(RefinementError)` |
//! | [`Refined::pass_or_else`] | `Verdict::Fail(e)` |
//! | [`Refined::good_or_else`] | `Validation::Failure(e)` |
//! | [`Refined::right_or_else`] | `Either::Left(e)` |
//! | [`Refined::ensuring_valid`] | panic |

use super::error::{self, RefinementError};
use super::{Predicate, Refined};
use crate::primitive::Primitive;
use crate::{Either, Validation, Verdict};

impl<T: Primitive, P: Predicate<T>> Refined<T, P> {
    /// Whether `value` satisfies this type's predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NegativeI32;
    ///
    /// assert!(NegativeI32::is_valid(-5));
    /// assert!(!NegativeI32::is_valid(0));
    /// assert!(!NegativeI32::is_valid(5));
    /// ```
    #[inline]
    pub fn is_valid(value: T) -> bool {
        P::is_valid(value)
    }

    /// Refine `value`, or `None` if it doesn't satisfy the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NegativeF64;
    ///
    /// assert_eq!(NegativeF64::from_value(-1.1).map(|n| n.get()), Some(-1.1));
    /// assert!(NegativeF64::from_value(1.1).is_none());
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Option<Self> {
        if P::is_valid(value) {
            Some(Self::new_unchecked(value))
        } else {
            None
        }
    }

    /// Refine a value the caller has already proven valid.
    ///
    /// # Panics
    ///
    /// Panics if `value` doesn't satisfy the predicate. A panic here is a
    /// bug in the calling code; use [`trying_valid`](Self::trying_valid)
    /// for input that may be invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NegativeI64;
    ///
    /// let min = NegativeI64::ensuring_valid(i64::MIN);
    /// assert_eq!(min.get(), i64::MIN);
    /// ```
    ///
    /// ```rust,should_panic
    /// use stillnum::refined::NegativeI64;
    ///
    /// // panics: "0i64 is not a valid NegativeI64: expected negative number (< 0)"
    /// NegativeI64::ensuring_valid(0);
    /// ```
    #[inline]
    #[track_caller]
    pub fn ensuring_valid(value: T) -> Self {
        if P::is_valid(value) {
            Self::new_unchecked(value)
        } else {
            error::violation(&RefinementError::new::<T, P>(value))
        }
    }

    /// Refine `value`, returning a [`RefinementError`] if it is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::PositiveI32;
    ///
    /// assert!(PositiveI32::trying_valid(3).is_ok());
    ///
    /// let err = PositiveI32::trying_valid(-3).unwrap_err();
    /// assert_eq!(err.value(), "-3");
    /// ```
    pub fn trying_valid(value: T) -> Result<Self, RefinementError> {
        if P::is_valid(value) {
            Ok(Self::new_unchecked(value))
        } else {
            Err(error::rejected(RefinementError::new::<T, P>(value)))
        }
    }

    /// Refine `value`, falling back to `default` if it is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::PositiveI32;
    ///
    /// let fallback = PositiveI32::MIN_VALUE;
    /// assert_eq!(PositiveI32::from_or_else(8, fallback).get(), 8);
    /// assert_eq!(PositiveI32::from_or_else(-8, fallback).get(), 1);
    /// ```
    #[inline]
    pub fn from_or_else(value: T, default: Self) -> Self {
        Self::from_value(value).unwrap_or(default)
    }

    /// Check `value` without keeping it: `Pass`, or `Fail` with the error
    /// derived from the rejected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::{Verdict, refined::NonZeroI32};
    ///
    /// assert_eq!(NonZeroI32::pass_or_else(4, |v| format!("{v} is zero")), Verdict::Pass);
    /// assert_eq!(
    ///     NonZeroI32::pass_or_else(0, |v| format!("{v} is zero")),
    ///     Verdict::Fail("0 is zero".to_string())
    /// );
    /// ```
    pub fn pass_or_else<E, F>(value: T, on_invalid: F) -> Verdict<E>
    where
        F: FnOnce(T) -> E,
    {
        if P::is_valid(value) {
            Verdict::Pass
        } else {
            Verdict::Fail(on_invalid(value))
        }
    }

    /// Refine `value` into an accumulating [`Validation`].
    ///
    /// Failures built this way combine with [`Validation::and`] so every
    /// invalid field is reported at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::{Validation, refined::{NegativeF64, PositiveI32}};
    ///
    /// let width = PositiveI32::good_or_else(-2, |v| vec![format!("width {v}")]);
    /// let offset = NegativeF64::good_or_else(0.5, |v| vec![format!("offset {v}")]);
    ///
    /// assert_eq!(
    ///     width.and(offset),
    ///     Validation::Failure(vec!["width -2".to_string(), "offset 0.5".to_string()])
    /// );
    /// ```
    pub fn good_or_else<E, F>(value: T, on_invalid: F) -> Validation<Self, E>
    where
        F: FnOnce(T) -> E,
    {
        if P::is_valid(value) {
            Validation::Success(Self::new_unchecked(value))
        } else {
            Validation::Failure(on_invalid(value))
        }
    }

    /// Refine `value` into a right-biased [`Either`]: `Right` holds the
    /// refined value, `Left` the error derived from the rejected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::{Either, refined::NonPositiveI64};
    ///
    /// let ok = NonPositiveI64::right_or_else(0, |v| v);
    /// assert_eq!(ok.map(|n| n.get()), Either::Right(0));
    ///
    /// let bad: Result<NonPositiveI64, i64> = NonPositiveI64::right_or_else(9, |v| v).into();
    /// assert_eq!(bad, Err(9));
    /// ```
    pub fn right_or_else<E, F>(value: T, on_invalid: F) -> Either<E, Self>
    where
        F: FnOnce(T) -> E,
    {
        if P::is_valid(value) {
            Either::Right(Self::new_unchecked(value))
        } else {
            Either::Left(on_invalid(value))
        }
    }
}

macro_rules! impl_try_from {
    ($($kind:ty),+) => {
        $(
            impl<P: Predicate<$kind>> TryFrom<$kind> for Refined<$kind, P> {
                type Error = RefinementError;

                #[inline]
                fn try_from(value: $kind) -> Result<Self, Self::Error> {
                    Self::trying_valid(value)
                }
            }
        )+
    };
}

impl_try_from!(i32, i64, f32, f64);
