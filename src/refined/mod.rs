//! Refined numeric types
//!
//! This module implements the "parse, don't validate" pattern for numbers:
//! a primitive is checked once when it enters the refined zone, and the type
//! carries the guarantee from then on.
//!
//! # Philosophy
//!
//! Instead of re-checking signs wherever a number is used:
//!
//! ```rust,ignore
//! fn scale(factor: f64) -> Result<f64, Error> {
//!     if !(factor > 0.0) {
//!         return Err(Error::NotPositive);
//!     }
//!     // Every helper called from here checks again...
//! }
//! ```
//!
//! encode the invariant in the type:
//!
//! ```rust,ignore
//! use stillnum::refined::PositiveF64;
//!
//! fn scale(factor: PositiveF64) -> f64 {
//!     // factor is GUARANTEED > 0 by construction
//! }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use stillnum::refined::{NegativeI32, PositiveI32, NonZeroI64};
//!
//! // Validate at the boundary
//! let debt = NegativeI32::from_value(-120).unwrap();
//! assert!(NegativeI32::from_value(3).is_none());
//!
//! // Negation lands in the complementary type
//! let owed: PositiveI32 = -debt;
//! assert_eq!(owed.get(), 120);
//!
//! // Arithmetic drops the refinement and widens like the primitives
//! let total: i64 = debt + 20_i64;
//! assert_eq!(total, -100);
//!
//! // Sound widening is a plain `From`
//! let wide: NonZeroI64 = debt.into();
//! assert_eq!(wide.get(), -120);
//! ```
//!
//! # Construction
//!
//! The same predicate check is exposed in several result shapes, see
//! [`Refined::from_value`], [`Refined::trying_valid`],
//! [`Refined::ensuring_valid`], [`Refined::from_or_else`],
//! [`Refined::pass_or_else`], [`Refined::good_or_else`] and
//! [`Refined::right_or_else`].

mod aliases;
mod consts;
mod construct;
mod error;
mod float;
mod ops;
pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;
mod validation;
mod widen;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::primitive::{Literal, Primitive};

// Re-export core types
pub use aliases::*;
pub use error::RefinementError;
pub use predicates::numeric::{Complement, Negative, NonNegative, NonPositive, NonZero, Positive};
pub use validation::{FieldError, RefinedValidationExt, ValidationFieldExt};

/// A predicate that constrains primitive values of kind `T`.
///
/// Predicates are stateless - they only define the check. The values live
/// in [`Refined<T, P>`].
///
/// # Example
///
/// ```rust
/// use stillnum::refined::{Negative, Predicate};
///
/// assert!(<Negative as Predicate<i64>>::is_valid(-1));
/// assert!(!<Negative as Predicate<f32>>::is_valid(0.0));
/// ```
pub trait Predicate<T: Primitive>: Send + Sync + 'static {
    /// Name used as the prefix of refined type names (`Negative`, ...)
    const NAME: &'static str;

    /// Check whether `value` is admissible. Total and side-effect free.
    fn is_valid(value: T) -> bool;

    /// Human-readable description of what this predicate requires
    fn description() -> &'static str;
}

/// A primitive of kind `T` that is guaranteed to satisfy predicate `P`.
///
/// # Memory Layout
///
/// `Refined<T, P>` has the same memory layout as `T`. The `PhantomData<P>`
/// is zero-sized.
///
/// # Example
///
/// ```rust
/// use stillnum::refined::{Positive, Refined};
///
/// type PositiveF64 = Refined<f64, Positive>;
///
/// fn area(width: PositiveF64, height: PositiveF64) -> f64 {
///     width * height.get()
/// }
///
/// let w = PositiveF64::from_value(2.0).unwrap();
/// let h = PositiveF64::from_value(3.5).unwrap();
/// assert_eq!(area(w, h), 7.0);
/// ```
pub struct Refined<T: Primitive, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T: Primitive, P: Predicate<T>> Refined<T, P> {
    /// Wrap a value already known to satisfy `P`.
    ///
    /// Only reachable from inside the crate, after a check or from a
    /// conversion that cannot leave the predicate.
    #[inline]
    pub(crate) const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Re-validate a value computed from `origin`, panicking on violation.
    #[inline]
    #[track_caller]
    pub(crate) fn ensuring_derived(value: T, origin: impl fmt::Display) -> Self {
        if P::is_valid(value) {
            Self::new_unchecked(value)
        } else {
            error::violation(&RefinementError::new::<T, P>(value).with_origin(origin))
        }
    }

    /// Get the underlying primitive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::PositiveI32;
    ///
    /// let n = PositiveI32::from_value(42).unwrap();
    /// assert_eq!(n.get(), 42);
    /// ```
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Consume the refined value, returning the underlying primitive.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Unary plus: the value itself.
    #[inline]
    pub fn affirm(self) -> Self {
        self
    }

    /// Name of this refined type, e.g. `NegativeF64`.
    pub fn type_name() -> String {
        error::type_name::<T, P>()
    }

    /// The larger of `self` and `that`. Returns `self` on a tie.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NegativeF64;
    ///
    /// let a = NegativeF64::ensuring_valid(-1.0);
    /// let b = NegativeF64::ensuring_valid(-5.0);
    /// assert_eq!(a.max(b).get(), -1.0);
    /// ```
    #[inline]
    pub fn max(self, that: Self) -> Self {
        if self.value >= that.value {
            self
        } else {
            that
        }
    }

    /// The smaller of `self` and `that`. Returns `self` on a tie.
    #[inline]
    pub fn min(self, that: Self) -> Self {
        if self.value <= that.value {
            self
        } else {
            that
        }
    }

    /// Map the underlying value, re-checking the predicate.
    ///
    /// Returns `Err` if the new value doesn't satisfy the predicate; the
    /// error records `self` as the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::PositiveI32;
    ///
    /// let n = PositiveI32::from_value(42).unwrap();
    /// assert_eq!(n.try_map(|x| x * 2).unwrap().get(), 84);
    /// assert!(n.try_map(|x| -x).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, RefinementError>
    where
        F: FnOnce(T) -> T,
    {
        let next = f(self.value);
        if P::is_valid(next) {
            Ok(Self::new_unchecked(next))
        } else {
            Err(error::rejected(
                RefinementError::new::<T, P>(next).with_origin(self),
            ))
        }
    }

    /// Map the underlying value when the result is known to stay valid.
    ///
    /// This is the assertion form of [`try_map`](Self::try_map): use it only
    /// when the transform provably preserves the predicate.
    ///
    /// # Panics
    ///
    /// Panics if the computed value violates the predicate. The message
    /// names the computed value, the refined type and the original value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NegativeI64;
    ///
    /// let n = NegativeI64::ensuring_valid(-5);
    /// assert_eq!(n.ensuring_valid_map(|x| x * 3).get(), -15);
    /// ```
    ///
    /// ```rust,should_panic
    /// use stillnum::refined::NegativeI64;
    ///
    /// // panics: "5i64 (computed from NegativeI64(-5i64)) is not a valid NegativeI64 ..."
    /// NegativeI64::ensuring_valid(-5).ensuring_valid_map(|x| -x);
    /// ```
    #[track_caller]
    pub fn ensuring_valid_map<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self::ensuring_derived(f(self.value), self)
    }
}

impl<T: Primitive, P: Predicate<T>> Clone for Refined<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Primitive, P: Predicate<T>> Copy for Refined<T, P> {}

// PartialEq delegates to inner
impl<T: Primitive, P: Predicate<T>> PartialEq for Refined<T, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// PartialOrd delegates to inner
impl<T: Primitive, P: Predicate<T>> PartialOrd for Refined<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Primitive + Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: Primitive + Ord, P: Predicate<T>> Ord for Refined<T, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Primitive + Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Primitive, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// Read-only access to the primitive's inherent methods (`is_finite`, ...)
impl<T: Primitive, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

// Renders as `TypeName(literal)`, e.g. `NegativeI64(-5i64)`
impl<T: Primitive, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", P::NAME, T::NAME, Literal(self.value))
    }
}

impl<T: Primitive, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type NegI32 = Refined<i32, Negative>;

    #[test]
    fn test_get_and_into_inner() {
        let n = NegI32::ensuring_valid(-42);
        assert_eq!(n.get(), -42);
        assert_eq!(n.into_inner(), -42);
    }

    #[test]
    fn test_new_unchecked_keeps_value() {
        let n = Refined::<i32, Positive>::new_unchecked(7);
        assert_eq!(n.get(), 7);
    }

    #[test]
    fn test_affirm_is_identity() {
        let n = Refined::<f64, NonZero>::ensuring_valid(-2.5);
        assert_eq!(n.affirm(), n);
    }

    #[test]
    fn test_try_map_success() {
        let n = NegI32::ensuring_valid(-4);
        assert_eq!(n.try_map(|x| x * 2).unwrap().get(), -8);
    }

    #[test]
    fn test_try_map_failure_records_origin() {
        let n = NegI32::ensuring_valid(-4);
        let err = n.try_map(|x| x + 10).unwrap_err();
        assert_eq!(err.value(), "6");
        assert_eq!(err.origin(), Some("NegativeI32(-4)"));
    }

    #[test]
    fn test_ensuring_valid_map_success() {
        let n = Refined::<f64, Positive>::ensuring_valid(1.5);
        assert_eq!(n.ensuring_valid_map(|x| x * 2.0).get(), 3.0);
    }

    #[test]
    #[should_panic(expected = "5i64 (computed from NegativeI64(-5i64)) is not a valid NegativeI64")]
    fn test_ensuring_valid_map_failure_panics() {
        let n = Refined::<i64, Negative>::ensuring_valid(-5);
        n.ensuring_valid_map(|x| -x);
    }

    #[test]
    fn test_max_min_pick_by_value() {
        let a = Refined::<f64, Negative>::ensuring_valid(-1.0);
        let b = Refined::<f64, Negative>::ensuring_valid(-5.0);
        assert_eq!(a.max(b).get(), -1.0);
        assert_eq!(b.max(a).get(), -1.0);
        assert_eq!(a.min(b).get(), -5.0);
    }

    // Ties keep the receiver; -0.0 and 0.0 tie, so the sign shows which won.
    #[test]
    fn test_max_min_tie_returns_receiver() {
        let neg_zero = Refined::<f64, NonPositive>::ensuring_valid(-0.0);
        let zero = Refined::<f64, NonPositive>::ensuring_valid(0.0);
        assert!(neg_zero.max(zero).get().is_sign_negative());
        assert!(neg_zero.min(zero).get().is_sign_negative());
        assert!(zero.max(neg_zero).get().is_sign_positive());
        assert!(zero.min(neg_zero).get().is_sign_positive());
    }

    #[test]
    fn test_partial_eq_and_ord() {
        let a = NegI32::ensuring_valid(-42);
        let b = NegI32::ensuring_valid(-42);
        let c = NegI32::ensuring_valid(-1);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!(a.cmp(&c), Ordering::Less);
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NegI32::ensuring_valid(-42));
        set.insert(NegI32::ensuring_valid(-42));
        set.insert(NegI32::ensuring_valid(-44));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_as_ref_and_deref() {
        let n = Refined::<f64, Positive>::ensuring_valid(f64::INFINITY);
        let r: &f64 = n.as_ref();
        assert_eq!(*r, f64::INFINITY);
        assert!(!n.is_finite());
        assert!(n.is_infinite());
    }

    #[test]
    fn test_display_and_debug() {
        let d = Refined::<f64, Negative>::ensuring_valid(-1.1);
        assert_eq!(d.to_string(), "NegativeF64(-1.1)");
        assert_eq!(format!("{:?}", d), "NegativeF64(-1.1)");

        let l = Refined::<i64, NonZero>::ensuring_valid(7);
        assert_eq!(l.to_string(), "NonZeroI64(7i64)");

        let f = Refined::<f32, NonNegative>::ensuring_valid(0.0);
        assert_eq!(f.to_string(), "NonNegativeF32(0.0)");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Refined::<i32, NonPositive>::type_name(), "NonPositiveI32");
        assert_eq!(Refined::<f64, Positive>::type_name(), "PositiveF64");
    }
}
