//! A right-biased sum type for representing one of two possible values.
//!
//! [`Refined::right_or_else`](crate::refined::Refined::right_or_else)
//! produces an `Either` with the refined value on the `Right` and the
//! caller's error on the `Left`. Methods like `map` and `and_then` operate
//! on the `Right` variant, and an `Either` converts into a `Result` for use
//! with `?`.
//!
//! # Examples
//!
//! ```rust
//! use stillnum::Either;
//! use stillnum::refined::PositiveI32;
//!
//! let parsed = PositiveI32::right_or_else(-4, |v| format!("{v} is not positive"));
//! let description = parsed.fold(
//!     |err| format!("rejected: {}", err),
//!     |n| format!("accepted: {}", n),
//! );
//! assert_eq!(description, "rejected: -4 is not positive");
//! ```

use crate::Validation;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Right` holds the value a computation was after and
/// `Left` the alternative, so `Either<E, T>` lines up with `Result<T, E>`.
///
/// # Example
///
/// ```rust
/// use stillnum::Either;
///
/// let left: Either<&str, i64> = Either::left("zero");
/// let right: Either<&str, i64> = Either::right(42);
///
/// let result = right.fold(|s| s.len() as i64, |n| n * 2);
/// assert_eq!(result, 84);
/// assert_eq!(left.into_result(), Err("zero"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a Left value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a Right value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Convert to `Option<L>`, discarding a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.into_left(), Some(42));
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Convert to `Option<R>`, discarding a Left value.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow the contents of either variant.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Map over the Right value (right-biased).
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::Either;
    /// use stillnum::refined::NonZeroF64;
    ///
    /// let e = NonZeroF64::right_or_else(4.0, |v| v).map(|n| 1.0 / n.get());
    /// assert_eq!(e, Either::right(0.25));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Map over the Left value.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Fold both variants into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Chain a computation on the Right value (right-biased).
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::Either;
    /// use stillnum::refined::{NegativeI32, PositiveI32};
    ///
    /// let e = NegativeI32::right_or_else(-6, |v| v)
    ///     .and_then(|n| PositiveI32::right_or_else(n.get() + 10, |v| v));
    /// assert_eq!(e.map(|p| p.get()), Either::right(4));
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.into_result(), Ok(42));
    /// assert_eq!(left.into_result(), Err("error"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to Validation (Right becomes Success, Left becomes Failure).
    #[inline]
    pub fn into_validation(self) -> Validation<R, L> {
        match self {
            Either::Left(l) => Validation::Failure(l),
            Either::Right(r) => Validation::Success(r),
        }
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(!right.is_left());
        assert!(right.is_right());
    }

    #[test]
    fn test_into_left_into_right() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.into_right(), None);
        assert_eq!(left.into_left(), Some(42));

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.into_left(), None);
        assert_eq!(right.into_right(), Some("hello"));
    }

    #[test]
    fn test_as_ref() {
        let e: Either<i32, String> = Either::left(42);
        assert_eq!(e.as_ref(), Either::left(&42));
    }

    #[test]
    fn test_map_is_right_biased() {
        let e: Either<&str, i32> = Either::right(21);
        assert_eq!(e.map(|x| x * 2), Either::right(42));

        let e: Either<&str, i32> = Either::left("zero");
        assert_eq!(e.map(|x| x * 2), Either::left("zero"));
    }

    #[test]
    fn test_map_left() {
        let e: Either<i32, &str> = Either::left(21);
        assert_eq!(e.map_left(|x| x * 2), Either::left(42));

        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.map_left(|x| x * 2), Either::right("hello"));
    }

    #[test]
    fn test_and_then_short_circuits_on_left() {
        let e: Either<&str, i32> = Either::left("zero");
        let result = e.and_then(|_| -> Either<&str, i32> { panic!("called") });
        assert_eq!(result, Either::left("zero"));
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Result<i32, &str> = Ok(1);
        let e: Either<&str, i32> = ok.into();
        assert_eq!(e, Either::right(1));

        let back: Result<i32, &str> = Either::left("bad").into();
        assert_eq!(back, Err("bad"));
    }

    #[test]
    fn test_into_validation() {
        let right: Either<&str, i32> = Either::right(42);
        let left: Either<&str, i32> = Either::left("error");

        assert_eq!(right.into_validation(), Validation::Success(42));
        assert_eq!(left.into_validation(), Validation::Failure("error"));
    }
}
