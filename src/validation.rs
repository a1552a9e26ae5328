//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result` but keeps going after the first
//! failure: combining two failed validations combines their errors, so a
//! record with several out-of-range numbers reports all of them at once.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use stillnum::Validation;
//! use stillnum::refined::{NegativeI32, PositiveF64};
//!
//! let rate = PositiveF64::good_or_else(-0.5, |v| vec![format!("rate {v} must be positive")]);
//! let delta = NegativeI32::good_or_else(3, |v| vec![format!("delta {v} must be negative")]);
//!
//! assert_eq!(
//!     rate.and(delta),
//!     Validation::Failure(vec![
//!         "rate -0.5 must be positive".to_string(),
//!         "delta 3 must be negative".to_string(),
//!     ])
//! );
//! ```
//!
//! ## Combining successes
//!
//! ```
//! use stillnum::Validation;
//!
//! let v1 = Validation::<_, Vec<&str>>::success(1);
//! let v2 = Validation::<_, Vec<&str>>::success(2.5);
//! assert_eq!(v1.and(v2), Validation::Success((1, 2.5)));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
///
/// # Examples
///
/// ```
/// use stillnum::Validation;
///
/// let v = Validation::<_, Vec<&str>>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
///
/// let v1 = Validation::<i32, _>::failure(vec!["too small"]);
/// let v2 = Validation::<i32, _>::failure(vec!["zero"]);
/// assert_eq!(v1.and(v2), Validation::Failure(vec!["too small", "zero"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use stillnum::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    ///
    /// let v = Validation::from_result(Err::<i32, _>("negative".to_string()));
    /// assert_eq!(v, Validation::Failure("negative".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use stillnum::Validation;
    /// use stillnum::refined::NonZeroI64;
    ///
    /// let v = NonZeroI64::validate(-4).map(|n| n.get() * 2);
    /// assert_eq!(v, Validation::Success(-8));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use stillnum::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["zero", "NaN"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use stillnum::Validation;
    /// use stillnum::refined::{NonZeroI32, PositiveI32};
    ///
    /// let halved = PositiveI32::validate_vec(9)
    ///     .and_then(|n| NonZeroI32::validate_vec(n.get() / 2));
    /// assert!(halved.is_success());
    ///
    /// let vanished = PositiveI32::validate_vec(1)
    ///     .and_then(|n| NonZeroI32::validate_vec(n.get() / 2));
    /// assert!(vanished.is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns a success with a Vec of all success values if all validations succeed.
    /// Otherwise, accumulates all errors in order using `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stillnum::Validation;
    /// use stillnum::refined::NegativeI64;
    ///
    /// let all = Validation::all_vec(vec![
    ///     NegativeI64::validate_vec(-1),
    ///     NegativeI64::validate_vec(2),
    ///     NegativeI64::validate_vec(3),
    /// ]);
    ///
    /// match all {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("Expected failure"),
    /// }
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::with_capacity(validations.len());
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}
