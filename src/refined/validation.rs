//! Validation integration for refined types
//!
//! This module provides integration between refined numbers and the
//! [`Validation`] type for error accumulation.
//!
//! # Example
//!
//! ```rust
//! use stillnum::{Validation, refined::{NegativeF64, PositiveI32}};
//!
//! // Validate multiple fields, accumulating errors
//! fn validate_order(
//!     quantity: i32,
//!     discount: f64,
//! ) -> Validation<(PositiveI32, NegativeF64), Vec<stillnum::refined::RefinementError>> {
//!     let v1 = PositiveI32::validate_vec(quantity);
//!     let v2 = NegativeF64::validate_vec(discount);
//!     v1.and(v2)
//! }
//!
//! // All errors collected
//! let result = validate_order(0, 0.5);
//! assert!(result.is_failure());
//! ```

use std::fmt;

use super::error::RefinementError;
use super::{Predicate, Refined};
use crate::primitive::Primitive;
use crate::Validation;

impl<T: Primitive, P: Predicate<T>> Refined<T, P> {
    /// Validate a value, returning a Validation result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::PositiveI32;
    ///
    /// let valid = PositiveI32::validate(42);
    /// assert!(valid.is_success());
    ///
    /// let invalid = PositiveI32::validate(-5);
    /// assert!(invalid.is_failure());
    /// ```
    pub fn validate(value: T) -> Validation<Self, RefinementError> {
        Validation::from_result(Self::trying_valid(value))
    }

    /// Validate a value, wrapping the error in a Vec for accumulation.
    ///
    /// This is useful when combining with other validations that
    /// produce `Vec<E>` errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::{NonZeroF32, PositiveI64};
    ///
    /// let v1 = NonZeroF32::validate_vec(-0.5);
    /// let v2 = PositiveI64::validate_vec(25);
    /// let result = v1.and(v2);
    /// assert!(result.is_success());
    /// ```
    pub fn validate_vec(value: T) -> Validation<Self, Vec<RefinementError>> {
        Self::validate(value).map_err(|e| vec![e])
    }
}

/// Error with field context
///
/// Wraps an error with a field name for better error messages.
///
/// # Example
///
/// ```rust
/// use stillnum::refined::FieldError;
///
/// let err = FieldError {
///     field: "quantity",
///     error: "must be positive",
/// };
/// assert_eq!(format!("{}", err), "quantity: must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<E> {
    /// The field name
    pub field: &'static str,
    /// The underlying error
    pub error: E,
}

impl<E: fmt::Display> fmt::Display for FieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for FieldError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Extension trait for creating refined validations with field context
pub trait RefinedValidationExt<T: Primitive, P: Predicate<T>> {
    /// Validate with a field name for error context
    fn validate_field(
        value: T,
        field: &'static str,
    ) -> Validation<Refined<T, P>, FieldError<RefinementError>>;
}

impl<T: Primitive, P: Predicate<T>> RefinedValidationExt<T, P> for Refined<T, P> {
    fn validate_field(
        value: T,
        field: &'static str,
    ) -> Validation<Refined<T, P>, FieldError<RefinementError>> {
        Refined::validate(value).with_field(field)
    }
}

/// Extension trait for adding field context to validations
pub trait ValidationFieldExt<T, E> {
    /// Add field context to a validation error
    fn with_field(self, field: &'static str) -> Validation<T, FieldError<E>>;
}

impl<T, E> ValidationFieldExt<T, E> for Validation<T, E> {
    /// Add field context to a validation error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::{Validation, refined::{NonNegativeI32, ValidationFieldExt}};
    ///
    /// let result = NonNegativeI32::validate(-1).with_field("retries");
    ///
    /// match result {
    ///     Validation::Failure(err) => {
    ///         assert_eq!(err.field, "retries");
    ///     }
    ///     _ => panic!("Expected failure"),
    /// }
    /// ```
    fn with_field(self, field: &'static str) -> Validation<T, FieldError<E>> {
        self.map_err(|error| FieldError { field, error })
    }
}
