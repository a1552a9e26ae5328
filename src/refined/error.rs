//! Refinement violations
//!
//! There is exactly one way for a refined construction to fail: the
//! primitive does not satisfy the predicate. [`RefinementError`] records
//! which value failed, which refined type rejected it and, for values
//! derived from an existing refined value, where the computation started.
//!
//! Recoverable entry points return the error. The assertion entry points
//! (`ensuring_valid`, `ensuring_valid_map`, integer negation of `MIN`)
//! go through [`violation`], which panics with the same message.

use std::fmt;

use super::Predicate;
use crate::primitive::{Literal, Primitive};

/// A primitive value that does not satisfy a refined type's predicate.
///
/// # Example
///
/// ```rust
/// use stillnum::refined::NegativeI64;
///
/// let err = NegativeI64::trying_valid(0).unwrap_err();
/// assert_eq!(err.type_name(), "NegativeI64");
/// assert_eq!(err.value(), "0i64");
/// assert_eq!(
///     err.to_string(),
///     "0i64 is not a valid NegativeI64: expected negative number (< 0)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementError {
    type_name: String,
    value: String,
    origin: Option<String>,
    expected: &'static str,
}

impl RefinementError {
    /// Build the error for `value` rejected by `Refined<T, P>`.
    pub fn new<T: Primitive, P: Predicate<T>>(value: T) -> Self {
        Self {
            type_name: type_name::<T, P>(),
            value: Literal(value).to_string(),
            origin: None,
            expected: P::description(),
        }
    }

    /// Record the rendering of the refined value a derived computation
    /// started from.
    pub fn with_origin(mut self, origin: impl fmt::Display) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    /// Name of the refined type that rejected the value (`NegativeI64`, ...)
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The rejected value, rendered as a literal
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The refined value the rejected one was computed from, if any
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Description of the predicate that failed
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

impl fmt::Display for RefinementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(origin) = &self.origin {
            write!(f, " (computed from {})", origin)?;
        }
        write!(
            f,
            " is not a valid {}: expected {}",
            self.type_name, self.expected
        )
    }
}

impl std::error::Error for RefinementError {}

/// Refined type name: predicate name followed by kind name.
pub(crate) fn type_name<T: Primitive, P: Predicate<T>>() -> String {
    format!("{}{}", P::NAME, T::NAME)
}

/// Abort on a violated assertion-style construction.
///
/// Reaching this is a bug in the caller, which claimed the value was valid.
#[cold]
#[track_caller]
pub(crate) fn violation(err: &RefinementError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        type_name = err.type_name(),
        value = err.value(),
        origin = err.origin(),
        "refinement violated by a value asserted valid"
    );
    panic!("{}", err)
}

#[inline]
pub(crate) fn rejected(err: RefinementError) -> RefinementError {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        type_name = err.type_name(),
        value = err.value(),
        "refinement rejected value"
    );
    err
}
