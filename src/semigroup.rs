//! Semigroup trait for accumulating errors
//!
//! A Semigroup is a type with an associative binary operation. [`Validation`]
//! uses it to merge the errors of several failed refinements instead of
//! stopping at the first one.
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use stillnum::Semigroup;
//!
//! let v1 = vec!["zero quantity"];
//! let v2 = vec!["negative price"];
//! assert_eq!(v1.combine(v2), vec!["zero quantity", "negative price"]);
//!
//! let s1 = "rate: NaN; ".to_string();
//! let s2 = "delta: 3".to_string();
//! assert_eq!(s1.combine(s2), "rate: NaN; delta: 3");
//! ```
//!
//! [`Validation`]: crate::Validation

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
