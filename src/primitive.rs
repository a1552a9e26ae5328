//! Primitive numeric kinds that can carry a refinement
//!
//! Refined values are built over exactly four kinds: `i32`, `i64`, `f32`
//! and `f64`. The [`Primitive`] trait is sealed so the set stays closed;
//! every widening rule, operator table and constant in this crate is
//! written against these four kinds.
//!
//! # Literal rendering
//!
//! Values render the way they would be written as Rust literals:
//!
//! ```rust
//! use stillnum::primitive::Literal;
//!
//! assert_eq!(Literal(5_i32).to_string(), "5");
//! assert_eq!(Literal(-5_i64).to_string(), "-5i64");
//! assert_eq!(Literal(7.0_f64).to_string(), "7.0");
//! assert_eq!(Literal(f32::NEG_INFINITY).to_string(), "-inf");
//! ```

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A primitive numeric kind usable as the base of a refined value.
///
/// Implemented for `i32`, `i64`, `f32` and `f64` only.
pub trait Primitive:
    Copy + PartialOrd + fmt::Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Short kind name used in refined type names (`I32`, `F64`, ...)
    const NAME: &'static str;

    /// The additive identity of this kind
    const ZERO: Self;

    /// Negate, returning `None` when the result is not representable.
    ///
    /// Only integer `MIN` values overflow; floats always negate.
    fn checked_negate(self) -> Option<Self>;

    /// Write the value as a Rust literal.
    fn fmt_literal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Primitive for i32 {
    const NAME: &'static str = "I32";
    const ZERO: Self = 0;

    #[inline]
    fn checked_negate(self) -> Option<Self> {
        self.checked_neg()
    }

    fn fmt_literal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Primitive for i64 {
    const NAME: &'static str = "I64";
    const ZERO: Self = 0;

    #[inline]
    fn checked_negate(self) -> Option<Self> {
        self.checked_neg()
    }

    // Wide integers carry their suffix so the rendering is unambiguous
    fn fmt_literal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i64", self)
    }
}

impl Primitive for f32 {
    const NAME: &'static str = "F32";
    const ZERO: Self = 0.0;

    #[inline]
    fn checked_negate(self) -> Option<Self> {
        Some(-self)
    }

    fn fmt_literal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Primitive for f64 {
    const NAME: &'static str = "F64";
    const ZERO: Self = 0.0;

    #[inline]
    fn checked_negate(self) -> Option<Self> {
        Some(-self)
    }

    fn fmt_literal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Display adapter rendering a primitive as a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<T>(pub T);

impl<T: Primitive> fmt::Display for Literal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_literal(f)
    }
}
