//! Type aliases for the refined numeric types
//!
//! Every predicate is offered over every primitive kind, named
//! `<Predicate><Kind>`.
//!
//! # Example
//!
//! ```rust
//! use stillnum::refined::{NegativeF64, NonNegativeI64, PositiveI32};
//!
//! let age = PositiveI32::from_value(25).unwrap();
//! let balance = NonNegativeI64::from_value(1000).unwrap();
//! let drift = NegativeF64::from_value(-0.25).unwrap();
//! ```

use super::predicates::numeric::{Negative, NonNegative, NonPositive, NonZero, Positive};
use super::Refined;

// ============================================================================
// i32 aliases
// ============================================================================

/// An i32 that is guaranteed to be positive (> 0)
pub type PositiveI32 = Refined<i32, Positive>;

/// An i32 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI32 = Refined<i32, NonNegative>;

/// An i32 that is guaranteed to be negative (< 0)
pub type NegativeI32 = Refined<i32, Negative>;

/// An i32 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveI32 = Refined<i32, NonPositive>;

/// An i32 that is guaranteed to be non-zero (!= 0)
pub type NonZeroI32 = Refined<i32, NonZero>;

// ============================================================================
// i64 aliases
// ============================================================================

/// An i64 that is guaranteed to be positive (> 0)
pub type PositiveI64 = Refined<i64, Positive>;

/// An i64 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI64 = Refined<i64, NonNegative>;

/// An i64 that is guaranteed to be negative (< 0)
pub type NegativeI64 = Refined<i64, Negative>;

/// An i64 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveI64 = Refined<i64, NonPositive>;

/// An i64 that is guaranteed to be non-zero (!= 0)
pub type NonZeroI64 = Refined<i64, NonZero>;

// ============================================================================
// Float aliases
// (NaN is rejected by every sign predicate and accepted by NonZero)
// ============================================================================

/// An f32 that is guaranteed to be positive (> 0)
pub type PositiveF32 = Refined<f32, Positive>;

/// An f32 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeF32 = Refined<f32, NonNegative>;

/// An f32 that is guaranteed to be negative (< 0)
pub type NegativeF32 = Refined<f32, Negative>;

/// An f32 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveF32 = Refined<f32, NonPositive>;

/// An f32 that is guaranteed to be non-zero (!= 0, so `-0.0` is rejected)
pub type NonZeroF32 = Refined<f32, NonZero>;

/// An f64 that is guaranteed to be positive (> 0)
pub type PositiveF64 = Refined<f64, Positive>;

/// An f64 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeF64 = Refined<f64, NonNegative>;

/// An f64 that is guaranteed to be negative (< 0)
pub type NegativeF64 = Refined<f64, Negative>;

/// An f64 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveF64 = Refined<f64, NonPositive>;

/// An f64 that is guaranteed to be non-zero (!= 0, so `-0.0` is rejected)
pub type NonZeroF64 = Refined<f64, NonZero>;
