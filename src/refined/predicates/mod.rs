//! Predefined predicates for refined numbers
//!
//! - **Sign constraints**: [`Positive`], [`NonNegative`], [`Negative`],
//!   [`NonPositive`], [`NonZero`]
//! - **Negation**: [`Complement`] relates each predicate to the one its
//!   negated values satisfy
//!
//! # Example
//!
//! ```rust
//! use stillnum::refined::{Negative, NonZero, Refined};
//!
//! type NegativeI32 = Refined<i32, Negative>;
//! let n = NegativeI32::from_value(-3).unwrap();
//! assert_eq!(n.into_inner(), -3);
//!
//! type NonZeroF64 = Refined<f64, NonZero>;
//! assert!(NonZeroF64::from_value(0.0).is_none());
//! ```
//!
//! [`Positive`]: numeric::Positive
//! [`NonNegative`]: numeric::NonNegative
//! [`Negative`]: numeric::Negative
//! [`NonPositive`]: numeric::NonPositive
//! [`NonZero`]: numeric::NonZero
//! [`Complement`]: numeric::Complement

pub mod numeric;
