//! # Stillnum
//!
//! > *"Check once, trust after"*
//!
//! Refined numeric types: `i32`, `i64`, `f32` and `f64` values carrying a
//! sign guarantee (positive, non-negative, negative, non-positive or
//! non-zero) in their type.
//!
//! ## Philosophy
//!
//! A primitive is validated once at the boundary. From then on the type
//! proves the property, so code that receives a `NegativeF64` never checks
//! the sign again. Operations that provably keep a refinement return a
//! refined value (negation, rounding, widening); everything else returns a
//! bare primitive.
//!
//! ## Quick Example
//!
//! ```rust
//! use stillnum::Validation;
//! use stillnum::refined::{NegativeF64, NonZeroI32, PositiveI64, RefinementError};
//!
//! fn parse_adjustment(
//!     units: i64,
//!     discount: f64,
//! ) -> Validation<(PositiveI64, NegativeF64), Vec<RefinementError>> {
//!     PositiveI64::validate_vec(units).and(NegativeF64::validate_vec(discount))
//! }
//!
//! // Every invalid number is reported at once
//! match parse_adjustment(0, 0.25) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//!
//! // Negation lands in the complementary refinement
//! let step = NonZeroI32::ensuring_valid(-3);
//! let back: NonZeroI32 = -step;
//! assert_eq!(back.get(), 3);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod primitive;
pub mod refined;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod verdict;

// Re-exports
pub use either::Either;
pub use primitive::Primitive;
pub use refined::{Refined, RefinementError};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use verdict::Verdict;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::refined::{
        Complement, Negative, NonNegative, NonPositive, NonZero, Positive, Predicate, Refined,
        RefinementError,
    };
    pub use crate::refined::{FieldError, RefinedValidationExt, ValidationFieldExt};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::verdict::Verdict;
}
