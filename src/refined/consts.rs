//! Sentinel constants for each refined type
//!
//! `MIN_VALUE` and `MAX_VALUE` are the extreme values a type admits;
//! floating-point types add their infinities. For the strict float types
//! the bound next to zero is the smallest subnormal, so
//! `NegativeF64::MAX_VALUE` is the negative value closest to zero.
//!
//! ```rust
//! use stillnum::refined::{NegativeF64, PositiveI32};
//!
//! assert_eq!(PositiveI32::MIN_VALUE.get(), 1);
//! assert_eq!(NegativeF64::MAX_VALUE.get(), -f64::from_bits(1));
//! assert_eq!(NegativeF64::NEGATIVE_INFINITY.get(), f64::NEG_INFINITY);
//! ```

use super::predicates::numeric::{Negative, NonNegative, NonPositive, NonZero, Positive};
use super::Refined;

macro_rules! refined_consts {
    ($kind:ty, $pred:ty { $($(#[$doc:meta])* $name:ident = $value:expr;)+ }) => {
        impl Refined<$kind, $pred> {
            $(
                $(#[$doc])*
                pub const $name: Self = Self::new_unchecked($value);
            )+
        }
    };
}

macro_rules! int_consts {
    ($($kind:ident),+) => {
        $(
            refined_consts!($kind, Positive {
                /// Smallest positive value, `1`
                MIN_VALUE = 1;
                /// Largest representable value
                MAX_VALUE = $kind::MAX;
            });
            refined_consts!($kind, NonNegative {
                /// Zero
                MIN_VALUE = 0;
                /// Largest representable value
                MAX_VALUE = $kind::MAX;
            });
            refined_consts!($kind, Negative {
                /// Most negative representable value
                MIN_VALUE = $kind::MIN;
                /// Negative value closest to zero, `-1`
                MAX_VALUE = -1;
            });
            refined_consts!($kind, NonPositive {
                /// Most negative representable value
                MIN_VALUE = $kind::MIN;
                /// Zero
                MAX_VALUE = 0;
            });
            refined_consts!($kind, NonZero {
                /// Most negative representable value
                MIN_VALUE = $kind::MIN;
                /// Largest representable value
                MAX_VALUE = $kind::MAX;
            });
        )+
    };
}

int_consts!(i32, i64);

macro_rules! float_consts {
    ($($kind:ident),+) => {
        $(
            refined_consts!($kind, Positive {
                /// Smallest positive subnormal value
                MIN_VALUE = $kind::from_bits(1);
                /// Largest finite value
                MAX_VALUE = $kind::MAX;
                /// Positive infinity
                POSITIVE_INFINITY = $kind::INFINITY;
            });
            refined_consts!($kind, NonNegative {
                /// Zero
                MIN_VALUE = 0.0;
                /// Largest finite value
                MAX_VALUE = $kind::MAX;
                /// Positive infinity
                POSITIVE_INFINITY = $kind::INFINITY;
            });
            refined_consts!($kind, Negative {
                /// Most negative finite value
                MIN_VALUE = $kind::MIN;
                /// Negative value closest to zero (negated smallest subnormal)
                MAX_VALUE = -$kind::from_bits(1);
                /// Negative infinity
                NEGATIVE_INFINITY = $kind::NEG_INFINITY;
            });
            refined_consts!($kind, NonPositive {
                /// Most negative finite value
                MIN_VALUE = $kind::MIN;
                /// Zero
                MAX_VALUE = 0.0;
                /// Negative infinity
                NEGATIVE_INFINITY = $kind::NEG_INFINITY;
            });
            refined_consts!($kind, NonZero {
                /// Most negative finite value
                MIN_VALUE = $kind::MIN;
                /// Largest finite value
                MAX_VALUE = $kind::MAX;
                /// Smallest positive subnormal value
                MIN_POSITIVE_VALUE = $kind::from_bits(1);
                /// Positive infinity
                POSITIVE_INFINITY = $kind::INFINITY;
                /// Negative infinity
                NEGATIVE_INFINITY = $kind::NEG_INFINITY;
            });
        )+
    };
}

float_consts!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::refined::*;

    macro_rules! assert_all_valid {
        ($($ty:ident :: $name:ident),+ $(,)?) => {
            $(
                assert!(
                    $ty::is_valid($ty::$name.get()),
                    "{}::{} = {} violates its predicate",
                    stringify!($ty),
                    stringify!($name),
                    $ty::$name
                );
            )+
        };
    }

    #[test]
    fn test_int_constants_satisfy_predicates() {
        assert_all_valid!(
            PositiveI32::MIN_VALUE,
            PositiveI32::MAX_VALUE,
            NonNegativeI32::MIN_VALUE,
            NonNegativeI32::MAX_VALUE,
            NegativeI32::MIN_VALUE,
            NegativeI32::MAX_VALUE,
            NonPositiveI32::MIN_VALUE,
            NonPositiveI32::MAX_VALUE,
            NonZeroI32::MIN_VALUE,
            NonZeroI32::MAX_VALUE,
            PositiveI64::MIN_VALUE,
            PositiveI64::MAX_VALUE,
            NonNegativeI64::MIN_VALUE,
            NonNegativeI64::MAX_VALUE,
            NegativeI64::MIN_VALUE,
            NegativeI64::MAX_VALUE,
            NonPositiveI64::MIN_VALUE,
            NonPositiveI64::MAX_VALUE,
            NonZeroI64::MIN_VALUE,
            NonZeroI64::MAX_VALUE,
        );
    }

    #[test]
    fn test_float_constants_satisfy_predicates() {
        assert_all_valid!(
            PositiveF32::MIN_VALUE,
            PositiveF32::MAX_VALUE,
            PositiveF32::POSITIVE_INFINITY,
            NonNegativeF32::MIN_VALUE,
            NonNegativeF32::MAX_VALUE,
            NonNegativeF32::POSITIVE_INFINITY,
            NegativeF32::MIN_VALUE,
            NegativeF32::MAX_VALUE,
            NegativeF32::NEGATIVE_INFINITY,
            NonPositiveF32::MIN_VALUE,
            NonPositiveF32::MAX_VALUE,
            NonPositiveF32::NEGATIVE_INFINITY,
            NonZeroF32::MIN_VALUE,
            NonZeroF32::MAX_VALUE,
            NonZeroF32::MIN_POSITIVE_VALUE,
            NonZeroF32::POSITIVE_INFINITY,
            NonZeroF32::NEGATIVE_INFINITY,
            PositiveF64::MIN_VALUE,
            PositiveF64::MAX_VALUE,
            PositiveF64::POSITIVE_INFINITY,
            NonNegativeF64::MIN_VALUE,
            NonNegativeF64::MAX_VALUE,
            NonNegativeF64::POSITIVE_INFINITY,
            NegativeF64::MIN_VALUE,
            NegativeF64::MAX_VALUE,
            NegativeF64::NEGATIVE_INFINITY,
            NonPositiveF64::MIN_VALUE,
            NonPositiveF64::MAX_VALUE,
            NonPositiveF64::NEGATIVE_INFINITY,
            NonZeroF64::MIN_VALUE,
            NonZeroF64::MAX_VALUE,
            NonZeroF64::MIN_POSITIVE_VALUE,
            NonZeroF64::POSITIVE_INFINITY,
            NonZeroF64::NEGATIVE_INFINITY,
        );
    }

    #[test]
    fn test_strict_bounds_are_next_to_zero() {
        assert_eq!(PositiveI64::MIN_VALUE.get(), 1);
        assert_eq!(NegativeI32::MAX_VALUE.get(), -1);
        assert_eq!(PositiveF64::MIN_VALUE.get(), 4.9e-324);
        assert_eq!(NegativeF64::MAX_VALUE.get(), -4.9e-324);
        assert!(PositiveF32::MIN_VALUE.get() < f32::MIN_POSITIVE);
        assert!(!NegativeF64::is_valid(NegativeF64::MAX_VALUE.get() / 2.0));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(NegativeI64::MIN_VALUE.get(), i64::MIN);
        assert_eq!(NonZeroI32::MAX_VALUE.get(), i32::MAX);
        assert_eq!(NegativeF64::MIN_VALUE.get(), f64::MIN);
        assert_eq!(PositiveF32::MAX_VALUE.get(), f32::MAX);
        assert_eq!(NonPositiveF32::MAX_VALUE.get(), 0.0);
    }
}
