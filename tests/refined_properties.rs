//! Property-based tests for refined numbers

use proptest::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use stillnum::refined::*;
use stillnum::{Either, Primitive, Validation, Verdict};

// Floats are compared by bit pattern so NaN and -0.0 round-trip exactly
trait Bits: Copy {
    fn bits(self) -> u64;
}

impl Bits for i32 {
    fn bits(self) -> u64 {
        self as u32 as u64
    }
}

impl Bits for i64 {
    fn bits(self) -> u64 {
        self as u64
    }
}

impl Bits for f32 {
    fn bits(self) -> u64 {
        self.to_bits() as u64
    }
}

impl Bits for f64 {
    fn bits(self) -> u64 {
        self.to_bits()
    }
}

macro_rules! construction_properties {
    ($($module:ident: $ty:ident over $kind:ident, default $default:expr;)+) => {
        $(
            mod $module {
                use super::*;

                proptest! {
                    #[test]
                    fn prop_valid_values_round_trip(v in any::<$kind>()) {
                        if $ty::is_valid(v) {
                            let refined = $ty::from_value(v);
                            prop_assert_eq!(refined.map(|r| r.get().bits()), Some(v.bits()));
                        }
                    }

                    #[test]
                    fn prop_every_entry_point_agrees(v in any::<$kind>()) {
                        let valid = $ty::is_valid(v);
                        let default = $ty::ensuring_valid($default);

                        prop_assert_eq!($ty::from_value(v).is_some(), valid);
                        prop_assert_eq!($ty::trying_valid(v).is_ok(), valid);
                        prop_assert_eq!($ty::pass_or_else(v, |_| ()).is_pass(), valid);
                        prop_assert_eq!($ty::good_or_else(v, |_| ()).is_success(), valid);
                        prop_assert_eq!($ty::right_or_else(v, |_| ()).is_right(), valid);

                        let fallback = $ty::from_or_else(v, default);
                        if valid {
                            prop_assert_eq!(fallback.get().bits(), v.bits());
                        } else {
                            prop_assert_eq!(fallback.get().bits(), default.get().bits());
                        }
                    }

                    #[test]
                    fn prop_assertion_aborts_exactly_on_rejection(v in any::<$kind>()) {
                        let outcome = catch_unwind(AssertUnwindSafe(|| $ty::ensuring_valid(v)));
                        prop_assert_eq!(outcome.is_err(), !$ty::is_valid(v));
                    }

                    #[test]
                    fn prop_refined_to_primitive_and_back(v in any::<$kind>()) {
                        if let Some(refined) = $ty::from_value(v) {
                            let again = $ty::from_value(refined.into_inner());
                            prop_assert_eq!(again.map(|r| r.get().bits()), Some(refined.get().bits()));
                        }
                    }

                    #[test]
                    fn prop_max_min_ties_keep_receiver(v in any::<$kind>()) {
                        if let Some(a) = $ty::from_value(v) {
                            let b = $ty::ensuring_valid(v);
                            prop_assert_eq!(a.max(b).get().bits(), a.get().bits());
                            prop_assert_eq!(a.min(b).get().bits(), a.get().bits());
                        }
                    }
                }
            }
        )+
    };
}

construction_properties! {
    positive_i32: PositiveI32 over i32, default 1;
    non_negative_i32: NonNegativeI32 over i32, default 0;
    negative_i32: NegativeI32 over i32, default -1;
    non_positive_i32: NonPositiveI32 over i32, default 0;
    non_zero_i32: NonZeroI32 over i32, default 1;
    positive_i64: PositiveI64 over i64, default 1;
    non_negative_i64: NonNegativeI64 over i64, default 0;
    negative_i64: NegativeI64 over i64, default -1;
    non_positive_i64: NonPositiveI64 over i64, default 0;
    non_zero_i64: NonZeroI64 over i64, default 1;
    positive_f32: PositiveF32 over f32, default 1.0;
    non_negative_f32: NonNegativeF32 over f32, default 0.0;
    negative_f32: NegativeF32 over f32, default -1.0;
    non_positive_f32: NonPositiveF32 over f32, default 0.0;
    non_zero_f32: NonZeroF32 over f32, default 1.0;
    positive_f64: PositiveF64 over f64, default 1.0;
    non_negative_f64: NonNegativeF64 over f64, default 0.0;
    negative_f64: NegativeF64 over f64, default -1.0;
    non_positive_f64: NonPositiveF64 over f64, default 0.0;
    non_zero_f64: NonZeroF64 over f64, default 1.0;
}

fn widens_soundly<F, P, T, Q>(v: F) -> Result<(), TestCaseError>
where
    F: Primitive,
    P: Predicate<F>,
    T: Primitive,
    Q: Predicate<T>,
    Refined<T, Q>: From<Refined<F, P>>,
{
    if let Some(source) = Refined::<F, P>::from_value(v) {
        let widened: Refined<T, Q> = source.into();
        prop_assert!(
            Q::is_valid(widened.get()),
            "{} widened to invalid {}",
            source,
            widened
        );
    }
    Ok(())
}

// Every row of the widening table, grouped by source type
macro_rules! widening_soundness {
    ($($name:ident: $from:ident $pred:ident => [$($to:ident $target:ident),+];)+) => {
        proptest! {
            $(
                #[test]
                fn $name(v in any::<$from>()) {
                    $( widens_soundly::<$from, $pred, $to, $target>(v)?; )+
                }
            )+
        }
    };
}

widening_soundness! {
    prop_widen_positive_i32: i32 Positive => [
        i32 NonNegative, i32 NonZero, i64 Positive, i64 NonNegative, i64 NonZero,
        f32 Positive, f32 NonNegative, f32 NonZero, f64 Positive, f64 NonNegative, f64 NonZero
    ];
    prop_widen_positive_i64: i64 Positive => [
        i64 NonNegative, i64 NonZero, f32 Positive, f32 NonNegative, f32 NonZero,
        f64 Positive, f64 NonNegative, f64 NonZero
    ];
    prop_widen_positive_f32: f32 Positive => [
        f32 NonNegative, f32 NonZero, f64 Positive, f64 NonNegative, f64 NonZero
    ];
    prop_widen_positive_f64: f64 Positive => [f64 NonNegative, f64 NonZero];

    prop_widen_non_negative_i32: i32 NonNegative => [i64 NonNegative, f32 NonNegative, f64 NonNegative];
    prop_widen_non_negative_i64: i64 NonNegative => [f32 NonNegative, f64 NonNegative];
    prop_widen_non_negative_f32: f32 NonNegative => [f64 NonNegative];

    prop_widen_negative_i32: i32 Negative => [
        i32 NonPositive, i32 NonZero, i64 Negative, i64 NonPositive, i64 NonZero,
        f32 Negative, f32 NonPositive, f32 NonZero, f64 Negative, f64 NonPositive, f64 NonZero
    ];
    prop_widen_negative_i64: i64 Negative => [
        i64 NonPositive, i64 NonZero, f32 Negative, f32 NonPositive, f32 NonZero,
        f64 Negative, f64 NonPositive, f64 NonZero
    ];
    prop_widen_negative_f32: f32 Negative => [
        f32 NonPositive, f32 NonZero, f64 Negative, f64 NonPositive, f64 NonZero
    ];
    prop_widen_negative_f64: f64 Negative => [f64 NonPositive, f64 NonZero];

    prop_widen_non_positive_i32: i32 NonPositive => [i64 NonPositive, f32 NonPositive, f64 NonPositive];
    prop_widen_non_positive_i64: i64 NonPositive => [f32 NonPositive, f64 NonPositive];
    prop_widen_non_positive_f32: f32 NonPositive => [f64 NonPositive];

    prop_widen_non_zero_i32: i32 NonZero => [i64 NonZero, f32 NonZero, f64 NonZero];
    prop_widen_non_zero_i64: i64 NonZero => [f32 NonZero, f64 NonZero];
    prop_widen_non_zero_f32: f32 NonZero => [f64 NonZero];
}

proptest! {
    #[test]
    fn prop_negating_negative_int_gives_positive(v in i32::MIN + 1..0) {
        let x = NegativeI32::ensuring_valid(v);
        let p: PositiveI32 = -x;
        prop_assert_eq!(p.get(), -v);
    }

    #[test]
    fn prop_negating_non_positive_long_gives_non_negative(v in i64::MIN + 1..=0) {
        let x = NonPositiveI64::ensuring_valid(v);
        let p: NonNegativeI64 = -x;
        prop_assert_eq!(p.get(), -v);
    }

    #[test]
    fn prop_negating_floats_is_total(v in any::<f64>()) {
        if let Some(x) = NegativeF64::from_value(v) {
            let p: PositiveF64 = -x;
            prop_assert_eq!(p.get(), -v);
        }
        if let Some(x) = NonZeroF64::from_value(v) {
            let n: NonZeroF64 = -x;
            prop_assert_eq!(n.get().to_bits(), (-v).to_bits());
        }
    }

    #[test]
    fn prop_checked_neg_matches_primitive(v in any::<i32>()) {
        if let Some(x) = NonZeroI32::from_value(v) {
            prop_assert_eq!(x.checked_neg().map(|n| n.get()), v.checked_neg());
        }
    }

    #[test]
    fn prop_negative_int_widens_soundly(v in i32::MIN..0) {
        let x = NegativeI32::ensuring_valid(v);

        let long: NegativeI64 = x.into();
        let float: NegativeF32 = x.into();
        let double: NonPositiveF64 = x.into();
        let non_zero: NonZeroI64 = x.into();

        prop_assert!(NegativeI64::is_valid(long.get()));
        prop_assert!(NegativeF32::is_valid(float.get()));
        prop_assert!(NonPositiveF64::is_valid(double.get()));
        prop_assert_eq!(non_zero.get(), v as i64);
    }

    #[test]
    fn prop_positive_long_widens_soundly(v in 1..=i64::MAX) {
        let x = PositiveI64::ensuring_valid(v);

        let float: PositiveF32 = x.into();
        let double: NonZeroF64 = x.into();
        let same_kind: NonNegativeI64 = x.into();

        prop_assert!(float.get() > 0.0);
        prop_assert!(double.get() > 0.0);
        prop_assert_eq!(same_kind.get(), v);
    }

    #[test]
    fn prop_rounding_stays_in_range(v in any::<f64>()) {
        if let Some(x) = PositiveF64::from_value(v) {
            prop_assert!(x.round().get() >= 0);
            prop_assert!(x.ceil().get() > 0.0);
            prop_assert!(x.floor().get() >= 0.0);
        }
        if let Some(x) = NegativeF64::from_value(v) {
            prop_assert!(x.round().get() <= 0);
            prop_assert!(x.ceil().get() <= 0.0);
            prop_assert!(x.floor().get() < 0.0);
        }
    }

    #[test]
    fn prop_plus_keeps_sign(a in any::<f32>(), b in any::<f32>()) {
        if let (Some(x), Some(y)) = (NonNegativeF32::from_value(a), NonNegativeF32::from_value(b)) {
            prop_assert!(x.plus(y).get() >= 0.0);
        }
        if let (Some(x), Some(y)) = (NegativeF32::from_value(a), NegativeF32::from_value(b)) {
            prop_assert!(x.plus(y).get() < 0.0);
        }
    }

    #[test]
    fn prop_mixed_arithmetic_matches_widened_primitives(
        a in any::<i32>(),
        b in -(1_i64 << 40)..(1_i64 << 40),
    ) {
        if let Some(x) = NonZeroI32::from_value(a) {
            prop_assert_eq!(x + b, a as i64 + b);
            prop_assert_eq!(x * 0.5_f64, a as f64 * 0.5);
            prop_assert_eq!(x < b, (a as i64) < b);
            prop_assert_eq!(x * b, (a as i64).wrapping_mul(b));
        }
    }

    #[test]
    fn prop_result_shapes_carry_the_same_error(v in any::<i64>()) {
        prop_assume!(!PositiveI64::is_valid(v));
        let expected = PositiveI64::trying_valid(v).unwrap_err();

        prop_assert_eq!(PositiveI64::validate(v), Validation::Failure(expected.clone()));
        prop_assert_eq!(
            PositiveI64::pass_or_else(v, |v| v),
            Verdict::Fail(v)
        );
        prop_assert_eq!(
            PositiveI64::right_or_else(v, |v| v.to_string()),
            Either::Left(v.to_string())
        );
        prop_assert_eq!(expected.value(), format!("{v}i64"));
    }
}
