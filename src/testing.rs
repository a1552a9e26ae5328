//! Testing utilities and helpers for stillnum
//!
//! Assertion macros for the result shapes returned by the construction API,
//! and property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use stillnum::{assert_fail, assert_failure, assert_pass, assert_success};
//! use stillnum::refined::{NegativeI32, NonZeroF64};
//!
//! assert_success!(NegativeI32::validate(-3));
//! assert_failure!(NegativeI32::validate(3));
//!
//! assert_pass!(NonZeroF64::pass_or_else(0.5, |v| v));
//! assert_fail!(NonZeroF64::pass_or_else(-0.0, |v| v));
//! ```
//!
//! ## Property-based testing
//!
//! With the `proptest` feature enabled, every refined type implements
//! `Arbitrary` and only ever generates values that satisfy its predicate:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use stillnum::refined::{NegativeF64, PositiveI64};
//!
//! proptest! {
//!     #[test]
//!     fn negation_stays_negative(n in any::<PositiveI64>()) {
//!         let neg = -n;
//!         prop_assert!(neg.get() < 0);
//!     }
//! }
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
///
/// # Example
///
/// ```rust
/// use stillnum::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
///
/// # Example
///
/// ```rust
/// use stillnum::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with specific errors.
///
/// # Example
///
/// ```rust
/// use stillnum::{Validation, assert_validation_errors};
///
/// let val = Validation::<i32, _>::failure(vec!["zero", "NaN"]);
/// assert_validation_errors!(val, vec!["zero", "NaN"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a verdict passed.
///
/// # Example
///
/// ```rust
/// use stillnum::{Verdict, assert_pass};
///
/// assert_pass!(Verdict::<String>::Pass);
/// ```
#[macro_export]
macro_rules! assert_pass {
    ($verdict:expr) => {
        match $verdict {
            $crate::Verdict::Pass => {}
            $crate::Verdict::Fail(e) => {
                panic!("Expected Pass, got Fail: {:?}", e);
            }
        }
    };
}

/// Assert that a verdict failed, optionally with a specific error.
///
/// # Example
///
/// ```rust
/// use stillnum::{Verdict, assert_fail};
///
/// assert_fail!(Verdict::Fail("zero"));
/// assert_fail!(Verdict::Fail("zero"), "zero");
/// ```
#[macro_export]
macro_rules! assert_fail {
    ($verdict:expr) => {
        match $verdict {
            $crate::Verdict::Fail(_) => {}
            $crate::Verdict::Pass => {
                panic!("Expected Fail, got Pass");
            }
        }
    };
    ($verdict:expr, $expected:expr) => {
        match $verdict {
            $crate::Verdict::Fail(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Verdict::Pass => {
                panic!("Expected Fail with {:?}, got Pass", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::primitive::Primitive;
#[cfg(feature = "proptest")]
use crate::refined::{Predicate, Refined};
#[cfg(feature = "proptest")]
use crate::{Validation, Verdict};

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<E>(e_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E: Arbitrary + Clone + 'static> Arbitrary for Verdict<E> {
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Verdict::Pass),
            any_with::<E>(args).prop_map(Verdict::Fail),
        ]
        .boxed()
    }
}

// Draws from the whole primitive domain and keeps only admissible values
#[cfg(feature = "proptest")]
impl<T, P> Arbitrary for Refined<T, P>
where
    T: Primitive + Arbitrary,
    P: Predicate<T>,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<T>(args)
            .prop_filter_map(P::description(), Refined::from_value)
            .boxed()
    }
}
