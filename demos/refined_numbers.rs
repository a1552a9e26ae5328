//! Refined Numbers Example
//!
//! This example demonstrates the "parse, don't validate" pattern for numbers.
//! A primitive is checked once at the boundary; afterwards its refined type
//! guarantees the sign, and only sign-preserving operations stay refined.
//!
//! Run with: cargo run --example refined_numbers

use stillnum::refined::{
    FieldError, NegativeF64, NegativeI32, NonNegativeI64, NonZeroF64, NonZeroI32, NonZeroI64,
    PositiveF64, PositiveI32, RefinedValidationExt, RefinementError,
};
use stillnum::{Validation, Verdict};

fn main() {
    println!("=== Refined Numbers Example ===\n");

    construction();
    negation_and_rounding();
    widening_and_arithmetic();
    validation_integration();
    real_world_example();
}

/// Demonstrates the construction entry points
fn construction() {
    println!("--- Construction ---\n");

    println!("NegativeI32::is_valid(-5): {}", NegativeI32::is_valid(-5));
    println!("NegativeI32::is_valid(0): {}", NegativeI32::is_valid(0));

    println!("NegativeF64::from_value(-1.1): {:?}", NegativeF64::from_value(-1.1));
    println!("NegativeF64::from_value(1.1): {:?}", NegativeF64::from_value(1.1));

    match PositiveI32::trying_valid(-3) {
        Ok(n) => println!("Unexpected: {}", n),
        Err(e) => println!("PositiveI32::trying_valid(-3): {}", e),
    }

    let fallback = PositiveI32::from_or_else(-3, PositiveI32::MIN_VALUE);
    println!("PositiveI32::from_or_else(-3, MIN_VALUE): {}", fallback);

    let verdict: Verdict<String> = NonZeroF64::pass_or_else(-0.0, |v| format!("{v} is zero"));
    println!("NonZeroF64::pass_or_else(-0.0, ..): {:?}", verdict);

    let either = NonZeroI64::right_or_else(7, |v| v);
    println!("NonZeroI64::right_or_else(7, ..): {:?}", either);

    println!();
}

/// Demonstrates operations that keep a refinement
fn negation_and_rounding() {
    println!("--- Negation and Rounding ---\n");

    let debt = NegativeI32::ensuring_valid(-120);
    let owed: PositiveI32 = -debt;
    println!("-{} = {}", debt, owed);

    match NegativeI32::MIN_VALUE.checked_neg() {
        Some(n) => println!("Unexpected: {}", n),
        None => println!("{}.checked_neg(): overflow", NegativeI32::MIN_VALUE),
    }

    let rate = PositiveF64::ensuring_valid(0.3);
    println!("{}.round() = {}", rate, rate.round());
    println!("{}.ceil() = {}", rate, rate.ceil());
    println!("{}.floor() = {}", rate, rate.floor());

    let drift = NegativeF64::ensuring_valid(-2.5);
    println!("{}.plus({}) = {}", drift, drift, drift.plus(drift));

    println!();
}

/// Demonstrates widening conversions and mixed-kind arithmetic
fn widening_and_arithmetic() {
    println!("--- Widening and Arithmetic ---\n");

    let n = NonZeroI32::ensuring_valid(7);
    let wide: NonZeroI64 = n.into();
    let double: f64 = n.into();
    println!("{} widens to {} and {:?}", n, wide, double);

    let count = PositiveI32::ensuring_valid(3);
    let total: f64 = count * NegativeF64::ensuring_valid(-0.5);
    let next: i64 = count + 1_i64;
    println!("{} * -0.5 = {}, {} + 1i64 = {}", count, total, count, next);

    // Subtraction can leave the refinement, so the result is a bare i32
    let a = NegativeI32::ensuring_valid(-1);
    let b = NegativeI32::ensuring_valid(-3);
    println!("{} - {} = {}", a, b, a - b);

    println!();
}

/// Demonstrates error accumulation with Validation
fn validation_integration() {
    println!("--- Validation Integration ---\n");

    let result = PositiveI32::validate_vec(0)
        .and(NegativeF64::validate_vec(0.5))
        .and(NonNegativeI64::validate_vec(-1));

    match result {
        Validation::Success(_) => println!("Unexpected success"),
        Validation::Failure(errors) => {
            println!("Found {} errors:", errors.len());
            for (i, err) in errors.iter().enumerate() {
                println!("  {}. {}", i + 1, err);
            }
        }
    }

    println!();
}

#[derive(Debug)]
#[allow(dead_code)]
struct Transfer {
    amount: PositiveF64,
    fee: NonNegativeI64,
    correction: NegativeI32,
}

fn parse_transfer(
    amount: f64,
    fee: i64,
    correction: i32,
) -> Validation<Transfer, Vec<FieldError<RefinementError>>> {
    let amount = PositiveF64::validate_field(amount, "amount").map_err(|e| vec![e]);
    let fee = NonNegativeI64::validate_field(fee, "fee").map_err(|e| vec![e]);
    let correction = NegativeI32::validate_field(correction, "correction").map_err(|e| vec![e]);

    amount
        .and(fee)
        .and(correction)
        .map(|((amount, fee), correction)| Transfer {
            amount,
            fee,
            correction,
        })
}

/// Demonstrates a record parsed from untrusted input
fn real_world_example() {
    println!("--- Real World: Transfer ---\n");

    match parse_transfer(250.0, 2, -1) {
        Validation::Success(t) => println!("Valid transfer: {:?}", t),
        Validation::Failure(errors) => println!("Errors: {:?}", errors),
    }

    match parse_transfer(f64::NAN, -2, 1) {
        Validation::Success(t) => println!("Unexpected: {:?}", t),
        Validation::Failure(errors) => {
            for err in errors {
                println!("  {}", err);
            }
        }
    }
}
