//! Demonstrates tracing integration with refined numbers
//!
//! Rejections from the recoverable entry points are logged at DEBUG; the
//! assertion path logs at ERROR right before it panics.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use stillnum::refined::{NegativeI64, NonZeroF64, PositiveI32};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // Rejected values are reported as debug events
    for raw in [12, 0, -4] {
        match PositiveI32::trying_valid(raw) {
            Ok(n) => tracing::info!(value = %n, "accepted"),
            Err(e) => tracing::warn!(error = %e, "skipping input"),
        }
    }

    // Derived values record where they came from
    let base = NegativeI64::ensuring_valid(-5);
    if let Err(e) = base.try_map(|x| x + 10) {
        tracing::warn!(origin = e.origin(), "transform left the refinement");
    }

    // The assertion path logs before panicking
    let outcome = std::panic::catch_unwind(|| NonZeroF64::ensuring_valid(0.0));
    tracing::info!(panicked = outcome.is_err(), "assertion path finished");
}
