//! Pass/fail outcome of a check that produces no value
//!
//! A [`Verdict`] answers "is this value acceptable?" without keeping the
//! value. It is what
//! [`Refined::pass_or_else`](crate::refined::Refined::pass_or_else)
//! returns, and is handy for guarding side conditions in a pipeline.
//!
//! # Example
//!
//! ```rust
//! use stillnum::Verdict;
//! use stillnum::refined::{NonZeroI32, PositiveF64};
//!
//! let checks = NonZeroI32::pass_or_else(0, |v| format!("divisor {v} is zero"))
//!     .and(PositiveF64::pass_or_else(-1.0, |v| format!("scale {v} is not positive")));
//!
//! // The first failure is kept
//! assert_eq!(checks, Verdict::Fail("divisor 0 is zero".to_string()));
//! ```

/// The outcome of a check: `Pass`, or `Fail` with an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict<E> {
    /// The check succeeded
    Pass,
    /// The check failed with an error
    Fail(E),
}

impl<E> Verdict<E> {
    /// Returns `true` if the check passed.
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Returns `true` if the check failed.
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Verdict::Fail(_))
    }

    /// Combine two verdicts, keeping the first failure.
    ///
    /// `other` is evaluated eagerly; both checks have already run.
    #[inline]
    pub fn and(self, other: Verdict<E>) -> Verdict<E> {
        match self {
            Verdict::Pass => other,
            fail => fail,
        }
    }

    /// Transform the error if the check failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::Verdict;
    /// use stillnum::refined::NegativeI64;
    ///
    /// let v = NegativeI64::pass_or_else(5, |v| v).map_fail(|v| v * 2);
    /// assert_eq!(v, Verdict::Fail(10));
    /// ```
    #[inline]
    pub fn map_fail<E2, F>(self, f: F) -> Verdict<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Verdict::Pass => Verdict::Pass,
            Verdict::Fail(e) => Verdict::Fail(f(e)),
        }
    }

    /// Convert to `Result<(), E>` so a failed check can be propagated with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillnum::refined::NonZeroF32;
    ///
    /// fn check(divisor: f32) -> Result<f32, String> {
    ///     NonZeroF32::pass_or_else(divisor, |v| format!("{v} is zero")).into_result()?;
    ///     Ok(1.0 / divisor)
    /// }
    ///
    /// assert_eq!(check(4.0), Ok(0.25));
    /// assert_eq!(check(0.0), Err("0 is zero".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(e) => Err(e),
        }
    }
}

impl<E> From<Result<(), E>> for Verdict<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(e) => Verdict::Fail(e),
        }
    }
}

impl<E> From<Verdict<E>> for Result<(), E> {
    fn from(verdict: Verdict<E>) -> Self {
        verdict.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Verdict::<&str>::Pass.is_pass());
        assert!(!Verdict::<&str>::Pass.is_fail());
        assert!(Verdict::Fail("zero").is_fail());
    }

    #[test]
    fn test_and_keeps_first_failure() {
        let pass = Verdict::<&str>::Pass;
        assert_eq!(pass.and(Verdict::Pass), Verdict::Pass);
        assert_eq!(pass.and(Verdict::Fail("second")), Verdict::Fail("second"));
        assert_eq!(
            Verdict::Fail("first").and(Verdict::Fail("second")),
            Verdict::Fail("first")
        );
        assert_eq!(Verdict::Fail("first").and(pass), Verdict::Fail("first"));
    }

    #[test]
    fn test_map_fail_on_pass() {
        let v = Verdict::<i32>::Pass.map_fail(|e| e.to_string());
        assert_eq!(v, Verdict::Pass);
    }

    #[test]
    fn test_result_conversions() {
        assert_eq!(Verdict::from(Ok::<(), &str>(())), Verdict::Pass);
        assert_eq!(Verdict::from(Err::<(), _>("bad")), Verdict::Fail("bad"));

        let r: Result<(), &str> = Verdict::Fail("bad").into();
        assert_eq!(r, Err("bad"));
    }
}
