//! Fluent assertion entry point.
//!
//! This is the thin caller over the engine: it builds the [`Expression`],
//! applies a [`Predicate`], and either returns the structured result or
//! panics with the rendered message. Assertions evaluate immediately when
//! using [`Expectation::to`]/[`Expectation::to_not`]; use
//! [`Expectation::evaluate`] for non-panicking evaluation.
//!
//! # Example
//!
//! ```rust
//! use veracity::{be_falsy, be_truthy, expect, expect_absent};
//!
//! expect(1i64).to(be_truthy());
//! expect_absent::<i64>().to(be_falsy());
//!
//! let result = expect(0i64).evaluate(&be_truthy()).unwrap();
//! assert!(!result.is_match());
//! ```

use std::fmt;

use crate::expression::{EvalError, Expression};
use crate::predicate::Predicate;
use crate::result::{PredicateResult, PredicateStatus, NIL_MARKER};

/// Create an expectation over an eager subject value.
pub fn expect<T: Clone + fmt::Debug + 'static>(value: T) -> Expectation<T> {
    Expectation::new(Expression::from_value(value))
}

/// Create an expectation over a deferred, fallible subject producer.
///
/// The producer runs at most once, when the first predicate inspects it.
pub fn expect_lazy<T: Clone + fmt::Debug + 'static>(
    producer: impl FnOnce() -> anyhow::Result<Option<T>> + 'static,
) -> Expectation<T> {
    Expectation::new(Expression::lazy(producer))
}

/// Create an expectation over an absent subject.
pub fn expect_absent<T: Clone + fmt::Debug + 'static>() -> Expectation<T> {
    Expectation::new(Expression::absent())
}

/// Holds the expression for one assertion and applies predicates to it.
///
/// Owned exclusively by the assertion; discard after use.
#[derive(Debug)]
pub struct Expectation<T> {
    expression: Expression<T>,
}

impl<T: Clone + fmt::Debug + 'static> Expectation<T> {
    /// Wrap an existing expression.
    pub fn new(expression: Expression<T>) -> Self {
        Self { expression }
    }

    /// The underlying expression.
    pub fn expression(&self) -> &Expression<T> {
        &self.expression
    }

    /// Apply a predicate without panicking.
    ///
    /// Abnormal producer failures surface here unmodified.
    pub fn evaluate(&self, predicate: &Predicate<T>) -> Result<PredicateResult, EvalError> {
        predicate.matches(&self.expression)
    }

    /// Assert the predicate matches.
    ///
    /// # Panics
    ///
    /// Panics with the rendered message on a non-match, with a distinct
    /// "inconclusive" text when the predicate declares absence neutral, and
    /// with the producer failure if evaluation fails abnormally.
    pub fn to(self, predicate: Predicate<T>) {
        let result = self.unwrap_outcome(predicate.matches(&self.expression));
        match result.status {
            PredicateStatus::Matches => {}
            PredicateStatus::DoesNotMatch => panic!(
                "assertion failed: {}",
                result.message.render(Some(&self.rendered_actual()))
            ),
            PredicateStatus::Inconclusive => self.panic_inconclusive(&result),
        }
    }

    /// Assert the predicate does not match.
    ///
    /// Negated composition: the status is inverted, the message is reused.
    ///
    /// # Panics
    ///
    /// Panics with the negated rendering when the predicate matches, and
    /// with a distinct "inconclusive" text on an inconclusive outcome.
    pub fn to_not(self, predicate: Predicate<T>) {
        let result = self
            .unwrap_outcome(predicate.matches(&self.expression))
            .negated();
        match result.status {
            PredicateStatus::Matches => {}
            PredicateStatus::DoesNotMatch => panic!(
                "assertion failed: {}",
                result.message.render_negated(Some(&self.rendered_actual()))
            ),
            PredicateStatus::Inconclusive => self.panic_inconclusive(&result),
        }
    }

    fn unwrap_outcome(&self, outcome: Result<PredicateResult, EvalError>) -> PredicateResult {
        match outcome {
            Ok(result) => result,
            Err(failure) => panic!("assertion failed abnormally: {failure}"),
        }
    }

    fn panic_inconclusive(&self, result: &PredicateResult) -> ! {
        panic!(
            "assertion inconclusive: subject is absent and \"{}\" declares absence neutral",
            result
                .message
                .expected_description()
                .unwrap_or("the predicate")
        )
    }

    /// Render the already-evaluated subject for the message's actual half.
    ///
    /// The expression is memoized by the time this runs, so this replays
    /// the cached outcome rather than re-running the producer.
    fn rendered_actual(&self) -> String {
        match self.expression.evaluate() {
            Ok(Some(value)) => format!("<{value:?}>"),
            Ok(None) => NIL_MARKER.to_string(),
            Err(failure) => format!("<{failure}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{be_falsy, be_true, be_truthy, equal};
    use crate::predicate::Predicate;
    use crate::result::Satisfiability;

    #[test]
    fn test_to_passes_on_match() {
        expect(true).to(be_true());
        expect(1i64).to(be_truthy());
    }

    #[test]
    fn test_to_not_passes_on_non_match() {
        expect(0i64).to_not(be_truthy());
        expect(3).to_not(equal(4));
    }

    #[test]
    #[should_panic(expected = "assertion failed: expected to be truthy, got <0>")]
    fn test_to_panics_with_rendered_message() {
        expect(0i64).to(be_truthy());
    }

    #[test]
    #[should_panic(expected = "assertion failed: expected not to be falsy, got <0>")]
    fn test_to_not_panics_with_negated_rendering() {
        expect(0i64).to_not(be_falsy());
    }

    #[test]
    #[should_panic(expected = "assertion failed: expected to be true, got <nil>")]
    fn test_absent_subject_fails_strict_matcher() {
        expect_absent::<bool>().to(be_true());
    }

    #[test]
    #[should_panic(expected = "assertion failed abnormally")]
    fn test_abnormal_failure_is_not_downgraded() {
        expect_lazy::<i64>(|| Err(anyhow::anyhow!("boom"))).to(be_truthy());
    }

    #[test]
    #[should_panic(expected = "assertion inconclusive")]
    fn test_inconclusive_is_reported_distinctly() {
        let neutral = Predicate::<i64>::simple_nilable("be positive", |expression| {
            Ok(match expression.evaluate()? {
                Some(value) => Satisfiability::from_bool(value > 0),
                None => Satisfiability::Inconclusive,
            })
        });
        expect_absent::<i64>().to(neutral);
    }

    #[test]
    fn test_evaluate_surfaces_failures() {
        let expectation = expect_lazy::<i64>(|| Err(anyhow::anyhow!("boom")));
        let failure = expectation.evaluate(&be_truthy()).unwrap_err();
        assert!(failure.to_string().contains("boom"));
    }
}
