//! The composable predicate unit and its combinators.
//!
//! A [`Predicate`] wraps a function from an [`Expression`] to a
//! [`PredicateResult`]. The two sanctioned construction paths are
//! [`Predicate::define`] for matchers that build their own result, and
//! [`Predicate::simple_nilable`] for matchers over boolean-like subjects
//! where absence is itself meaningful. Everything else composes from these
//! via [`Predicate::renamed`] and [`Predicate::require_non_nil`].

use std::fmt;
use std::rc::Rc;

use crate::expression::{EvalError, Expression};
use crate::result::{ExpectationMessage, PredicateResult, PredicateStatus, Satisfiability};

/// How a predicate treats an absent subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NilPolicy {
    /// An absent subject is a deterministic non-match.
    FailsOnNil,
    /// An absent subject is a deterministic match.
    MatchesOnNil,
    /// Absence handling is delegated to the predicate's own tri-state logic.
    Nilable,
}

type MatcherFn<T> = dyn Fn(&Expression<T>) -> Result<PredicateResult, EvalError>;

/// An immutable, composable rule mapping a lazily-evaluated subject to a
/// tri-state result plus message.
///
/// Predicates are value-like: cloning shares the underlying matcher, and a
/// predicate holds no subject-specific state between invocations.
///
/// # Example
///
/// ```rust
/// use veracity::{be_truthy, Expression};
///
/// let expression = Expression::from_value(1i64);
/// let result = be_truthy::<i64>().matches(&expression).unwrap();
/// assert!(result.is_match());
/// ```
pub struct Predicate<T> {
    description: String,
    matcher: Rc<MatcherFn<T>>,
    nil_policy: NilPolicy,
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            matcher: Rc::clone(&self.matcher),
            nil_policy: self.nil_policy,
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self.description)
    }
}

impl<T: Clone + 'static> Predicate<T> {
    /// Define a predicate from a description and a matcher function.
    ///
    /// The function receives the full expression, so it controls exactly
    /// when and whether evaluation happens and can special-case absence.
    /// If it does not, the contract default for exact-match-style
    /// predicates applies: an absent subject is a does-not-match whose
    /// message states the expectation verbatim.
    ///
    /// Producer failures surface through the `Result` and must be
    /// propagated with `?`, never swallowed.
    pub fn define(
        description: impl Into<String>,
        matcher: impl Fn(&Expression<T>) -> Result<PredicateResult, EvalError> + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            matcher: Rc::new(matcher),
            nil_policy: NilPolicy::FailsOnNil,
        }
    }

    /// Define a nil-tolerant predicate from a tri-state check.
    ///
    /// The check computes a [`Satisfiability`] on its own terms (absence
    /// may be a match, a non-match, or inconclusive); the builder attaches
    /// the message "expected to {description}" to whatever it returns.
    pub fn simple_nilable(
        description: impl Into<String>,
        check: impl Fn(&Expression<T>) -> Result<Satisfiability, EvalError> + 'static,
    ) -> Self {
        let description = description.into();
        let message = ExpectationMessage::expected_actual_value_to(description.clone());
        Self {
            description,
            matcher: Rc::new(move |expression| {
                Ok(PredicateResult::new(check(expression)?, message.clone()))
            }),
            nil_policy: NilPolicy::Nilable,
        }
    }

    /// Apply the predicate to an expression.
    ///
    /// This is the assertion entry point. The expression is evaluated at
    /// most once no matter how many combinator layers wrap `self`.
    pub fn matches(&self, expression: &Expression<T>) -> Result<PredicateResult, EvalError> {
        (self.matcher)(expression)
    }

    /// The human-readable description this predicate was built with.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// How this predicate treats an absent subject.
    pub fn nil_policy(&self) -> NilPolicy {
        self.nil_policy
    }

    /// Override the declared nil policy.
    ///
    /// The policy is declarative metadata for callers (bridges, reporters);
    /// it does not change the matcher's behavior.
    pub fn with_nil_policy(mut self, policy: NilPolicy) -> Self {
        self.nil_policy = policy;
        self
    }

    /// Replace the produced message while preserving the match status.
    ///
    /// Gives a specialized matcher a more specific description than the
    /// generic predicate it is built from. Apply `renamed` first and
    /// [`Predicate::require_non_nil`] second, so the nil check stays the
    /// outermost decision.
    pub fn renamed(&self, message: ExpectationMessage) -> Self {
        let description = message
            .expected_description()
            .unwrap_or(&self.description)
            .to_string();
        let inner = self.clone();
        let nil_policy = self.nil_policy;
        Self {
            description,
            matcher: Rc::new(move |expression| {
                let result = inner.matches(expression)?;
                Ok(PredicateResult::new(result.status, message.clone()))
            }),
            nil_policy,
        }
    }

    /// Force an absent subject to a deterministic does-not-match.
    ///
    /// Overrides whatever nil policy the wrapped predicate applies: the
    /// result for an absent subject is always `DoesNotMatch` with the
    /// standard "expected to ..., got `<nil>`" message. The extra
    /// `evaluate` call replays the memoized outcome, so the
    /// single-evaluation guarantee is unaffected.
    pub fn require_non_nil(&self) -> Self {
        let inner = self.clone();
        Self {
            description: self.description.clone(),
            matcher: Rc::new(move |expression| {
                let result = inner.matches(expression)?;
                if expression.evaluate()?.is_none() {
                    return Ok(PredicateResult::new(
                        PredicateStatus::DoesNotMatch,
                        result.message.with_nil_marker(),
                    ));
                }
                Ok(result)
            }),
            nil_policy: NilPolicy::FailsOnNil,
        }
    }
}
