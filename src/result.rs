//! The tri-state outcome of applying a predicate, and the message model
//! that turns a failed predicate into readable text.
//!
//! Messages hold already-rendered strings only; constructing or rendering a
//! message never evaluates the subject and never fails.

use serde::Serialize;

/// Literal marker used whenever an absent subject is rendered.
pub const NIL_MARKER: &str = "<nil>";

/// Outcome of applying a predicate to a subject.
///
/// `Inconclusive` is reserved for nil-tolerant predicates whose semantics
/// declare an absent subject as neither a pass nor a fail. Callers deciding
/// whether to report a failure must treat it distinctly from
/// `DoesNotMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateStatus {
    /// The subject satisfies the predicate.
    Matches,
    /// The subject does not satisfy the predicate.
    DoesNotMatch,
    /// The subject is absent and the predicate declares absence neutral.
    Inconclusive,
}

/// Tri-state satisfiability computed by nil-tolerant predicate closures.
///
/// Same value space as [`PredicateStatus`]; the alias marks the spot where
/// a matcher computes its own absence handling instead of inheriting the
/// exact-match default.
pub type Satisfiability = PredicateStatus;

impl PredicateStatus {
    /// Map a boolean check onto the two deterministic states.
    pub fn from_bool(matches: bool) -> Self {
        if matches {
            PredicateStatus::Matches
        } else {
            PredicateStatus::DoesNotMatch
        }
    }

    /// Whether this status is a match.
    pub fn is_match(self) -> bool {
        matches!(self, PredicateStatus::Matches)
    }

    /// Status under negated composition.
    ///
    /// Swaps the deterministic states; `Inconclusive` is a fixed point,
    /// since an absence-neutral outcome is neutral either way.
    pub fn negated(self) -> Self {
        match self {
            PredicateStatus::Matches => PredicateStatus::DoesNotMatch,
            PredicateStatus::DoesNotMatch => PredicateStatus::Matches,
            PredicateStatus::Inconclusive => PredicateStatus::Inconclusive,
        }
    }
}

/// A structured, composable description of what was expected and observed.
///
/// Variants carry already-rendered strings. For
/// `ExpectedActualValueTo` the actual half is supplied at render time by
/// whoever owns the evaluated subject; the message itself never evaluates
/// anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectationMessage {
    /// Verbatim text, rendered as-is.
    Plain { text: String },
    /// "expected to {description}"; the actual half is filled in by the
    /// renderer from the evaluated subject.
    ExpectedActualValueTo { description: String },
    /// "expected to {description}, got {actual}" with both halves fixed.
    ExpectedCustomValueTo { description: String, actual: String },
}

impl ExpectationMessage {
    /// Verbatim message text.
    pub fn plain(text: impl Into<String>) -> Self {
        ExpectationMessage::Plain { text: text.into() }
    }

    /// Expectation whose actual half is rendered from the evaluated subject.
    pub fn expected_actual_value_to(description: impl Into<String>) -> Self {
        ExpectationMessage::ExpectedActualValueTo {
            description: description.into(),
        }
    }

    /// Expectation with a caller-supplied rendering of the actual value.
    pub fn expected_custom_value_to(
        description: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        ExpectationMessage::ExpectedCustomValueTo {
            description: description.into(),
            actual: actual.into(),
        }
    }

    /// The "expected" half of the message, when there is one.
    pub fn expected_description(&self) -> Option<&str> {
        match self {
            ExpectationMessage::Plain { .. } => None,
            ExpectationMessage::ExpectedActualValueTo { description }
            | ExpectationMessage::ExpectedCustomValueTo { description, .. } => Some(description),
        }
    }

    /// Render the message to text.
    ///
    /// `actual` is the already-rendered subject, used only by the
    /// `ExpectedActualValueTo` variant. Rendering is pure and total.
    pub fn render(&self, actual: Option<&str>) -> String {
        self.render_expectation(false, actual)
    }

    /// Render the message for a negated assertion ("expected not to ...").
    pub fn render_negated(&self, actual: Option<&str>) -> String {
        self.render_expectation(true, actual)
    }

    fn render_expectation(&self, negated: bool, actual: Option<&str>) -> String {
        let prefix = if negated { "expected not to" } else { "expected to" };
        match self {
            ExpectationMessage::Plain { text } => text.clone(),
            ExpectationMessage::ExpectedActualValueTo { description } => match actual {
                Some(actual) => format!("{prefix} {description}, got {actual}"),
                None => format!("{prefix} {description}"),
            },
            ExpectationMessage::ExpectedCustomValueTo {
                description,
                actual,
            } => format!("{prefix} {description}, got {actual}"),
        }
    }

    /// Force the actual half to the absence marker.
    ///
    /// Used by `require_non_nil` to produce the standard
    /// "expected to ..., got `<nil>`" text whatever the inner message was.
    pub fn with_nil_marker(&self) -> Self {
        match self {
            ExpectationMessage::Plain { text } => ExpectationMessage::Plain {
                text: format!("{text}, got {NIL_MARKER}"),
            },
            ExpectationMessage::ExpectedActualValueTo { description }
            | ExpectationMessage::ExpectedCustomValueTo { description, .. } => {
                ExpectationMessage::ExpectedCustomValueTo {
                    description: description.clone(),
                    actual: NIL_MARKER.to_string(),
                }
            }
        }
    }
}

/// A predicate outcome: status plus the message describing it.
///
/// A `Matches` status carrying a failure-oriented message is meaningful:
/// negated composition inverts the status while reusing the message
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateResult {
    pub status: PredicateStatus,
    pub message: ExpectationMessage,
}

impl PredicateResult {
    /// Pair a status with its message.
    pub fn new(status: PredicateStatus, message: ExpectationMessage) -> Self {
        Self { status, message }
    }

    /// Build a result from a boolean check.
    pub fn from_bool(matches: bool, message: ExpectationMessage) -> Self {
        Self::new(PredicateStatus::from_bool(matches), message)
    }

    /// Whether the predicate matched.
    pub fn is_match(&self) -> bool {
        self.status.is_match()
    }

    /// The result under negated composition: status inverted, message kept.
    pub fn negated(self) -> Self {
        Self {
            status: self.status.negated(),
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_bool() {
        assert_eq!(PredicateStatus::from_bool(true), PredicateStatus::Matches);
        assert_eq!(
            PredicateStatus::from_bool(false),
            PredicateStatus::DoesNotMatch
        );
    }

    #[test]
    fn test_status_negation() {
        assert_eq!(
            PredicateStatus::Matches.negated(),
            PredicateStatus::DoesNotMatch
        );
        assert_eq!(
            PredicateStatus::DoesNotMatch.negated(),
            PredicateStatus::Matches
        );
        assert_eq!(
            PredicateStatus::Inconclusive.negated(),
            PredicateStatus::Inconclusive
        );
    }

    #[test]
    fn test_render_expected_actual() {
        let message = ExpectationMessage::expected_actual_value_to("be truthy");
        assert_eq!(message.render(Some("<0>")), "expected to be truthy, got <0>");
        assert_eq!(message.render(None), "expected to be truthy");
    }

    #[test]
    fn test_render_custom_actual_ignores_supplied_actual() {
        let message =
            ExpectationMessage::expected_custom_value_to("be an instance of String", "<i64 instance>");
        assert_eq!(
            message.render(Some("<42>")),
            "expected to be an instance of String, got <i64 instance>"
        );
    }

    #[test]
    fn test_render_negated() {
        let message = ExpectationMessage::expected_actual_value_to("be truthy");
        assert_eq!(
            message.render_negated(Some("<1>")),
            "expected not to be truthy, got <1>"
        );
    }

    #[test]
    fn test_nil_marker_overrides_actual() {
        let message = ExpectationMessage::expected_actual_value_to("be true");
        assert_eq!(
            message.with_nil_marker().render(Some("<ignored>")),
            "expected to be true, got <nil>"
        );
    }

    #[test]
    fn test_negated_result_keeps_message() {
        let message = ExpectationMessage::expected_actual_value_to("be falsy");
        let result = PredicateResult::new(PredicateStatus::Matches, message.clone());
        let negated = result.negated();
        assert_eq!(negated.status, PredicateStatus::DoesNotMatch);
        assert_eq!(negated.message, message);
    }

    #[test]
    fn test_result_serialization() {
        let result = PredicateResult::new(
            PredicateStatus::DoesNotMatch,
            ExpectationMessage::expected_custom_value_to("be true", NIL_MARKER),
        );
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "status": "does_not_match",
                "message": {
                    "kind": "expected_custom_value_to",
                    "description": "be true",
                    "actual": "<nil>",
                },
            })
        );
    }
}
