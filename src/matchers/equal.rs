//! Exact equality against an expected value.

use std::fmt;

use crate::predicate::Predicate;
use crate::result::{ExpectationMessage, PredicateResult, PredicateStatus, NIL_MARKER};

/// A predicate that succeeds when the actual value equals `expected`.
///
/// An absent subject is a does-not-match rendered with the absence marker.
pub fn equal<T>(expected: T) -> Predicate<T>
where
    T: PartialEq + fmt::Debug + Clone + 'static,
{
    let description = format!("equal <{expected:?}>");
    Predicate::define(description.clone(), move |expression| {
        let result = match expression.evaluate()? {
            Some(actual) => PredicateResult::new(
                PredicateStatus::from_bool(actual == expected),
                ExpectationMessage::expected_custom_value_to(
                    description.clone(),
                    format!("<{actual:?}>"),
                ),
            ),
            None => PredicateResult::new(
                PredicateStatus::DoesNotMatch,
                ExpectationMessage::expected_custom_value_to(description.clone(), NIL_MARKER),
            ),
        };
        Ok(result)
    })
}
