//! Boolean and numeric truthiness matchers.
//!
//! `be_truthy`/`be_falsy` are generic over the closed set of primitive
//! types constructible from a boolean literal; `be_true`/`be_false` are
//! strict `bool`-only predicates that never match an absent subject.

use std::fmt;

use crate::matchers::equal;
use crate::predicate::{NilPolicy, Predicate};
use crate::result::{ExpectationMessage, Satisfiability};

/// A primitive type constructible from a boolean literal.
///
/// The set of implementations is the fixed conversion table below: `bool`,
/// the fixed- and pointer-width integers, `f32` and `f64`. A type outside
/// this set cannot use [`be_truthy`]/[`be_falsy`] without implementing the
/// same literal construction.
///
/// `as_bool` is the value's own runtime boolean reading. Only `bool`
/// carries one; the numeric types return `None`, and the truthiness check
/// falls back to direct equality against the manufactured literal.
pub trait BooleanRepresentable: PartialEq + Clone + fmt::Debug + 'static {
    /// Manufacture this type's rendition of a boolean literal.
    fn from_bool(value: bool) -> Self;

    /// The value's intrinsic boolean reading, when the type has one.
    fn as_bool(&self) -> Option<bool> {
        None
    }
}

impl BooleanRepresentable for bool {
    fn from_bool(value: bool) -> Self {
        value
    }

    fn as_bool(&self) -> Option<bool> {
        Some(*self)
    }
}

macro_rules! boolean_representable_int {
    ($($int:ty),* $(,)?) => {$(
        impl BooleanRepresentable for $int {
            fn from_bool(value: bool) -> Self {
                if value { 1 } else { 0 }
            }
        }
    )*};
}

macro_rules! boolean_representable_float {
    ($($float:ty),* $(,)?) => {$(
        impl BooleanRepresentable for $float {
            fn from_bool(value: bool) -> Self {
                if value { 1.0 } else { 0.0 }
            }
        }
    )*};
}

boolean_representable_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);
boolean_representable_float!(f32, f64);

fn truthiness<T: BooleanRepresentable>(value: &T, literal: bool) -> bool {
    match value.as_bool() {
        Some(reading) => reading == literal,
        None => *value == T::from_bool(literal),
    }
}

/// A predicate that succeeds when the actual value is not logically false.
///
/// An absent subject does not match.
pub fn be_truthy<T: BooleanRepresentable>() -> Predicate<T> {
    Predicate::simple_nilable("be truthy", |expression| {
        Ok(match expression.evaluate()? {
            Some(value) => Satisfiability::from_bool(truthiness(&value, true)),
            None => Satisfiability::DoesNotMatch,
        })
    })
}

/// A predicate that succeeds when the actual value is logically false.
///
/// An absent subject matches.
pub fn be_falsy<T: BooleanRepresentable>() -> Predicate<T> {
    Predicate::simple_nilable("be falsy", |expression| {
        Ok(match expression.evaluate()? {
            Some(value) => Satisfiability::from_bool(truthiness(&value, false)),
            None => Satisfiability::Matches,
        })
    })
    .with_nil_policy(NilPolicy::MatchesOnNil)
}

fn rename<T: Clone + 'static>(
    matcher: Predicate<T>,
    failure_message: ExpectationMessage,
) -> Predicate<T> {
    matcher.renamed(failure_message).require_non_nil()
}

/// A predicate that succeeds when the actual value is exactly `true`.
///
/// This predicate will not match an absent subject.
pub fn be_true() -> Predicate<bool> {
    rename(
        equal(true),
        ExpectationMessage::expected_actual_value_to("be true"),
    )
}

/// A predicate that succeeds when the actual value is exactly `false`.
///
/// This predicate will not match an absent subject, unlike [`be_falsy`].
pub fn be_false() -> Predicate<bool> {
    rename(
        equal(false),
        ExpectationMessage::expected_actual_value_to("be false"),
    )
}
