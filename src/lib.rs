//! # veracity
//!
//! A composable predicate engine for expressive test assertions.
//!
//! Callers wrap a subject in a lazily-evaluated [`Expression`], apply a
//! named [`Predicate`] to it, and receive a [`PredicateResult`]: a
//! tri-state status (matched, did not match, inconclusive on an absent
//! subject) plus a structured message rendered to text only when a result
//! needs reporting.
//!
//! ## Quick Start
//!
//! ```rust
//! use veracity::{be_falsy, be_truthy, expect, expect_absent};
//!
//! expect(1i64).to(be_truthy());
//! expect(0i64).to(be_falsy());
//!
//! // Absence is a legitimate subject: falsy matchers accept it,
//! // truthy matchers do not.
//! expect_absent::<i64>().to(be_falsy());
//! expect_absent::<i64>().to_not(be_truthy());
//! ```
//!
//! ## Structured Results
//!
//! ```rust
//! use veracity::{be_an_instance_of, DynValue, Expression};
//!
//! let subject = Expression::from_value(DynValue::new(42i64));
//! let result = be_an_instance_of::<String>().matches(&subject).unwrap();
//!
//! assert!(!result.is_match());
//! assert_eq!(
//!     result.message.render(None),
//!     "expected to be an instance of String, got <i64 instance>"
//! );
//! ```
//!
//! ## Custom Matchers
//!
//! Concrete matchers are built through exactly two entry points:
//! [`Predicate::define`] for matchers that construct their own result, and
//! [`Predicate::simple_nilable`] for boolean-like matchers where absence
//! is itself meaningful.
//!
//! ```rust
//! use veracity::{expect, Predicate, Satisfiability};
//!
//! fn be_even() -> Predicate<i64> {
//!     Predicate::simple_nilable("be even", |expression| {
//!         Ok(match expression.evaluate()? {
//!             Some(value) => Satisfiability::from_bool(value % 2 == 0),
//!             None => Satisfiability::Inconclusive,
//!         })
//!     })
//! }
//!
//! expect(4i64).to(be_even());
//! ```

pub mod expect;
pub mod expression;
pub mod matchers;
pub mod output;
pub mod predicate;
pub mod result;

// Core engine
pub use expression::{EvalError, Expression};
pub use predicate::{NilPolicy, Predicate};
pub use result::{
    ExpectationMessage, PredicateResult, PredicateStatus, Satisfiability, NIL_MARKER,
};

// Concrete matchers
pub use matchers::{
    be_a_member_of, be_an_instance_of, be_false, be_falsy, be_true, be_truthy, equal,
    BooleanRepresentable, Class, ClassMember, DynValue,
};

// Fluent entry point
pub use expect::{expect, expect_absent, expect_lazy, Expectation};

// Output formatting
pub use output::{OutputConfig, OutputMode, ResultFormatter};
