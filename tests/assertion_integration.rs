//! End-to-end tests of the public assertion surface.

use std::cell::Cell;
use std::rc::Rc;

use veracity::{
    be_a_member_of, be_an_instance_of, be_false, be_falsy, be_true, be_truthy, equal, expect,
    expect_absent, expect_lazy, Class, ClassMember, DynValue, ExpectationMessage, Expression,
    OutputConfig, OutputMode, PredicateStatus, ResultFormatter,
};

#[derive(Debug)]
struct Dog;

#[derive(Debug)]
struct Puppy;

impl ClassMember for Dog {
    fn class(&self) -> Class {
        Class::of::<Dog>()
    }
}

impl ClassMember for Puppy {
    fn class(&self) -> Class {
        Class::of::<Puppy>()
    }
}

#[test]
fn test_single_evaluation_through_the_full_stack() {
    let counter = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&counter);

    let expectation = expect_lazy(move || {
        seen.set(seen.get() + 1);
        Ok(Some(true))
    });

    // equal -> renamed -> require_non_nil, invoked through the fluent
    // surface which also renders the actual value: still one producer run.
    let result = expectation.evaluate(&be_true()).unwrap();
    assert!(result.is_match());
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_truthy_falsy_absence_asymmetry() {
    expect_absent::<i64>().to(be_falsy());
    expect_absent::<i64>().to_not(be_truthy());

    let absent: Expression<bool> = Expression::absent();
    let strict = be_false().matches(&absent).unwrap();
    assert_eq!(strict.status, PredicateStatus::DoesNotMatch);
}

#[test]
fn test_numeric_truthiness_across_widths() {
    expect(1u8).to(be_truthy());
    expect(1i16).to(be_truthy());
    expect(1u32).to(be_truthy());
    expect(1i64).to(be_truthy());
    expect(1.0f64).to(be_truthy());

    expect(0u8).to(be_falsy());
    expect(0i16).to(be_falsy());
    expect(0u32).to(be_falsy());
    expect(0i64).to(be_falsy());
    expect(0.0f64).to(be_falsy());

    expect(0i64).to_not(be_truthy());
}

#[test]
fn test_rename_then_require_non_nil_strictness() {
    let strict = equal(true)
        .renamed(ExpectationMessage::expected_actual_value_to("be true"))
        .require_non_nil();

    let result = strict.matches(&Expression::absent()).unwrap();
    assert_eq!(result.status, PredicateStatus::DoesNotMatch);
    assert_eq!(result.message.render(None), "expected to be true, got <nil>");
}

#[test]
fn test_instance_matchers_end_to_end() {
    expect(DynValue::new("hello".to_string())).to(be_an_instance_of::<String>());
    expect(DynValue::new(42i64)).to_not(be_an_instance_of::<String>());
    expect(DynValue::new(Puppy)).to_not(be_an_instance_of::<Dog>());

    let member: Rc<dyn ClassMember> = Rc::new(Dog);
    expect(member).to(be_a_member_of(Class::of::<Dog>()));
}

#[test]
#[should_panic(expected = "assertion failed: expected to be an instance of String, got <i64 instance>")]
fn test_instance_mismatch_message() {
    expect(DynValue::new(42i64)).to(be_an_instance_of::<String>());
}

#[test]
fn test_failed_assertion_formats_for_terminal() {
    let expectation = expect(0i64);
    let result = expectation.evaluate(&be_truthy()).unwrap();
    assert!(!result.is_match());

    let formatter = ResultFormatter::new(
        OutputConfig::new().messages(OutputMode::OnFailure).colors(false),
    );
    assert_eq!(
        formatter.format_result(&result, Some("<0>")),
        "✗ no match\n  expected to be truthy, got <0>"
    );
}

#[test]
fn test_results_serialize_for_harnesses() {
    let result = be_truthy::<i64>()
        .matches(&Expression::from_value(0i64))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "status": "does_not_match",
            "message": { "kind": "expected_actual_value_to", "description": "be truthy" },
        })
    );
}
