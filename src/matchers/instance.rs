//! Exact runtime-type matchers over type-erased subjects.
//!
//! Two variants, both with exact-match semantics:
//!
//! - [`be_an_instance_of`] compares the dynamic [`TypeId`] of a
//!   [`DynValue`] against the expected type;
//! - [`be_a_member_of`] checks direct membership in an explicit [`Class`],
//!   for trait-object subjects whose static type erases the concrete class.
//!
//! Neither matches an absent subject, and the observed value renders as
//! `<TypeName instance>` or `<nil>`.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::rc::Rc;

use crate::predicate::Predicate;
use crate::result::{ExpectationMessage, PredicateResult, PredicateStatus, NIL_MARKER};

/// Strip the module path from a type name, keeping generic arguments.
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.find('<').map_or(full, |generics| &full[..generics]);
    match head.rfind("::") {
        Some(separator) => &full[separator + 2..],
        None => full,
    }
}

/// A type-erased subject carrying its concrete runtime type.
///
/// The type name is captured at construction so the matcher can render
/// `<TypeName instance>` without reflection at report time.
///
/// # Example
///
/// ```rust
/// use veracity::DynValue;
///
/// let subject = DynValue::new("hello".to_string());
/// assert!(subject.is_instance_of::<String>());
/// assert_eq!(subject.type_name(), "String");
/// ```
#[derive(Clone)]
pub struct DynValue {
    value: Rc<dyn Any>,
    type_name: &'static str,
}

impl DynValue {
    /// Erase `value`, remembering its concrete type.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Rc::new(value),
            type_name: short_type_name(type_name::<T>()),
        }
    }

    /// The concrete runtime type of the wrapped value.
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// The short name of the concrete runtime type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the wrapped value is exactly a `T`.
    pub fn is_instance_of<T: Any>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// Borrow the wrapped value as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} instance>", self.type_name)
    }
}

/// A predicate that succeeds when the actual value is an _exact_ instance
/// of `Expected`.
///
/// The comparison is runtime-type identity: a value of some other type is
/// never a match, even if it converts or derefs to `Expected`.
pub fn be_an_instance_of<Expected: Any>() -> Predicate<DynValue> {
    let description = format!("be an instance of {}", short_type_name(type_name::<Expected>()));
    Predicate::define(description.clone(), move |expression| {
        let Some(instance): Option<DynValue> = expression.evaluate()? else {
            return Ok(PredicateResult::new(
                PredicateStatus::DoesNotMatch,
                ExpectationMessage::expected_actual_value_to(description.clone()),
            ));
        };

        let actual = format!("<{} instance>", instance.type_name());

        Ok(PredicateResult::new(
            PredicateStatus::from_bool(instance.is_instance_of::<Expected>()),
            ExpectationMessage::expected_custom_value_to(description.clone(), actual),
        ))
    })
}

/// Runtime class descriptor for subjects participating in an explicit
/// class hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Class {
    name: &'static str,
    id: TypeId,
}

impl Class {
    /// The class descriptor of a concrete type.
    pub fn of<T: Any>() -> Self {
        Self {
            name: short_type_name(type_name::<T>()),
            id: TypeId::of::<T>(),
        }
    }

    /// The short class name, as rendered in messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A value that reports the class it is a direct member of.
///
/// Types that do not declare an explicit hierarchy implement this as
/// `Class::of::<Self>()`, which reduces membership to the direct
/// runtime-type identity comparison used by [`be_an_instance_of`].
pub trait ClassMember: Any + fmt::Debug {
    /// The class this value is a direct member of.
    fn class(&self) -> Class;
}

/// A predicate that succeeds when the actual value is a direct, exact
/// member of `expected`, not merely assignable to it.
pub fn be_a_member_of(expected: Class) -> Predicate<Rc<dyn ClassMember>> {
    let description = format!("be an instance of {}", expected.name());
    Predicate::define(description.clone(), move |expression| {
        let instance: Option<Rc<dyn ClassMember>> = expression.evaluate()?;

        let actual = match &instance {
            Some(member) => format!("<{} instance>", member.class().name()),
            None => NIL_MARKER.to_string(),
        };
        let is_member = instance
            .as_ref()
            .is_some_and(|member| member.class() == expected);

        Ok(PredicateResult::new(
            PredicateStatus::from_bool(is_member),
            ExpectationMessage::expected_custom_value_to(description.clone(), actual),
        ))
    })
}
