//! Lazy, memoized access to the subject under test.
//!
//! An [`Expression`] defers producing the "actual" value until a predicate
//! asks for it, and guarantees the producer runs at most once per assertion.
//! Absence of a value (`None`) is a legitimate outcome; a producer that
//! faults yields an [`EvalError`] which is cached and replayed the same way
//! a value would be.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Abnormal failure raised by a subject producer.
///
/// This is distinct from an absent subject: absence is a normal outcome
/// (`Ok(None)`), while an `EvalError` means the producer itself could not
/// determine a value or absence. Predicates propagate these unmodified and
/// never downgrade them to a non-match.
///
/// The error is cheap to clone so a memoized failure can be handed out on
/// every repeated access within the same assertion.
#[derive(Debug, Clone, thiserror::Error)]
#[error("subject evaluation failed: {0}")]
pub struct EvalError(Rc<anyhow::Error>);

impl EvalError {
    /// Wrap a producer failure.
    pub fn new(source: anyhow::Error) -> Self {
        Self(Rc::new(source))
    }
}

impl From<anyhow::Error> for EvalError {
    fn from(source: anyhow::Error) -> Self {
        Self::new(source)
    }
}

type Producer<T> = Box<dyn FnOnce() -> Result<Option<T>, EvalError>>;

enum State<T> {
    Deferred(Producer<T>),
    Memoized(Result<Option<T>, EvalError>),
}

/// A lazily-evaluated handle to the subject of an assertion.
///
/// The wrapped producer runs at most once regardless of how many predicates
/// or combinators inspect the expression; the outcome (value, absence, or
/// failure) is cached for the lifetime of the instance.
///
/// Expressions use interior mutability and assume exclusive, sequential
/// access: they are not `Sync`, and a parallel harness must give each
/// assertion its own expression.
///
/// # Example
///
/// ```rust
/// use veracity::Expression;
///
/// let expression = Expression::from_value(42);
/// assert_eq!(expression.evaluate().unwrap(), Some(42));
/// ```
pub struct Expression<T> {
    state: RefCell<State<T>>,
}

impl<T: Clone + 'static> Expression<T> {
    /// Create an expression from a deferred producer.
    ///
    /// The producer may yield a value, report absence with `Ok(None)`, or
    /// fail with an [`EvalError`]. It runs on the first `evaluate` call.
    pub fn new(producer: impl FnOnce() -> Result<Option<T>, EvalError> + 'static) -> Self {
        Self {
            state: RefCell::new(State::Deferred(Box::new(producer))),
        }
    }

    /// Create an expression from a deferred, fallible producer.
    ///
    /// Convenience over [`Expression::new`] for producers reporting failures
    /// as `anyhow` errors.
    pub fn lazy(producer: impl FnOnce() -> anyhow::Result<Option<T>> + 'static) -> Self {
        Self::new(move || producer().map_err(EvalError::new))
    }

    /// Create an already-evaluated expression holding `value`.
    pub fn from_value(value: T) -> Self {
        Self {
            state: RefCell::new(State::Memoized(Ok(Some(value)))),
        }
    }

    /// Create an already-evaluated expression with an absent subject.
    pub fn absent() -> Self {
        Self {
            state: RefCell::new(State::Memoized(Ok(None))),
        }
    }

    /// Evaluate the subject, running the producer at most once.
    ///
    /// Repeated calls replay the cached outcome, including a cached failure.
    pub fn evaluate(&self) -> Result<Option<T>, EvalError> {
        let mut state = self.state.borrow_mut();
        if matches!(*state, State::Deferred(_)) {
            // The placeholder is overwritten before the borrow is released.
            let deferred = std::mem::replace(&mut *state, State::Memoized(Ok(None)));
            let State::Deferred(producer) = deferred else {
                unreachable!()
            };
            *state = State::Memoized(producer());
        }
        match &*state {
            State::Memoized(outcome) => outcome.clone(),
            State::Deferred(_) => unreachable!(),
        }
    }

    /// Adapt this expression to another subject type.
    ///
    /// The mapping sees the evaluated outcome (value or absence) and decides
    /// what the adapted subject is; the underlying producer still runs at
    /// most once. A producer failure short-circuits past the mapping.
    pub fn cast<U: Clone + 'static>(
        self,
        adapt: impl Fn(Option<T>) -> Option<U> + 'static,
    ) -> Expression<U> {
        Expression::new(move || Ok(adapt(self.evaluate()?)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            State::Deferred(_) => write!(f, "Expression(deferred)"),
            State::Memoized(Ok(Some(value))) => write!(f, "Expression({value:?})"),
            State::Memoized(Ok(None)) => write!(f, "Expression(<nil>)"),
            State::Memoized(Err(failure)) => write!(f, "Expression(failed: {failure})"),
        }
    }
}
