//! Dynamic functions: invocation, partial application and composition.

use std::any::{Any, type_name};
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::Value;
use crate::error::InvokeError;

/// Argument count that fits without a heap allocation when forwarding.
const INLINE_ARGUMENTS: usize = 4;

type Arguments = SmallVec<[Value; INLINE_ARGUMENTS]>;
type Body = dyn Fn(&[Value]) -> Result<Value, InvokeError>;

/// A named function of fixed arity over type-erased [`Value`]s.
///
/// Wrap it in a [`Value`] (via `Value::from`) to make it invocable through
/// [`invoke`].
///
/// # Examples
///
/// ```rust
/// use lazylist::dynamic::{Function, Value};
///
/// let square = Function::unary("square", |x: &i64| x * x);
/// assert_eq!(square.arity(), 1);
///
/// let result = square.call(&[Value::new(9_i64)])?;
/// assert_eq!(result.extract::<i64>()?, 81);
/// # Ok::<(), lazylist::error::InvokeError>(())
/// ```
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    arity: usize,
    body: Rc<Body>,
}

impl Function {
    /// Creates a function from a body over raw argument slices.
    ///
    /// The body is only called with exactly `arity` arguments.
    pub fn from_fn<F>(name: impl Into<Rc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InvokeError> + 'static,
    {
        Self {
            name: name.into(),
            arity,
            body: Rc::new(body),
        }
    }

    /// Lifts a typed one-argument function.
    pub fn unary<A, R, F>(name: impl Into<Rc<str>>, function: F) -> Self
    where
        A: Any,
        R: Any,
        F: Fn(&A) -> R + 'static,
    {
        let name = name.into();
        let label = Rc::clone(&name);
        Self::from_fn(name, 1, move |arguments| {
            let argument = argument::<A>(&label, arguments, 0)?;
            Ok(Value::new(function(argument)))
        })
    }

    /// Lifts a typed two-argument function.
    pub fn binary<A, B, R, F>(name: impl Into<Rc<str>>, function: F) -> Self
    where
        A: Any,
        B: Any,
        R: Any,
        F: Fn(&A, &B) -> R + 'static,
    {
        let name = name.into();
        let label = Rc::clone(&name);
        Self::from_fn(name, 2, move |arguments| {
            let first = argument::<A>(&label, arguments, 0)?;
            let second = argument::<B>(&label, arguments, 1)?;
            Ok(Value::new(function(first, second)))
        })
    }

    /// The function's name, used in error messages.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of arguments the function takes.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::ArityMismatch`] if `arguments` has the wrong
    /// length, or whatever error the body reports (typically
    /// [`InvokeError::ArgumentType`]).
    pub fn call(&self, arguments: &[Value]) -> Result<Value, InvokeError> {
        let result = if arguments.len() == self.arity {
            (self.body)(arguments)
        } else {
            Err(InvokeError::ArityMismatch {
                function: self.name.to_string(),
                expected: self.arity,
                actual: arguments.len(),
            })
        };
        result.inspect_err(|error| {
            tracing::debug!(function = %self.name, %error, "dynamic invocation failed");
        })
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

fn argument<'a, A: Any>(
    function: &str,
    arguments: &'a [Value],
    position: usize,
) -> Result<&'a A, InvokeError> {
    let value = arguments
        .get(position)
        .ok_or_else(|| InvokeError::ArityMismatch {
            function: function.to_string(),
            expected: position + 1,
            actual: arguments.len(),
        })?;
    value
        .downcast_ref::<A>()
        .ok_or_else(|| InvokeError::ArgumentType {
            function: function.to_string(),
            position,
            expected: type_name::<A>(),
            actual: value.type_name(),
        })
}

pub(super) fn resolve(value: &Value) -> Result<&Function, InvokeError> {
    value.as_function().ok_or_else(|| {
        tracing::debug!(type_name = value.type_name(), "value is not invocable");
        InvokeError::NotInvocable {
            type_name: value.type_name(),
        }
    })
}

/// Calls a type-erased function value with type-erased arguments.
///
/// # Errors
///
/// - [`InvokeError::NotInvocable`] if `function` does not hold a [`Function`]
/// - [`InvokeError::ArityMismatch`] if the argument count is wrong
/// - [`InvokeError::ArgumentType`] if an argument has the wrong type
///
/// # Examples
///
/// ```rust
/// use lazylist::dynamic::{Value, invoke};
/// use lazylist::error::InvokeError;
///
/// let error = invoke(&Value::new(5), &[]).unwrap_err();
/// assert!(matches!(error, InvokeError::NotInvocable { .. }));
/// ```
pub fn invoke(function: &Value, arguments: &[Value]) -> Result<Value, InvokeError> {
    resolve(function)?.call(arguments)
}

/// Partially applies `function` to leading `bound` arguments.
///
/// The returned function takes the remaining arguments; calling it calls
/// `function` with the bound arguments first, then the new ones.
///
/// # Errors
///
/// - [`InvokeError::NotInvocable`] if `function` does not hold a [`Function`]
/// - [`InvokeError::ArityMismatch`] if more arguments are bound than the
///   function takes
///
/// # Examples
///
/// ```rust
/// use lazylist::dynamic::{Function, Value, apply};
///
/// let add = Value::from(Function::binary("add", |x: &i32, y: &i32| x + y));
/// let increment = apply(&add, &[Value::new(1)])?;
///
/// assert_eq!(increment.arity(), 1);
/// assert_eq!(increment.call(&[Value::new(10)])?.extract::<i32>()?, 11);
/// # Ok::<(), lazylist::error::InvokeError>(())
/// ```
pub fn apply(function: &Value, bound: &[Value]) -> Result<Function, InvokeError> {
    let target = resolve(function)?.clone();
    if bound.len() > target.arity {
        return Err(InvokeError::ArityMismatch {
            function: target.name.to_string(),
            expected: target.arity,
            actual: bound.len(),
        });
    }

    let name = format!("apply({})", target.name);
    let arity = target.arity - bound.len();
    let bound: Arguments = bound.iter().cloned().collect();
    Ok(Function::from_fn(name, arity, move |rest| {
        let mut arguments = bound.clone();
        arguments.extend(rest.iter().cloned());
        target.call(&arguments)
    }))
}

/// Composes two function values: `compose(outer, inner)(args) == outer(inner(args))`.
///
/// The result has the arity of `inner`; `outer` must take one argument.
///
/// # Errors
///
/// - [`InvokeError::NotInvocable`] if either value does not hold a [`Function`]
/// - [`InvokeError::ArityMismatch`] if `outer` does not take exactly one argument
///
/// # Examples
///
/// ```rust
/// use lazylist::dynamic::{Function, Value, compose};
///
/// let add = Value::from(Function::binary("add", |a: &i32, b: &i32| a + b));
/// let square = Value::from(Function::unary("square", |x: &i32| x * x));
///
/// let square_sum = compose(&square, &add)?;
/// let result = square_sum.call(&[Value::new(3), Value::new(3)])?;
/// assert_eq!(result.extract::<i32>()?, 36);
/// # Ok::<(), lazylist::error::InvokeError>(())
/// ```
pub fn compose(outer: &Value, inner: &Value) -> Result<Function, InvokeError> {
    let outer = resolve(outer)?.clone();
    let inner = resolve(inner)?.clone();
    if outer.arity != 1 {
        return Err(InvokeError::ArityMismatch {
            function: outer.name.to_string(),
            expected: outer.arity,
            actual: 1,
        });
    }

    let name = format!("compose({}, {})", outer.name, inner.name);
    let arity = inner.arity;
    Ok(Function::from_fn(name, arity, move |arguments| {
        let intermediate = inner.call(arguments)?;
        outer.call(&[intermediate])
    }))
}
