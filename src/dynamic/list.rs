//! Dynamically typed entry points for `LazyList<Value>`.

use super::function::resolve;
use super::{Function, Value};
use crate::error::{InvokeError, ListError};
use crate::list::LazyList;

fn with_arity(function: &Value, arity: usize) -> Result<Function, InvokeError> {
    let function = resolve(function)?;
    if function.arity() == arity {
        Ok(function.clone())
    } else {
        Err(InvokeError::ArityMismatch {
            function: function.name().to_string(),
            expected: function.arity(),
            actual: arity,
        })
    }
}

impl LazyList<Value> {
    /// Builds a list from a type-erased sequence.
    ///
    /// The value must hold a `Vec<Value>`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] for any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::dynamic::Value;
    /// use lazylist::error::ListError;
    /// use lazylist::list::LazyList;
    ///
    /// let sequence = Value::new(vec![Value::new(1), Value::new("two")]);
    /// assert_eq!(LazyList::from_value(&sequence)?.length(), 2);
    ///
    /// let scalar = Value::new(5_i32);
    /// assert_eq!(
    ///     LazyList::from_value(&scalar).unwrap_err(),
    ///     ListError::InvalidInput { type_name: "i32" }
    /// );
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, ListError> {
        if let Some(elements) = value.downcast_ref::<Vec<Value>>() {
            return Ok(Self::from_eager_sequence(elements.as_slice()));
        }
        tracing::debug!(type_name = value.type_name(), "from_value: input is not a sequence");
        Err(ListError::InvalidInput {
            type_name: value.type_name(),
        })
    }

    /// Lazily maps a one-argument function value over the list.
    ///
    /// Whether `function` is invocable with one argument is checked up
    /// front. Argument type errors can only be detected per element, so each
    /// element of the result is the outcome of its own invocation.
    ///
    /// # Errors
    ///
    /// - [`ListError::Invoke`] with [`InvokeError::NotInvocable`] if
    ///   `function` is not a function
    /// - [`ListError::Invoke`] with [`InvokeError::ArityMismatch`] if it does
    ///   not take exactly one argument
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::dynamic::{Function, Value};
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_sequence([Value::new(2_i32), Value::new(3_i32)]);
    /// let square = Value::from(Function::unary("square", |x: &i32| x * x));
    ///
    /// let squares: Vec<i32> = list
    ///     .map_dynamic(&square)?
    ///     .iter()
    ///     .map(|result| result.and_then(|value| value.extract::<i32>()))
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(squares, vec![4, 9]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn map_dynamic(
        &self,
        function: &Value,
    ) -> Result<LazyList<Result<Value, InvokeError>>, ListError> {
        let function = with_arity(function, 1)?;
        Ok(self.map(move |element| function.call(&[element])))
    }

    /// Strict left fold with a two-argument function value.
    ///
    /// Stops at the first failed invocation. Never returns if the list is
    /// infinite.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Invoke`] if `function` is not invocable with two
    /// arguments, or if any invocation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::dynamic::{Function, Value};
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_sequence((1..=3).map(Value::new));
    /// let add = Value::from(Function::binary("add", |a: &i32, b: &i32| a + b));
    ///
    /// let total = list.reduce_dynamic(&add, Value::new(0))?;
    /// assert_eq!(total.extract::<i32>()?, 6);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reduce_dynamic(&self, function: &Value, initial: Value) -> Result<Value, ListError> {
        let function = with_arity(function, 2)?;
        Ok(self
            .iter()
            .try_fold(initial, |accumulator, element| {
                function.call(&[accumulator, element])
            })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn numbers(values: &[i32]) -> LazyList<Value> {
        LazyList::from_sequence(values.iter().copied().map(Value::new))
    }

    #[rstest]
    fn test_from_value_round_trip() {
        let sequence = Value::new(vec![Value::new(1), Value::new(2)]);
        let list = LazyList::from_value(&sequence).unwrap();
        let elements: Vec<i32> = list
            .iter()
            .filter_map(|value| value.downcast_ref::<i32>().copied())
            .collect();
        assert_eq!(elements, vec![1, 2]);
    }

    #[rstest]
    fn test_from_value_empty_sequence() {
        let list = LazyList::from_value(&Value::new(Vec::<Value>::new())).unwrap();
        assert_eq!(list.length(), 0);
    }

    #[rstest]
    fn test_from_value_rejects_scalar() {
        assert_eq!(
            LazyList::from_value(&Value::new(5_i32)).unwrap_err(),
            ListError::InvalidInput { type_name: "i32" }
        );
    }

    #[rstest]
    fn test_map_dynamic_rejects_non_function_up_front() {
        let error = numbers(&[1]).map_dynamic(&Value::new(0_u8)).unwrap_err();
        assert_eq!(
            error,
            ListError::Invoke(InvokeError::NotInvocable { type_name: "u8" })
        );
    }

    #[rstest]
    fn test_map_dynamic_rejects_wrong_arity_up_front() {
        let add = Value::from(Function::binary("add", |a: &i32, b: &i32| a + b));
        let error = numbers(&[1]).map_dynamic(&add).unwrap_err();
        assert!(matches!(
            error,
            ListError::Invoke(InvokeError::ArityMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[rstest]
    fn test_map_dynamic_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let identity = Value::from(Function::from_fn("identity", 1, move |arguments| {
            counter.set(counter.get() + 1);
            Ok(arguments[0].clone())
        }));

        let mapped = numbers(&[1, 2, 3]).map_dynamic(&identity).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.take(2).length(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_map_dynamic_reports_argument_type_per_element() {
        let list = LazyList::from_sequence([Value::new(1_i32), Value::new("x")]);
        let negate = Value::from(Function::unary("negate", |x: &i32| -x));

        let results = list.map_dynamic(&negate).unwrap().to_eager_sequence();
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(InvokeError::ArgumentType { position: 0, .. })
        ));
    }

    #[rstest]
    fn test_reduce_dynamic_stops_at_first_error() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let add = Value::from(Function::binary("add", move |a: &i32, b: &i32| {
            counter.set(counter.get() + 1);
            a + b
        }));
        let list = LazyList::from_sequence([
            Value::new(1_i32),
            Value::new("oops"),
            Value::new(3_i32),
        ]);

        let error = list.reduce_dynamic(&add, Value::new(0_i32)).unwrap_err();
        assert!(matches!(
            error,
            ListError::Invoke(InvokeError::ArgumentType { position: 1, .. })
        ));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_reduce_dynamic_on_empty_returns_initial() {
        let add = Value::from(Function::binary("add", |a: &i32, b: &i32| a + b));
        let total = numbers(&[]).reduce_dynamic(&add, Value::new(7_i32)).unwrap();
        assert_eq!(total.extract::<i32>(), Ok(7));
    }
}
