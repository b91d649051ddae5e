//! Type-erased values.

use std::any::{Any, type_name};
use std::fmt;
use std::rc::Rc;

use super::Function;
use crate::error::InvokeError;

/// A shared, type-erased value.
///
/// Cloning is O(1). The concrete type name is kept for error messages.
///
/// # Examples
///
/// ```rust
/// use lazylist::dynamic::Value;
///
/// let value = Value::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.type_name(), "i32");
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl Value {
    /// Erases the type of `value`.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Returns a reference to the inner value if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Returns `true` if the inner value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (*self.inner).is::<T>()
    }

    /// The name of the concrete type held by this value.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Clones the inner value out as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::ResultType`] if the value is not a `T`.
    pub fn extract<T: Any + Clone>(&self) -> Result<T, InvokeError> {
        self.downcast_ref::<T>()
            .cloned()
            .ok_or(InvokeError::ResultType {
                expected: type_name::<T>(),
                actual: self.type_name,
            })
    }

    /// Returns the function held by this value, if any.
    #[inline]
    pub fn as_function(&self) -> Option<&Function> {
        self.downcast_ref::<Function>()
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::new(function)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Value")
            .field(&format_args!("{}", self.type_name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_value_downcast_to_wrong_type() {
        let value = Value::new(1_u8);
        assert!(value.downcast_ref::<i32>().is_none());
        assert!(!value.is::<i32>());
    }

    #[rstest]
    fn test_extract_reports_types() {
        let value = Value::new(1_u8);
        assert_eq!(
            value.extract::<i64>(),
            Err(InvokeError::ResultType {
                expected: "i64",
                actual: "u8",
            })
        );
    }

    #[rstest]
    fn test_clone_shares_inner_value() {
        let value = Value::new(vec![1, 2, 3]);
        let copy = value.clone();
        assert!(Rc::ptr_eq(&value.inner, &copy.inner));
    }

    #[rstest]
    fn test_debug_shows_type_name() {
        assert_eq!(format!("{:?}", Value::new(true)), "Value(bool)");
    }

    #[rstest]
    fn test_plain_value_is_not_a_function() {
        assert!(Value::new(5).as_function().is_none());
    }
}
