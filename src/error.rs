//! Error types for dynamic invocation and dynamically typed list input.
//!
//! Statically typed list operations cannot fail. These errors only arise at
//! the type-erased boundary in [`crate::dynamic`].

use std::fmt;

/// Represents a failure to call a type-erased function value.
///
/// # Examples
///
/// ```rust
/// use lazylist::error::InvokeError;
///
/// let error = InvokeError::NotInvocable { type_name: "i32" };
/// assert_eq!(format!("{error}"), "value of type `i32` is not invocable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// The value passed as a function is not a [`Function`](crate::dynamic::Function).
    NotInvocable {
        /// Type name of the value that was called.
        type_name: &'static str,
    },
    /// The number of arguments does not match the function's arity.
    ArityMismatch {
        /// Name of the function being called.
        function: String,
        /// The function's arity.
        expected: usize,
        /// The number of arguments supplied.
        actual: usize,
    },
    /// An argument has a different type than the function accepts.
    ArgumentType {
        /// Name of the function being called.
        function: String,
        /// Zero-based position of the argument.
        position: usize,
        /// Type the function expects.
        expected: &'static str,
        /// Type that was supplied.
        actual: &'static str,
    },
    /// A result value could not be extracted as the requested type.
    ResultType {
        /// Type the caller asked for.
        expected: &'static str,
        /// Type the value actually holds.
        actual: &'static str,
    },
}

impl fmt::Display for InvokeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInvocable { type_name } => {
                write!(formatter, "value of type `{type_name}` is not invocable")
            }
            Self::ArityMismatch {
                function,
                expected,
                actual,
            } => write!(
                formatter,
                "{function}: expected {expected} argument(s), got {actual}"
            ),
            Self::ArgumentType {
                function,
                position,
                expected,
                actual,
            } => write!(
                formatter,
                "{function}: argument {position} must be `{expected}`, got `{actual}`"
            ),
            Self::ResultType { expected, actual } => {
                write!(formatter, "expected a `{expected}` value, got `{actual}`")
            }
        }
    }
}

impl std::error::Error for InvokeError {}

/// Represents errors reported by the dynamically typed list entry points.
///
/// # Examples
///
/// ```rust
/// use lazylist::error::ListError;
///
/// let error = ListError::InvalidInput { type_name: "i32" };
/// assert_eq!(
///     format!("{error}"),
///     "invalid input: expected a sequence, got `i32`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A list was requested from a value that is not a sequence.
    InvalidInput {
        /// Type name of the rejected value.
        type_name: &'static str,
    },
    /// A caller-supplied function could not be invoked.
    Invoke(InvokeError),
}

impl fmt::Display for ListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { type_name } => write!(
                formatter,
                "invalid input: expected a sequence, got `{type_name}`"
            ),
            Self::Invoke(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput { .. } => None,
            Self::Invoke(error) => Some(error),
        }
    }
}

impl From<InvokeError> for ListError {
    fn from(error: InvokeError) -> Self {
        Self::Invoke(error)
    }
}
