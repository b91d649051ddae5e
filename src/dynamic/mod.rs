//! Type-erased values and dynamic function invocation.
//!
//! Typed code should use [`LazyList::map`](crate::list::LazyList::map) and
//! [`LazyList::reduce`](crate::list::LazyList::reduce) directly. This module
//! is the narrow fallback for callers that need to pass heterogeneous
//! callables around as values:
//!
//! - [`Value`]: an `Rc`-shared, type-erased value that remembers its type name
//! - [`Function`]: a named function of fixed arity over [`Value`]s
//! - [`invoke`], [`apply`], [`compose`]: calling, partially applying and
//!   composing function values, with descriptive [`InvokeError`]s
//! - `LazyList<Value>` entry points: [`LazyList::from_value`],
//!   [`LazyList::map_dynamic`], [`LazyList::reduce_dynamic`]
//!
//! # Examples
//!
//! ```rust
//! use lazylist::dynamic::{Function, Value, apply, invoke};
//!
//! let add = Value::from(Function::binary("add", |x: &i32, y: &i32| x + y));
//! let increment = Value::from(apply(&add, &[Value::new(1)])?);
//!
//! let result = invoke(&increment, &[Value::new(10)])?;
//! assert_eq!(result.extract::<i32>()?, 11);
//! # Ok::<(), lazylist::error::InvokeError>(())
//! ```
//!
//! [`InvokeError`]: crate::error::InvokeError
//! [`LazyList::from_value`]: crate::list::LazyList::from_value
//! [`LazyList::map_dynamic`]: crate::list::LazyList::map_dynamic
//! [`LazyList::reduce_dynamic`]: crate::list::LazyList::reduce_dynamic

mod function;
mod list;
mod value;

pub use function::{Function, apply, compose, invoke};
pub use value::Value;
