//! # lazylist
//!
//! Lazy, thunk-based singly-linked lists for Rust.
//!
//! ## Overview
//!
//! A [`LazyList`](crate::list::LazyList) is a deferred computation that, when
//! forced, yields either the end of the list or a head element together with
//! another deferred tail. Nothing is evaluated until it is forced, which makes
//! conceptually infinite sequences usable as long as they are bounded with
//! `take` before being consumed.
//!
//! - **Control**: [`Lazy`](crate::control::Lazy), a memoizing cell used by
//!   opt-in list memoization
//! - **List**: construction (`cons`, `from_sequence`, `from_eager_sequence`,
//!   `generate`), consumption (`length`, `to_eager_sequence`, `reduce`) and
//!   lazy combinators (`map`, `take`, `drop`)
//! - **Dynamic**: a call-forwarding layer for type-erased function values
//!   (`invoke`, `apply`, `compose`) and the list entry points built on it
//!
//! ## Feature Flags
//!
//! - `control`: The memoizing `Lazy` cell
//! - `list`: `LazyList` and its combinators
//! - `dynamic`: Type-erased values and dynamic invocation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazylist::prelude::*;
//!
//! let squares = LazyList::generate(2_u64, |x| x * x);
//! assert_eq!(squares.take(3).to_eager_sequence(), vec![2, 4, 16]);
//!
//! let list = lazy_list![1, 2, 3];
//! assert_eq!(list.reduce(|accumulator, x| accumulator + x, 0), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazylist::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "list")]
    pub use crate::lazy_list;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;

    #[cfg(feature = "dynamic")]
    pub use crate::error::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "dynamic")]
pub mod error;
