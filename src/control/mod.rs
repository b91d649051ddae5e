//! Control structures for deferred evaluation.
//!
//! - [`Lazy`]: a computation that runs on first force and caches its result
//!
//! Lazy lists do not memoize by default; every force of a list thunk re-runs
//! the closures behind it. [`Lazy`] is the cell that backs
//! `LazyList::memoize` when caching is explicitly requested.
//!
//! # Examples
//!
//! ```rust
//! use lazylist::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! let value = lazy.force();
//! // Now "Computing..." is printed and value is 42
//! assert_eq!(*value, 42);
//! ```

mod lazy;

pub use lazy::{Lazy, LazyPoisonedError};
