//! Lazy singly-linked lists built from thunks.
//!
//! A [`LazyList<T>`] is a handle to a deferred, zero-argument computation.
//! Forcing it produces one [`Step`]: either [`Step::Done`] or a
//! [`Step::Cell`] holding the head element and another, still unforced,
//! `LazyList` for the tail.
//!
//! # Laziness
//!
//! ```text
//! list = cons(1, cons(2, empty))
//!
//! list.force()  ->  Cell(1, <thunk>)       // tail not evaluated
//! <thunk>.force() -> Cell(2, <thunk>)
//! <thunk>.force() -> Done
//! ```
//!
//! Lists are not memoized: forcing the same handle twice runs its closure
//! twice and produces an equivalent `Step`. Call [`LazyList::memoize`] to
//! cache each node on first force instead.
//!
//! # Infinite lists
//!
//! A list may never reach `Done` ([`LazyList::generate`],
//! [`LazyList::repeat`]). `length`, `to_eager_sequence` and `reduce` force
//! every node and never return on such a list. Bound it with
//! [`LazyList::take`] first.
//!
//! # Examples
//!
//! ```rust
//! use lazylist::list::LazyList;
//!
//! let naturals = LazyList::generate(0_u32, |n| n + 1);
//! let evens = naturals.map(|n| n * 2).drop(1).take(3);
//! assert_eq!(evens.to_eager_sequence(), vec![2, 4, 6]);
//! ```

mod combinators;
mod construct;
mod consume;
mod memo;

use std::fmt;
use std::rc::Rc;

pub use consume::{IntoIter, Iter};

use memo::MemoCell;

/// The realized state of one list position.
#[derive(Clone, Debug)]
pub enum Step<T> {
    /// End of the list.
    Done,
    /// A head element and the unforced remainder of the list.
    Cell(T, LazyList<T>),
}

impl<T> Step<T> {
    /// Converts the step into an optional `(head, tail)` pair.
    #[inline]
    pub fn into_cell(self) -> Option<(T, LazyList<T>)> {
        match self {
            Self::Cell(head, tail) => Some((head, tail)),
            Self::Done => None,
        }
    }

    /// Returns `true` for [`Step::Done`].
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

type DeferredThunk<T> = dyn Fn() -> Step<T>;

enum Thunk<T> {
    Empty,
    Cons(Rc<ConsCell<T>>),
    Deferred(Rc<DeferredThunk<T>>),
    Memoized(Rc<MemoCell<T>>),
}

struct ConsCell<T> {
    head: T,
    tail: LazyList<T>,
    replay: fn(&T) -> T,
}

impl<T> Drop for ConsCell<T> {
    fn drop(&mut self) {
        std::mem::take(&mut self.tail).unlink();
    }
}

/// A lazy, immutable singly-linked list.
///
/// Cloning a `LazyList` is O(1): it shares the underlying thunk.
///
/// # Examples
///
/// ```rust
/// use lazylist::list::{LazyList, Step};
///
/// let list = LazyList::cons(1, LazyList::cons(2, LazyList::empty()));
/// match list.force() {
///     Step::Cell(head, tail) => {
///         assert_eq!(head, 1);
///         assert_eq!(tail.to_eager_sequence(), vec![2]);
///     }
///     Step::Done => unreachable!(),
/// }
/// ```
pub struct LazyList<T> {
    thunk: Thunk<T>,
}

impl<T> Clone for LazyList<T> {
    fn clone(&self) -> Self {
        let thunk = match &self.thunk {
            Thunk::Empty => Thunk::Empty,
            Thunk::Cons(cell) => Thunk::Cons(Rc::clone(cell)),
            Thunk::Deferred(function) => Thunk::Deferred(Rc::clone(function)),
            Thunk::Memoized(cell) => Thunk::Memoized(Rc::clone(cell)),
        };
        Self { thunk }
    }
}

impl<T: 'static> LazyList<T> {
    /// Wraps an arbitrary thunk as a list.
    ///
    /// The thunk should be pure: forcing the list twice calls it twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::{LazyList, Step};
    ///
    /// let single = LazyList::new(|| Step::Cell("only", LazyList::empty()));
    /// assert_eq!(single.to_eager_sequence(), vec!["only"]);
    /// ```
    #[inline]
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> Step<T> + 'static,
    {
        Self {
            thunk: Thunk::Deferred(Rc::new(thunk)),
        }
    }
}

impl<T> LazyList<T> {
    /// The empty list. Forcing it always yields [`Step::Done`].
    #[inline]
    pub const fn empty() -> Self {
        Self { thunk: Thunk::Empty }
    }

    /// Prepends `head` to `tail` without forcing `tail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::cons(0, LazyList::generate(1, |n| n + 1));
    /// assert_eq!(list.take(3).to_eager_sequence(), vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn cons(head: T, tail: Self) -> Self
    where
        T: Clone,
    {
        Self {
            thunk: Thunk::Cons(Rc::new(ConsCell {
                head,
                tail,
                replay: T::clone,
            })),
        }
    }

    /// Forces this position of the list.
    ///
    /// Without memoization each call re-runs the thunk.
    #[inline]
    pub fn force(&self) -> Step<T> {
        match &self.thunk {
            Thunk::Empty => Step::Done,
            Thunk::Cons(cell) => Step::Cell((cell.replay)(&cell.head), cell.tail.clone()),
            Thunk::Deferred(function) => function(),
            Thunk::Memoized(cell) => cell.force(),
        }
    }

    /// Forces one node and returns its head and tail.
    #[inline]
    pub fn uncons(&self) -> Option<(T, Self)> {
        self.force().into_cell()
    }

    /// Forces one node and returns its head.
    #[inline]
    pub fn head(&self) -> Option<T> {
        self.uncons().map(|(head, _)| head)
    }

    /// Forces one node and returns its tail, or `None` at the end.
    #[inline]
    pub fn tail(&self) -> Option<Self> {
        self.uncons().map(|(_, tail)| tail)
    }

    /// Forces one node and reports whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.force().is_done()
    }

    /// Returns `true` if this handle caches its nodes.
    #[inline]
    pub const fn is_memoized(&self) -> bool {
        matches!(self.thunk, Thunk::Memoized(_))
    }

    // Drops the chain behind this handle one node at a time, stopping at the
    // first node that is shared or not yet realized.
    fn unlink(self) {
        let mut next = Some(self);
        while let Some(list) = next {
            next = match list.thunk {
                Thunk::Cons(cell) => Rc::try_unwrap(cell)
                    .ok()
                    .map(|mut cell| std::mem::take(&mut cell.tail)),
                Thunk::Memoized(cell) => Rc::try_unwrap(cell)
                    .ok()
                    .and_then(|mut cell| cell.take_tail()),
                Thunk::Empty | Thunk::Deferred(_) => None,
            };
        }
    }
}

impl<T> Default for LazyList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for LazyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("LazyList")
            .field(&format_args!("<lazy>"))
            .finish()
    }
}

static_assertions::assert_impl_all!(LazyList<i32>: Clone, Default, fmt::Debug);
static_assertions::assert_not_impl_any!(LazyList<i32>: Send, Sync);

/// Builds a [`LazyList`] from its elements, like `vec!`.
///
/// # Examples
///
/// ```rust
/// use lazylist::lazy_list;
/// use lazylist::list::LazyList;
///
/// let list = lazy_list![1, 2, 3];
/// assert_eq!(list.to_eager_sequence(), vec![1, 2, 3]);
///
/// let empty: LazyList<i32> = lazy_list![];
/// assert_eq!(empty.length(), 0);
/// ```
#[macro_export]
macro_rules! lazy_list {
    () => {
        $crate::list::LazyList::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::list::LazyList::from_eager_sequence([$($element),+])
    };
}
