//! Opt-in memoization of list nodes.
//!
//! A memoized list caches each [`Step`] the first time it is forced, so
//! repeated traversals do not re-run the underlying closures. This changes
//! observable behaviour for impure thunks: side effects happen once per
//! node instead of once per force.

use std::rc::Rc;

use crate::control::Lazy;

use super::{LazyList, Step, Thunk};

type MemoInit<T> = Box<dyn FnOnce() -> Step<T>>;

pub(super) struct MemoCell<T> {
    step: Lazy<Step<T>, MemoInit<T>>,
    replay: fn(&Step<T>) -> Step<T>,
}

impl<T> MemoCell<T> {
    pub(super) fn force(&self) -> Step<T> {
        (self.replay)(&self.step.force())
    }

    pub(super) fn take_tail(&mut self) -> Option<LazyList<T>> {
        let step = self.step.get_mut()?;
        std::mem::replace(step, Step::Done)
            .into_cell()
            .map(|(_, tail)| tail)
    }
}

impl<T> Drop for MemoCell<T> {
    fn drop(&mut self) {
        if let Some(tail) = self.take_tail() {
            tail.unlink();
        }
    }
}

impl<T: Clone + 'static> LazyList<T> {
    /// Returns a list that caches every node on first force.
    ///
    /// Each closure behind the source list runs at most once per node of
    /// the memoized list, however many times it is traversed. Tails reached
    /// through the memoized list are memoized too. Memoizing an already
    /// memoized list returns a shared handle.
    ///
    /// # Panics
    ///
    /// Forcing a node whose thunk panicked on an earlier force panics again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let list = LazyList::generate(1, move |n| {
    ///     counter.set(counter.get() + 1);
    ///     n * 2
    /// })
    /// .take(4)
    /// .memoize();
    ///
    /// assert_eq!(list.to_eager_sequence(), vec![1, 2, 4, 8]);
    /// assert_eq!(list.to_eager_sequence(), vec![1, 2, 4, 8]);
    /// assert_eq!(calls.get(), 3);
    /// ```
    pub fn memoize(&self) -> Self {
        if self.is_memoized() {
            return self.clone();
        }
        let source = self.clone();
        let initializer: MemoInit<T> = Box::new(move || match source.force() {
            Step::Cell(head, tail) => Step::Cell(head, tail.memoize()),
            Step::Done => Step::Done,
        });
        Self {
            thunk: Thunk::Memoized(Rc::new(MemoCell {
                step: Lazy::new(initializer),
                replay: Step::clone,
            })),
        }
    }
}
