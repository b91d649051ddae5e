//! Lazy list-to-list combinators.
//!
//! Each combinator returns a new thunk and forces nothing at call time.
//! Work happens node by node as the result is forced.

use std::rc::Rc;

use super::{LazyList, Step};

type Mapper<T, U> = dyn Fn(T) -> U;

impl<T: 'static> LazyList<T> {
    /// Applies `function` to every element, lazily.
    ///
    /// `function` runs once per node forced and never ahead of demand, so
    /// mapping an infinite list is fine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let doubled = LazyList::generate(1, |n| n + 1).map(|n| n * 2);
    /// assert_eq!(doubled.take(3).to_eager_sequence(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> LazyList<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map_shared(Rc::new(function))
    }

    fn map_shared<U: 'static>(&self, function: Rc<Mapper<T, U>>) -> LazyList<U> {
        let source = self.clone();
        LazyList::new(move || match source.force() {
            Step::Cell(head, tail) => {
                Step::Cell(function(head), tail.map_shared(Rc::clone(&function)))
            }
            Step::Done => Step::Done,
        })
    }

    /// Keeps at most `count` leading elements.
    ///
    /// Forces at most `count` nodes of the source, which is what makes an
    /// infinite list consumable. `take(0)` is the empty list and never
    /// touches the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_eager_sequence(vec![1, 2, 3]);
    /// assert_eq!(list.take(2).to_eager_sequence(), vec![1, 2]);
    /// assert_eq!(list.take(10).to_eager_sequence(), vec![1, 2, 3]);
    /// assert!(list.take(0).is_empty());
    /// ```
    pub fn take(&self, count: usize) -> Self {
        if count == 0 {
            tracing::trace!("take: bound reached, remaining source left unforced");
            return Self::empty();
        }
        let source = self.clone();
        Self::new(move || match source.force() {
            Step::Cell(head, tail) => Step::Cell(head, tail.take(count - 1)),
            Step::Done => Step::Done,
        })
    }

    /// Skips the first `count` elements.
    ///
    /// Nothing is forced until the result is. Forcing it walks and discards
    /// up to `count` nodes, then forces the node after them. Dropping past
    /// the end gives the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_eager_sequence(vec![1, 2, 3]);
    /// assert_eq!(list.drop(1).to_eager_sequence(), vec![2, 3]);
    /// assert_eq!(list.drop(10).length(), 0);
    /// ```
    pub fn drop(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        let source = self.clone();
        Self::new(move || {
            let mut current = source.clone();
            let mut skipped = 0;
            while skipped < count {
                match current.force() {
                    Step::Cell(_, tail) => {
                        current = tail;
                        skipped += 1;
                    }
                    Step::Done => {
                        tracing::trace!(requested = count, skipped, "drop: source ended early");
                        return Step::Done;
                    }
                }
            }
            tracing::trace!(skipped, "drop: prefix skipped");
            current.force()
        })
    }
}
