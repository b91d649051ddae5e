//! Forcing a list to completion.
//!
//! Everything here walks the list until [`Step::Done`]. On an infinite list
//! none of these return; finiteness cannot be detected without forcing, so
//! bounding the work with `take` is the caller's job.

use std::iter::FusedIterator;

use super::{LazyList, Step};

impl<T> LazyList<T> {
    /// Counts the nodes by forcing the whole list.
    ///
    /// Never returns if the list is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// assert_eq!(LazyList::from_eager_sequence(vec!['a', 'b']).length(), 2);
    /// assert_eq!(LazyList::generate(0, |n| n + 1).take(5).length(), 5);
    /// ```
    pub fn length(&self) -> usize {
        let mut count = 0;
        let mut current = self.force();
        while let Step::Cell(_, tail) = current {
            count += 1;
            current = tail.force();
        }
        count
    }

    /// Forces the whole list into a `Vec`, head first.
    ///
    /// Never returns if the list is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_sequence(["x", "y"]);
    /// assert_eq!(list.to_eager_sequence(), vec!["x", "y"]);
    /// ```
    pub fn to_eager_sequence(&self) -> Vec<T> {
        let mut elements: Vec<T> = self.iter().collect();
        elements.shrink_to_fit();
        elements
    }

    /// Strict left fold: `function(... function(function(initial, x0), x1) ..., xn)`.
    ///
    /// Forces every node; there is no early exit. Never returns if the list
    /// is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_eager_sequence(vec![1, 2, 3]);
    /// assert_eq!(list.reduce(|accumulator, x| accumulator + x, 0), 6);
    ///
    /// let joined = list.reduce(|mut text, x| {
    ///     text.push_str(&x.to_string());
    ///     text
    /// }, String::new());
    /// assert_eq!(joined, "123");
    /// ```
    pub fn reduce<A, F>(&self, function: F, initial: A) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(initial, function)
    }

    /// Returns an iterator that forces one node per call to `next`.
    ///
    /// The iterator holds the unforced remainder, so stopping early leaves
    /// the rest of the list unevaluated.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            remaining: Some(self.clone()),
        }
    }
}

/// Iterator over a shared handle to a [`LazyList`].
///
/// Elements are produced by value because each force builds them afresh.
pub struct Iter<T> {
    remaining: Option<LazyList<T>>,
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.remaining.take()?;
        let (head, tail) = list.uncons()?;
        self.remaining = Some(tail);
        Some(head)
    }
}

impl<T> FusedIterator for Iter<T> {}

/// Owning iterator over a [`LazyList`].
pub struct IntoIter<T> {
    inner: Iter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LazyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: Iter {
                remaining: Some(self),
            },
        }
    }
}

impl<T> IntoIterator for &LazyList<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
