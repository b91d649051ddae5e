//! Building lists from collections and generator functions.

use std::rc::Rc;

use super::{LazyList, Step};

type Successor<T> = dyn Fn(&T) -> T;
type Unfolder<S, T> = dyn Fn(&S) -> Option<(T, S)>;

impl<T: Clone + 'static> LazyList<T> {
    /// Wraps a finite, indexable collection as a lazy list.
    ///
    /// The elements are shared behind one `Rc<[T]>`; each node is a thunk
    /// over an index into it, so forcing a node is O(1) and building the
    /// list does not recurse over its length.
    ///
    /// Accepts anything convertible into `Rc<[T]>`: a `Vec<T>`, an array,
    /// a boxed slice or a `&[T]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_eager_sequence(vec![1, 2, 3]);
    /// assert_eq!(list.to_eager_sequence(), vec![1, 2, 3]);
    ///
    /// let borrowed = LazyList::from_eager_sequence(&["a", "b"][..]);
    /// assert_eq!(borrowed.length(), 2);
    /// ```
    pub fn from_eager_sequence<S>(elements: S) -> Self
    where
        S: Into<Rc<[T]>>,
    {
        Self::indexed(elements.into(), 0)
    }

    fn indexed(elements: Rc<[T]>, index: usize) -> Self {
        Self::new(move || match elements.get(index) {
            Some(element) => Step::Cell(
                element.clone(),
                Self::indexed(Rc::clone(&elements), index + 1),
            ),
            None => Step::Done,
        })
    }

    /// Builds a list from any number of elements.
    ///
    /// The elements are collected eagerly; an empty input yields the empty
    /// list. See also the [`lazy_list!`](crate::lazy_list) macro.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_sequence(1..=4);
    /// assert_eq!(list.to_eager_sequence(), vec![1, 2, 3, 4]);
    ///
    /// assert!(LazyList::<u8>::from_sequence(None).is_empty());
    /// ```
    pub fn from_sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_eager_sequence(elements.into_iter().collect::<Vec<_>>())
    }

    /// An infinite list `seed, successor(seed), successor(successor(seed)), ...`.
    ///
    /// Each successor is computed only when the node holding it is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let squares = LazyList::generate(2_u64, |x| x * x);
    /// assert_eq!(squares.take(3).to_eager_sequence(), vec![2, 4, 16]);
    /// ```
    pub fn generate<F>(seed: T, successor: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::generate_shared(seed, Rc::new(successor))
    }

    fn generate_shared(seed: T, successor: Rc<Successor<T>>) -> Self {
        Self::new(move || {
            let current = seed.clone();
            let successor = Rc::clone(&successor);
            let tail = Self::new(move || {
                Self::generate_shared(successor(&current), Rc::clone(&successor)).force()
            });
            Step::Cell(seed.clone(), tail)
        })
    }

    /// An infinite list repeating `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// assert_eq!(LazyList::repeat('x').take(2).to_eager_sequence(), vec!['x', 'x']);
    /// ```
    pub fn repeat(value: T) -> Self {
        Self::generate(value, T::clone)
    }
}

impl<T: 'static> LazyList<T> {
    /// Builds a list by repeatedly applying `step` to a state.
    ///
    /// The list ends the first time `step` returns `None`, so it may be
    /// finite or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let countdown = LazyList::unfold(3_u32, |&n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(countdown.to_eager_sequence(), vec![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(&S) -> Option<(T, S)> + 'static,
    {
        Self::unfold_shared(seed, Rc::new(step))
    }

    fn unfold_shared<S: 'static>(seed: S, step: Rc<Unfolder<S, T>>) -> Self {
        Self::new(move || match step(&seed) {
            Some((element, next)) => {
                Step::Cell(element, Self::unfold_shared(next, Rc::clone(&step)))
            }
            None => Step::Done,
        })
    }
}

impl<T: Clone + 'static> FromIterator<T> for LazyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: Clone + 'static> From<Vec<T>> for LazyList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_eager_sequence(elements)
    }
}
