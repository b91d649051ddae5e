//! Deferred computation with memoization.
//!
//! [`Lazy<T, F>`] runs its initializer the first time it is forced and hands
//! out the cached result afterwards. If the initializer panics, the cell is
//! poisoned and every later force reports it.

use std::cell::{Ref, RefCell};
use std::fmt;

enum LazyState<T, F> {
    Uninit(F),
    Init(T),
    // The initializer unwound.
    Poisoned,
}

/// Error returned when forcing a [`Lazy`] whose initializer panicked.
///
/// # Examples
///
/// ```rust
/// use lazylist::control::LazyPoisonedError;
///
/// assert_eq!(
///     LazyPoisonedError.to_string(),
///     "lazy cell poisoned: initializer panicked"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyPoisonedError;

impl fmt::Display for LazyPoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("lazy cell poisoned: initializer panicked")
    }
}

impl std::error::Error for LazyPoisonedError {}

/// A lazily evaluated value that is computed at most once.
///
/// # Thread Safety
///
/// Not thread-safe: the state lives in a `RefCell`.
///
/// # Examples
///
/// ```rust
/// use lazylist::control::Lazy;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     call_count.set(call_count.get() + 1);
///     42
/// });
///
/// assert_eq!(call_count.get(), 0);
/// assert_eq!(*lazy.force(), 42);
/// assert_eq!(*lazy.force(), 42);
/// assert_eq!(call_count.get(), 1);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value. The initializer does not run until forced.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces the value, running the initializer on first use.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panicked on an earlier force. Use
    /// [`Lazy::try_force`] to observe poisoning as an error instead.
    pub fn force(&self) -> Ref<'_, T> {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces the value, reporting a poisoned cell as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if the initializer panicked on an
    /// earlier force.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::control::{Lazy, LazyPoisonedError};
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// let lazy: Lazy<i32, _> = Lazy::new(|| panic!("boom"));
    /// let _ = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    ///
    /// assert_eq!(lazy.try_force().err(), Some(LazyPoisonedError));
    /// ```
    pub fn try_force(&self) -> Result<Ref<'_, T>, LazyPoisonedError> {
        let needs_initialization = match &*self.state.borrow() {
            LazyState::Init(_) => false,
            LazyState::Uninit(_) => true,
            LazyState::Poisoned => return Err(LazyPoisonedError),
        };

        if needs_initialization {
            self.initialize();
        }

        let state = self.state.borrow();
        if matches!(&*state, LazyState::Init(_)) {
            Ok(Ref::map(state, |state| match state {
                LazyState::Init(value) => value,
                _ => unreachable!(),
            }))
        } else {
            Err(LazyPoisonedError)
        }
    }

    /// Runs the initializer. The cell stays `Poisoned` if it unwinds.
    fn initialize(&self) {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), LazyState::Poisoned);
        let initializer = match previous {
            LazyState::Uninit(initializer) => initializer,
            settled => {
                *self.state.borrow_mut() = settled;
                return;
            }
        };

        // The borrow is released while the initializer runs.
        let value = initializer();

        *self.state.borrow_mut() = LazyState::Init(value);
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns a mutable reference to the cached value if the cell has been
    /// forced. Never runs the initializer.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self.state.get_mut() {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Poisoned => None,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_lazy_defers_until_forced() {
        let call_count = Cell::new(0);
        let mut lazy = Lazy::new(|| {
            call_count.set(call_count.get() + 1);
            42
        });
        assert!(lazy.get_mut().is_none());
        assert_eq!(call_count.get(), 0);
    }

    #[rstest]
    fn test_lazy_runs_initializer_once() {
        let call_count = Cell::new(0);
        let lazy = Lazy::new(|| {
            call_count.set(call_count.get() + 1);
            "value".to_string()
        });

        assert_eq!(*lazy.force(), "value");
        assert_eq!(*lazy.force(), "value");
        assert_eq!(call_count.get(), 1);
    }

    #[rstest]
    fn test_lazy_poisoned_after_panic() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("initializer failed"));
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _ = lazy.force();
        }));

        assert!(outcome.is_err());
        assert_eq!(format!("{lazy:?}"), "Lazy(\"<poisoned>\")");
        assert_eq!(lazy.try_force().err(), Some(LazyPoisonedError));
    }

    #[rstest]
    fn test_lazy_get_mut_only_after_force() {
        let mut lazy = Lazy::new(|| vec![1, 2]);
        assert!(lazy.get_mut().is_none());

        let _ = lazy.force();
        if let Some(values) = lazy.get_mut() {
            values.push(3);
        }
        assert_eq!(*lazy.force(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_lazy_debug_does_not_force() {
        let lazy = Lazy::new(|| 1);
        assert_eq!(format!("{lazy:?}"), "Lazy(\"<uninit>\")");
        let _ = lazy.force();
        assert_eq!(format!("{lazy:?}"), "Lazy(1)");
    }
}
