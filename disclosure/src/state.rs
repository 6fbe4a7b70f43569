use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared state cell with interior mutability.
///
/// `State<T>` is cheap to clone; clones share the same value. Event
/// callbacks capture a clone so they can mutate component state between
/// renders.
///
/// # Example
///
/// ```
/// use disclosure::State;
///
/// let open = State::new(false);
/// let handle = open.clone();
/// handle.update(|v| *v = !*v);
/// assert!(open.get());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl State<bool> {
    /// Flip the value, returning the new one.
    pub fn toggle(&self) -> bool {
        let mut next = false;
        self.update(|v| {
            *v = !*v;
            next = *v;
        });
        next
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = State::new(1);
        let b = a.clone();
        b.set(5);
        assert_eq!(a.get(), 5);
    }

    #[test]
    fn test_toggle_marks_dirty() {
        let s = State::new(false);
        assert!(!s.is_dirty());
        assert!(s.toggle());
        assert!(s.is_dirty());
        s.clear_dirty();
        assert!(!s.is_dirty());
        assert!(!s.toggle());
        assert!(!s.get());
        assert!(s.clone().is_dirty());
    }
}
