//! Thread-safe handle around a [`HistoryStore`].
//!
//! The whole store sits behind one mutex. Every operation is a point mutation
//! of a small aggregate, so finer-grained locking buys nothing.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::HistoryStore;

/// Cloneable handle to a store guarded by a single mutex.
#[derive(Debug)]
pub struct SharedHistoryStore<T> {
    inner: Arc<Mutex<HistoryStore<T>>>,
}

impl<T> Clone for SharedHistoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedHistoryStore<T> {
    pub fn new(store: HistoryStore<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Closures passed to `with` only reach the store through its own methods,
    // each of which restores the invariants before returning. A panic in the
    // closure therefore leaves a consistent history behind the poisoned lock.
    fn lock(&self) -> MutexGuard<'_, HistoryStore<T>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut HistoryStore<T>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn commit(&self, value: T) {
        self.lock().commit(value);
    }

    pub fn undo(&self) -> bool {
        self.lock().undo()
    }

    pub fn redo(&self) -> bool {
        self.lock().redo()
    }

    pub fn reset(&self, value: T) {
        self.lock().reset(value);
    }

    pub fn can_undo(&self) -> bool {
        self.lock().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.lock().can_redo()
    }
}

impl<T: Clone> SharedHistoryStore<T> {
    /// Clone of the current snapshot.
    pub fn current(&self) -> T {
        self.lock().current().clone()
    }
}

impl<T> From<HistoryStore<T>> for SharedHistoryStore<T> {
    fn from(store: HistoryStore<T>) -> Self {
        Self::new(store)
    }
}
