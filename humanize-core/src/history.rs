// Undo/redo history for a single input value.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::config::DEFAULT_CAPACITY;

/// A bounded, linear undo/redo history of whole-value snapshots.
///
/// The store always holds at least one snapshot and `cursor` always points at
/// one of them. Consumers only see [`current`](Self::current) and the two
/// `can_*` queries; the snapshot sequence itself is owned here.
#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    states: VecDeque<T>,
    cursor: usize,
    capacity: NonZeroUsize,
}

impl<T> HistoryStore<T> {
    /// Create a store holding `initial`, bounded by [`DEFAULT_CAPACITY`].
    pub fn new(initial: T) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// Create a store holding `initial` that retains at most `capacity` snapshots.
    pub fn with_capacity(initial: T, capacity: NonZeroUsize) -> Self {
        debug!("Creating history store with capacity {}", capacity);

        let mut states = VecDeque::with_capacity(capacity.get().min(64));
        states.push_back(initial);

        Self {
            states,
            cursor: 0,
            capacity,
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &T {
        // cursor < len is maintained by every transition below
        &self.states[self.cursor]
    }

    /// Accept `value` as the newest snapshot.
    ///
    /// Anything ahead of the cursor is discarded first. When the history is
    /// full the oldest snapshot is evicted and the cursor shifts with it, so
    /// `value` stays current.
    pub fn commit(&mut self, value: T) {
        let dropped = self.states.len() - (self.cursor + 1);
        if dropped > 0 {
            trace!("Discarding {} redo snapshots", dropped);
            self.states.truncate(self.cursor + 1);
        }

        self.states.push_back(value);

        if self.states.len() > self.capacity.get() {
            self.states.pop_front();
            debug!(
                capacity = self.capacity.get(),
                "History full, evicted oldest snapshot"
            );
        }

        self.cursor = self.states.len() - 1;
        trace!("Committed snapshot {} of {}", self.cursor + 1, self.states.len());
    }

    /// Step back one snapshot. Returns `false` without changing anything when
    /// there is nothing older.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            trace!("Undo requested at oldest snapshot, ignoring");
            return false;
        }

        self.cursor -= 1;
        trace!("Undo to snapshot {}", self.cursor);
        true
    }

    /// Step forward one snapshot. Returns `false` without changing anything
    /// when there is nothing newer.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            trace!("Redo requested at newest snapshot, ignoring");
            return false;
        }

        self.cursor += 1;
        trace!("Redo to snapshot {}", self.cursor);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Replace the whole history with a single snapshot. The previous trail
    /// is not reachable through undo afterwards.
    pub fn reset(&mut self, value: T) {
        debug!("Resetting history, dropping {} snapshots", self.states.len());
        self.states.clear();
        self.states.push_back(value);
        self.cursor = 0;
    }

    /// Number of retained snapshots. Never zero.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the current snapshot, counted from the oldest retained one.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Retained snapshots, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.states.iter()
    }

    /// Consume the store and keep only the current value.
    pub fn into_current(self) -> T {
        let Self { states, cursor, .. } = self;
        // cursor < len, so skipping `cursor` snapshots always lands on one
        match states.into_iter().nth(cursor) {
            Some(value) => value,
            None => unreachable!("history cursor is always in bounds"),
        }
    }
}

impl<T: Default> Default for HistoryStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'a, T> IntoIterator for &'a HistoryStore<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn snapshot<T: Clone>(store: &HistoryStore<T>) -> Vec<T> {
        store.iter().cloned().collect()
    }

    #[test]
    fn test_new_store_has_single_snapshot() {
        let store = HistoryStore::new("start");

        assert_eq!(*store.current(), "start");
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_commit_moves_cursor_to_end() {
        let mut store = HistoryStore::new(0);
        store.commit(1);
        store.commit(2);

        assert_eq!(*store.current(), 2);
        assert_eq!(store.cursor(), 2);
        assert!(store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_undo_then_redo_walks_history() {
        let mut store = HistoryStore::new("a");
        store.commit("b");
        store.commit("c");

        assert!(store.undo());
        assert_eq!(*store.current(), "b");
        assert!(store.can_redo());

        assert!(store.undo());
        assert_eq!(*store.current(), "a");
        assert!(!store.undo());
        assert_eq!(*store.current(), "a");

        assert!(store.redo());
        assert!(store.redo());
        assert_eq!(*store.current(), "c");
        assert!(!store.redo());
        assert_eq!(*store.current(), "c");
    }

    #[test]
    fn test_commit_after_undo_drops_redo_branch() {
        let mut store = HistoryStore::new("a");
        store.commit("b");
        store.commit("c");
        store.undo();

        store.commit("d");

        assert_eq!(snapshot(&store), vec!["a", "b", "d"]);
        assert!(!store.can_redo());
    }

    #[test]
    fn test_eviction_keeps_current_value() {
        let mut store = HistoryStore::with_capacity("a", cap(3));
        store.commit("b");
        store.commit("c");
        store.commit("d");

        assert_eq!(snapshot(&store), vec!["b", "c", "d"]);
        assert_eq!(*store.current(), "d");
        assert_eq!(store.cursor(), 2);
    }

    #[test]
    fn test_eviction_after_undo_truncates_before_evicting() {
        let mut store = HistoryStore::with_capacity(1, cap(3));
        store.commit(2);
        store.commit(3);
        store.undo();
        store.undo();

        // truncation leaves [1], so nothing needs evicting
        store.commit(4);
        assert_eq!(snapshot(&store), vec![1, 4]);
        assert_eq!(*store.current(), 4);
    }

    #[test]
    fn test_capacity_one_never_undoes() {
        let mut store = HistoryStore::with_capacity(String::new(), cap(1));
        store.commit("x".to_string());
        store.commit("xy".to_string());

        assert_eq!(store.len(), 1);
        assert_eq!(store.current(), "xy");
        assert!(!store.can_undo());
        assert!(!store.undo());
    }

    #[test]
    fn test_reset_replaces_trail() {
        let mut store = HistoryStore::new("a");
        store.commit("b");
        store.commit("c");
        store.undo();

        store.reset("");

        assert_eq!(snapshot(&store), vec![""]);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_into_current_returns_cursor_value() {
        let mut store = HistoryStore::new(String::from("one"));
        store.commit(String::from("two"));
        store.commit(String::from("three"));
        store.undo();

        assert_eq!(store.into_current(), "two");
    }

    #[test]
    fn test_into_current_after_eviction() {
        let mut store = HistoryStore::with_capacity(0, cap(2));
        store.commit(1);
        store.commit(2);
        store.undo();

        assert_eq!(store.into_current(), 1);
    }

    #[test]
    fn test_default_starts_from_default_value() {
        let store: HistoryStore<String> = HistoryStore::default();
        assert_eq!(store.current(), "");
        assert!(!store.is_empty());
    }
}
