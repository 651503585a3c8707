use std::num::NonZeroUsize;

use humanize_core::{HistoryConfig, HistoryStore};

fn cap(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn contents<T: Clone>(store: &HistoryStore<T>) -> Vec<T> {
    store.iter().cloned().collect()
}

#[test]
fn undo_redo_round_trip() {
    let mut store = HistoryStore::new("draft".to_string());
    store.commit("draft one".to_string());
    store.commit("draft two".to_string());

    let before = store.current().clone();
    assert!(store.can_undo());
    store.undo();
    store.redo();
    assert_eq!(*store.current(), before);
}

#[test]
fn redo_branch_destroyed_on_new_edit() {
    let mut store = HistoryStore::new('a');
    store.commit('b');
    store.commit('c');
    store.undo();
    assert_eq!(*store.current(), 'b');

    store.commit('d');

    assert_eq!(contents(&store), vec!['a', 'b', 'd']);
    assert!(!store.can_redo());
}

#[test]
fn capacity_eviction_drops_oldest() {
    // initial value counts towards capacity, so commit a then b, c, d
    let mut store = HistoryStore::with_capacity('a', cap(3));
    store.commit('b');
    store.commit('c');
    store.commit('d');

    assert_eq!(contents(&store), vec!['b', 'c', 'd']);
    assert_eq!(*store.current(), 'd');
    assert!(store.can_undo());

    store.undo();
    store.undo();
    assert_eq!(*store.current(), 'b');
    assert!(!store.can_undo());
}

#[test]
fn no_op_undo_redo_at_bounds() {
    let mut store = HistoryStore::new(0);
    assert!(!store.can_undo());
    assert!(!store.undo());
    assert_eq!(*store.current(), 0);

    store.commit(1);
    assert!(!store.can_redo());
    assert!(!store.redo());
    assert_eq!(*store.current(), 1);
    assert_eq!(store.cursor(), 1);
}

#[test]
fn reset_discards_trail() {
    let mut store = HistoryStore::new(String::new());
    store.commit("a".to_string());
    store.commit("b".to_string());

    store.reset("c".to_string());

    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.current(), "c");
}

#[test]
fn duplicate_commit_creates_distinct_entry() {
    let mut store = HistoryStore::with_capacity("x", cap(2));
    store.commit("x");
    store.commit("x");

    store.undo();
    assert_eq!(*store.current(), "x");
    assert!(!store.can_undo());
}

#[test]
fn configured_store_respects_capacity() {
    let mut store = HistoryConfig::new(4).build(0u32).unwrap();
    for value in 1..=10 {
        store.commit(value);
    }

    assert_eq!(contents(&store), vec![7, 8, 9, 10]);
}

/// SplitMix64 step, enough to drive a reproducible operation sequence.
fn mix(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Straightforward Vec-based reference for the store's semantics.
struct Model {
    states: Vec<u64>,
    cursor: usize,
    capacity: usize,
}

impl Model {
    fn commit(&mut self, value: u64) {
        self.states.truncate(self.cursor + 1);
        self.states.push(value);
        if self.states.len() > self.capacity {
            self.states.remove(0);
        }
        self.cursor = self.states.len() - 1;
    }

    fn undo(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn redo(&mut self) {
        if self.cursor + 1 < self.states.len() {
            self.cursor += 1;
        }
    }

    fn reset(&mut self, value: u64) {
        self.states = vec![value];
        self.cursor = 0;
    }
}

#[test]
fn invariants_hold_over_random_operation_sequences() {
    for (seed, capacity) in [(1u64, 1usize), (7, 2), (42, 3), (1234, 8), (99, 50)] {
        let mut rng = seed;
        let mut store = HistoryStore::with_capacity(0u64, cap(capacity));
        let mut model = Model {
            states: vec![0],
            cursor: 0,
            capacity,
        };

        for step in 0..2_000 {
            let roll = mix(&mut rng);
            match roll % 10 {
                0..=4 => {
                    store.commit(step);
                    model.commit(step);
                }
                5 | 6 => {
                    store.undo();
                    model.undo();
                }
                7 | 8 => {
                    store.redo();
                    model.redo();
                }
                _ => {
                    store.reset(step);
                    model.reset(step);
                }
            }

            assert!(store.len() >= 1);
            assert!(store.len() <= capacity);
            assert!(store.cursor() < store.len());
            assert_eq!(store.can_undo(), store.cursor() > 0);
            assert_eq!(store.can_redo(), store.cursor() < store.len() - 1);

            assert_eq!(contents(&store), model.states, "seed {seed} step {step}");
            assert_eq!(store.cursor(), model.cursor, "seed {seed} step {step}");
            assert_eq!(*store.current(), model.states[model.cursor]);
        }
    }
}
