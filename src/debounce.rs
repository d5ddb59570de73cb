//! Per-key debouncing driven by host-supplied timestamps.
//!
//! Scheduling a key that is already pending replaces the pending value and
//! restarts its quiet period. Nothing fires on its own: the host calls
//! [`Debouncer::take_due`] from its event loop with the current time.

use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

struct Pending<V> {
    value: V,
    deadline: Instant,
}

pub struct Debouncer<K, V> {
    window: Duration,
    pending: HashMap<K, Pending<V>>,
}

impl<K: Eq + Hash + Copy + Ord, V> Debouncer<K, V> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `true` when an earlier pending value was cancelled.
    pub fn schedule(&mut self, key: K, value: V, now: Instant) -> bool {
        let deadline = now + self.window;
        self.pending
            .insert(key, Pending { value, deadline })
            .is_some()
    }

    /// Removes and returns every entry whose quiet period has elapsed, ordered by key.
    pub fn take_due(&mut self, now: Instant) -> Vec<(K, V)> {
        let mut due: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, pending)| pending.deadline <= now)
            .map(|(key, _)| *key)
            .collect();
        due.sort();

        due.into_iter()
            .filter_map(|key| self.pending.remove(&key).map(|pending| (key, pending.value)))
            .collect()
    }

    pub fn cancel(&mut self, key: &K) -> Option<V> {
        self.pending.remove(key).map(|pending| pending.value)
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|pending| pending.deadline).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn only_the_last_edit_in_a_burst_fires() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(150));

        assert!(!debouncer.schedule(1, "a", start));
        assert!(debouncer.schedule(1, "b", start + ms(50)));
        assert!(debouncer.schedule(1, "c", start + ms(100)));

        assert!(debouncer.take_due(start + ms(200)).is_empty());
        assert_eq!(debouncer.take_due(start + ms(250)), vec![(1, "c")]);
        assert!(debouncer.take_due(start + ms(1000)).is_empty());
    }

    #[test]
    fn keys_are_independent() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(150));
        debouncer.schedule(2, "late", start + ms(100));
        debouncer.schedule(1, "early", start);

        assert_eq!(debouncer.take_due(start + ms(150)), vec![(1, "early")]);
        assert!(debouncer.is_pending(&2));
        assert_eq!(debouncer.next_deadline(), Some(start + ms(250)));
        assert_eq!(debouncer.take_due(start + ms(250)), vec![(2, "late")]);
    }

    #[test]
    fn cancel_all_drops_everything() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(150));
        debouncer.schedule(1, (), start);
        debouncer.schedule(2, (), start);

        assert_eq!(debouncer.cancel_all(), 2);
        assert!(debouncer.take_due(start + ms(500)).is_empty());
        assert_eq!(debouncer.next_deadline(), None);
    }
}
