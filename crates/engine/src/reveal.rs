//! Entrance observer - one-time staggered reveal of page cards.
//!
//! The host reports visibility changes in batches (one batch per viewport
//! event, like an intersection observer callback). Every watched element
//! that is visible in a batch is revealed once, with a delay growing by
//! `stagger_ms` per element revealed in that batch, and is then unobserved.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::RevealTiming;

/// One visibility report from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityEntry<K> {
    pub key: K,
    pub is_intersecting: bool,
}

impl<K> VisibilityEntry<K> {
    pub fn visible(key: K) -> Self {
        Self {
            key,
            is_intersecting: true,
        }
    }

    pub fn hidden(key: K) -> Self {
        Self {
            key,
            is_intersecting: false,
        }
    }
}

/// A reveal to apply: add the visible class after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal<K> {
    pub key: K,
    pub delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct RevealObserver<K> {
    watched: HashSet<K>,
    stagger_ms: u32,
}

impl<K: Eq + Hash + Clone> RevealObserver<K> {
    pub fn new(keys: impl IntoIterator<Item = K>, timing: RevealTiming) -> Self {
        Self {
            watched: keys.into_iter().collect(),
            stagger_ms: timing.stagger_ms,
        }
    }

    /// `None` when the host cannot observe visibility: the feature is skipped
    /// and elements keep their default (visible) styling.
    pub fn if_supported(
        supported: bool,
        keys: impl IntoIterator<Item = K>,
        timing: RevealTiming,
    ) -> Option<Self> {
        supported.then(|| Self::new(keys, timing))
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    pub fn remaining(&self) -> usize {
        self.watched.len()
    }

    pub fn is_done(&self) -> bool {
        self.watched.is_empty()
    }

    pub fn observe_batch(&mut self, entries: &[VisibilityEntry<K>]) -> Vec<Reveal<K>> {
        let mut reveals = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || !self.watched.remove(&entry.key) {
                continue;
            }
            let delay_ms = (reveals.len() as u64).saturating_mul(u64::from(self.stagger_ms));
            reveals.push(Reveal {
                key: entry.key.clone(),
                delay_ms,
            });
        }
        reveals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> RevealTiming {
        RevealTiming { stagger_ms: 100 }
    }

    #[test]
    fn visible_entries_are_staggered_within_a_batch() {
        let mut obs = RevealObserver::new(["a", "b", "c"], timing());
        let reveals = obs.observe_batch(&[
            VisibilityEntry::visible("a"),
            VisibilityEntry::hidden("b"),
            VisibilityEntry::visible("c"),
        ]);
        assert_eq!(
            reveals,
            vec![
                Reveal { key: "a", delay_ms: 0 },
                Reveal { key: "c", delay_ms: 100 },
            ]
        );
        assert!(obs.is_watching(&"b"));
        assert_eq!(obs.remaining(), 1);
    }

    #[test]
    fn each_element_reveals_at_most_once() {
        let mut obs = RevealObserver::new([1, 2], timing());
        assert_eq!(obs.observe_batch(&[VisibilityEntry::visible(1)]).len(), 1);
        assert!(obs.observe_batch(&[VisibilityEntry::visible(1)]).is_empty());

        // Stagger restarts with each batch.
        let second = obs.observe_batch(&[VisibilityEntry::visible(2)]);
        assert_eq!(second, vec![Reveal { key: 2, delay_ms: 0 }]);
        assert!(obs.is_done());
    }

    #[test]
    fn large_stagger_does_not_overflow() {
        let keys = ["a", "b", "c"];
        let mut obs = RevealObserver::new(keys, RevealTiming { stagger_ms: 3_000_000_000 });
        let entries: Vec<_> = keys.into_iter().map(VisibilityEntry::visible).collect();
        let reveals = obs.observe_batch(&entries);
        assert_eq!(reveals[2].delay_ms, 6_000_000_000);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut obs = RevealObserver::new(["a"], timing());
        assert!(obs.observe_batch(&[VisibilityEntry::visible("zzz")]).is_empty());
        assert_eq!(obs.remaining(), 1);
    }

    #[test]
    fn unsupported_host_skips_feature() {
        assert!(RevealObserver::if_supported(false, ["a"], timing()).is_none());
        assert!(RevealObserver::if_supported(true, ["a"], timing()).is_some());
    }
}
