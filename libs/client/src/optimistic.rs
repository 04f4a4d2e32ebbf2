//! Optimistic membership toggles with explicit confirm-or-revert
//!
//! Favorite/follow style actions flip local state before the backend
//! answers. Each toggle is a reversible action: `begin` applies the change
//! and hands back a receipt, which is later either committed or reverted.
//! A single in-flight guard per key prevents duplicate toggles on the same
//! target while a request is outstanding.

use std::collections::HashSet;
use std::hash::Hash;

/// Receipt for an applied-but-unconfirmed toggle
#[derive(Debug)]
#[must_use = "an applied toggle must be committed or reverted"]
pub struct OptimisticToggle<K> {
    key: K,
    was_member: bool,
}

impl<K> OptimisticToggle<K> {
    /// Membership after the optimistic application
    pub fn active(&self) -> bool {
        !self.was_member
    }
}

/// Membership set with optimistic apply and per-key in-flight guard
#[derive(Debug, Default)]
pub struct OptimisticSet<K> {
    members: HashSet<K>,
    in_flight: HashSet<K>,
}

impl<K: Eq + Hash + Clone> OptimisticSet<K> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Reconcile local membership with server-reported state
    pub fn set_membership(&mut self, key: K, present: bool) {
        if self.in_flight.contains(&key) {
            // An outstanding toggle owns this key; don't fight it
            return;
        }
        if present {
            self.members.insert(key);
        } else {
            self.members.remove(&key);
        }
    }

    /// Apply a toggle optimistically.
    ///
    /// Returns `None` while another toggle for the same key is in flight.
    pub fn begin(&mut self, key: K) -> Option<OptimisticToggle<K>> {
        if !self.in_flight.insert(key.clone()) {
            return None;
        }

        let was_member = self.members.contains(&key);
        if was_member {
            self.members.remove(&key);
        } else {
            self.members.insert(key.clone());
        }

        Some(OptimisticToggle { key, was_member })
    }

    /// Confirm the toggle: the optimistic state becomes final
    pub fn commit(&mut self, toggle: OptimisticToggle<K>) {
        self.in_flight.remove(&toggle.key);
    }

    /// Revert the toggle: membership returns to its prior value
    pub fn revert(&mut self, toggle: OptimisticToggle<K>) {
        if toggle.was_member {
            self.members.insert(toggle.key.clone());
        } else {
            self.members.remove(&toggle.key);
        }
        self.in_flight.remove(&toggle.key);
    }

    /// Drop local knowledge of a settled key.
    ///
    /// Callers that re-read membership from the server on every use can
    /// evict keys once a toggle settles, so the mirror does not accumulate
    /// entries for keys that will never be asked about again. A key with an
    /// outstanding toggle is kept.
    pub fn forget(&mut self, key: &K) {
        if self.in_flight.contains(key) {
            return;
        }
        self.members.remove(key);
    }

    /// Current (possibly optimistic) membership
    pub fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Whether a toggle for this key is awaiting confirmation
    pub fn is_in_flight(&self, key: &K) -> bool {
        self.in_flight.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_applies_immediately_and_commits() {
        let mut set = OptimisticSet::new();

        let toggle = set.begin("42").expect("no toggle in flight");
        assert!(toggle.active());
        assert!(set.contains(&"42"));

        set.commit(toggle);
        assert!(set.contains(&"42"));
        assert!(!set.is_in_flight(&"42"));
    }

    #[test]
    fn revert_restores_prior_membership() {
        let mut set = OptimisticSet::new();
        set.set_membership("42", true);

        // Optimistic removal...
        let toggle = set.begin("42").expect("no toggle in flight");
        assert!(!toggle.active());
        assert!(!set.contains(&"42"));

        // ...rolled back when the backend call fails
        set.revert(toggle);
        assert!(set.contains(&"42"));
        assert!(!set.is_in_flight(&"42"));
    }

    #[test]
    fn duplicate_toggle_is_rejected_while_in_flight() {
        let mut set = OptimisticSet::new();

        let toggle = set.begin("42").expect("no toggle in flight");
        assert!(set.begin("42").is_none());

        // Other keys are unaffected
        let other = set.begin("7").expect("independent key");
        set.commit(other);

        set.commit(toggle);
        assert!(set.begin("42").is_some());
    }

    #[test]
    fn forgetting_settled_keys_leaves_no_residue() {
        let mut set = OptimisticSet::new();

        // Distinct keys, each toggled on and settled, must not accumulate
        for i in 0..100 {
            let key = format!("viewer-{}/favorite/{}", i, i);
            let toggle = set.begin(key.clone()).expect("no toggle in flight");
            set.commit(toggle);
            set.forget(&key);
            assert!(!set.contains(&key));
        }
    }

    #[test]
    fn forget_yields_to_in_flight_toggle() {
        let mut set = OptimisticSet::new();
        let toggle = set.begin("42").expect("no toggle in flight");

        set.forget(&"42");
        assert!(set.contains(&"42"));

        set.commit(toggle);
        set.forget(&"42");
        assert!(!set.contains(&"42"));
    }

    #[test]
    fn reconciliation_yields_to_in_flight_toggle() {
        let mut set = OptimisticSet::new();
        let toggle = set.begin("42").expect("no toggle in flight");

        // A stale server snapshot must not clobber the optimistic state
        set.set_membership("42", false);
        assert!(set.contains(&"42"));

        set.commit(toggle);
    }
}
