//! In-memory hit counter for tracked endpoints.
//!
//! Counts live for the lifetime of the process. The lock is held only for a
//! single increment or a snapshot copy, so handlers never wait on each other
//! for longer than a map update.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Per-path request counts, cloneable across handlers.
#[derive(Clone, Debug, Default)]
pub struct HitCounter {
    counts: Arc<Mutex<BTreeMap<String, u64>>>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another thread panicked mid-increment;
    // the map itself is still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, u64>> {
        self.counts.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Increment the count for `path`, returning the new value.
    pub fn record(&self, path: &str) -> u64 {
        let mut counts = self.lock();
        let count = counts.entry(path.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Ordered copy of all counts.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.lock().clone()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.lock().values().sum()
    }

    /// Ordered copy of all counts together with their sum, taken under one lock.
    pub fn snapshot_with_total(&self) -> (BTreeMap<String, u64>, u64) {
        let counts = self.lock();
        let total = counts.values().sum();
        (counts.clone(), total)
    }
}
