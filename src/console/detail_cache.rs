use std::collections::{HashMap, HashSet};

use crate::model::{PackDetail, PackVersionKey, SelectedPack};

/// Session-lifetime cache of pack metadata keyed by `domain/pack_id/version`.
///
/// Entries are immutable once stored, so merges from racing fetches commute.
/// Nothing is evicted; the catalog bounds the size.
#[derive(Debug, Default)]
pub struct PackDetailCache {
    entries: HashMap<PackVersionKey, PackDetail>,
    in_flight: HashSet<PackVersionKey>,
}

impl PackDetailCache {
    pub fn get(&self, key: &PackVersionKey) -> Option<&PackDetail> {
        self.entries.get(key)
    }

    pub fn lookup(&self, pack: &SelectedPack) -> Option<&PackDetail> {
        self.entries.get(&pack.version_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Returns the targets that are neither cached nor already being fetched,
    /// and marks them as in flight.
    pub fn claim_missing(&mut self, targets: &[SelectedPack]) -> Vec<PackVersionKey> {
        let mut claimed = Vec::new();
        for t in targets {
            let key = t.version_key();
            if self.entries.contains_key(&key) || self.in_flight.contains(&key) {
                continue;
            }
            self.in_flight.insert(key.clone());
            claimed.push(key);
        }
        claimed
    }

    /// Stores fetched details. Existing entries are kept as-is.
    pub fn merge(&mut self, details: Vec<PackDetail>) {
        for d in details {
            self.entries.entry(d.version_key()).or_insert(d);
        }
    }

    pub fn release(&mut self, keys: &[PackVersionKey]) {
        for k in keys {
            self.in_flight.remove(k);
        }
    }
}

#[cfg(test)]
#[path = "../tests/console/detail_cache_tests.rs"]
mod tests;
