use crate::model::{PackKey, SelectedPack};

use super::derived::latest_version;

/// In-progress pack selection, keyed by `(domain, pack_id)` and kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackSelection {
    packs: Vec<SelectedPack>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added(SelectedPack),
    Removed(SelectedPack),
    /// Nothing to add: the pack has no published version.
    Unchanged,
}

impl PackSelection {
    /// Builds a selection from a server list. A repeated key keeps its first
    /// position and takes the later version.
    pub fn from_snapshot(packs: &[SelectedPack]) -> Self {
        let mut sel = Self::default();
        for p in packs {
            sel.insert(p.clone());
        }
        sel
    }

    pub fn get(&self, key: &PackKey) -> Option<&SelectedPack> {
        self.packs.iter().find(|p| p.key() == *key)
    }

    pub fn contains(&self, key: &PackKey) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, pack: SelectedPack) {
        let key = pack.key();
        match self.packs.iter_mut().find(|p| p.key() == key) {
            Some(slot) => *slot = pack,
            None => self.packs.push(pack),
        }
    }

    pub fn remove(&mut self, key: &PackKey) -> Option<SelectedPack> {
        let idx = self.packs.iter().position(|p| p.key() == *key)?;
        Some(self.packs.remove(idx))
    }

    /// Removes the pack if selected, otherwise adds it at its latest version.
    pub fn toggle(&mut self, key: &PackKey, versions: &[String]) -> Toggle {
        if let Some(removed) = self.remove(key) {
            return Toggle::Removed(removed);
        }
        let Some(version) = latest_version(versions) else {
            return Toggle::Unchanged;
        };
        let pack = SelectedPack::new(&key.domain, &key.pack_id, version);
        self.packs.push(pack.clone());
        Toggle::Added(pack)
    }

    /// Changes the version of an already-selected pack. Returns false when not selected.
    pub fn set_version(&mut self, key: &PackKey, version: &str) -> bool {
        match self.packs.iter_mut().find(|p| p.key() == *key) {
            Some(p) => {
                p.version = version.to_string();
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[SelectedPack] {
        &self.packs
    }

    pub fn to_vec(&self) -> Vec<SelectedPack> {
        self.packs.clone()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedPack> {
        self.packs.iter()
    }
}

#[cfg(test)]
#[path = "../tests/console/selection_tests.rs"]
mod tests;
