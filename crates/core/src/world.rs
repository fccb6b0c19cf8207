//! The durable cell-key to memento mapping.
//!
//! Entries are only ever added or overwritten; the whole store is cleared on a
//! full reset and nowhere else.

use std::collections::BTreeMap;

use crate::memento::{Geocache, Memento};
use crate::types::{Cell, CellKeyError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldStore {
    entries: BTreeMap<Cell, String>,
}

impl WorldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<&str> {
        self.entries.get(&cell).map(String::as_str)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &str)> + '_ {
        self.entries.iter().map(|(cell, memento)| (*cell, memento.as_str()))
    }

    /// Serializes `cache` into its slot, replacing any previous memento.
    pub fn record(&mut self, cache: &Geocache) {
        self.entries.insert(cache.cell(), cache.to_memento());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keyed by the canonical `"i,j"` strings used on disk.
    pub fn to_keyed_map(&self) -> BTreeMap<String, String> {
        self.entries.iter().map(|(cell, memento)| (cell.key(), memento.clone())).collect()
    }

    pub fn from_keyed_map(map: BTreeMap<String, String>) -> Result<Self, CellKeyError> {
        let mut entries = BTreeMap::new();
        for (key, memento) in map {
            entries.insert(key.parse::<Cell>()?, memento);
        }
        Ok(Self { entries })
    }
}
