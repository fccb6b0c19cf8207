//! Neighborhood sync: restores or spawns caches entering view and flushes
//! caches leaving it.
//!
//! A cell that already has a memento keeps its cache even if the spawn
//! predicate would now reject it; only cells never seen before are gated.
//! Live coin lists are written through on every transfer, so a resident cache
//! is reused as-is and only non-resident cells are restored from the store.

use std::collections::BTreeSet;

use super::*;

/// Cells whose cache changed residency during one sync.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub spawned: Vec<Cell>,
    pub restored: Vec<Cell>,
    pub evicted: Vec<Cell>,
}

impl SyncReport {
    pub fn is_quiet(&self) -> bool {
        self.spawned.is_empty() && self.restored.is_empty() && self.evicted.is_empty()
    }
}

impl Game {
    pub fn sync(&mut self) -> SyncReport {
        let visible: BTreeSet<Cell> = self
            .board
            .cells_near(self.state.player.position, self.config.neighborhood_radius)
            .into_iter()
            .collect();
        let rules = self.spawn_rules();
        let mut report = SyncReport::default();

        for &cell in &visible {
            if self.state.caches.contains_key(&cell) {
                continue;
            }
            if let Some(memento) = self.state.store.get(cell) {
                let cache = restore_stored(cell, memento);
                debug!("restored cache {cell} with {} coins", cache.len());
                self.state.caches.insert(cell, cache);
                report.restored.push(cell);
            } else if let Some(cache) = spawn_cache(cell, self.luck.as_ref(), rules) {
                debug!("spawned cache {cell} with {} coins", cache.len());
                self.state.store.record(&cache);
                self.state.caches.insert(cell, cache);
                report.spawned.push(cell);
            }
        }

        let departed: Vec<Cell> =
            self.state.caches.keys().filter(|cell| !visible.contains(cell)).copied().collect();
        for cell in departed {
            if let Some(cache) = self.state.caches.remove(&cell) {
                self.state.store.record(&cache);
            }
            self.state.layers.detach(cell);
            report.evicted.push(cell);
        }
        if !report.evicted.is_empty() {
            debug!("flushed {} caches leaving view", report.evicted.len());
        }

        for &cell in self.state.caches.keys() {
            self.state.layers.attach(self.board.describe(cell));
        }
        self.state.visible = visible;
        report
    }
}
