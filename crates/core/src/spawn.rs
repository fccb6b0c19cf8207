//! Deterministic cache spawning for never-visited cells.

use crate::luck::{Luck, spawn_key, value_key};
use crate::memento::Geocache;
use crate::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRules {
    pub spawn_rate: f64,
    pub max_coins: u32,
}

/// Whether a fresh cell holds a cache at all.
pub fn spawns_cache(cell: Cell, luck: &dyn Luck, rules: SpawnRules) -> bool {
    luck.roll(&spawn_key(cell)) < rules.spawn_rate
}

/// Initial coin count for a fresh cache, in `0..max_coins`.
pub fn coin_count(cell: Cell, luck: &dyn Luck, rules: SpawnRules) -> u32 {
    let scaled = (luck.roll(&value_key(cell)) * f64::from(rules.max_coins)).floor() as u32;
    scaled.min(rules.max_coins.saturating_sub(1))
}

pub fn spawn_cache(cell: Cell, luck: &dyn Luck, rules: SpawnRules) -> Option<Geocache> {
    spawns_cache(cell, luck, rules).then(|| Geocache::generate(cell, coin_count(cell, luck, rules)))
}
