use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::coin::Coin;
use crate::layers::LayerRegistry;
use crate::memento::Geocache;
use crate::types::{Cell, LatLng};
use crate::world::WorldStore;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: LatLng,
    pub points: u64,
    /// Queue of carried coins; the front is the next one deposited.
    pub inventory: VecDeque<Coin>,
    /// Append-only: one entry per move. A load restores the saved path as-is
    /// rather than appending an entry, so a save/load cycle keeps the path
    /// length unchanged.
    pub path: Vec<LatLng>,
}

impl Player {
    pub fn spawned_at(position: LatLng) -> Self {
        Self { position, points: 0, inventory: VecDeque::new(), path: vec![position] }
    }
}

/// Everything a session owns. `store` is the source of truth; `caches` holds
/// the live coin lists for visible cells only and is rebuilt from `store`.
#[derive(Debug)]
pub struct GameState {
    pub player: Player,
    pub store: WorldStore,
    pub caches: BTreeMap<Cell, Geocache>,
    pub visible: BTreeSet<Cell>,
    pub layers: LayerRegistry,
}

impl GameState {
    pub fn fresh(spawn_position: LatLng) -> Self {
        Self {
            player: Player::spawned_at(spawn_position),
            store: WorldStore::new(),
            caches: BTreeMap::new(),
            visible: BTreeSet::new(),
            layers: LayerRegistry::new(),
        }
    }
}
