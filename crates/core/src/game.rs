use std::collections::{BTreeMap, VecDeque};

use log::{debug, info, warn};

use crate::board::Board;
use crate::coin::Coin;
use crate::config::{ConfigError, WorldConfig};
use crate::layers::LayerRegistry;
use crate::luck::{Luck, SeededLuck};
use crate::memento::{Geocache, Memento};
use crate::spawn::{SpawnRules, spawn_cache};
use crate::state::{GameState, Player};
use crate::types::*;
use crate::world::WorldStore;

mod hash;
mod movement;
mod persistence;
mod sync;
mod transfer;

#[cfg(test)]
mod test_support;

pub use persistence::SaveError;
pub use sync::SyncReport;

/// Single owner of a player's session: world generation, coin transfers and
/// snapshotting all go through here.
pub struct Game {
    config: WorldConfig,
    board: Board,
    luck: Box<dyn Luck>,
    state: GameState,
}

impl Game {
    /// Starts a session at the configured spawn position with the seeded
    /// world generator.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let luck = SeededLuck::new(config.seed);
        Self::with_luck(config, luck)
    }

    pub fn with_luck(config: WorldConfig, luck: impl Luck + 'static) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.board();
        let state = GameState::fresh(config.spawn_position);
        let mut game = Self { config, board, luck: Box::new(luck), state };
        game.sync();
        Ok(game)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn store(&self) -> &WorldStore {
        &self.state.store
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.state.layers
    }

    pub fn inventory(&self) -> &VecDeque<Coin> {
        &self.state.player.inventory
    }

    /// Live coin list of a visible cache.
    pub fn cache(&self, cell: Cell) -> Option<&Geocache> {
        self.state.caches.get(&cell)
    }

    pub fn player_cell(&self) -> Cell {
        self.board.cell_at(self.state.player.position)
    }

    /// Every visible cache with its bounds, in cell order.
    pub fn visible_caches(&self) -> impl Iterator<Item = (CellDescriptor, &Geocache)> + '_ {
        self.state.caches.iter().map(|(cell, cache)| (self.board.describe(*cell), cache))
    }

    /// Every coin in the world: all stored caches followed by the inventory.
    pub fn all_coins(&self) -> Vec<Coin> {
        let mut coins = Vec::new();
        for (cell, memento) in self.state.store.iter() {
            coins.extend(restore_stored(cell, memento).coins().iter().copied());
        }
        coins.extend(self.state.player.inventory.iter().copied());
        coins
    }

    /// Coin count per origin cell across every cache and the inventory.
    pub fn coin_census(&self) -> BTreeMap<Cell, usize> {
        let mut census = BTreeMap::new();
        for coin in self.all_coins() {
            *census.entry(coin.origin()).or_insert(0) += 1;
        }
        census
    }

    fn spawn_rules(&self) -> SpawnRules {
        SpawnRules { spawn_rate: self.config.spawn_rate, max_coins: self.config.max_coins }
    }
}

/// Mementos inside the World Store were produced by `to_memento` or validated
/// on load, so a parse failure here is a broken invariant.
fn restore_stored(cell: Cell, memento: &str) -> Geocache {
    Geocache::from_memento(memento)
        .unwrap_or_else(|err| panic!("World Store memento for cell {cell} is invalid: {err}"))
}
