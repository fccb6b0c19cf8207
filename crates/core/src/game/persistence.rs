//! Session save, load and reset against durable storage.
//!
//! Loading is all-or-nothing: the snapshot and every memento inside it are
//! validated before any live state is replaced. Anything unreadable counts as
//! "no saved state".

use std::collections::HashSet;
use std::io;

use thiserror::Error;

use super::*;
use crate::session::SessionSnapshot;
use crate::storage::{GAME_STATE_KEY, Storage};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("storage failure: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode session snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Game {
    /// Captures the player and the entire World Store.
    pub fn snapshot(&self) -> Result<SessionSnapshot, serde_json::Error> {
        let player = &self.state.player;
        SessionSnapshot::new(
            self.config.seed,
            player.position,
            player.points,
            player.inventory.iter().copied().collect(),
            self.state.store.to_keyed_map(),
            player.path.clone(),
        )
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), SaveError> {
        let encoded = self.snapshot()?.encode()?;
        storage.write(GAME_STATE_KEY, &encoded)?;
        info!(
            "saved session: {} caches, {} coins carried",
            self.state.store.len(),
            self.state.player.inventory.len()
        );
        Ok(())
    }

    /// Returns whether a usable snapshot existed. On success every cache's coin
    /// list is rebuilt from its memento and the neighborhood is re-synced.
    pub fn load(&mut self, storage: &dyn Storage) -> bool {
        let text = match storage.read(GAME_STATE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return false,
            Err(err) => {
                warn!("could not read saved session: {err}");
                return false;
            }
        };
        let snapshot = match SessionSnapshot::decode(&text) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("ignoring saved session: {err}");
                return false;
            }
        };
        match self.restore(snapshot) {
            Ok(()) => true,
            Err(reason) => {
                warn!("ignoring saved session: {reason}");
                false
            }
        }
    }

    /// Clears the player, the World Store and durable storage, then respawns
    /// the neighborhood around the spawn position.
    pub fn reset(&mut self, storage: &mut dyn Storage) -> Result<SyncReport, SaveError> {
        self.state = GameState::fresh(self.config.spawn_position);
        let report = self.sync();
        storage.remove(GAME_STATE_KEY)?;
        info!("session reset; {} caches around spawn", self.state.caches.len());
        Ok(report)
    }

    fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), String> {
        let store =
            WorldStore::from_keyed_map(snapshot.cache_state).map_err(|err| err.to_string())?;
        let mut caches = BTreeMap::new();
        for (cell, memento) in store.iter() {
            let cache =
                Geocache::from_memento(memento).map_err(|err| format!("cache {cell}: {err}"))?;
            if cache.cell() != cell {
                return Err(format!("cache stored under {cell} describes cell {}", cache.cell()));
            }
            caches.insert(cell, cache);
        }
        let mut seen = HashSet::new();
        let mut every_coin =
            caches.values().flat_map(|cache| cache.coins()).chain(&snapshot.player_inventory);
        if let Some(coin) = every_coin.find(|coin| !seen.insert(**coin)) {
            return Err(format!("coin {coin} is held in more than one place"));
        }
        if !snapshot.player_position.is_geographic() {
            return Err("player position is outside geographic range".to_string());
        }

        if snapshot.world_seed != self.config.seed {
            info!("adopting saved world seed {}", snapshot.world_seed);
            self.config.seed = snapshot.world_seed;
            self.luck = Box::new(SeededLuck::new(snapshot.world_seed));
        }

        let restored_caches = caches.len();
        self.state = GameState {
            player: Player {
                position: snapshot.player_position,
                points: snapshot.player_points,
                inventory: snapshot.player_inventory.into(),
                path: snapshot.player_path,
            },
            store,
            caches,
            visible: Default::default(),
            layers: LayerRegistry::new(),
        };
        self.sync();
        info!("loaded session: {restored_caches} caches rebuilt from mementos");
        Ok(())
    }
}
