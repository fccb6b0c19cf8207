pub mod board;
pub mod coin;
pub mod config;
pub mod game;
pub mod layers;
pub mod luck;
pub mod memento;
pub mod session;
pub mod spawn;
pub mod state;
pub mod storage;
pub mod types;
pub mod world;

pub use board::Board;
pub use coin::Coin;
pub use config::{ConfigError, WorldConfig};
pub use game::{Game, SaveError, SyncReport};
pub use layers::{CacheLayer, LayerId, LayerRegistry};
pub use luck::{Luck, SeededLuck};
pub use memento::{Geocache, Memento, MementoError};
pub use session::{SessionSnapshot, SnapshotError};
pub use state::{GameState, Player};
pub use storage::{GAME_STATE_KEY, MemoryStorage, Storage};
pub use types::*;
pub use world::WorldStore;
