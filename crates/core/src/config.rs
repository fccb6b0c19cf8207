use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::types::LatLng;

/// Where the player starts and returns to on reset.
pub const DEFAULT_SPAWN_POSITION: LatLng = LatLng::new(36.98949379578401, -122.06277128548504);

/// Largest accepted `neighborhood_radius`; a sync visits `(2r)^2` cells.
pub const MAX_NEIGHBORHOOD_RADIUS: i32 = 1024;

/// Tunables for world generation. Every field has a default so partial config
/// files are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub seed: u64,
    pub tile_size_degrees: f64,
    pub origin: LatLng,
    pub spawn_position: LatLng,
    pub neighborhood_radius: i32,
    pub spawn_rate: f64,
    /// Scale applied to the coin-count draw; a cache holds `0..max_coins` coins.
    pub max_coins: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            tile_size_degrees: 1e-4,
            origin: LatLng::new(0.0, 0.0),
            spawn_position: DEFAULT_SPAWN_POSITION,
            neighborhood_radius: 8,
            spawn_rate: 0.1,
            max_coins: 20,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tile size must be a positive finite number of degrees, got {0}")]
    TileSize(f64),
    #[error("spawn rate must lie in [0, 1], got {0}")]
    SpawnRate(f64),
    #[error("neighborhood radius must lie in [0, {max}], got {0}", max = MAX_NEIGHBORHOOD_RADIUS)]
    Radius(i32),
    #[error("{field} must be a position within latitude [-90, 90] and longitude [-180, 180]")]
    Position { field: &'static str },
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size_degrees.is_finite() && self.tile_size_degrees > 0.0) {
            return Err(ConfigError::TileSize(self.tile_size_degrees));
        }
        if !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(ConfigError::SpawnRate(self.spawn_rate));
        }
        if !(0..=MAX_NEIGHBORHOOD_RADIUS).contains(&self.neighborhood_radius) {
            return Err(ConfigError::Radius(self.neighborhood_radius));
        }
        if !self.origin.is_geographic() {
            return Err(ConfigError::Position { field: "origin" });
        }
        if !self.spawn_position.is_geographic() {
            return Err(ConfigError::Position { field: "spawn_position" });
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.tile_size_degrees, self.origin)
    }
}
