//! Schema-versioned session snapshot.
//!
//! The stored record is a single JSON object with camelCase fields:
//! `formatVersion`, `worldSeed`, `playerPosition`, `playerPoints`,
//! `playerInventory`, `cacheState`, `playerPath`, and `checksumSha256Hex`.
//! The checksum is `hex(SHA-256(body_json))`, where `body_json` is the
//! canonical serialization of every other field. `cacheState` is ordered by
//! key, so the body serializes identically on every save.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::coin::Coin;
use crate::types::LatLng;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub format_version: u32,
    pub world_seed: u64,
    pub player_position: LatLng,
    pub player_points: u64,
    pub player_inventory: Vec<Coin>,
    pub cache_state: BTreeMap<String, String>,
    pub player_path: Vec<LatLng>,
    pub checksum_sha256_hex: String,
}

/// Fields covered by the checksum.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotBody<'a> {
    format_version: u32,
    world_seed: u64,
    player_position: &'a LatLng,
    player_points: u64,
    player_inventory: &'a [Coin],
    cache_state: &'a BTreeMap<String, String>,
    player_path: &'a [LatLng],
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot format version {0}")]
    UnsupportedVersion(u32),
    #[error("snapshot checksum does not match its contents")]
    ChecksumMismatch,
}

impl SessionSnapshot {
    pub fn new(
        world_seed: u64,
        player_position: LatLng,
        player_points: u64,
        player_inventory: Vec<Coin>,
        cache_state: BTreeMap<String, String>,
        player_path: Vec<LatLng>,
    ) -> Result<Self, serde_json::Error> {
        let mut snapshot = Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            world_seed,
            player_position,
            player_points,
            player_inventory,
            cache_state,
            player_path,
            checksum_sha256_hex: String::new(),
        };
        snapshot.checksum_sha256_hex = snapshot.compute_checksum()?;
        Ok(snapshot)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses and verifies a stored snapshot.
    pub fn decode(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(text)?;
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.format_version));
        }
        if snapshot.compute_checksum()? != snapshot.checksum_sha256_hex {
            return Err(SnapshotError::ChecksumMismatch);
        }
        Ok(snapshot)
    }

    fn compute_checksum(&self) -> Result<String, serde_json::Error> {
        let body = SnapshotBody {
            format_version: self.format_version,
            world_seed: self.world_seed,
            player_position: &self.player_position,
            player_points: self.player_points,
            player_inventory: &self.player_inventory,
            cache_state: &self.cache_state,
            player_path: &self.player_path,
        };
        let body_json = serde_json::to_string(&body)?;
        let digest = Sha256::digest(body_json.as_bytes());
        Ok(format!("{digest:x}"))
    }
}
