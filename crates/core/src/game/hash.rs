//! Stable snapshot hashing for deterministic verification.
//! Two sessions with equal hashes hold the same player, inventory order and
//! World Store contents.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.config.seed);
        let player = &self.state.player;
        hasher.write_u64(player.position.lat.to_bits());
        hasher.write_u64(player.position.lng.to_bits());
        hasher.write_u64(player.points);
        hasher.write_usize(player.path.len());

        hasher.write_usize(player.inventory.len());
        for coin in &player.inventory {
            write_coin(&mut hasher, coin);
        }

        hasher.write_usize(self.state.store.len());
        for (cell, memento) in self.state.store.iter() {
            hasher.write_i32(cell.i);
            hasher.write_i32(cell.j);
            hasher.write(memento.as_bytes());
            hasher.write_u8(0xff);
        }
        hasher.finish()
    }
}

fn write_coin(hasher: &mut Xxh3, coin: &Coin) {
    hasher.write_i32(coin.i);
    hasher.write_i32(coin.j);
    hasher.write_u32(coin.serial);
}
