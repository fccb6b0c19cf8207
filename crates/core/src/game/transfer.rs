//! Coin transfers between a visible cache and the player's inventory.
//! Each transfer moves one coin and re-serializes the touched cache before
//! returning. An empty source list is a silent no-op.

use super::*;

impl Game {
    /// Moves the front coin of the cache at `cell` to the back of the inventory.
    pub fn collect(&mut self, cell: Cell) -> Option<Coin> {
        let Some(cache) = self.state.caches.get_mut(&cell) else {
            debug!("collect ignored: no visible cache at {cell}");
            return None;
        };
        let coin = cache.take_front()?;
        self.state.player.inventory.push_back(coin);
        self.state.store.record(cache);
        debug!("collected {coin} from {cell}");
        Some(coin)
    }

    /// Moves the front inventory coin to the back of the cache at `cell`.
    pub fn deposit(&mut self, cell: Cell) -> Option<Coin> {
        let Some(cache) = self.state.caches.get_mut(&cell) else {
            debug!("deposit ignored: no visible cache at {cell}");
            return None;
        };
        let coin = self.state.player.inventory.pop_front()?;
        cache.push_back(coin);
        self.state.store.record(cache);
        debug!("deposited {coin} into {cell}");
        Some(coin)
    }
}
