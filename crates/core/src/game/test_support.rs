//! Shared fixtures for the `game` test suite.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

/// Luck backed by a shared, editable table. Unlisted keys roll 0.99, which
/// never spawns at the default rate.
#[derive(Clone, Default)]
pub(super) struct TableLuck(Rc<RefCell<HashMap<String, f64>>>);

impl TableLuck {
    pub(super) fn set(&self, key: &str, value: f64) {
        self.0.borrow_mut().insert(key.to_string(), value);
    }
}

impl Luck for TableLuck {
    fn roll(&self, key: &str) -> f64 {
        self.0.borrow().get(key).copied().unwrap_or(0.99)
    }
}

pub(super) fn origin_config(radius: i32) -> WorldConfig {
    let board = Board::new(1e-4, LatLng::new(0.0, 0.0));
    WorldConfig {
        spawn_position: board.cell_center(Cell::new(0, 0)),
        neighborhood_radius: radius,
        ..WorldConfig::default()
    }
}

/// A game whose only caches are at (0,0) with 7 coins and (1,-2) with 3 coins.
pub(super) fn two_cache_game() -> (Game, TableLuck) {
    let luck = TableLuck::default();
    luck.set("0,0", 0.05);
    luck.set("0,0,value", 0.37);
    luck.set("1,-2", 0.0);
    luck.set("1,-2,value", 0.16);
    let game = Game::with_luck(origin_config(8), luck.clone()).expect("valid config");
    (game, luck)
}

pub(super) fn walk(game: &mut Game, direction: Direction, steps: usize) {
    for _ in 0..steps {
        game.move_step(direction);
    }
}

pub(super) fn serials(cache: &Geocache) -> Vec<u32> {
    cache.coins().iter().map(|coin| coin.serial).collect()
}
