use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Cell;

/// A collectible unit identified by the cell that minted it and a serial
/// unique within that cell. Coins keep their origin wherever they move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub i: i32,
    pub j: i32,
    pub serial: u32,
}

impl Coin {
    pub const fn new(origin: Cell, serial: u32) -> Self {
        Self { i: origin.i, j: origin.j, serial }
    }

    pub fn origin(&self) -> Cell {
        Cell { i: self.i, j: self.j }
    }

    /// Mints `count` coins for `origin` with serials `0..count`.
    pub fn mint(origin: Cell, count: u32) -> impl Iterator<Item = Coin> {
        (0..count).map(move |serial| Coin::new(origin, serial))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}#{}", self.i, self.j, self.serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_assigns_sequential_serials() {
        let coins: Vec<Coin> = Coin::mint(Cell::new(3, -1), 4).collect();
        assert_eq!(coins.iter().map(|coin| coin.serial).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(coins.iter().all(|coin| coin.origin() == Cell::new(3, -1)));
    }

    #[test]
    fn display_uses_origin_and_serial() {
        assert_eq!(Coin::new(Cell::new(-2, 5), 11).to_string(), "-2:5#11");
    }

    #[test]
    fn wire_shape_is_i_j_serial() {
        let json = serde_json::to_string(&Coin::new(Cell::new(1, 2), 3)).expect("serialize");
        assert_eq!(json, r#"{"i":1,"j":2,"serial":3}"#);
    }
}
