//! Cache snapshots.
//!
//! A memento is the JSON object `{"i":..,"j":..,"coins":[{"i":..,"j":..,"serial":..},..]}`.
//! The origin is redundant with the World Store key but kept so every
//! memento describes itself. Coin order is preserved exactly.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coin::Coin;
use crate::types::Cell;

/// Save/restore capability for anything kept in the World Store.
pub trait Memento: Sized {
    fn to_memento(&self) -> String;
    fn from_memento(memento: &str) -> Result<Self, MementoError>;
}

#[derive(Debug, Error)]
pub enum MementoError {
    #[error("memento is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("memento for cell {cell} holds coin {coin} more than once")]
    DuplicateCoin { cell: Cell, coin: Coin },
}

/// A cache's coin list. The front of the queue is the next coin collected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geocache {
    cell: Cell,
    coins: VecDeque<Coin>,
}

#[derive(Serialize)]
struct CacheRecordRef<'a> {
    i: i32,
    j: i32,
    coins: &'a VecDeque<Coin>,
}

#[derive(Deserialize)]
struct CacheRecord {
    i: i32,
    j: i32,
    coins: VecDeque<Coin>,
}

impl Geocache {
    /// A freshly spawned cache holding `count` coins minted in `cell`.
    pub fn generate(cell: Cell, count: u32) -> Self {
        Self { cell, coins: Coin::mint(cell, count).collect() }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn coins(&self) -> &VecDeque<Coin> {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub(crate) fn take_front(&mut self) -> Option<Coin> {
        self.coins.pop_front()
    }

    pub(crate) fn push_back(&mut self, coin: Coin) {
        self.coins.push_back(coin);
    }
}

impl Memento for Geocache {
    fn to_memento(&self) -> String {
        let record = CacheRecordRef { i: self.cell.i, j: self.cell.j, coins: &self.coins };
        serde_json::to_string(&record).expect("cache records contain only integers")
    }

    fn from_memento(memento: &str) -> Result<Self, MementoError> {
        let record: CacheRecord = serde_json::from_str(memento)?;
        let cell = Cell { i: record.i, j: record.j };

        let mut seen = HashSet::with_capacity(record.coins.len());
        if let Some(coin) = record.coins.iter().find(|coin| !seen.insert(**coin)) {
            return Err(MementoError::DuplicateCoin { cell, coin: *coin });
        }

        Ok(Self { cell, coins: record.coins })
    }
}
