//! Rendered-layer handles for visible caches.
//!
//! The renderer owns nothing here; it reads the registry after every sync and
//! draws or drops whatever layers were attached or detached.

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::types::{Cell, CellDescriptor};

new_key_type! {
    pub struct LayerId;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CacheLayer {
    pub descriptor: CellDescriptor,
}

#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: SlotMap<LayerId, CacheLayer>,
    by_cell: HashMap<Cell, LayerId>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a layer for the descriptor's cell, reusing an existing one.
    pub fn attach(&mut self, descriptor: CellDescriptor) -> LayerId {
        let cell = descriptor.cell();
        if let Some(id) = self.by_cell.get(&cell) {
            return *id;
        }
        let id = self.layers.insert(CacheLayer { descriptor });
        self.by_cell.insert(cell, id);
        id
    }

    pub fn detach(&mut self, cell: Cell) -> Option<CacheLayer> {
        let id = self.by_cell.remove(&cell)?;
        self.layers.remove(id)
    }

    pub fn layer_for(&self, cell: Cell) -> Option<LayerId> {
        self.by_cell.get(&cell).copied()
    }

    pub fn get(&self, id: LayerId) -> Option<&CacheLayer> {
        self.layers.get(id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &CacheLayer)> {
        self.layers.iter()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
        self.by_cell.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::LatLng;

    #[test]
    fn attach_is_idempotent_per_cell() {
        let board = Board::new(1e-4, LatLng::new(0.0, 0.0));
        let mut registry = LayerRegistry::new();
        let first = registry.attach(board.describe(Cell::new(1, 1)));
        let second = registry.attach(board.describe(Cell::new(1, 1)));
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn detach_invalidates_handle() {
        let board = Board::new(1e-4, LatLng::new(0.0, 0.0));
        let mut registry = LayerRegistry::new();
        let id = registry.attach(board.describe(Cell::new(0, 3)));

        let removed = registry.detach(Cell::new(0, 3)).expect("layer should be attached");
        assert_eq!(removed.descriptor.cell(), Cell::new(0, 3));
        assert!(registry.get(id).is_none());
        assert!(registry.layer_for(Cell::new(0, 3)).is_none());
        assert!(registry.detach(Cell::new(0, 3)).is_none());
    }
}
