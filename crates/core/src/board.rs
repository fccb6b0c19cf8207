//! Fixed-size geographic grid.
//!
//! Cells are `tile_size` degrees square and anchored at `origin`: cell `(i, j)`
//! covers latitudes `[origin.lat + i*tile, origin.lat + (i+1)*tile)` and the
//! matching longitude band. Neighborhoods are square (Chebyshev) and
//! half-open: offsets run over `-radius..radius` on each axis, so a radius of
//! `r` yields `(2r)^2` cells with the containing cell at offset `(0, 0)`.

use crate::types::{Cell, CellDescriptor, LatLng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Board {
    tile_size: f64,
    origin: LatLng,
}

impl Board {
    pub fn new(tile_size: f64, origin: LatLng) -> Self {
        debug_assert!(tile_size > 0.0 && tile_size.is_finite());
        Self { tile_size, origin }
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    pub fn origin(&self) -> LatLng {
        self.origin
    }

    pub fn cell_at(&self, position: LatLng) -> Cell {
        Cell {
            i: ((position.lat - self.origin.lat) / self.tile_size).floor() as i32,
            j: ((position.lng - self.origin.lng) / self.tile_size).floor() as i32,
        }
    }

    /// Southwest and northeast corners of `cell`.
    pub fn cell_bounds(&self, cell: Cell) -> (LatLng, LatLng) {
        let (i, j) = (f64::from(cell.i), f64::from(cell.j));
        (self.corner(i, j), self.corner(i + 1.0, j + 1.0))
    }

    pub fn describe(&self, cell: Cell) -> CellDescriptor {
        let (southwest, northeast) = self.cell_bounds(cell);
        CellDescriptor { i: cell.i, j: cell.j, southwest, northeast }
    }

    /// Cells past the edge of the `i32` index space are left out.
    pub fn cells_near(&self, position: LatLng, radius: i32) -> Vec<Cell> {
        let center = self.cell_at(position);
        let mut cells = Vec::with_capacity((2 * radius.max(0) as usize).pow(2));
        for di in -radius..radius {
            for dj in -radius..radius {
                cells.extend(center.offset(di, dj));
            }
        }
        cells
    }

    /// Geographic center of `cell`, used for tile-sized player steps.
    pub fn cell_center(&self, cell: Cell) -> LatLng {
        let (southwest, northeast) = self.cell_bounds(cell);
        LatLng {
            lat: (southwest.lat + northeast.lat) / 2.0,
            lng: (southwest.lng + northeast.lng) / 2.0,
        }
    }

    fn corner(&self, i: f64, j: f64) -> LatLng {
        LatLng { lat: self.origin.lat + i * self.tile_size, lng: self.origin.lng + j * self.tile_size }
    }
}
