use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A continuous geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Latitude in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_geographic(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One tile of the geographic grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub i: i32,
    pub j: i32,
}

impl Cell {
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// The World Store key for this cell: comma-joined decimal indices.
    pub fn key(self) -> String {
        self.to_string()
    }

    /// The cell `(di, dj)` away, or `None` past the edge of the index space.
    pub fn offset(self, di: i32, dj: i32) -> Option<Self> {
        Some(Self { i: self.i.checked_add(di)?, j: self.j.checked_add(dj)? })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.i, self.j)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellKeyError(pub String);

impl fmt::Display for CellKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a cell key", self.0)
    }
}

impl FromStr for Cell {
    type Err = CellKeyError;

    /// Accepts exactly the output of [`Cell::key`]: no whitespace, no `+`, no
    /// leading zeros, and `-` only in front of a non-zero value.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || CellKeyError(key.to_string());
        let (i, j) = key.split_once(',').ok_or_else(invalid)?;
        let i = parse_canonical_index(i).ok_or_else(invalid)?;
        let j = parse_canonical_index(j).ok_or_else(invalid)?;
        Ok(Self { i, j })
    }
}

fn parse_canonical_index(raw: &str) -> Option<i32> {
    let value = raw.parse::<i32>().ok()?;
    (value.to_string() == raw).then_some(value)
}

/// The collaborator-facing view of a cell: indices plus geographic bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellDescriptor {
    pub i: i32,
    pub j: i32,
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl CellDescriptor {
    pub fn cell(&self) -> Cell {
        Cell { i: self.i, j: self.j }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Cell-index delta for one step: `i` follows latitude, `j` follows longitude.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (1, 0),
            Self::South => (-1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_key_round_trips_through_from_str() {
        for cell in [Cell::new(0, 0), Cell::new(-3, 17), Cell::new(i32::MIN, i32::MAX)] {
            let parsed: Cell = cell.key().parse().expect("canonical key should parse");
            assert_eq!(parsed, cell);
        }
    }

    #[test]
    fn cell_key_rejects_non_canonical_forms() {
        for raw in ["01,2", "1, 2", "+1,2", "-0,1", "1,2,3", "1;2", "", ",", "a,b"] {
            assert!(raw.parse::<Cell>().is_err(), "'{raw}' should be rejected");
        }
    }

    #[test]
    fn offset_stops_at_index_edge() {
        assert_eq!(Cell::new(2, -3).offset(-1, 4), Some(Cell::new(1, 1)));
        assert_eq!(Cell::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(Cell::new(0, i32::MIN).offset(0, -1), None);
    }

    #[test]
    fn geographic_range_is_inclusive() {
        assert!(LatLng::new(90.0, -180.0).is_geographic());
        assert!(!LatLng::new(90.5, 0.0).is_geographic());
        assert!(!LatLng::new(1.0e6, 0.0).is_geographic());
        assert!(!LatLng::new(0.0, f64::NAN).is_geographic());
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (di, dj) = direction.delta();
            assert_eq!(di.abs() + dj.abs(), 1);
        }
    }
}
