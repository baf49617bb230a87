//! Square grid with four edges per cell

use crate::spatial::topology::{Location, Topology};

/// Row/column offsets for N, E, S, W
const SQUARE_OFFSETS: [[i32; 2]; 4] = [[-1, 0], [0, 1], [1, 0], [0, -1]];

/// `size` x `size` grid visited in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGrid {
    size: usize,
}

impl SquareGrid {
    /// Create a square grid with `size` rows and columns
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of rows (and columns)
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl Topology for SquareGrid {
    fn edges_per_cell(&self) -> usize {
        SQUARE_OFFSETS.len()
    }

    fn locations(&self) -> Vec<Location> {
        let size = self.size as i32;
        (0..size)
            .flat_map(|row| (0..size).map(move |col| Location::new(row, col)))
            .collect()
    }

    fn contains(&self, location: Location) -> bool {
        let size = self.size as i32;
        (0..size).contains(&location.row) && (0..size).contains(&location.col)
    }

    fn index_of(&self, location: Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        Some(location.row as usize * self.size + location.col as usize)
    }

    fn step(&self, location: Location, direction: usize) -> Location {
        SQUARE_OFFSETS
            .get(direction % SQUARE_OFFSETS.len())
            .map_or(location, |&delta| location.offset(delta))
    }
}
