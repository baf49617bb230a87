//! Hexagonal grid of flat-topped cells in axial coordinates
//!
//! The board is itself a hexagon with `size` cells along each side, so it holds
//! `3 * size * (size - 1) + 1` cells. Axial `(q, r)` is stored as
//! `Location { row: r, col: q }` and the centre cell is `(0, 0)`.

use crate::spatial::topology::{Location, Topology};

/// Row/column offsets for N, NE, SE, S, SW, NW
const HEX_OFFSETS: [[i32; 2]; 6] = [[-1, 0], [-1, 1], [0, 1], [1, 0], [1, -1], [0, -1]];

/// Hexagon of hexagonal cells visited in `(row, col)` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGrid {
    size: usize,
}

impl HexGrid {
    /// Create a hex grid with `size` cells per side
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Cells per side
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Hex distance of a location from the centre cell
    pub const fn ring(location: Location) -> i32 {
        let q = location.col;
        let r = location.row;
        let s = -q - r;
        let a = q.abs();
        let b = r.abs();
        let c = s.abs();
        let ab = if a > b { a } else { b };
        if ab > c { ab } else { c }
    }

    const fn radius(&self) -> i32 {
        self.size as i32 - 1
    }

    /// Smallest axial `q` on a row
    const fn row_start(&self, row: i32) -> i32 {
        let radius = self.radius();
        if row < 0 { -radius - row } else { -radius }
    }

    /// Number of cells on a row
    const fn row_len(&self, row: i32) -> usize {
        (2 * self.radius() + 1 - row.abs()) as usize
    }
}

impl Topology for HexGrid {
    fn edges_per_cell(&self) -> usize {
        HEX_OFFSETS.len()
    }

    fn locations(&self) -> Vec<Location> {
        let radius = self.radius();
        (-radius..=radius)
            .flat_map(|row| (-radius..=radius).map(move |col| Location::new(row, col)))
            .filter(|&location| self.contains(location))
            .collect()
    }

    fn contains(&self, location: Location) -> bool {
        Self::ring(location) <= self.radius()
    }

    fn index_of(&self, location: Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        let before: usize = (-self.radius()..location.row)
            .map(|row| self.row_len(row))
            .sum();
        Some(before + (location.col - self.row_start(location.row)) as usize)
    }

    fn step(&self, location: Location, direction: usize) -> Location {
        HEX_OFFSETS
            .get(direction % HEX_OFFSETS.len())
            .map_or(location, |&delta| location.offset(delta))
    }
}
