//! Grid shape abstraction
//!
//! A topology fixes the set of locations, the order the search visits them in,
//! and which edge of a cell touches which edge of its neighbour. Board and
//! search code only ever talk to the [`Topology`] trait, so a new grid shape
//! needs nothing beyond an implementation of it.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::io::configuration::{DEFAULT_SHAPE, DEFAULT_SIZE, MAX_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::hex::HexGrid;
use crate::spatial::square::SquareGrid;

/// Coordinate of one cell
///
/// Square grids use row/column. Hex grids store axial `(q, r)` as
/// `col = q`, `row = r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    /// Row (or axial `r`)
    pub row: i32,
    /// Column (or axial `q`)
    pub col: i32,
}

impl Location {
    /// Create a location
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a row/column offset
    #[must_use]
    pub const fn offset(self, delta: [i32; 2]) -> Self {
        Self {
            row: self.row + delta[0],
            col: self.col + delta[1],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One side of a shared boundary between two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The adjacent cell
    pub location: Location,
    /// Position of the adjacent cell in the visiting order
    pub index: usize,
    /// Edge of the querying cell on the shared boundary
    pub self_edge: usize,
    /// Edge of the adjacent cell on the shared boundary
    pub neighbor_edge: usize,
}

/// Grid shape selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Square cells with four edges (N, E, S, W)
    Square,
    /// Flat-topped hexagonal cells with six edges (N, NE, SE, S, SW, NW)
    Hex,
}

impl Shape {
    /// Edges per cell for this shape
    pub const fn edges_per_cell(self) -> usize {
        match self {
            Self::Square => 4,
            Self::Hex => 6,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Hex => write!(f, "hex"),
        }
    }
}

/// Shape and size of the grid to solve on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyConfig {
    /// Cell shape
    pub shape: Shape,
    /// Side length in cells
    pub size: usize,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            shape: DEFAULT_SHAPE,
            size: DEFAULT_SIZE,
        }
    }
}

impl TopologyConfig {
    /// Square grid of `size` x `size` cells
    pub const fn square(size: usize) -> Self {
        Self {
            shape: Shape::Square,
            size,
        }
    }

    /// Hexagon of hexagons with `size` cells per side
    pub const fn hex(size: usize) -> Self {
        Self {
            shape: Shape::Hex,
            size,
        }
    }

    /// Instantiate the configured topology
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size is zero or above `MAX_GRID_SIZE`.
    pub fn build(&self) -> Result<Box<dyn Topology>> {
        if self.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"grid size must be positive",
            ));
        }
        if self.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("grid size must not exceed {MAX_GRID_SIZE}"),
            ));
        }

        Ok(match self.shape {
            Shape::Square => Box::new(SquareGrid::new(self.size)),
            Shape::Hex => Box::new(HexGrid::new(self.size)),
        })
    }
}

/// Capability interface every grid shape implements
pub trait Topology: fmt::Debug + Send + Sync {
    /// Number of edges on each cell
    fn edges_per_cell(&self) -> usize;

    /// Every location, in the fixed order the search fills them
    fn locations(&self) -> Vec<Location>;

    /// Test whether a coordinate is part of the grid
    fn contains(&self, location: Location) -> bool;

    /// Coordinate across edge `direction`, whether or not it is on the grid
    fn step(&self, location: Location, direction: usize) -> Location;

    /// Edge of the neighbour that touches edge `direction`
    fn opposite(&self, direction: usize) -> usize {
        let edges = self.edges_per_cell();
        (direction + edges / 2) % edges
    }

    /// Position of a location in the visiting order
    ///
    /// The default scans [`Topology::locations`]; shapes with a closed form
    /// should override it.
    fn index_of(&self, location: Location) -> Option<usize> {
        self.locations()
            .iter()
            .position(|&candidate| candidate == location)
    }

    /// Every on-grid neighbour of a location, in edge order
    fn adjacent(&self, location: Location) -> Vec<Neighbor> {
        (0..self.edges_per_cell())
            .filter_map(|direction| {
                let target = self.step(location, direction);
                if !self.contains(target) {
                    return None;
                }
                Some(Neighbor {
                    location: target,
                    index: self.index_of(target)?,
                    self_edge: direction,
                    neighbor_edge: self.opposite(direction),
                })
            })
            .collect()
    }

    /// Neighbours that come before `location` in the visiting order
    ///
    /// These are the only cells already filled when the search reaches
    /// `location`, so they are the only ones worth checking.
    fn neighbors_of(&self, location: Location) -> Vec<Neighbor> {
        let Some(own_index) = self.index_of(location) else {
            return Vec::new();
        };

        self.adjacent(location)
            .into_iter()
            .filter(|neighbor| neighbor.index < own_index)
            .collect()
    }
}
