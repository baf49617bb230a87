//! Partial or complete assignment of rotated tiles to grid cells
//!
//! Cells are addressed by slot, their position in the layout's visiting order.
//! The board does not track which tiles are in use; callers must never place a
//! tile that is already on the board.

use std::fmt;

use serde::Serialize;

use crate::spatial::layout::Layout;
use crate::spatial::symbols::{EdgeMatcher, Symbol};
use crate::spatial::tiles::{TileId, TileSet};
use crate::spatial::topology::Location;

/// A tile turned by some rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    /// Placed tile
    pub tile: TileId,
    /// Clockwise rotation in edge steps
    pub rotation: usize,
}

/// A disagreement between two touching edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// First cell of the pair (earlier in visiting order)
    pub first: Location,
    /// Second cell of the pair
    pub second: Location,
}

/// Assignment of placements to the cells of a layout
#[derive(Clone)]
pub struct Board<'p> {
    layout: &'p Layout,
    tiles: &'p TileSet,
    matcher: &'p dyn EdgeMatcher,
    cells: Vec<Option<Placement>>,
    filled: usize,
}

impl<'p> Board<'p> {
    /// Create an empty board
    pub fn new(layout: &'p Layout, tiles: &'p TileSet, matcher: &'p dyn EdgeMatcher) -> Self {
        Self {
            layout,
            tiles,
            matcher,
            cells: vec![None; layout.len()],
            filled: 0,
        }
    }

    /// Layout this board is laid over
    pub const fn layout(&self) -> &'p Layout {
        self.layout
    }

    /// Tile pool placements refer to
    pub const fn tiles(&self) -> &'p TileSet {
        self.tiles
    }

    /// Put a rotated tile on a slot, replacing anything already there
    ///
    /// `tile` must not be placed anywhere else on the board. This is not
    /// checked here; the search engine guarantees it.
    pub fn place(&mut self, slot: usize, tile: TileId, rotation: usize) {
        if let Some(cell) = self.cells.get_mut(slot) {
            if cell.is_none() {
                self.filled += 1;
            }
            *cell = Some(Placement { tile, rotation });
        }
    }

    /// Clear a slot, returning what was there
    pub fn remove(&mut self, slot: usize) -> Option<Placement> {
        let removed = self.cells.get_mut(slot).and_then(Option::take);
        if removed.is_some() {
            self.filled -= 1;
        }
        removed
    }

    /// Placement on a slot
    pub fn get(&self, slot: usize) -> Option<Placement> {
        self.cells.get(slot).copied().flatten()
    }

    /// Symbol a placement shows on `direction`
    pub fn exposed(&self, placement: Placement, direction: usize) -> Option<Symbol> {
        self.tiles
            .get(placement.tile)
            .map(|tile| tile.edge_at(placement.rotation, direction))
    }

    /// Test a candidate against every already-placed predecessor of `slot`
    ///
    /// Neighbours later in the visiting order are ignored, as are empty ones.
    pub fn is_compatible(&self, slot: usize, tile: TileId, rotation: usize) -> bool {
        let Some(candidate) = self.tiles.get(tile) else {
            return false;
        };

        self.layout.preceding(slot).iter().all(|neighbor| {
            self.get(neighbor.index).is_none_or(|placed| {
                self.exposed(placed, neighbor.neighbor_edge)
                    .is_some_and(|theirs| {
                        self.matcher
                            .matches(candidate.edge_at(rotation, neighbor.self_edge), theirs)
                    })
            })
        })
    }

    /// Every occupied neighbouring pair whose shared edges disagree
    ///
    /// Checks all adjacencies from scratch, independent of how the board was
    /// filled.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for slot in 0..self.cells.len() {
            let Some(placed) = self.get(slot) else {
                continue;
            };
            for neighbor in self.layout.adjacent(slot) {
                if neighbor.index < slot {
                    continue;
                }
                let Some(other) = self.get(neighbor.index) else {
                    continue;
                };
                let agrees = match (
                    self.exposed(placed, neighbor.self_edge),
                    self.exposed(other, neighbor.neighbor_edge),
                ) {
                    (Some(mine), Some(theirs)) => self.matcher.matches(mine, theirs),
                    _ => false,
                };
                if agrees {
                    continue;
                }
                if let Some(first) = self.layout.location(slot) {
                    conflicts.push(Conflict {
                        first,
                        second: neighbor.location,
                    });
                }
            }
        }
        conflicts
    }

    /// Test whether every occupied adjacent pair matches
    pub fn is_valid(&self) -> bool {
        self.conflicts().is_empty()
    }

    /// Test whether every cell holds a tile
    pub const fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Number of occupied cells
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Occupied cells in visiting order
    pub fn placements(&self) -> Vec<(Location, Placement)> {
        self.layout
            .locations()
            .iter()
            .zip(&self.cells)
            .filter_map(|(&location, cell)| cell.map(|placement| (location, placement)))
            .collect()
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("filled", &self.filled)
            .field("cells", &self.cells)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (location, placement)) in self.placements().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let label = self
                .tiles
                .get(placement.tile)
                .map_or_else(|| placement.tile.to_string(), |tile| tile.label().to_string());
            write!(
                f,
                "Loc {location}: Tile {label}, rot={}",
                placement.rotation
            )?;
        }
        Ok(())
    }
}
