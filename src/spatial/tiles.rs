//! Tile records and rotation lookup
//!
//! A tile stores one symbol per edge in clockwise order starting from the
//! topology's first direction. Rotating by `r` turns the tile clockwise by `r`
//! edge steps, so the symbol exposed at direction `d` is
//! `edges[(d - r) mod edge_count]` and rotation 0 is the identity.

use std::fmt;

use crate::io::error::{Result, malformed_tile};
use crate::spatial::symbols::Symbol;

/// Stable tile identity assigned at load time
pub type TileId = usize;

/// Immutable tile with precomputed rotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    label: String,
    edges: Vec<Symbol>,
    /// `rotations[r][d]` is the symbol exposed at direction `d` under rotation `r`
    rotations: Vec<Vec<Symbol>>,
}

impl Tile {
    /// Create a tile for a topology with `edges_per_cell` edges
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the number of edges differs from `edges_per_cell`.
    pub fn new(
        id: TileId,
        label: impl Into<String>,
        edges: Vec<Symbol>,
        edges_per_cell: usize,
    ) -> Result<Self> {
        let label = label.into();
        if edges.len() != edges_per_cell || edges.is_empty() {
            return Err(malformed_tile(&label, edges_per_cell, edges.len()));
        }

        let count = edges.len();
        let rotations = (0..count)
            .map(|rotation| {
                (0..count)
                    .filter_map(|direction| edges.get((direction + count - rotation) % count))
                    .copied()
                    .collect()
            })
            .collect();

        Ok(Self {
            id,
            label,
            edges,
            rotations,
        })
    }

    /// Stable identity of the tile
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Display label (the ID column of a tile file)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Edges in canonical (rotation 0) order
    pub fn edges(&self) -> &[Symbol] {
        &self.edges
    }

    /// Number of edges on this tile
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Symbol exposed at `direction` when the tile is turned by `rotation`
    ///
    /// Both arguments are taken modulo the edge count.
    pub fn edge_at(&self, rotation: usize, direction: usize) -> Symbol {
        let count = self.edges.len();
        self.rotations
            .get(rotation % count)
            .and_then(|rotated| rotated.get(direction % count))
            .copied()
            .unwrap_or_else(|| Symbol::new(u32::MAX))
    }

    /// Edge sequences for every rotation, indexed by rotation then direction
    pub fn rotations(&self) -> &[Vec<Symbol>] {
        &self.rotations
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}", self.label)
    }
}

/// Ordered pool of tiles sharing one edge count
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
    edges_per_cell: usize,
}

impl TileSet {
    /// Collect tiles that all carry `edges_per_cell` edges
    ///
    /// Tiles are renumbered in the given order so ids are dense and ascending.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` for the first tile with a different edge count.
    pub fn new(tiles: Vec<Tile>, edges_per_cell: usize) -> Result<Self> {
        let mut renumbered = Vec::with_capacity(tiles.len());
        for (id, tile) in tiles.into_iter().enumerate() {
            if tile.edge_count() != edges_per_cell {
                return Err(malformed_tile(&tile.label, edges_per_cell, tile.edge_count()));
            }
            renumbered.push(Tile { id, ..tile });
        }

        Ok(Self {
            tiles: renumbered,
            edges_per_cell,
        })
    }

    /// Build tiles directly from edge lists, labelling them by position
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if any edge list has the wrong length.
    pub fn from_edges(edge_lists: Vec<Vec<Symbol>>, edges_per_cell: usize) -> Result<Self> {
        let tiles = edge_lists
            .into_iter()
            .enumerate()
            .map(|(id, edges)| Tile::new(id, id.to_string(), edges, edges_per_cell))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            tiles,
            edges_per_cell,
        })
    }

    /// Look up a tile by id
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// All tiles in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles in the pool
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the pool is empty
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Edge count shared by every tile
    pub const fn edges_per_cell(&self) -> usize {
        self.edges_per_cell
    }

    /// Iterate over every symbol on every edge
    pub fn all_edges(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.tiles.iter().flat_map(|tile| tile.edges.iter().copied())
    }
}
