//! Grid geometry, tiles and boards
//!
//! This module contains the data side of the solver:
//! - Symbol interning and edge matching rules
//! - Tiles and their rotations
//! - Grid topologies and the cached adjacency layout
//! - Boards of placed tiles

/// Board state and compatibility checks
pub mod board;
/// Hexagonal grid topology
pub mod hex;
/// Cached per-slot adjacency tables
pub mod layout;
/// Square grid topology
pub mod square;
/// Edge symbols and matching rules
pub mod symbols;
/// Tile records and rotation lookup
pub mod tiles;
/// Topology trait, locations and grid configuration
pub mod topology;

pub use board::{Board, Placement};
pub use layout::Layout;
pub use symbols::{EdgeMatcher, Identical, PairedHalves, Symbol, SymbolTable};
pub use tiles::{Tile, TileId, TileSet};
pub use topology::{Location, Neighbor, Shape, Topology, TopologyConfig};
