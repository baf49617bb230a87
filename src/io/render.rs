//! Printable and serializable views of a solved board

use serde::Serialize;

use crate::algorithm::search::SearchStats;
use crate::io::error::Result;
use crate::spatial::board::Board;
use crate::spatial::symbols::SymbolTable;
use crate::spatial::topology::Shape;

/// One occupied cell in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    /// Row (or axial `r`)
    pub row: i32,
    /// Column (or axial `q`)
    pub col: i32,
    /// Tile id
    pub tile: usize,
    /// Tile label
    pub label: String,
    /// Clockwise rotation in edge steps
    pub rotation: usize,
    /// Symbol text showing on each direction after rotation
    pub edges: Vec<String>,
}

/// Serializable summary of a board and the search that produced it
#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    /// Grid shape, when the layout came from a configuration
    pub shape: Option<Shape>,
    /// Grid size, when the layout came from a configuration
    pub size: Option<usize>,
    /// Number of locations on the grid
    pub locations: usize,
    /// Occupied cells in visiting order
    pub placements: Vec<PlacementRecord>,
    /// Search counters
    pub stats: SearchStats,
}

impl BoardReport {
    /// Summarize a board; symbol text comes from `symbols` when available
    pub fn new(board: &Board<'_>, symbols: Option<&SymbolTable>, stats: SearchStats) -> Self {
        let layout = board.layout();
        let config = layout.config();
        let directions = layout.edges_per_cell();

        let placements = board
            .placements()
            .into_iter()
            .map(|(location, placement)| {
                let edges = (0..directions)
                    .filter_map(|direction| board.exposed(placement, direction))
                    .map(|symbol| {
                        symbols
                            .and_then(|table| table.text(symbol))
                            .map_or_else(|| symbol.to_string(), str::to_string)
                    })
                    .collect();
                let label = board
                    .tiles()
                    .get(placement.tile)
                    .map_or_else(|| placement.tile.to_string(), |tile| tile.label().to_string());

                PlacementRecord {
                    row: location.row,
                    col: location.col,
                    tile: placement.tile,
                    label,
                    rotation: placement.rotation,
                    edges,
                }
            })
            .collect();

        Self {
            shape: config.map(|config| config.shape),
            size: config.map(|config| config.size),
            locations: layout.len(),
            placements,
            stats,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the report cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One line per occupied cell: `Loc (row, col): Tile <label>, rot=<r>`
///
/// With a symbol table the exposed symbols are appended in direction order.
pub fn render_text(board: &Board<'_>, symbols: Option<&SymbolTable>) -> String {
    let Some(table) = symbols else {
        return board.to_string();
    };

    let report = BoardReport::new(board, Some(table), SearchStats::default());
    report
        .placements
        .iter()
        .map(|record| {
            format!(
                "Loc ({}, {}): Tile {}, rot={} [{}]",
                record.row,
                record.col,
                record.label,
                record.rotation,
                record.edges.join(" | ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
