//! Tabular tile definitions
//!
//! The format is plain comma-separated text. The header row names the ID
//! column followed by one column per edge direction in clockwise order:
//!
//! ```text
//! ID,north,east,south,west
//! 1,green clover/left,orange star/right,yellow moon/left,green clover/right
//! ```
//!
//! Each later row is one tile: a label and one symbol per edge. Symbols may
//! name a picture half as `name/side`. Blank lines and lines starting with `#`
//! are skipped. Quoted fields are not supported.

use std::path::{Path, PathBuf};

use crate::io::configuration::{COMMENT_PREFIX, FIELD_SEPARATOR};
use crate::io::error::{PuzzleError, Result, malformed_tile};
use crate::spatial::symbols::{Symbol, SymbolTable};
use crate::spatial::tiles::Tile;

/// One parsed tile row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRecord {
    /// Value of the ID column
    pub label: String,
    /// Interned symbols in header column order
    pub edges: Vec<Symbol>,
    /// One-based source line
    pub line: usize,
}

/// Parsed contents of a tile file
#[derive(Debug, Clone)]
pub struct TileFile {
    /// Source path, for error messages
    pub path: PathBuf,
    /// Direction names from the header row
    pub directions: Vec<String>,
    /// Tile rows in file order
    pub records: Vec<TileRecord>,
    /// Every symbol seen in the file
    pub symbols: SymbolTable,
}

impl TileFile {
    /// Read and parse a tile file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, and any error from
    /// [`TileFile::parse`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation: "read tile file",
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse tile definitions from text
    ///
    /// # Errors
    ///
    /// Returns `TileFile` for a missing or empty header, a row without a label,
    /// an empty symbol cell or a file without tiles, and `MalformedTile` for a
    /// row whose edge count differs from the header.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let file_error = |line: usize, reason: &str| PuzzleError::TileFile {
            path: path.to_path_buf(),
            line,
            reason: reason.to_string(),
        };

        let mut rows = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX));

        let Some((header_line, header)) = rows.next() else {
            return Err(file_error(1, "missing header row"));
        };
        let directions: Vec<String> = split_fields(header)
            .skip(1)
            .map(str::to_string)
            .collect();
        if directions.is_empty() {
            return Err(file_error(
                header_line,
                "header must name at least one edge direction",
            ));
        }

        let mut symbols = SymbolTable::new();
        let mut records = Vec::new();

        for (line, row) in rows {
            let mut fields = split_fields(row);
            let label = fields.next().unwrap_or_default().to_string();
            if label.is_empty() {
                return Err(file_error(line, "tile row has an empty ID"));
            }

            let cells: Vec<&str> = fields.collect();
            if cells.len() != directions.len() {
                return Err(malformed_tile(&label, directions.len(), cells.len()));
            }
            if cells.iter().any(|cell| cell.is_empty()) {
                return Err(file_error(line, "tile row has an empty symbol"));
            }

            if records
                .iter()
                .any(|record: &TileRecord| record.label == label)
            {
                log::warn!("Duplicate tile ID '{label}' on line {line}");
            }

            let edges = cells.into_iter().map(|cell| symbols.intern(cell)).collect();
            records.push(TileRecord { label, edges, line });
        }

        if records.is_empty() {
            return Err(file_error(header_line, "file defines no tiles"));
        }

        log::debug!(
            "Loaded {} tiles with {} distinct symbols from '{}'",
            records.len(),
            symbols.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            directions,
            records,
            symbols,
        })
    }

    /// Number of edges per tile declared by the header
    pub fn edge_count(&self) -> usize {
        self.directions.len()
    }

    /// Build tiles for a grid with `edges_per_cell` edges
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the file's edge count does not fit the grid.
    pub fn tiles(&self, edges_per_cell: usize) -> Result<Vec<Tile>> {
        self.records
            .iter()
            .enumerate()
            .map(|(id, record)| {
                Tile::new(id, record.label.clone(), record.edges.clone(), edges_per_cell)
            })
            .collect()
    }
}

fn split_fields(row: &str) -> impl Iterator<Item = &str> {
    row.split(FIELD_SEPARATOR).map(str::trim)
}
