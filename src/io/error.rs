//! Error types for puzzle construction, tile loading and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// A tile's edge count does not match the topology's edges-per-cell
    MalformedTile {
        /// Label of the offending tile
        tile: String,
        /// Edges-per-cell required by the topology
        expected: usize,
        /// Number of edges the tile actually carries
        found: usize,
    },

    /// Tile pool size does not equal the number of grid locations
    ConfigMismatch {
        /// Number of tiles supplied
        tiles: usize,
        /// Number of locations in the topology
        locations: usize,
    },

    /// Search exhausted every reachable state without completing the board
    ///
    /// `Game::solve` reports this as `Outcome::NoSolution`; the error form only
    /// appears when a caller asks for a board unconditionally.
    NoSolution {
        /// States explored before exhaustion
        states: u64,
    },

    /// Search was stopped through its cancellation flag
    Cancelled {
        /// States explored before the flag was observed
        states: u64,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Symbol set cannot be used with the requested matching rule
    InvalidSymbols {
        /// Description of what's wrong with the symbols
        reason: String,
    },

    /// Tabular tile input could not be interpreted
    TileFile {
        /// Path of the tile file
        path: PathBuf,
        /// One-based line number of the problem
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Board report could not be serialized
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTile {
                tile,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Malformed tile '{tile}': expected {expected} edges, found {found}"
                )
            }
            Self::ConfigMismatch { tiles, locations } => {
                write!(
                    f,
                    "Configuration mismatch: {tiles} tiles for {locations} locations"
                )
            }
            Self::NoSolution { states } => {
                write!(f, "No solution exists (explored {states} states)")
            }
            Self::Cancelled { states } => {
                write!(f, "Search cancelled after {states} states")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSymbols { reason } => {
                write!(f, "Invalid symbols: {reason}")
            }
            Self::TileFile { path, line, reason } => {
                write!(f, "Tile file '{}' line {line}: {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize board report: {source}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for PuzzleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error
pub fn malformed_tile(tile: &impl ToString, expected: usize, found: usize) -> PuzzleError {
    PuzzleError::MalformedTile {
        tile: tile.to_string(),
        expected,
        found,
    }
}
