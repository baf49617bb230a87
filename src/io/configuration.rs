//! Solver constants and runtime configuration defaults

use crate::spatial::topology::Shape;

// Grid defaults match the classic 3x3 puzzle
/// Grid shape used when none is configured
pub const DEFAULT_SHAPE: Shape = Shape::Square;
/// Grid size used when none is configured
pub const DEFAULT_SIZE: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid size (side length in cells)
pub const MAX_GRID_SIZE: usize = 64;

/// Explored states between search progress log lines
pub const LOG_FREQUENCY: u64 = 2500;

/// Explored states between spinner refreshes
pub const PROGRESS_REFRESH_STATES: u64 = 500;
/// Spinner redraw period in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;

// Tile file format
/// Separator between a symbol's name and its side (e.g. `moon/left`)
pub const SYMBOL_SIDE_SEPARATOR: char = '/';
/// Field separator for tile files
pub const FIELD_SEPARATOR: char = ',';
/// Lines starting with this prefix are ignored in tile files
pub const COMMENT_PREFIX: char = '#';
