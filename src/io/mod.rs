/// Command-line argument parsing and the solve-and-print runner
pub mod cli;
/// Solver constants and defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Logger initialization
pub mod log;
/// Terminal progress reporting
pub mod progress;
/// Text and JSON rendering of boards
pub mod render;
/// Tile file loading
pub mod tile_file;
