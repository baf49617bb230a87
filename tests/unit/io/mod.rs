pub mod log;
pub mod progress;
pub mod tile_file;
