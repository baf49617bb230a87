//! Logger setup for the command-line front end

use log::LevelFilter;

/// Initialize the `env_logger` backend
///
/// Uses `Debug` level when `debug_enabled` is set and `Info` otherwise. An explicit
/// `RUST_LOG` always wins. Calling this more than once is harmless.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
