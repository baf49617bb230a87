//! Tests for logger initialization

#[cfg(test)]
mod tests {
    use edgematch::io::log::init_logger;

    // Tests repeated initialization is harmless
    // Verified by using init instead of try_init
    #[test]
    fn test_init_logger_twice() {
        init_logger(false);
        init_logger(true);
        log::info!("logger still usable");
    }
}
