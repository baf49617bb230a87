//! Tests for the search progress spinner

#[cfg(test)]
mod tests {
    use edgematch::algorithm::control::SearchObserver;
    use edgematch::algorithm::search::SearchStats;
    use edgematch::io::progress::SearchProgress;

    // Tests the status line carries depth and counters
    // Verified by omitting backtracks from the message
    #[test]
    fn test_progress_message() {
        let mut progress = SearchProgress::hidden(9);
        let stats = SearchStats {
            states: 2500,
            backtracks: 40,
            max_depth: 6,
            solutions: 0,
        };

        progress.on_progress(&stats, 5);
        let message = progress.message();
        assert!(message.contains("depth 5/9"));
        assert!(message.contains("states 2500"));
        assert!(message.contains("backtracks 40"));
    }

    // Tests finishing a spinner is safe
    // Verified by finishing twice with abandon
    #[test]
    fn test_progress_finish() {
        let mut progress = SearchProgress::new(4);
        progress.on_progress(&SearchStats::default(), 1);
        progress.on_finish(&SearchStats::default());
        progress.on_finish(&SearchStats::default());
    }
}
