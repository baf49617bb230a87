//! Tests for the explicit-stack backtracking engine

#[cfg(test)]
mod tests {
    use edgematch::algorithm::control::{CancelFlag, SearchControl, SearchObserver};
    use edgematch::algorithm::search::{
        CandidateOrder, SearchEngine, SearchOptions, SearchStats, SearchStep,
    };
    use edgematch::spatial::board::Placement;
    use edgematch::spatial::layout::Layout;
    use edgematch::spatial::symbols::{Identical, Symbol};
    use edgematch::spatial::tiles::TileSet;
    use edgematch::spatial::topology::TopologyConfig;

    fn uniform_tiles(count: usize) -> TileSet {
        TileSet::from_edges(vec![vec![Symbol::new(0); 4]; count], 4).unwrap()
    }

    fn distinct_tiles(count: u32) -> TileSet {
        let edges = (0..count)
            .map(|tile| (0..4).map(|edge| Symbol::new(tile * 4 + edge)).collect())
            .collect();
        TileSet::from_edges(edges, 4).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        reports: Vec<(u64, usize)>,
        finished: usize,
    }

    impl SearchObserver for Recorder {
        fn on_progress(&mut self, stats: &SearchStats, depth: usize) {
            self.reports.push((stats.states, depth));
        }

        fn on_finish(&mut self, _stats: &SearchStats) {
            self.finished += 1;
        }
    }

    // Tests interchangeable tiles are placed in order without backtracking
    // Verified by starting candidate lists at the last tile
    #[test]
    fn test_first_solution_ascending() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, SearchOptions::default());

        let step = engine.next_solution(&mut SearchControl::new());
        assert_eq!(step, SearchStep::Solved);

        let stats = engine.stats();
        assert_eq!(stats.states, 4);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.solutions, 1);
        assert_eq!(engine.depth(), 4);

        let board = engine.board();
        assert!(board.is_complete());
        for slot in 0..4 {
            assert_eq!(board.get(slot), Some(Placement { tile: slot, rotation: 0 }));
        }
    }

    // Tests resuming enumerates every permutation and rotation exactly once
    // Verified by not lifting the last placement before resuming
    #[test]
    fn test_enumerates_all_solutions() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, SearchOptions::default());
        let mut control = SearchControl::new();

        let mut found = 0;
        while engine.next_solution(&mut control) == SearchStep::Solved {
            found += 1;
        }

        // 4! orderings times 4^4 rotations
        assert_eq!(found, 6144);
        assert_eq!(engine.stats().solutions, 6144);
        assert_eq!(engine.next_solution(&mut control), SearchStep::Exhausted);
    }

    // Tests a puzzle with no matching edges is exhausted
    // Verified by accepting every candidate in forward checking
    #[test]
    fn test_exhausted() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = distinct_tiles(4);
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, SearchOptions::default());

        assert_eq!(
            engine.next_solution(&mut SearchControl::new()),
            SearchStep::Exhausted
        );
        let stats = engine.stats();
        assert_eq!(stats.states, 16);
        assert_eq!(stats.backtracks, 17);
        assert_eq!(stats.solutions, 0);
        assert_eq!(engine.board().filled(), 0);
    }

    // Tests a raised flag stops the search before any placement
    // Verified by checking the flag only after placing
    #[test]
    fn test_cancelled_before_start() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, SearchOptions::default());

        let flag = CancelFlag::new();
        flag.cancel();
        let mut control = SearchControl::new().with_cancel(flag);

        assert_eq!(engine.next_solution(&mut control), SearchStep::Cancelled);
        assert_eq!(engine.stats().states, 0);
    }

    // Tests the state budget stops the search exactly at the limit
    // Verified by checking the budget once per solution
    #[test]
    fn test_max_states() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, SearchOptions::default());
        let mut control = SearchControl::new().with_max_states(2);

        assert_eq!(engine.next_solution(&mut control), SearchStep::Cancelled);
        assert_eq!(engine.stats().states, 2);
        assert_eq!(engine.board().filled(), 2);
    }

    // Tests the observer hears every report interval
    // Verified by reporting on backtracks instead of placements
    #[test]
    fn test_progress_reports() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let options = SearchOptions {
            report_interval: 2,
            ..SearchOptions::default()
        };
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, options);

        let mut recorder = Recorder::default();
        let mut control = SearchControl::new().with_observer(&mut recorder);
        assert_eq!(engine.next_solution(&mut control), SearchStep::Solved);
        drop(control);

        assert_eq!(recorder.reports, vec![(2, 2), (4, 4)]);
        assert_eq!(recorder.finished, 0);
    }

    // Tests observer reports keep their own cadence when logging is more frequent
    // Verified by reporting to the observer on the log interval
    #[test]
    fn test_report_interval_separate_from_log_interval() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let options = SearchOptions {
            log_interval: 1,
            report_interval: 3,
            ..SearchOptions::default()
        };
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, options);

        let mut recorder = Recorder::default();
        let mut control = SearchControl::new().with_observer(&mut recorder);
        assert_eq!(engine.next_solution(&mut control), SearchStep::Solved);
        drop(control);

        assert_eq!(recorder.reports, vec![(3, 3)]);
    }

    // Tests a zero interval disables reports
    // Verified by reporting whenever the interval divides the state count
    #[test]
    fn test_reports_disabled() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let options = SearchOptions {
            report_interval: 0,
            ..SearchOptions::default()
        };
        let mut engine = SearchEngine::new(&layout, &tiles, &Identical, options);

        let mut recorder = Recorder::default();
        let mut control = SearchControl::new().with_observer(&mut recorder);
        engine.next_solution(&mut control);
        drop(control);

        assert!(recorder.reports.is_empty());
    }

    // Tests the same seed gives the same board
    // Verified by seeding from entropy
    #[test]
    fn test_shuffled_is_deterministic() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let tiles = uniform_tiles(4);
        let options = SearchOptions {
            order: CandidateOrder::Shuffled { seed: 7 },
            ..SearchOptions::default()
        };

        let solve = || {
            let mut engine = SearchEngine::new(&layout, &tiles, &Identical, options);
            assert_eq!(
                engine.next_solution(&mut SearchControl::new()),
                SearchStep::Solved
            );
            engine.into_board().placements()
        };

        assert_eq!(solve(), solve());
    }
}
