//! Terminal spinner showing search progress

use crate::algorithm::control::SearchObserver;
use crate::algorithm::search::SearchStats;
use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner that redraws with the latest search counters
pub struct SearchProgress {
    bar: ProgressBar,
    locations: usize,
}

impl SearchProgress {
    /// Create a ticking spinner for a grid with `locations` cells
    pub fn new(locations: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { bar, locations }
    }

    /// Create a spinner that never draws
    pub fn hidden(locations: usize) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            locations,
        }
    }

    /// Current status line
    pub fn message(&self) -> String {
        self.bar.message()
    }
}

impl SearchObserver for SearchProgress {
    fn on_progress(&mut self, stats: &SearchStats, depth: usize) {
        self.bar.set_message(format!(
            "depth {depth}/{} | states {} | backtracks {} | solutions {}",
            self.locations, stats.states, stats.backtracks, stats.solutions
        ));
    }

    fn on_finish(&mut self, _stats: &SearchStats) {
        self.bar.finish_and_clear();
    }
}
