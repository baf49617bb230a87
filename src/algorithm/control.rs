//! Cooperative cancellation and progress hooks for a running search
//!
//! The engine never blocks or times itself out. Callers that want a bound
//! share a [`CancelFlag`] with it and raise the flag from elsewhere; the engine
//! looks at the flag between stack-frame transitions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::algorithm::search::SearchStats;

/// Shared flag asking a search to stop
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a lowered flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding a clone of this flag to stop
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    /// Test whether the flag has been raised
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    /// Lower the flag so it can be reused
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Relaxed);
    }
}

/// Receives periodic statistics while a search runs
pub trait SearchObserver {
    /// Called every `report_interval` explored states
    fn on_progress(&mut self, stats: &SearchStats, depth: usize);

    /// Called once when the search returns a result
    fn on_finish(&mut self, _stats: &SearchStats) {}
}

/// External controls consulted by the engine between transitions
#[derive(Default)]
pub struct SearchControl<'o> {
    /// Flag that stops the search when raised
    pub cancel: Option<CancelFlag>,
    /// Stop after this many explored states
    pub max_states: Option<u64>,
    /// Progress receiver
    pub observer: Option<&'o mut dyn SearchObserver>,
}

impl<'o> SearchControl<'o> {
    /// Controls that never interrupt the search
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a cancellation flag
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Limit the number of explored states
    #[must_use]
    pub const fn with_max_states(mut self, max_states: u64) -> Self {
        self.max_states = Some(max_states);
        self
    }

    /// Attach a progress observer
    #[must_use]
    pub fn with_observer(mut self, observer: &'o mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Test whether the search should stop now
    pub fn should_stop(&self, stats: &SearchStats) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
            || self.max_states.is_some_and(|limit| stats.states >= limit)
    }

    pub(crate) fn report(&mut self, stats: &SearchStats, depth: usize) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_progress(stats, depth);
        }
    }

    pub(crate) fn finish(&mut self, stats: &SearchStats) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_finish(stats);
        }
    }
}
