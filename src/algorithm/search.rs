//! Depth-first backtracking search over an explicit frame stack
//!
//! Slots are filled strictly in the layout's visiting order. Each frame owns
//! the candidate list for one slot, built when the frame is pushed by
//! forward-checking every unused `(tile, rotation)` pair against the
//! neighbours already on the board. Advancing a frame swaps its placement for
//! the next candidate; an exhausted frame is popped, which is the backtrack.
//!
//! The engine is resumable. After it reports a solution, calling
//! [`SearchEngine::next_solution`] again lifts the last tile and carries on
//! with the remaining candidates, so every solution can be enumerated.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::algorithm::bitset::IdBitset;
use crate::algorithm::control::SearchControl;
use crate::algorithm::rarity::RareSymbols;
use crate::io::configuration::{LOG_FREQUENCY, PROGRESS_REFRESH_STATES};
use crate::spatial::board::Board;
use crate::spatial::layout::Layout;
use crate::spatial::symbols::EdgeMatcher;
use crate::spatial::tiles::{TileId, TileSet};

/// Order in which a frame tries its candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateOrder {
    /// Tile id ascending, then rotation ascending
    #[default]
    Ascending,
    /// Each frame's candidates shuffled by a generator seeded once per search
    Shuffled {
        /// Seed for the shuffling generator
        seed: u64,
    },
}

/// Search behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Candidate ordering within a frame
    pub order: CandidateOrder,
    /// Reject candidates that expose a rare symbol on the outer border
    pub border_rule: bool,
    /// Explored states between debug log lines (0 disables them)
    pub log_interval: u64,
    /// Explored states between observer reports (0 disables them)
    pub report_interval: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            order: CandidateOrder::Ascending,
            border_rule: false,
            log_interval: LOG_FREQUENCY,
            report_interval: PROGRESS_REFRESH_STATES,
        }
    }
}

/// One `(tile, rotation)` option for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Tile to place
    pub tile: TileId,
    /// Rotation to place it with
    pub rotation: usize,
}

/// Counters describing the work a search has done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Placements tried
    pub states: u64,
    /// Frames popped after running out of candidates
    pub backtracks: u64,
    /// Deepest stack reached
    pub max_depth: usize,
    /// Complete boards found
    pub solutions: u64,
}

/// Result of advancing the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// The board is complete; read it with [`SearchEngine::board`]
    Solved,
    /// Every branch has been explored
    Exhausted,
    /// The control asked the search to stop
    Cancelled,
}

/// One level of the explicit stack
#[derive(Debug)]
struct Frame {
    /// Slot this frame fills
    slot: usize,
    /// Compatible candidates, in trial order
    candidates: Vec<Candidate>,
    /// Index of the next candidate to try
    cursor: usize,
    /// Candidate currently on the board for this slot
    placed: Option<Candidate>,
}

/// Backtracking solver for one board
pub struct SearchEngine<'p> {
    board: Board<'p>,
    used: IdBitset,
    stack: Vec<Frame>,
    options: SearchOptions,
    rare: Option<RareSymbols>,
    rng: Option<StdRng>,
    stats: SearchStats,
    started: bool,
}

impl<'p> SearchEngine<'p> {
    /// Create an engine over an empty board
    pub fn new(
        layout: &'p Layout,
        tiles: &'p TileSet,
        matcher: &'p dyn EdgeMatcher,
        options: SearchOptions,
    ) -> Self {
        let rare = options
            .border_rule
            .then(|| RareSymbols::analyze(tiles, layout))
            .filter(|rare| !rare.is_empty());
        if let Some(rare) = &rare {
            log::debug!("Border rule active with {} rare symbols", rare.count());
        }

        let rng = match options.order {
            CandidateOrder::Ascending => None,
            CandidateOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
        };

        Self {
            board: Board::new(layout, tiles, matcher),
            used: IdBitset::new(tiles.len()),
            stack: Vec::with_capacity(layout.len()),
            options,
            rare,
            rng,
            stats: SearchStats::default(),
            started: false,
        }
    }

    /// Current board (complete right after `Solved`)
    pub const fn board(&self) -> &Board<'p> {
        &self.board
    }

    /// Consume the engine, keeping its board
    pub fn into_board(self) -> Board<'p> {
        self.board
    }

    /// Work done so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Advance until the next solution, exhaustion, or a stop request
    pub fn next_solution(&mut self, control: &mut SearchControl<'_>) -> SearchStep {
        if !self.started {
            self.started = true;
            if self.board.layout().is_empty() {
                self.stats.solutions += 1;
                return SearchStep::Solved;
            }
            self.push_frame(0);
        }

        loop {
            if control.should_stop(&self.stats) {
                log::info!("Search stopped after {} states", self.stats.states);
                return SearchStep::Cancelled;
            }

            let Some(frame) = self.stack.last_mut() else {
                return SearchStep::Exhausted;
            };

            if let Some(previous) = frame.placed.take() {
                self.board.remove(frame.slot);
                self.used.remove(previous.tile);
            }

            let Some(&candidate) = frame.candidates.get(frame.cursor) else {
                log::trace!("Backtracking from slot {}", frame.slot);
                self.stack.pop();
                self.stats.backtracks += 1;
                continue;
            };

            frame.cursor += 1;
            frame.placed = Some(candidate);
            let slot = frame.slot;

            self.board.place(slot, candidate.tile, candidate.rotation);
            self.used.insert(candidate.tile);
            self.stats.states += 1;
            self.stats.max_depth = self.stats.max_depth.max(self.stack.len());

            if self.stats.states.is_multiple_of(self.options.log_interval) {
                log::debug!(
                    "solution length: {}, states: {}, backtracks: {}, stack depth: {}",
                    self.board.filled(),
                    self.stats.states,
                    self.stats.backtracks,
                    self.stack.len()
                );
            }
            if self
                .stats
                .states
                .is_multiple_of(self.options.report_interval)
            {
                control.report(&self.stats, self.stack.len());
            }

            if self.board.is_complete() {
                self.stats.solutions += 1;
                log::info!(
                    "Solution {} found after {} states",
                    self.stats.solutions,
                    self.stats.states
                );
                return SearchStep::Solved;
            }

            self.push_frame(slot + 1);
        }
    }

    fn push_frame(&mut self, slot: usize) {
        let mut candidates = self.candidates_for(slot);
        if let Some(rng) = self.rng.as_mut() {
            candidates.shuffle(rng);
        }
        self.stack.push(Frame {
            slot,
            candidates,
            cursor: 0,
            placed: None,
        });
    }

    /// Unused `(tile, rotation)` pairs that fit the placed neighbours of `slot`
    fn candidates_for(&self, slot: usize) -> Vec<Candidate> {
        let rotations = self.board.layout().edges_per_cell();
        let tiles = self.board.tiles();
        let layout = self.board.layout();

        self.used
            .iter_absent()
            .flat_map(|tile| (0..rotations).map(move |rotation| Candidate { tile, rotation }))
            .filter(|candidate| {
                self.board
                    .is_compatible(slot, candidate.tile, candidate.rotation)
            })
            .filter(|candidate| {
                self.rare.as_ref().is_none_or(|rare| {
                    rare.allows(tiles, layout, slot, candidate.tile, candidate.rotation)
                })
            })
            .collect()
    }
}
