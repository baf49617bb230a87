//! Puzzle instance tying a tile pool, a grid and a matching rule together
//!
//! A [`Game`] holds no solver progress. Every call to [`Game::solve`] builds a
//! fresh board and engine, so repeated calls repeat the same search and give
//! the same answer.

use std::fmt;

use crate::algorithm::control::SearchControl;
use crate::algorithm::search::{SearchEngine, SearchOptions, SearchStats, SearchStep};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::board::Board;
use crate::spatial::layout::Layout;
use crate::spatial::symbols::{EdgeMatcher, Identical};
use crate::spatial::tiles::{Tile, TileSet};
use crate::spatial::topology::TopologyConfig;

/// How a search ended
#[derive(Debug, Clone)]
pub enum Outcome<'p> {
    /// A complete, valid board
    Solved(Board<'p>),
    /// The whole search space was explored without completing the board
    NoSolution,
    /// The search was stopped before finishing
    Cancelled,
}

impl<'p> Outcome<'p> {
    /// Test whether a board was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Solved board, if any
    pub const fn board(&self) -> Option<&Board<'p>> {
        match self {
            Self::Solved(board) => Some(board),
            Self::NoSolution | Self::Cancelled => None,
        }
    }
}

/// Outcome of one search together with the work it took
#[derive(Debug, Clone)]
pub struct Attempt<'p> {
    /// How the search ended
    pub outcome: Outcome<'p>,
    /// Search counters
    pub stats: SearchStats,
}

impl<'p> Attempt<'p> {
    /// Take the solved board, turning other outcomes into errors
    ///
    /// # Errors
    ///
    /// Returns `NoSolution` or `Cancelled` when no board was found.
    pub fn into_board(self) -> Result<Board<'p>> {
        match self.outcome {
            Outcome::Solved(board) => Ok(board),
            Outcome::NoSolution => Err(PuzzleError::NoSolution {
                states: self.stats.states,
            }),
            Outcome::Cancelled => Err(PuzzleError::Cancelled {
                states: self.stats.states,
            }),
        }
    }
}

/// One puzzle: tiles, grid and matching rule
pub struct Game {
    layout: Layout,
    tiles: TileSet,
    matcher: Box<dyn EdgeMatcher>,
    options: SearchOptions,
}

impl Game {
    /// Create a game on a configured grid, matching equal symbols
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unusable grid configuration and
    /// `MalformedTile` if a tile's edge count does not fit the grid shape.
    pub fn new(tiles: Vec<Tile>, config: TopologyConfig) -> Result<Self> {
        Self::from_layout(tiles, Layout::new(config)?)
    }

    /// Create a game on an already indexed layout
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if a tile's edge count does not fit the layout.
    pub fn from_layout(tiles: Vec<Tile>, layout: Layout) -> Result<Self> {
        let tiles = TileSet::new(tiles, layout.edges_per_cell())?;
        Ok(Self {
            layout,
            tiles,
            matcher: Box::new(Identical),
            options: SearchOptions::default(),
        })
    }

    /// Replace the edge matching rule
    #[must_use]
    pub fn with_matcher(mut self, matcher: impl EdgeMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Replace the search options
    #[must_use]
    pub const fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Grid layout
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Tile pool
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Search options in effect
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Check that there is exactly one tile per location
    ///
    /// # Errors
    ///
    /// Returns `ConfigMismatch` when the counts differ.
    pub fn validate(&self) -> Result<()> {
        if self.tiles.len() == self.layout.len() {
            Ok(())
        } else {
            Err(PuzzleError::ConfigMismatch {
                tiles: self.tiles.len(),
                locations: self.layout.len(),
            })
        }
    }

    /// Find the first solution in search order
    ///
    /// # Errors
    ///
    /// Returns `ConfigMismatch` if the tile count differs from the location count.
    /// An unsolvable puzzle is not an error; it yields `Outcome::NoSolution`.
    pub fn solve(&self) -> Result<Outcome<'_>> {
        Ok(self.solve_with(&mut SearchControl::new())?.outcome)
    }

    /// Find the first solution, honouring cancellation and reporting progress
    ///
    /// # Errors
    ///
    /// Returns `ConfigMismatch` if the tile count differs from the location count.
    pub fn solve_with(&self, control: &mut SearchControl<'_>) -> Result<Attempt<'_>> {
        self.validate()?;
        log::info!(
            "Solving {} tiles on {} locations ({} edges per cell)",
            self.tiles.len(),
            self.layout.len(),
            self.layout.edges_per_cell()
        );

        let mut engine = self.engine();
        let step = engine.next_solution(control);
        let stats = engine.stats();
        control.finish(&stats);

        let outcome = match step {
            SearchStep::Solved => Outcome::Solved(engine.into_board()),
            SearchStep::Exhausted => {
                log::info!("No solution after {} states", stats.states);
                Outcome::NoSolution
            }
            SearchStep::Cancelled => Outcome::Cancelled,
        };

        Ok(Attempt { outcome, stats })
    }

    /// Iterate over every solution in search order
    ///
    /// # Errors
    ///
    /// Returns `ConfigMismatch` if the tile count differs from the location count.
    pub fn solutions(&self) -> Result<Solutions<'_, 'static>> {
        self.solutions_with(SearchControl::new())
    }

    /// Iterate over every solution under the given controls
    ///
    /// Iteration ends early if the controls stop the search.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMismatch` if the tile count differs from the location count.
    pub fn solutions_with<'o>(&self, control: SearchControl<'o>) -> Result<Solutions<'_, 'o>> {
        self.validate()?;
        Ok(Solutions {
            engine: self.engine(),
            control,
            done: false,
            cancelled: false,
        })
    }

    /// Count solutions, stopping once `limit` have been found
    ///
    /// # Errors
    ///
    /// Returns `ConfigMismatch` if the tile count differs from the location count.
    pub fn count_solutions(&self, limit: Option<u64>) -> Result<u64> {
        let solutions = self.solutions()?;
        let counted = match limit {
            Some(limit) => solutions.take(usize::try_from(limit).unwrap_or(usize::MAX)).count(),
            None => solutions.count(),
        };
        Ok(counted as u64)
    }

    fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(&self.layout, &self.tiles, self.matcher.as_ref(), self.options)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("layout", &self.layout)
            .field("tiles", &self.tiles.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Iterator over the solutions of a game
pub struct Solutions<'p, 'o> {
    engine: SearchEngine<'p>,
    control: SearchControl<'o>,
    done: bool,
    cancelled: bool,
}

impl Solutions<'_, '_> {
    /// Work done so far
    pub const fn stats(&self) -> SearchStats {
        self.engine.stats()
    }

    /// Test whether iteration ended because the controls stopped it
    pub const fn was_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl<'p> Iterator for Solutions<'p, '_> {
    type Item = Board<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.engine.next_solution(&mut self.control) {
            SearchStep::Solved => Some(self.engine.board().clone()),
            SearchStep::Exhausted => {
                self.done = true;
                self.control.finish(&self.engine.stats());
                None
            }
            SearchStep::Cancelled => {
                self.done = true;
                self.cancelled = true;
                self.control.finish(&self.engine.stats());
                None
            }
        }
    }
}
