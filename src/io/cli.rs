//! Command-line interface for solving tile files

use crate::algorithm::control::{CancelFlag, SearchControl};
use crate::algorithm::game::Game;
use crate::algorithm::search::{CandidateOrder, SearchOptions, SearchStats};
use crate::io::configuration::{DEFAULT_SHAPE, DEFAULT_SIZE, LOG_FREQUENCY, PROGRESS_REFRESH_STATES};
use crate::io::error::{PuzzleError, Result};
use crate::io::progress::SearchProgress;
use crate::io::render::{BoardReport, render_text};
use crate::io::tile_file::TileFile;
use crate::spatial::board::Board;
use crate::spatial::symbols::{Identical, PairedHalves, SymbolTable};
use crate::spatial::topology::{Shape, TopologyConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Rule deciding when two touching edges match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchRule {
    /// Opposite halves of the same picture (`name/side`)
    #[default]
    Pairs,
    /// Identical symbol text
    Equal,
}

/// How solved boards are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per cell
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "edgematch")]
#[command(
    author,
    version,
    about = "Solve edge-matching tile puzzles on square and hexagonal grids"
)]
/// Command-line arguments for the solver
// Several independent switches are the natural shape of this interface
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile file (CSV: ID column then one column per edge)
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Grid cell shape
    #[arg(long, value_enum, default_value_t = DEFAULT_SHAPE)]
    pub shape: Shape,

    /// Grid side length in cells
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Edge matching rule
    #[arg(short, long, value_enum, default_value_t = MatchRule::Pairs)]
    pub rule: MatchRule,

    /// Enumerate every solution instead of stopping at the first
    #[arg(short, long)]
    pub all: bool,

    /// Stop enumerating after this many solutions (implies --all)
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Shuffle candidates with this seed instead of trying them in order
    #[arg(long)]
    pub shuffle_seed: Option<u64>,

    /// Keep rare symbols off the outer border
    #[arg(short, long)]
    pub border_rule: bool,

    /// Give up after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Give up after exploring this many states
    #[arg(long)]
    pub max_states: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Grid configuration selected on the command line
    pub const fn topology(&self) -> TopologyConfig {
        TopologyConfig {
            shape: self.shape,
            size: self.size,
        }
    }

    /// Search options selected on the command line
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            order: self
                .shuffle_seed
                .map_or(CandidateOrder::Ascending, |seed| CandidateOrder::Shuffled {
                    seed,
                }),
            border_rule: self.border_rule,
            log_interval: LOG_FREQUENCY,
            report_interval: PROGRESS_REFRESH_STATES,
        }
    }

    /// Check if every solution should be listed
    pub const fn enumerate_all(&self) -> bool {
        self.all || self.limit.is_some()
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads a tile file, solves it and renders the result
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve and print the result to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the tile file cannot be loaded, the puzzle is
    /// inconsistent, or no solution is found.
    pub fn run(&self) -> Result<()> {
        let output = self.solve_to_string()?;
        #[allow(clippy::print_stdout)]
        {
            println!("{output}");
        }
        Ok(())
    }

    /// Solve and render the result without printing it
    ///
    /// # Errors
    ///
    /// Returns an error if the tile file cannot be loaded, the puzzle is
    /// inconsistent, or no solution is found.
    pub fn solve_to_string(&self) -> Result<String> {
        let tile_file = TileFile::from_path(&self.cli.tiles)?;
        let game = self.build_game(&tile_file)?;

        let cancel = CancelFlag::new();
        if let Some(seconds) = self.cli.timeout {
            Self::arm_timeout(cancel.clone(), seconds);
        }

        let locations = game.layout().len();
        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new(locations)
        } else {
            SearchProgress::hidden(locations)
        };

        let mut control = SearchControl::new()
            .with_cancel(cancel)
            .with_observer(&mut progress);
        if let Some(max_states) = self.cli.max_states {
            control = control.with_max_states(max_states);
        }

        if self.cli.enumerate_all() {
            self.render_all(&game, &tile_file.symbols, control)
        } else {
            self.render_first(&game, &tile_file.symbols, &mut control)
        }
    }

    /// Build the game described by a tile file and the CLI options
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the file's edge count does not fit the shape,
    /// `InvalidParameter` for an unusable grid, and `InvalidSymbols` if the
    /// pairing rule cannot be derived from the symbols.
    pub fn build_game(&self, tile_file: &TileFile) -> Result<Game> {
        let config = self.cli.topology();
        let tiles = tile_file.tiles(config.shape.edges_per_cell())?;
        let game = Game::new(tiles, config)?.with_options(self.cli.search_options());

        let game = match self.cli.rule {
            MatchRule::Pairs => game.with_matcher(PairedHalves::from_table(&tile_file.symbols)?),
            MatchRule::Equal => game.with_matcher(Identical),
        };

        log::info!(
            "Loaded {} tiles from '{}' for a {} grid of size {}",
            game.tiles().len(),
            tile_file.path.display(),
            config.shape,
            config.size
        );
        Ok(game)
    }

    fn arm_timeout(cancel: CancelFlag, seconds: u64) {
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(seconds));
            log::warn!("Time limit of {seconds}s reached, stopping search");
            cancel.cancel();
        });
    }

    fn render_first(
        &self,
        game: &Game,
        symbols: &SymbolTable,
        control: &mut SearchControl<'_>,
    ) -> Result<String> {
        let attempt = game.solve_with(control)?;
        let stats = attempt.stats;
        if attempt.outcome.is_solved() {
            log::info!(
                "Solved after {} states and {} backtracks",
                stats.states,
                stats.backtracks
            );
        }
        let board = attempt.into_board()?;
        self.render_boards(&[(board, stats)], symbols)
    }

    fn render_all(
        &self,
        game: &Game,
        symbols: &SymbolTable,
        control: SearchControl<'_>,
    ) -> Result<String> {
        let mut solutions = game.solutions_with(control)?;
        let mut found = Vec::new();

        while self
            .cli
            .limit
            .is_none_or(|limit| (found.len() as u64) < limit)
        {
            let Some(board) = solutions.next() else {
                break;
            };
            found.push((board, solutions.stats()));
        }

        let stats = solutions.stats();
        if found.is_empty() {
            return Err(if solutions.was_cancelled() {
                PuzzleError::Cancelled {
                    states: stats.states,
                }
            } else {
                PuzzleError::NoSolution {
                    states: stats.states,
                }
            });
        }
        if solutions.was_cancelled() {
            log::warn!(
                "Search stopped early; listing {} solutions found so far",
                found.len()
            );
        }
        log::info!(
            "Found {} solutions after {} states",
            found.len(),
            stats.states
        );

        self.render_boards(&found, symbols)
    }

    fn render_boards(
        &self,
        boards: &[(Board<'_>, SearchStats)],
        symbols: &SymbolTable,
    ) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json if !self.cli.enumerate_all() => {
                boards.first().map_or_else(
                    || Ok(String::new()),
                    |(board, stats)| BoardReport::new(board, Some(symbols), *stats).to_json(),
                )
            }
            OutputFormat::Json => {
                let reports: Vec<BoardReport> = boards
                    .iter()
                    .map(|(board, stats)| BoardReport::new(board, Some(symbols), *stats))
                    .collect();
                Ok(serde_json::to_string_pretty(&reports)?)
            }
            OutputFormat::Text if !self.cli.enumerate_all() => Ok(boards
                .iter()
                .map(|(board, _)| render_text(board, Some(symbols)))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => Ok(boards
                .iter()
                .enumerate()
                .map(|(index, (board, _))| {
                    format!(
                        "Solution {}:\n{}",
                        index + 1,
                        render_text(board, Some(symbols))
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }
}
