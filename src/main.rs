//! CLI entry point for the edge-matching puzzle solver

use clap::Parser;
use edgematch::io::cli::{Cli, PuzzleRunner};

fn main() -> edgematch::Result<()> {
    let cli = Cli::parse();
    edgematch::io::log::init_logger(cli.debug);
    let runner = PuzzleRunner::new(cli);
    runner.run()
}
