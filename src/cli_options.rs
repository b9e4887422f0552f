//! Command-line options.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use std::env;

use tile_puzzle::puzzle::Puzzle;

/// Play or solve n×n sliding-tile puzzles in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search for a solution and replay it
    Solve {
        #[command(flatten)]
        board: BoardArgs,

        /// Milliseconds between replayed moves
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,

        /// Print the move list instead of animating it
        #[arg(long, default_value_t = false)]
        no_animate: bool,
    },
    /// Move tiles with the keyboard; press Enter to let the solver finish
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Milliseconds between moves when the solver takes over
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
}

#[derive(clap::Args)]
pub struct BoardArgs {
    /// Starting board, one character per tile in row order, `0` for the blank (e.g. 123456708)
    #[arg(short, long, conflicts_with_all = ["size", "seed", "solvable"])]
    board: Option<String>,

    /// Side length of a random board
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Seed for the random board
    #[arg(long)]
    seed: Option<u64>,

    /// Reshuffle the random board until it is solvable
    #[arg(long, default_value_t = false)]
    solvable: bool,
}

impl BoardArgs {
    pub fn build(&self) -> Result<Puzzle> {
        if let Some(configuration) = &self.board {
            return configuration
                .parse()
                .with_context(|| format!("Invalid board {:?}", configuration));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let puzzle = if self.solvable {
            Puzzle::random_solvable_with(self.size, &mut rng)
        } else {
            Puzzle::random_with(self.size, &mut rng)
        };
        let puzzle = puzzle.context("Cannot build a random board")?;
        debug!("Random board {}", puzzle.serialize());
        Ok(puzzle)
    }
}

/// Parse the command line and set up logging.
pub fn parse() -> Args {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    args
}
