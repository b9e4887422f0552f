mod cli_options;
mod terminal;

use anyhow::Result;
use cli_options::Command;
use std::{io, time::Duration};
use terminal::Outcome;
use tile_puzzle::search::SearchTree;

fn main() -> Result<()> {
    let args = cli_options::parse();

    let outcome = match args.command {
        Command::Solve {
            board,
            delay_ms,
            no_animate,
        } => {
            let mut puzzle = board.build()?;

            if no_animate {
                println!("Initial Puzzle:\n{}", puzzle);
                let mut tree = SearchTree::from_puzzle(&puzzle);
                tree.solve()?;
                let moves: Vec<String> = tree.drain_moves().map(|tile| tile.to_string()).collect();
                println!("Moves ({}): {}", moves.len(), moves.join(" "));
                if let Some(end) = tree.best_terminal_board() {
                    println!("Final Puzzle:\n{}", end);
                }
                Outcome::from_search(&tree, moves.len())
            } else {
                terminal::auto_solve(&mut io::stdout(), &mut puzzle, Duration::from_millis(delay_ms))?
            }
        }
        Command::Play { board, delay_ms } => {
            let mut puzzle = board.build()?;
            terminal::play(&mut puzzle, Duration::from_millis(delay_ms))?
        }
    };

    match outcome {
        Outcome::Solved { turns } => println!("Solved in {} moves", turns),
        Outcome::Unsolvable { best, tried } => println!(
            "This board is unsolvable. Tried {} states, closest board {} (h = {}):\n{}",
            tried,
            best.serialize(),
            best.heuristic(),
            best
        ),
        Outcome::Quit { turns } => println!("Gave up after {} moves", turns),
    }
    Ok(())
}
