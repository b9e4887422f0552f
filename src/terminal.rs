//! Terminal drawing and keyboard play.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use log::{debug, warn};
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use tile_puzzle::{
    puzzle::{Move, Puzzle},
    search::SearchTree,
};

/// How a game ended.
pub enum Outcome {
    Solved { turns: usize },
    Unsolvable { best: Puzzle, tried: usize },
    Quit { turns: usize },
}

impl Outcome {
    pub fn from_search(tree: &SearchTree, turns: usize) -> Self {
        match tree.best_terminal_board() {
            Some(best) if !tree.is_solvable() => Outcome::Unsolvable {
                best: best.clone(),
                tried: tree.moves_tried(),
            },
            _ => Outcome::Solved { turns },
        }
    }
}

/// Redraw `puzzle` from the top of the screen with a status line below it.
pub fn draw<W: Write>(out: &mut W, puzzle: &Puzzle, status: &str) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for (row, line) in puzzle.render(2).lines().enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16 + 1), Print(line))?;
    }
    queue!(
        out,
        cursor::MoveTo(0, puzzle.size() as u16 + 2),
        Print(status),
        cursor::MoveTo(0, puzzle.size() as u16 + 3)
    )?;
    out.flush()
}

/// Pull moves from a solved tree one at a time, applying and drawing each
/// after `delay`. Returns the number of moves made.
pub fn replay<W: Write>(
    out: &mut W,
    puzzle: &mut Puzzle,
    tree: &mut SearchTree,
    delay: Duration,
) -> io::Result<usize> {
    let mut turns = 0;
    draw(out, puzzle, "Turn 0")?;

    while tree.has_next_move() {
        thread::sleep(delay);
        if let Some(tile) = tree.next_move() {
            if !puzzle.apply_move(tile) {
                warn!("Skipping move {} on {}", tile, puzzle.serialize());
                continue;
            }
            turns += 1;
            draw(out, puzzle, &format!("Turn {}: moved {}", turns, tile))?;
        }
    }
    Ok(turns)
}

/// Solve from `puzzle` and animate the result.
pub fn auto_solve<W: Write>(out: &mut W, puzzle: &mut Puzzle, delay: Duration) -> Result<Outcome> {
    let mut tree = SearchTree::from_puzzle(puzzle);
    tree.solve()?;
    let turns = replay(out, puzzle, &mut tree, delay)?;
    Ok(Outcome::from_search(&tree, turns))
}

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Cannot switch the terminal to raw mode")?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, PartialEq)]
enum Action {
    Quit,
    Solve,
    Slide(u32),
}

/// Letters name tiles, so quitting and solving use keys that never do.
fn key_action(puzzle: &Puzzle, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Solve),
        KeyCode::Up => puzzle.tile_for(Move::Up).map(Action::Slide),
        KeyCode::Down => puzzle.tile_for(Move::Down).map(Action::Slide),
        KeyCode::Left => puzzle.tile_for(Move::Left).map(Action::Slide),
        KeyCode::Right => puzzle.tile_for(Move::Right).map(Action::Slide),
        KeyCode::Char(c) => c.to_digit(36).map(Action::Slide),
        _ => None,
    }
}

/// Interactive game on `puzzle`.
pub fn play(puzzle: &mut Puzzle, delay: Duration) -> Result<Outcome> {
    let _raw = RawMode::enable()?;
    let mut out = io::stdout();
    let help = "Arrows or tile keys move, Enter solves, Esc quits";
    let mut turns = 0;

    draw(&mut out, puzzle, help)?;
    loop {
        if puzzle.is_solved() {
            return Ok(Outcome::Solved { turns });
        }

        let code = match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => code,
            _ => continue,
        };

        match key_action(puzzle, code) {
            Some(Action::Quit) => return Ok(Outcome::Quit { turns }),
            Some(Action::Solve) => return auto_solve(&mut out, puzzle, delay),
            Some(Action::Slide(tile)) => {
                if puzzle.apply_move(tile) {
                    turns += 1;
                    debug!("Turn {}: moved {}", turns, tile);
                    draw(&mut out, puzzle, &format!("Turn {}   {}", turns, help))?;
                }
            }
            None => {}
        }
    }
}
