use rand::{seq::SliceRandom, thread_rng, Rng};
use std::{fmt, str::FromStr};

/// Largest supported side length. Every tile must fit in one radix-36 character.
pub const MAX_DIM: usize = 6;

const RADIX: u32 = 36;

/// Direction a tile slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Offset `(row, col)` from the blank to the tile that slides in this direction.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }
}

/// Reasons a board cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A character of the configuration is not a tile digit.
    NotADigit { position: usize, found: char },
    /// The configuration length is not `dim * dim` for a supported `dim`.
    NotSquare { len: usize },
    /// The tiles are not exactly `0..dim * dim`.
    NotAPermutation { dim: usize },
    /// Side length outside `2..=MAX_DIM`.
    UnsupportedDimension(usize),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::NotADigit { position, found } => {
                write!(f, "invalid tile {:?} at position {}", found, position)
            }
            PuzzleError::NotSquare { len } => {
                write!(f, "{} tiles do not form a supported square board", len)
            }
            PuzzleError::NotAPermutation { dim } => write!(
                f,
                "tiles must be each of 0..{} exactly once",
                dim * dim - 1
            ),
            PuzzleError::UnsupportedDimension(dim) => {
                write!(f, "board size {} is outside 2..={}", dim, MAX_DIM)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// An n×n sliding-tile board. `0` is the blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Puzzle {
    /// The goal arrangement `1, 2, ..., size² - 1, 0`.
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        check_dimension(size)?;
        let len = size * size;
        let mut tiles: Vec<u32> = (1..len as u32).collect();
        tiles.push(0);

        Ok(Self {
            size,
            tiles,
            blank: len - 1,
        })
    }

    /// Uniformly random permutation. About half of these boards are unsolvable.
    pub fn random(size: usize) -> Result<Self, PuzzleError> {
        Self::random_with(size, &mut thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::solved(size)?;
        puzzle.shuffle(rng);
        Ok(puzzle)
    }

    /// Random board that passes [`Puzzle::is_solvable`].
    pub fn random_solvable_with<R: Rng + ?Sized>(
        size: usize,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::solved(size)?;
        loop {
            puzzle.shuffle(rng);
            if puzzle.is_solvable() {
                return Ok(puzzle);
            }
        }
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
        self.blank = self.position_of(0);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Flat row-major key, one radix-36 character per tile.
    pub fn serialize(&self) -> String {
        self.tiles
            .iter()
            .map(|&tile| char::from_digit(tile, RADIX).unwrap_or('?'))
            .collect()
    }

    /// Multi-line grid with `indent` spaces before each row; the blank is shown as a space.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        for row in self.tiles.chunks(self.size) {
            out.push_str(&" ".repeat(indent));
            for &tile in row {
                if tile == 0 {
                    out.push_str("   ");
                } else {
                    out.push_str(&format!("{:2} ", tile));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Inversion count with the blank ranked above every tile. Zero only for the goal.
    pub fn heuristic(&self) -> usize {
        let rank = |tile: u32| {
            if tile == 0 {
                self.tiles.len() as u32
            } else {
                tile
            }
        };

        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &val)| {
                let val = rank(val);
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&next| rank(next) < val)
                    .count()
            })
            .sum()
    }

    pub fn is_solved(&self) -> bool {
        self.heuristic() == 0
    }

    /// Tile values adjacent to the blank, in the order above, below, left, right.
    pub fn legal_moves(&self) -> Vec<u32> {
        let mut moves = Vec::with_capacity(4);
        let (row, col) = (self.blank / self.size, self.blank % self.size);

        if row > 0 {
            moves.push(self.tiles[self.blank - self.size]);
        }
        if row + 1 < self.size {
            moves.push(self.tiles[self.blank + self.size]);
        }
        if col > 0 {
            moves.push(self.tiles[self.blank - 1]);
        }
        if col + 1 < self.size {
            moves.push(self.tiles[self.blank + 1]);
        }
        moves
    }

    /// Slides `tile` into the blank. Returns false and leaves the board alone if
    /// `tile` is not next to the blank.
    pub fn apply_move(&mut self, tile: u32) -> bool {
        if tile == 0 || !self.legal_moves().contains(&tile) {
            return false;
        }

        let from = self.position_of(tile);
        self.tiles.swap(self.blank, from);
        self.blank = from;
        true
    }

    /// Tile that would slide in direction `movement`, if there is one.
    pub fn tile_for(&self, movement: Move) -> Option<u32> {
        let (dr, dc) = movement.as_offset();

        let row = (self.blank / self.size) as isize + dr;
        let col = (self.blank % self.size) as isize + dc;

        let size = self.size as isize;
        if row >= 0 && row < size && col >= 0 && col < size {
            Some(self.tiles[(row * size + col) as usize])
        } else {
            None
        }
    }

    /// Parity check for reachability of the goal.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.tiles);
        let empty_row = self.blank / self.size;

        if self.size % 2 == 1 {
            // Odd-sized puzzle: solvable if inversions count is even
            inversions % 2 == 0
        } else {
            // Even-sized puzzle: solvable if (inversions + empty row index) is odd
            (inversions + empty_row) % 2 == 1
        }
    }

    fn position_of(&self, tile: u32) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .unwrap_or(self.blank)
    }
}

fn check_dimension(size: usize) -> Result<(), PuzzleError> {
    if (2..=MAX_DIM).contains(&size) {
        Ok(())
    } else {
        Err(PuzzleError::UnsupportedDimension(size))
    }
}

fn count_inversions(flattened: &[u32]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(configuration: &str) -> Result<Self, Self::Err> {
        let digits = configuration
            .chars()
            .enumerate()
            .map(|(position, c)| {
                c.to_digit(RADIX)
                    .filter(|_| !c.is_ascii_uppercase())
                    .map(|tile| (position, c, tile))
                    .ok_or(PuzzleError::NotADigit { position, found: c })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = digits.len();
        let size = (len as f64).sqrt() as usize;
        if size * size != len || check_dimension(size).is_err() {
            return Err(PuzzleError::NotSquare { len });
        }

        // Letters only name tiles on boards large enough to hold them.
        let tiles = digits
            .into_iter()
            .map(|(position, c, tile)| {
                if (tile as usize) < len {
                    Ok(tile)
                } else {
                    Err(PuzzleError::NotADigit { position, found: c })
                }
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let mut seen = vec![false; len];
        for &tile in &tiles {
            match seen.get_mut(tile as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotAPermutation { dim: size }),
            }
        }

        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(PuzzleError::NotAPermutation { dim: size })?;

        Ok(Self { size, tiles, blank })
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

#[cfg(test)]
mod tests;
