//! 5x5 key square derived from a keyword

use std::fmt;

use crate::alphabet::{Letter, ALPHABET};
use crate::normalize::normalize;

/// Side length of the key square.
pub const SIZE: usize = 5;

/// Row/column coordinate of a cell, both in `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The Playfair substitution alphabet.
///
/// Holds the grid and its inverse, a table indexed by [`Letter::index`].
/// For every cell `p`, `position_of(letter_at(p)) == p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    grid: [[Letter; SIZE]; SIZE],
    positions: [Position; 26],
}

impl KeySquare {
    /// Derive the square for `key`.
    ///
    /// Key letters come first in order of first occurrence, then the rest of
    /// [`ALPHABET`] in canonical order. Any key works: an empty or letterless
    /// key yields the canonical square.
    ///
    /// # Example
    ///
    /// ```rust
    /// use playfair::KeySquare;
    ///
    /// let square = KeySquare::new("playfair example");
    /// assert_eq!(square.to_string().lines().next(), Some("P L A Y F"));
    /// ```
    pub fn new(key: &str) -> Self {
        let mut seen = [false; 26];
        let mut stream: Vec<Letter> = Vec::with_capacity(SIZE * SIZE);

        let key_letters = normalize(key);
        for letter in key_letters.into_iter().chain(ALPHABET) {
            if !seen[letter.index()] {
                seen[letter.index()] = true;
                stream.push(letter);
            }
        }
        debug_assert_eq!(stream.len(), SIZE * SIZE);

        let mut grid = [[ALPHABET[0]; SIZE]; SIZE];
        let mut positions = [Position::new(0, 0); 26];
        for (i, &letter) in stream.iter().enumerate() {
            let pos = Position::new(i / SIZE, i % SIZE);
            grid[pos.row][pos.col] = letter;
            positions[letter.index()] = pos;
        }

        let square = Self { grid, positions };
        log::debug!("key square for {:?}:\n{}", key, square);
        square
    }

    pub fn grid(&self) -> &[[Letter; SIZE]; SIZE] {
        &self.grid
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter; SIZE]> {
        self.grid.iter()
    }

    pub fn letter_at(&self, pos: Position) -> Letter {
        self.grid[pos.row][pos.col]
    }

    /// Cell holding `letter`. Total, since every letter has a cell.
    pub fn position_of(&self, letter: Letter) -> Position {
        self.positions[letter.index()]
    }

    /// Cell for a raw character, folding `J` into `I`.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn position(&self, ch: char) -> Option<Position> {
        let ch = match ch.to_ascii_uppercase() {
            'J' => 'I',
            up => up,
        };
        Letter::try_from(ch).ok().map(|l| self.position_of(l))
    }
}

impl Default for KeySquare {
    /// The canonical square, same as an empty key.
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, letter) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Free-function form of [`KeySquare::new`].
pub fn build_key_square(key: &str) -> KeySquare {
    KeySquare::new(key)
}
