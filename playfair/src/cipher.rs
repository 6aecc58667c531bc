//! Digraph substitution trait and the Playfair rule

use crate::digraph::Digraph;
use crate::key_square::{KeySquare, Position, SIZE};

/// Trait for a cipher that substitutes one digraph at a time
pub trait DigraphCipher {
    /// Encrypts a single digraph
    fn encrypt_digraph(&self, digraph: Digraph) -> Digraph;

    /// Undoes [`DigraphCipher::encrypt_digraph`]
    fn invert_digraph(&self, digraph: Digraph) -> Digraph;
}

impl DigraphCipher for KeySquare {
    /// Same row: shift right. Same column: shift down. Otherwise swap columns.
    fn encrypt_digraph(&self, digraph: Digraph) -> Digraph {
        substitute(self, digraph, 1)
    }

    /// Same row: shift left. Same column: shift up. Otherwise swap columns.
    fn invert_digraph(&self, digraph: Digraph) -> Digraph {
        substitute(self, digraph, SIZE - 1)
    }
}

fn substitute(square: &KeySquare, digraph: Digraph, step: usize) -> Digraph {
    let a = square.position_of(digraph.first);
    let b = square.position_of(digraph.second);

    let (a, b) = if a.row == b.row {
        (
            Position::new(a.row, (a.col + step) % SIZE),
            Position::new(b.row, (b.col + step) % SIZE),
        )
    } else if a.col == b.col {
        (
            Position::new((a.row + step) % SIZE, a.col),
            Position::new((b.row + step) % SIZE, b.col),
        )
    } else {
        (Position::new(a.row, b.col), Position::new(b.row, a.col))
    };

    Digraph::new(square.letter_at(a), square.letter_at(b))
}
