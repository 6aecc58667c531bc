//! The 25-letter Playfair alphabet (I and J share one cell)

use std::fmt;

use crate::error::{PlayfairError, Result};

/// A single uppercase ASCII letter other than `J`.
///
/// Every `Letter` has exactly one cell in a [`KeySquare`](crate::KeySquare),
/// which is what makes square lookups total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from a byte already known to be in `A..=Z` and not `J`.
    const fn from_ascii(byte: u8) -> Self {
        Self(byte)
    }

    /// Zero-based slot of this letter in `A..=Z` (J keeps its unused slot).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = PlayfairError;

    /// Accepts either case; rejects `J` and anything that is not an ASCII letter.
    fn try_from(ch: char) -> Result<Self> {
        if !ch.is_ascii_alphabetic() {
            return Err(PlayfairError::InvalidLetter(ch));
        }

        let upper = ch.to_ascii_uppercase() as u8;
        if upper == b'J' {
            return Err(PlayfairError::MergedLetter);
        }

        Ok(Self(upper))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

/// Canonical alphabet order used to fill the key square after the key.
pub const ALPHABET: [Letter; 25] = {
    const LETTERS: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";
    let mut out = [Letter::from_ascii(b'A'); 25];
    let mut i = 0;
    while i < 25 {
        out[i] = Letter::from_ascii(LETTERS[i]);
        i += 1;
    }
    out
};

/// Filler inserted between doubled letters and after an odd trailing letter.
pub const PAD: Letter = Letter::from_ascii(b'X');

/// Render a letter sequence as a contiguous uppercase string.
pub fn letters_to_string(letters: &[Letter]) -> String {
    letters.iter().map(|&l| char::from(l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_excludes_j() {
        assert_eq!(letters_to_string(&ALPHABET), "ABCDEFGHIKLMNOPQRSTUVWXYZ");
        assert!(ALPHABET.iter().all(|&l| char::from(l) != 'J'));
    }

    #[test]
    fn test_letter_from_char() {
        assert_eq!(Letter::try_from('q').unwrap(), Letter::try_from('Q').unwrap());
        assert_eq!(char::from(Letter::try_from('z').unwrap()), 'Z');
        assert_eq!(Letter::try_from('A').unwrap().index(), 0);
        assert_eq!(Letter::try_from('Z').unwrap().index(), 25);
    }

    #[test]
    fn test_letter_rejects_j_and_non_letters() {
        assert_eq!(Letter::try_from('J'), Err(PlayfairError::MergedLetter));
        assert_eq!(Letter::try_from('j'), Err(PlayfairError::MergedLetter));
        assert_eq!(Letter::try_from('7'), Err(PlayfairError::InvalidLetter('7')));
        assert_eq!(Letter::try_from('é'), Err(PlayfairError::InvalidLetter('é')));
    }

    #[test]
    fn test_pad_is_x() {
        assert_eq!(PAD.to_string(), "X");
    }
}
