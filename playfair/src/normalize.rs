//! Letter normalization: keep ASCII letters, uppercase them, fold J into I

use crate::alphabet::{letters_to_string, Letter};

/// Filters `text` down to Playfair letters in their original order.
///
/// Digits, punctuation, whitespace and non-ASCII characters are dropped, not
/// replaced. Never fails; the result may be empty.
pub fn normalize(text: &str) -> Vec<Letter> {
    let letters: Vec<Letter> = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            up => up,
        })
        .filter_map(|c| Letter::try_from(c).ok())
        .collect();

    log::trace!("normalized {} chars into {} letters", text.chars().count(), letters.len());
    letters
}

/// [`normalize`] rendered as a string, e.g. `"He11o, World!"` becomes `"HELOWORLD"`.
pub fn normalize_to_string(text: &str) -> String {
    letters_to_string(&normalize(text))
}
