//! Splitting plaintext into Playfair digraphs

use std::fmt;

use crate::alphabet::{Letter, PAD};
use crate::normalize::normalize;

/// An ordered letter pair, the unit of Playfair substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    pub first: Letter,
    pub second: Letter,
}

impl Digraph {
    pub fn new(first: Letter, second: Letter) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Normalize `plaintext` and pair it up.
///
/// Rules, applied left to right:
/// - a letter followed by the same letter is paired with [`PAD`] and only the
///   first one is consumed, so the repeat starts the next pair;
/// - a trailing single letter is paired with [`PAD`];
/// - otherwise two letters are consumed as one pair.
///
/// Because the pad is `X`, a doubled `X` still yields `XX`.
///
/// ```rust
/// use playfair::prepare_digraphs;
///
/// let pairs: Vec<String> = prepare_digraphs("balloon").iter().map(|d| d.to_string()).collect();
/// assert_eq!(pairs, ["BA", "LX", "LO", "ON"]);
/// ```
pub fn prepare_digraphs(plaintext: &str) -> Vec<Digraph> {
    let text = normalize(plaintext);
    let mut digraphs = Vec::with_capacity((text.len() + 1) / 2);

    let mut i = 0;
    while i < text.len() {
        let a = text[i];
        let b = text.get(i + 1).copied().unwrap_or(PAD);

        if a == b {
            digraphs.push(Digraph::new(a, PAD));
            i += 1;
        } else {
            digraphs.push(Digraph::new(a, b));
            i += 2;
        }
    }

    log::trace!("{} letters paired into {} digraphs", text.len(), digraphs.len());
    digraphs
}
