//! # Playfair Cipher Library
//!
//! This library implements the classical Playfair digraph substitution cipher
//! over a 5x5 key square in which I and J share a cell.
//!
//! ## Pipeline
//!
//! - **Normalize** - keep ASCII letters, uppercase them, fold J into I
//! - **Key square** - key letters by first occurrence, then the rest of the alphabet
//! - **Digraphs** - pair letters, splitting repeats and padding with X
//! - **Substitute** - row, column or rectangle rule per digraph
//!
//! ## Usage
//!
//! ```rust
//! use playfair::{encrypt, KeySquare, encrypt_with};
//!
//! let ciphertext = encrypt("Hide the gold in the tree stump", "playfair example");
//! assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
//!
//! // Reuse one square for several messages
//! let square = KeySquare::new("playfair example");
//! assert_eq!(encrypt_with(&square, "hide"), "BMOD");
//! ```

// Public modules
pub mod alphabet;
pub mod cipher;
pub mod digraph;
pub mod error;
pub mod key_square;
pub mod normalize;

// Re-exports for easy access
pub use alphabet::{Letter, ALPHABET, PAD};
pub use cipher::DigraphCipher;
pub use digraph::{prepare_digraphs, Digraph};
pub use error::{PlayfairError, Result};
pub use key_square::{build_key_square, KeySquare, Position};
pub use normalize::{normalize, normalize_to_string};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encrypt `plaintext` under the square derived from `key`.
///
/// Never fails: an empty key gives the canonical square and an empty (or
/// letterless) plaintext gives an empty ciphertext. The result is uppercase
/// with no separators, two letters per digraph.
pub fn encrypt(plaintext: &str, key: &str) -> String {
    let square = KeySquare::new(key);
    encrypt_with(&square, plaintext)
}

/// Encrypt `plaintext` under an already built square.
pub fn encrypt_with<C: DigraphCipher>(cipher: &C, plaintext: &str) -> String {
    let digraphs = prepare_digraphs(plaintext);
    let mut ciphertext = String::with_capacity(digraphs.len() * 2);

    for digraph in digraphs {
        let encrypted = cipher.encrypt_digraph(digraph);
        debug_assert_eq!(cipher.invert_digraph(encrypted), digraph);
        log::trace!("{} -> {}", digraph, encrypted);

        ciphertext.push(encrypted.first.into());
        ciphertext.push(encrypted.second.into());
    }

    ciphertext
}
