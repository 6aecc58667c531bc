//! Error types for Playfair letter handling

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayfairError {
    #[error("Invalid letter {0:?} (must be an ASCII letter)")]
    InvalidLetter(char),

    #[error("J is merged into I and has no cell in the key square")]
    MergedLetter,
}

pub type Result<T> = std::result::Result<T, PlayfairError>;
