//! Error types.
//!
//! Only configuration problems are reported as errors. A zero-length
//! individual reaching an operator is a defect and panics instead.

use thiserror::Error;

/// Configuration errors detected before any search work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextEvoError {
    /// A symbol of the target (or a seed text) is outside the alphabet.
    #[error("illegal symbol {symbol:?}; valid set: {alphabet:?}")]
    InvalidSymbol { symbol: char, alphabet: String },

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("symbol sequence must not be empty")]
    EmptySequence,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TextEvoError>;
