//! The closed symbol set genomes and targets are drawn from.

use crate::error::{Result, TextEvoError};
use rand::Rng;
use std::fmt;

/// Uppercase ASCII letters plus space.
pub const UPPERCASE_WITH_SPACE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// An ordered, duplicate-free, non-empty set of symbols.
///
/// # Examples
///
/// ```
/// use u_textevo::text::Alphabet;
///
/// let ab = Alphabet::new("AB").unwrap();
/// assert!(ab.contains('A'));
/// assert!(ab.validate("ABBA").is_ok());
/// assert!(ab.validate("ABC").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::uppercase_with_space()
    }
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`.
    ///
    /// Repeated characters are kept once, in first-seen order.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut unique: Vec<char> = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.is_empty() {
            return Err(TextEvoError::EmptyAlphabet);
        }
        Ok(Self { symbols: unique })
    }

    pub fn uppercase_with_space() -> Self {
        Self {
            symbols: UPPERCASE_WITH_SPACE.chars().collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an alphabet has at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Checks that every character of `text` belongs to the alphabet.
    ///
    /// Reports the first offending character together with the full valid
    /// set.
    pub fn validate(&self, text: &str) -> Result<()> {
        match text.chars().find(|&c| !self.contains(c)) {
            Some(symbol) => Err(TextEvoError::InvalidSymbol {
                symbol,
                alphabet: self.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Draws one symbol uniformly.
    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
