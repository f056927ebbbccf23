//! The individual: a variable-length symbol sequence.

use super::alphabet::Alphabet;
use crate::error::{Result, TextEvoError};
use crate::ga::Individual;
use rand::Rng;
use std::fmt;

/// A candidate text evolved toward the target.
///
/// Holds at least one symbol at all times. Fitness is the edit distance to
/// the target, or `None` until evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    symbols: Vec<char>,
    fitness: Option<usize>,
}

impl Message {
    /// Wraps exactly `symbols`, with unset fitness.
    ///
    /// # Panics
    /// Panics if `symbols` is empty.
    pub fn from_symbols(symbols: Vec<char>) -> Self {
        assert!(!symbols.is_empty(), "message must not be empty");
        Self {
            symbols,
            fitness: None,
        }
    }

    /// Builds a message from `text`, checking it against `alphabet`.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self> {
        if text.is_empty() {
            return Err(TextEvoError::EmptySequence);
        }
        alphabet.validate(text)?;
        Ok(Self::from_symbols(text.chars().collect()))
    }

    /// Random message with a length drawn uniformly from
    /// `[min_length, max_length]` and symbols drawn uniformly from
    /// `alphabet`.
    ///
    /// # Panics
    /// Panics if `min_length` is 0 or greater than `max_length`.
    pub fn random<R: Rng>(
        alphabet: &Alphabet,
        min_length: usize,
        max_length: usize,
        rng: &mut R,
    ) -> Self {
        assert!(
            min_length >= 1 && min_length <= max_length,
            "invalid length range [{min_length}, {max_length}]"
        );
        let len = rng.random_range(min_length..=max_length);
        let symbols = (0..len).map(|_| alphabet.random_symbol(rng)).collect();
        Self::from_symbols(symbols)
    }

    /// The symbol sequence.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a well-formed message.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols collected into a string.
    pub fn text(&self) -> String {
        self.symbols.iter().collect()
    }

    pub(crate) fn genome_mut(&mut self) -> &mut Vec<char> {
        &mut self.symbols
    }

    pub(crate) fn into_symbols(self) -> Vec<char> {
        self.symbols
    }
}

impl Individual for Message {
    type Fitness = usize;

    fn fitness(&self) -> Option<usize> {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: usize) {
        self.fitness = Some(fitness);
    }

    fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
