//! Variable-length sequence operators.
//!
//! Crossover and mutation operators for genomes whose length is not fixed.
//! They work on plain `Vec<T>` and draw every random number from the
//! caller's RNG, so they are usable by any sequence-encoded problem.
//!
//! # Crossover Operators
//!
//! - [`two_point_crossover`]: swap one segment per parent, lengths may change
//!
//! # Mutation Operators
//!
//! - [`mutate_sequence`]: independent insertion, deletion and substitution
//!
//! Every operator keeps genomes non-empty. An empty genome reaching one of
//! them is a defect and panics.

use rand::Rng;
use std::ops::Range;

// ============================================================================
// Crossover operators
// ============================================================================

/// Two-point crossover for variable-length genomes.
///
/// A non-empty segment `[start, end]` is drawn independently inside each
/// parent, using that parent's own length, and the two segments are
/// exchanged:
///
/// ```text
/// a = a[..sa] + a[sa..=ea] + a[ea+1..]      a' = a[..sa] + b[sb..=eb] + a[ea+1..]
/// b = b[..sb] + b[sb..=eb] + b[eb+1..]  →   b' = b[..sb] + a[sa..=ea] + b[eb+1..]
/// ```
///
/// The total number of symbols is preserved, and since each child receives
/// at least one symbol from the other parent, both children stay non-empty.
///
/// # Complexity
/// O(|a| + |b|) time
///
/// # Panics
/// Panics if either parent is empty.
pub fn two_point_crossover<T, R: Rng>(a: Vec<T>, b: Vec<T>, rng: &mut R) -> (Vec<T>, Vec<T>) {
    assert!(!a.is_empty() && !b.is_empty(), "parents must not be empty");

    let (a_start, a_end) = random_segment(a.len(), rng);
    let (b_start, b_end) = random_segment(b.len(), rng);

    swap_segments(a, b, a_start..a_end + 1, b_start..b_end + 1)
}

/// Exchange `a[a_range]` with `b[b_range]`, reusing the parents as the
/// children.
///
/// `b`'s segment is spliced straight into `a`; only `a`'s displaced
/// segment is buffered.
pub(crate) fn swap_segments<T>(
    mut a: Vec<T>,
    mut b: Vec<T>,
    a_range: Range<usize>,
    b_range: Range<usize>,
) -> (Vec<T>, Vec<T>) {
    let insert_at = b_range.start;
    let from_a: Vec<T> = a.splice(a_range, b.drain(b_range)).collect();
    b.splice(insert_at..insert_at, from_a);
    (a, b)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Per-edit probabilities used by [`mutate_sequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRates {
    /// Probability of inserting one random symbol.
    pub insert: f64,
    /// Probability of deleting one symbol (never below length 1).
    pub delete: f64,
    /// Probability of replacing one symbol with a random one.
    pub substitute: f64,
}

impl Default for MutationRates {
    fn default() -> Self {
        Self {
            insert: 0.05,
            delete: 0.05,
            substitute: 0.05,
        }
    }
}

impl MutationRates {
    /// Creates rates, clamping each into `[0, 1]`.
    pub fn new(insert: f64, delete: f64, substitute: f64) -> Self {
        Self {
            insert: insert.clamp(0.0, 1.0),
            delete: delete.clamp(0.0, 1.0),
            substitute: substitute.clamp(0.0, 1.0),
        }
    }

    /// Returns `true` if every rate lies within `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        [self.insert, self.delete, self.substitute]
            .iter()
            .all(|p| (0.0..=1.0).contains(p))
    }
}

/// Insertion, deletion and substitution mutation.
///
/// Three independent trials run in a fixed order, each on the genome left
/// by the previous one:
///
/// 1. Insertion at a position in `[0, len]` (appending included)
/// 2. Deletion at a position in `[0, len - 1)`, only when `len > 1`
/// 3. Substitution at a position in `[0, len)`; the replacement may equal
///    the original symbol
///
/// New symbols come from `draw`. Insertion has no upper length bound.
///
/// Returns `true` if any edit was applied.
///
/// # Panics
/// Panics if `genome` is empty.
pub fn mutate_sequence<T, R, F>(
    genome: &mut Vec<T>,
    rates: &MutationRates,
    rng: &mut R,
    mut draw: F,
) -> bool
where
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    assert!(!genome.is_empty(), "genome must not be empty");
    let mut changed = false;

    if rng.random_range(0.0..1.0) < rates.insert {
        let i = rng.random_range(0..=genome.len());
        let symbol = draw(&mut *rng);
        genome.insert(i, symbol);
        changed = true;
    }

    if rng.random_range(0.0..1.0) < rates.delete && genome.len() > 1 {
        let i = rng.random_range(0..genome.len() - 1);
        genome.remove(i);
        changed = true;
    }

    if rng.random_range(0.0..1.0) < rates.substitute {
        let i = rng.random_range(0..genome.len());
        genome[i] = draw(&mut *rng);
        changed = true;
    }

    changed
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
