//! Per-generation fitness statistics.

use std::fmt;

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Individuals evaluated in this generation (unset fitness only).
    pub evaluations: usize,

    pub min: f64,
    pub max: f64,
    pub mean: f64,

    /// Population standard deviation.
    pub std: f64,
}

impl GenerationStats {
    /// Summarizes a non-empty slice of fitness values.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty.
    pub fn compute(generation: usize, evaluations: usize, fitnesses: &[f64]) -> Self {
        assert!(!fitnesses.is_empty(), "cannot summarize empty population");

        let n = fitnesses.len() as f64;
        let min = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let max = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitnesses.iter().sum::<f64>() / n;
        let variance = fitnesses.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;

        Self {
            generation,
            evaluations,
            min,
            max,
            mean,
            std: variance.sqrt(),
        }
    }
}

/// Append-only log of [`GenerationStats`] for one run.
///
/// Displays as a tab-separated table with one row per generation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsLog {
    entries: Vec<GenerationStats>,
}

impl StatsLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Summarizes `fitnesses`, appends the record, and returns it.
    pub fn record(
        &mut self,
        generation: usize,
        evaluations: usize,
        fitnesses: &[f64],
    ) -> GenerationStats {
        let stats = GenerationStats::compute(generation, evaluations, fitnesses);
        self.entries.push(stats);
        stats
    }

    pub fn entries(&self) -> &[GenerationStats] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.entries.last()
    }

    /// Minimum fitness of each generation, in order.
    pub fn min_history(&self) -> Vec<f64> {
        self.entries.iter().map(|s| s.min).collect()
    }
}

impl fmt::Display for StatsLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gen\tnevals\tavg\tstd\tmin\tmax")?;
        for s in &self.entries {
            writeln!(
                f,
                "{}\t{}\t{:.3}\t{:.3}\t{}\t{}",
                s.generation, s.evaluations, s.mean, s.std, s.min, s.max
            )?;
        }
        Ok(())
    }
}
