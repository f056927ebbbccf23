//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{Result, TextEvoError};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, tournament size, operator rates, the fixed
/// generation budget, and parallel evaluation.
///
/// # Defaults
///
/// ```
/// use u_textevo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 300);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_textevo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.1)
///     .with_seed(4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant for the run.
    pub population_size: usize,

    /// Number of generations evolved before termination.
    ///
    /// The run always completes this many generations; finding an exact
    /// match does not stop it early.
    pub max_generations: usize,

    /// Contestants drawn (with replacement) per tournament.
    ///
    /// - 1: uniform sampling, no selection pressure
    /// - 3: moderate pressure (default)
    /// - ≥ population size: always the best individual
    pub tournament_size: usize,

    /// Probability of applying crossover to a pair of the mating pool.
    pub crossover_rate: f64,

    /// Probability of attempting mutation on an offspring.
    ///
    /// The problem's own per-edit probabilities then decide which edits
    /// actually happen.
    pub mutation_rate: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Evaluation draws no
    /// random numbers, so results are identical either way.
    pub parallel: bool,

    /// Random seed for [`GaRunner::run`](super::GaRunner::run).
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            max_generations: 500,
            tournament_size: 3,
            crossover_rate: 0.5,
            mutation_rate: 0.2,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> TextEvoError {
    TextEvoError::InvalidConfig(msg.into())
}
