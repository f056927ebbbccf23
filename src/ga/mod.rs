//! Genetic Algorithm framework.
//!
//! A generic generational GA built on trait-based abstractions. Problems
//! plug in by implementing [`GaProblem`], which supplies the concrete
//! creation, evaluation, crossover and mutation operators.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with an optional fitness
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, budget)
//! - [`GaRunner`]: State machine that executes the generational loop
//! - [`GaResult`]: Best individual, final population and statistics log
//! - [`StatsLog`]: Per-generation min/max/mean/std
//!
//! # Submodules
//!
//! - [`operators`]: Variable-length two-point crossover and edit mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Bäck, Fogel & Michalewicz (2000), *Evolutionary Computation 1*, ch. 33 (variation operators)

mod config;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use config::GaConfig;
pub use runner::{EngineState, GaResult, GaRunner};
pub use selection::Tournament;
pub use stats::{GenerationStats, StatsLog};
pub use types::{Fitness, GaProblem, Individual};
