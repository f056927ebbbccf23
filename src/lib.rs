//! Evolutionary search for a target text.
//!
//! A population of random symbol sequences is evolved with a generational
//! genetic algorithm until it spells a target sequence, using edit
//! distance as the only fitness signal.
//!
//! - **[`ga`]**: Generic generational GA: tournament selection,
//!   variable-length two-point crossover, insert/delete/substitute
//!   mutation, a state-machine runner and per-generation statistics.
//! - **[`text`]**: The text problem: alphabet, message individual, and
//!   the Levenshtein distance used as fitness.
//!
//! # Architecture
//!
//! The runner knows nothing about text: it drives any [`ga::GaProblem`].
//! All randomness is threaded through an explicit RNG, so a run is
//! reproducible from its seed.
//!
//! ```
//! use u_textevo::ga::{GaConfig, GaRunner};
//! use u_textevo::text::{Alphabet, TextProblem};
//!
//! let problem = TextProblem::new("HI", Alphabet::default()).unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(3)
//!     .with_seed(4);
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.generations, 3);
//! ```

pub mod error;
pub mod ga;
pub mod random;
pub mod text;

pub use error::{Result, TextEvoError};
