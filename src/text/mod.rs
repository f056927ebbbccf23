//! Text evolution on top of the GA framework.
//!
//! Individuals are [`Message`]s: variable-length symbol sequences over a
//! closed [`Alphabet`]. Fitness is the Levenshtein distance to a target
//! text, so a zero-fitness message spells the target exactly.
//!
//! # Key Types
//!
//! - [`Alphabet`]: The symbol set (uppercase letters plus space by default)
//! - [`Message`]: The individual
//! - [`TextProblem`]: Target, alphabet and operator parameters; implements
//!   [`GaProblem`](crate::ga::GaProblem)
//! - [`edit_distance`]: The fitness function

mod alphabet;
mod distance;
mod message;
mod problem;

pub use alphabet::{Alphabet, UPPERCASE_WITH_SPACE};
pub use distance::{edit_distance, edit_distance_str};
pub use message::Message;
pub use problem::TextProblem;
