//! evolve-text CLI - Evolve a message toward a goal text.
//!
//! Usage: `evolve-text [WORD ...]`
//!
//! The words are joined with single spaces to form the goal. Without
//! arguments the goal is "SKYNET IS NOW ONLINE". Every evaluated message is
//! logged at `info` level; set `RUST_LOG=warn` to see only the final table.

use u_textevo::ga::{GaConfig, GaRunner};
use u_textevo::text::{Alphabet, TextProblem};
use u_textevo::Result;

const DEFAULT_GOAL: &str = "SKYNET IS NOW ONLINE";
const SEED: u64 = 4;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let goal = goal_from_args(std::env::args().skip(1));

    if let Err(e) = run(&goal) {
        eprintln!("Error: given text {goal:?} cannot be evolved: {e}");
        std::process::exit(1);
    }
}

/// Joins the words with single spaces, or falls back to [`DEFAULT_GOAL`].
fn goal_from_args<I: IntoIterator<Item = String>>(args: I) -> String {
    let words: Vec<String> = args.into_iter().collect();
    if words.is_empty() {
        DEFAULT_GOAL.to_string()
    } else {
        words.join(" ")
    }
}

fn run(goal: &str) -> Result<()> {
    let problem = TextProblem::new(goal, Alphabet::default())?.with_verbose(true);
    let config = GaConfig::default().with_seed(SEED);

    let result = GaRunner::run(&problem, &config)?;

    print!("{}", result.log);
    println!();
    println!(
        "Best: {:?} [Distance: {}] after {} generations",
        result.best.text(),
        result.best_fitness,
        result.generations
    );
    Ok(())
}
