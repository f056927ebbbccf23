//! GA generational loop execution.
//!
//! [`GaRunner`] drives the evolutionary process as an explicit state
//! machine:
//!
//! ```text
//! Initializing → Evaluating ⇄ Evolving
//!                    ↓
//!                Terminated
//! ```
//!
//! Each generation runs evaluation, selection, crossover and mutation in
//! that order. All randomness flows through the RNG handed to
//! [`GaRunner::new`], so a run is fully determined by its seed.

use super::config::GaConfig;
use super::selection::{best_index, Tournament};
use super::stats::StatsLog;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;

/// Lifecycle of a [`GaRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No population exists yet.
    Initializing,
    /// Individuals with unset fitness are about to be evaluated.
    Evaluating,
    /// The next generation is about to be bred.
    Evolving,
    /// The generation budget is spent.
    Terminated,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual evaluated during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations evolved after the initial population.
    pub generations: usize,

    /// The final population.
    pub population: Vec<I>,

    /// Statistics for the initial population and each evolved generation.
    pub log: StatsLog,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = TextProblem::new("HELLO", Alphabet::default())?;
/// let config = GaConfig::default().with_seed(4);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("{}", result.log);
/// ```
///
/// Or step through the states with an explicit RNG:
///
/// ```ignore
/// let mut runner = GaRunner::new(&problem, &config, create_rng(4))?;
/// while runner.step() != EngineState::Terminated {}
/// ```
pub struct GaRunner<'a, P: GaProblem, R: Rng> {
    problem: &'a P,
    config: GaConfig,
    tournament: Tournament,
    rng: R,
    state: EngineState,
    generation: usize,
    population: Vec<P::Individual>,
    best: Option<P::Individual>,
    log: StatsLog,
}

impl<'a, P: GaProblem> GaRunner<'a, P, StdRng> {
    /// Runs the GA to completion with an RNG seeded from `config.seed`.
    ///
    /// A missing seed draws one from the thread-local generator.
    pub fn run(problem: &'a P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let runner = GaRunner::new(problem, config, create_rng(seed))?;
        Ok(runner.run_to_end())
    }
}

impl<'a, P: GaProblem, R: Rng> GaRunner<'a, P, R> {
    /// Creates a runner in the [`EngineState::Initializing`] state.
    ///
    /// The configuration and the problem are validated before any work is
    /// done.
    pub fn new(problem: &'a P, config: &GaConfig, rng: R) -> Result<Self> {
        config.validate()?;
        problem.validate()?;

        Ok(Self {
            problem,
            config: config.clone(),
            tournament: Tournament::new(config.tournament_size),
            rng,
            state: EngineState::Initializing,
            generation: 0,
            population: Vec::new(),
            best: None,
            log: StatsLog::with_capacity(config.max_generations + 1),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Index of the current generation; 0 is the initial population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current population; empty before initialization.
    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Statistics recorded so far.
    pub fn log(&self) -> &StatsLog {
        &self.log
    }

    /// Best individual evaluated so far, if any.
    pub fn best(&self) -> Option<&P::Individual> {
        self.best.as_ref()
    }

    /// Performs one state transition and returns the new state.
    ///
    /// Calling this in [`EngineState::Terminated`] does nothing.
    pub fn step(&mut self) -> EngineState {
        self.state = match self.state {
            EngineState::Initializing => {
                self.initialize();
                EngineState::Evaluating
            }
            EngineState::Evaluating => {
                self.evaluate();
                if self.generation >= self.config.max_generations {
                    log::info!(
                        "GA finished after {} generations, best fitness {:?}",
                        self.generation,
                        self.best.as_ref().map(|b| b.fitness_or_worst())
                    );
                    EngineState::Terminated
                } else {
                    EngineState::Evolving
                }
            }
            EngineState::Evolving => {
                self.evolve();
                self.generation += 1;
                EngineState::Evaluating
            }
            EngineState::Terminated => EngineState::Terminated,
        };
        self.state
    }

    /// Steps until [`EngineState::Terminated`] and returns the result.
    pub fn run_to_end(mut self) -> GaResult<P::Individual> {
        while self.step() != EngineState::Terminated {}

        let best = self
            .best
            .expect("terminated run has evaluated at least one generation");
        GaResult {
            best_fitness: best.fitness_or_worst(),
            best,
            generations: self.generation,
            population: self.population,
            log: self.log,
        }
    }

    fn initialize(&mut self) {
        log::info!(
            "starting GA: population {}, generations {}, tournament {}",
            self.config.population_size,
            self.config.max_generations,
            self.tournament.size()
        );
        self.population = (0..self.config.population_size)
            .map(|_| self.problem.create_individual(&mut self.rng))
            .collect();
    }

    fn evaluate(&mut self) {
        let evaluations = evaluate_pending(self.problem, &mut self.population, self.config.parallel);

        let fitnesses: Vec<f64> = self
            .population
            .iter()
            .map(|ind| ind.fitness_or_worst().to_f64())
            .collect();
        let stats = self.log.record(self.generation, evaluations, &fitnesses);
        log::debug!(
            "gen {}: nevals {}, min {}, mean {:.3}, max {}",
            stats.generation,
            stats.evaluations,
            stats.min,
            stats.mean,
            stats.max
        );

        let gen_best = &self.population[best_index(&self.population)];
        let improved = match &self.best {
            Some(best) => gen_best.fitness_or_worst() < best.fitness_or_worst(),
            None => true,
        };
        if improved {
            self.best = Some(gen_best.clone());
        }

        self.problem
            .on_generation(self.generation, gen_best.fitness_or_worst());
    }

    fn evolve(&mut self) {
        let n = self.config.population_size;
        let pool = self.tournament.select(&self.population, n, &mut self.rng);

        // Crossover on disjoint adjacent pairs, in pool order.
        let mut offspring = Vec::with_capacity(n);
        let mut pool = pool.into_iter();
        while let Some(first) = pool.next() {
            let Some(second) = pool.next() else {
                offspring.push(first);
                break;
            };
            if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                let (mut a, mut b) = self.problem.crossover(first, second, &mut self.rng);
                a.invalidate_fitness();
                b.invalidate_fitness();
                offspring.push(a);
                offspring.push(b);
            } else {
                offspring.push(first);
                offspring.push(second);
            }
        }

        let mut next_gen = Vec::with_capacity(n);
        for child in offspring {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                let mut mutant = self.problem.mutate(child, &mut self.rng);
                mutant.invalidate_fitness();
                next_gen.push(mutant);
            } else {
                next_gen.push(child);
            }
        }

        debug_assert_eq!(next_gen.len(), n);
        self.population = next_gen;
    }
}

/// Evaluate individuals with unset fitness; returns how many were evaluated.
#[cfg(feature = "parallel")]
fn evaluate_pending<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) -> usize {
    use rayon::prelude::*;

    if !parallel {
        return evaluate_sequential(problem, population);
    }
    population
        .par_iter_mut()
        .filter(|ind| ind.fitness().is_none())
        .map(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
            1
        })
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_pending<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) -> usize {
    evaluate_sequential(problem, population)
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) -> usize {
    let mut count = 0;
    for ind in population.iter_mut().filter(|ind| ind.fitness().is_none()) {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
        count += 1;
    }
    count
}

// ============================================================================
// Tests
// ============================================================================
