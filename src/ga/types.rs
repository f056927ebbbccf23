//! Core trait definitions for the GA framework.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generational engine and the problem that supplies
//! the concrete operators.

use crate::error::Result;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `usize` (edit distances) and `f64`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used when comparing individuals whose fitness is unset.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for usize {
    fn worst() -> Self {
        usize::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Fitness is optional: `None` means the individual has never been
/// evaluated, or its genome changed since the last evaluation. The engine
/// only evaluates individuals whose fitness is `None`.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<u8>,
///     fitness: Option<usize>,
/// }
///
/// impl Individual for MySolution {
///     type Fitness = usize;
///     fn fitness(&self) -> Option<usize> { self.fitness }
///     fn set_fitness(&mut self, f: usize) { self.fitness = Some(f); }
///     fn invalidate_fitness(&mut self) { self.fitness = None; }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness, or `None` if unset or stale.
    fn fitness(&self) -> Option<Self::Fitness>;

    /// Stores the fitness computed by [`GaProblem::evaluate`].
    fn set_fitness(&mut self, fitness: Self::Fitness);

    /// Marks the fitness as stale.
    fn invalidate_fitness(&mut self);

    /// Fitness used for ranking: unset fitness ranks as worst.
    fn fitness_or_worst(&self) -> Self::Fitness {
        self.fitness().unwrap_or_else(<Self::Fitness as Fitness>::worst)
    }
}

/// Defines a GA optimization problem.
///
/// The problem owns the concrete operators the engine calls each
/// generation:
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents into two children
/// 4. **Mutation**: How to perturb an individual
///
/// All randomness comes from the `rng` argument, so a run is reproducible
/// from the seed that built it.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Checks problem parameters before a run starts.
    ///
    /// The default implementation accepts everything.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be a pure function of the individual; it must not draw random
    /// numbers.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into two children.
    ///
    /// Both parents are consumed. The default implementation returns them
    /// unchanged.
    fn crossover<R: Rng>(
        &self,
        parent1: Self::Individual,
        parent2: Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1, parent2)
    }

    /// Mutates an individual, returning it.
    ///
    /// The default implementation returns it unchanged.
    fn mutate<R: Rng>(&self, individual: Self::Individual, _rng: &mut R) -> Self::Individual {
        individual
    }

    /// Called after each generation is evaluated with the generation index
    /// and the best fitness in that generation.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
