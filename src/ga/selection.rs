//! Tournament selection.
//!
//! Builds the mating pool for the next generation by repeatedly picking
//! the best of a small random sample.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Tournament selection: pick `size` individuals at random, keep the best.
///
/// Assumes **minimization**. Individuals with unset fitness rank as worst.
///
/// # Examples
///
/// ```
/// use u_textevo::ga::Tournament;
///
/// let sel = Tournament::new(3);
/// assert_eq!(sel.size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament { size: 3 }
    }
}

impl Tournament {
    /// Creates a tournament with `size` contestants (at least 1).
    pub fn new(size: usize) -> Self {
        Tournament { size: size.max(1) }
    }

    /// Number of contestants per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Selects `count` individuals, cloned into a new mating pool.
    ///
    /// Winners may repeat.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(
        &self,
        population: &[I],
        count: usize,
        rng: &mut R,
    ) -> Vec<I> {
        (0..count)
            .map(|_| population[self.select_index(population, rng)].clone())
            .collect()
    }

    /// Runs one tournament and returns the winner's index.
    ///
    /// Contestants are drawn uniformly with replacement; ties go to the
    /// first contestant drawn. When the tournament is at least as large as
    /// the population, the best individual (first in population order) is
    /// returned without consuming randomness.
    ///
    /// # Complexity
    /// O(k) per selection, O(n) when k ≥ n
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_index<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        let n = population.len();

        if self.size >= n {
            return best_index(population);
        }

        let mut best_idx = rng.random_range(0..n);
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            if population[idx].fitness_or_worst() < population[best_idx].fitness_or_worst() {
                best_idx = idx;
            }
        }
        best_idx
    }
}

/// Index of the lowest fitness, first occurrence on ties.
pub(crate) fn best_index<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness_or_worst() < population[best].fitness_or_worst() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: Option<usize>,
    }

    impl Individual for TestInd {
        type Fitness = usize;
        fn fitness(&self) -> Option<usize> {
            self.fit
        }
        fn set_fitness(&mut self, f: usize) {
            self.fit = Some(f);
        }
        fn invalidate_fitness(&mut self) {
            self.fit = None;
        }
    }

    fn make_population(fitnesses: &[usize]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: Some(f) }).collect()
    }

    #[test]
    fn test_pool_has_requested_size() {
        let pop = make_population(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);
        assert_eq!(Tournament::new(3).select(&pop, 10, &mut rng).len(), 10);
        assert!(Tournament::new(3).select(&pop, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10, 5, 1, 8, 7, 9]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 6];
        let n = 10000;
        for _ in 0..n {
            counts[Tournament::new(3).select_index(&pop, &mut rng)] += 1;
        }
        // P(best wins) = 1 - (5/6)^3 ≈ 0.42, far above uniform.
        assert!(
            counts[2] > 3500,
            "expected best to dominate, got counts: {counts:?}"
        );
        assert!(counts[2] > counts[0]);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[Tournament::new(1).select_index(&pop, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_full_tournament_always_returns_best() {
        let pop = make_population(&[10, 5, 1, 8, 1]);
        let mut rng = create_rng(7);

        for size in [5, 6, 100] {
            let pool = Tournament::new(size).select(&pop, 50, &mut rng);
            assert!(pool.iter().all(|ind| ind.fit == Some(1)));
            // First occurrence wins the tie.
            assert_eq!(Tournament::new(size).select_index(&pop, &mut rng), 2);
        }
    }

    #[test]
    fn test_unset_fitness_ranks_worst() {
        let mut pop = make_population(&[3, 2]);
        pop.push(TestInd { fit: None });
        let mut rng = create_rng(42);
        assert_eq!(Tournament::new(3).select_index(&pop, &mut rng), 1);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);
        assert_eq!(Tournament::new(3).select_index(&pop, &mut rng), 0);
        assert_eq!(Tournament::new(1).select_index(&pop, &mut rng), 0);
    }

    #[test]
    fn test_size_zero_is_clamped() {
        assert_eq!(Tournament::new(0).size(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        Tournament::new(3).select_index(&pop, &mut rng);
    }
}
