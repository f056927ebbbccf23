//! Evolving a message toward a target text.

use super::alphabet::Alphabet;
use super::distance::edit_distance;
use super::message::Message;
use crate::error::{Result, TextEvoError};
use crate::ga::operators::{mutate_sequence, two_point_crossover, MutationRates};
use crate::ga::{GaProblem, Individual};
use rand::Rng;

/// Target text plus the operators that evolve [`Message`]s toward it.
///
/// Fitness is the edit distance to the target (lower is better, 0 is an
/// exact match).
///
/// # Examples
///
/// ```
/// use u_textevo::ga::{GaConfig, GaRunner};
/// use u_textevo::text::{Alphabet, TextProblem};
///
/// let problem = TextProblem::new("AB", Alphabet::new("AB").unwrap())
///     .unwrap()
///     .with_length_range(1, 4);
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(5)
///     .with_seed(4);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.log.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct TextProblem {
    target: Vec<char>,
    alphabet: Alphabet,
    min_length: usize,
    max_length: usize,
    mutation: MutationRates,
    verbose: bool,
}

impl TextProblem {
    /// Creates a problem for `target`.
    ///
    /// Fails on the first target symbol outside `alphabet`; such a target
    /// could never be reached.
    pub fn new(target: &str, alphabet: Alphabet) -> Result<Self> {
        alphabet.validate(target)?;
        Ok(Self {
            target: target.chars().collect(),
            alphabet,
            min_length: 4,
            max_length: 30,
            mutation: MutationRates::default(),
            verbose: false,
        })
    }

    /// Sets the length range of the initial random messages.
    ///
    /// `min_length` is raised to 1 and `max_length` to `min_length` if
    /// needed.
    pub fn with_length_range(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length.max(1);
        self.max_length = max_length.max(self.min_length);
        self
    }

    /// Sets the per-edit mutation probabilities.
    pub fn with_mutation_rates(mut self, rates: MutationRates) -> Self {
        self.mutation = rates;
        self
    }

    /// Logs every evaluated message with its distance at `info` level.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The target symbols.
    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// The target as a string.
    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    /// Symbols messages are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Inclusive `(min, max)` length of initial messages.
    pub fn length_range(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    /// Per-edit mutation probabilities.
    pub fn mutation_rates(&self) -> &MutationRates {
        &self.mutation
    }

    /// Edit distance from `message` to the target.
    pub fn distance(&self, message: &Message) -> usize {
        edit_distance(message.symbols(), &self.target)
    }
}

/// The per-evaluation record logged in verbose mode.
pub(crate) fn format_evaluation(message: &Message, distance: usize) -> String {
    format!("{message}\t[Distance: {distance}]")
}

impl GaProblem for TextProblem {
    type Individual = Message;

    fn validate(&self) -> Result<()> {
        if !self.mutation.is_valid() {
            return Err(TextEvoError::InvalidConfig(format!(
                "mutation rates must be within [0, 1], got {:?}",
                self.mutation
            )));
        }
        Ok(())
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Message {
        Message::random(&self.alphabet, self.min_length, self.max_length, rng)
    }

    fn evaluate(&self, individual: &Message) -> usize {
        let distance = self.distance(individual);
        if self.verbose {
            log::info!("{}", format_evaluation(individual, distance));
        }
        distance
    }

    fn crossover<R: Rng>(&self, parent1: Message, parent2: Message, rng: &mut R) -> (Message, Message) {
        let (a, b) = two_point_crossover(parent1.into_symbols(), parent2.into_symbols(), rng);
        (Message::from_symbols(a), Message::from_symbols(b))
    }

    fn mutate<R: Rng>(&self, mut individual: Message, rng: &mut R) -> Message {
        let changed = mutate_sequence(individual.genome_mut(), &self.mutation, rng, |r| {
            self.alphabet.random_symbol(r)
        });
        if changed {
            individual.invalidate_fitness();
        }
        individual
    }

    fn on_generation(&self, generation: usize, best_fitness: usize) {
        if best_fitness == 0 {
            log::debug!("generation {generation}: exact match present");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{EngineState, GaConfig, GaRunner};
    use crate::random::create_rng;

    fn ab() -> Alphabet {
        Alphabet::new("AB").unwrap()
    }

    #[test]
    fn test_new_rejects_target_outside_alphabet() {
        let err = TextProblem::new("SKYNET IS NOW ONLINE!", Alphabet::default()).unwrap_err();
        assert!(matches!(err, TextEvoError::InvalidSymbol { symbol: '!', .. }));
    }

    #[test]
    fn test_defaults() {
        let p = TextProblem::new("HELLO", Alphabet::default()).unwrap();
        assert_eq!(p.target_text(), "HELLO");
        assert_eq!(p.length_range(), (4, 30));
        assert_eq!(p.mutation_rates(), &MutationRates::default());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_length_range_clamped() {
        let p = TextProblem::new("A", ab()).unwrap().with_length_range(0, 0);
        assert_eq!(p.length_range(), (1, 1));
        let p = TextProblem::new("A", ab()).unwrap().with_length_range(5, 2);
        assert_eq!(p.length_range(), (5, 5));
    }

    #[test]
    fn test_invalid_mutation_rates_rejected() {
        let rates = MutationRates {
            delete: 2.0,
            ..MutationRates::default()
        };
        let p = TextProblem::new("A", ab()).unwrap().with_mutation_rates(rates);
        assert!(p.validate().is_err());
        let config = GaConfig::default().with_population_size(4);
        assert!(GaRunner::new(&p, &config, create_rng(0)).is_err());
    }

    #[test]
    fn test_evaluate_is_edit_distance() {
        let p = TextProblem::new("MATCH", Alphabet::default()).unwrap();
        let m = Message::parse("CATCH", p.alphabet()).unwrap();
        assert_eq!(p.evaluate(&m), 1);
        assert_eq!(p.evaluate(&Message::parse("MATCH", p.alphabet()).unwrap()), 0);
    }

    #[test]
    fn test_evaluation_record_format() {
        let m = Message::parse("OCRSPMPBQF KRAIIKTJZLN", &Alphabet::default()).unwrap();
        assert_eq!(
            format_evaluation(&m, 21),
            "OCRSPMPBQF KRAIIKTJZLN\t[Distance: 21]"
        );
        let p = TextProblem::new("HI THERE", Alphabet::default()).unwrap();
        let m = Message::parse("HI THERE", p.alphabet()).unwrap();
        assert_eq!(format_evaluation(&m, p.evaluate(&m)), "HI THERE\t[Distance: 0]");
    }

    #[test]
    fn test_mutation_never_empties() {
        let p = TextProblem::new("A", ab())
            .unwrap()
            .with_mutation_rates(MutationRates::new(0.0, 1.0, 0.0));
        let mut rng = create_rng(42);
        let mut m = Message::parse("B", p.alphabet()).unwrap();
        m.set_fitness(1);
        for _ in 0..50 {
            m = p.mutate(m, &mut rng);
            assert_eq!(m.len(), 1);
        }
        // Nothing changed, so the cached fitness is still valid.
        assert_eq!(m.fitness(), Some(1));
    }

    #[test]
    fn test_mutation_clears_fitness() {
        let p = TextProblem::new("A", ab())
            .unwrap()
            .with_mutation_rates(MutationRates::new(1.0, 0.0, 0.0));
        let mut rng = create_rng(42);
        let mut m = Message::parse("AB", p.alphabet()).unwrap();
        m.set_fitness(1);
        let m = p.mutate(m, &mut rng);
        assert_eq!(m.len(), 3);
        assert_eq!(m.fitness(), None);
        assert!(m.symbols().iter().all(|&c| p.alphabet().contains(c)));
    }

    #[test]
    fn test_crossover_preserves_total_and_clears_fitness() {
        let p = TextProblem::new("AB", ab()).unwrap();
        let mut rng = create_rng(9);
        for _ in 0..50 {
            let mut a = Message::parse("AAAAAA", p.alphabet()).unwrap();
            let mut b = Message::parse("BBB", p.alphabet()).unwrap();
            a.set_fitness(5);
            b.set_fitness(2);
            let (c1, c2) = p.crossover(a, b, &mut rng);
            assert_eq!(c1.len() + c2.len(), 9);
            assert!(c1.len() >= 1 && c2.len() >= 1);
            assert_eq!(c1.fitness(), None);
            assert_eq!(c2.fitness(), None);
        }
    }

    #[test]
    fn test_end_to_end_small_run() {
        let p = TextProblem::new("AB", ab()).unwrap().with_length_range(1, 4);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(25)
            .with_seed(4);
        let result = GaRunner::run(&p, &config).unwrap();

        assert_eq!(result.log.len(), 26);
        for (i, s) in result.log.entries().iter().enumerate() {
            assert_eq!(s.generation, i);
            assert!(s.min <= s.mean && s.mean <= s.max, "{s:?}");
        }
        assert_eq!(result.population.len(), 10);
        assert!(result.population.iter().all(|m| !m.is_empty()));
        assert_eq!(result.best_fitness, p.distance(&result.best));
    }

    #[test]
    fn test_same_seed_same_statistics() {
        let p = TextProblem::new("SKYNET IS NOW ONLINE", Alphabet::default()).unwrap();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(30)
            .with_seed(4);
        let a = GaRunner::run(&p, &config).unwrap();
        let b = GaRunner::run(&p, &config).unwrap();
        assert_eq!(a.log, b.log);
        assert_eq!(a.best, b.best);

        let c = GaRunner::run(&p, &config.clone().with_seed(5)).unwrap();
        assert_ne!(a.log, c.log);
    }

    #[test]
    fn test_explicit_rng_matches_seeded_run() {
        let p = TextProblem::new("HELLO", Alphabet::default()).unwrap();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_seed(11);
        let seeded = GaRunner::run(&p, &config).unwrap();

        let mut runner = GaRunner::new(&p, &config, create_rng(11)).unwrap();
        while runner.step() != EngineState::Terminated {}
        assert_eq!(runner.log(), &seeded.log);
    }

    #[test]
    fn test_search_makes_progress() {
        let p = TextProblem::new("HELLO WORLD", Alphabet::default()).unwrap();
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(150)
            .with_seed(4);
        let result = GaRunner::run(&p, &config).unwrap();

        let first = result.log.entries()[0];
        let last = result.log.last().unwrap();
        assert!(last.mean < first.mean, "first {first:?}, last {last:?}");
        assert!((result.best_fitness as f64) < first.min);
    }
}
