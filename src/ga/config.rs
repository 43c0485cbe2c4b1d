//! Search configuration.
//!
//! [`GaConfig`] drives the weighted single-objective GA, [`Nsga2Config`]
//! the Pareto search. Both stop after a fixed number of generations.

use crate::error::ConfigError;

/// Configuration for the weighted Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Individuals drawn (without replacement) per tournament.
    ///
    /// Clamped to the population size at selection time.
    pub tournament_size: usize,

    /// Best individuals copied unchanged into the next generation.
    pub elite_count: usize,

    /// Probability of crossing a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_rate: f64,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            tournament_size: 3,
            elite_count: 1,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
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

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
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

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_common(
            self.population_size,
            self.max_generations,
            self.crossover_rate,
            self.mutation_rate,
        )?;
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.elite_count == 0 {
            return Err(invalid("elite_count must be at least 1"));
        }
        if self.elite_count >= self.population_size {
            return Err(invalid("elite_count too high: elites fill entire population"));
        }
        Ok(())
    }
}

/// Configuration for NSGA-II.
///
/// There is no elite count or tournament size: survival is decided by
/// non-dominated sorting of parents and offspring, and parents are picked
/// by binary tournament on (rank, crowding distance).
///
/// ```
/// use u_timetable::ga::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 50);
/// assert!((config.crossover_rate - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of individuals kept each generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Probability of crossing a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl Nsga2Config {
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

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_common(
            self.population_size,
            self.max_generations,
            self.crossover_rate,
            self.mutation_rate,
        )
    }
}

fn validate_common(
    population_size: usize,
    max_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
) -> Result<(), ConfigError> {
    if population_size < 2 {
        return Err(invalid("population_size must be at least 2"));
    }
    if max_generations == 0 {
        return Err(invalid("max_generations must be at least 1"));
    }
    if !(0.0..=1.0).contains(&crossover_rate) {
        return Err(invalid("crossover_rate must be within [0, 1]"));
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(invalid("mutation_rate must be within [0, 1]"));
    }
    Ok(())
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::InvalidParameter(msg.into())
}
