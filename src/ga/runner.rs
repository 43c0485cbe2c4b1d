//! Weighted single-objective GA loop.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → elitism → tournament → crossover → mutation → repeat,
//! for a fixed number of generations.

use rand::Rng;
use tracing::{debug, info};

use super::config::GaConfig;
use super::selection::tournament;
use super::Individual;
use crate::error::ConfigError;
use crate::evaluator::{Cost, Evaluator};
use crate::random::rng_from_option;

/// Snapshot of one generation of the weighted GA.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Lowest cost in the population.
    pub best_cost: Cost,
    /// Mean cost of the population.
    pub average_cost: f64,
}

/// Result of a weighted GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual of the final population.
    pub best: Individual<Cost>,

    /// Best cost (same as `best.score()`).
    pub best_cost: Cost,

    /// Number of generations executed.
    pub generations: usize,

    /// Per-generation statistics, initial population first.
    ///
    /// Has `generations + 1` entries; the last one describes the final
    /// population.
    pub history: Vec<GenerationStats>,
}

/// Executes the weighted GA.
///
/// # Usage
///
/// ```
/// use u_timetable::dataset::reference_catalog;
/// use u_timetable::evaluator::{Evaluator, ScoringConfig};
/// use u_timetable::ga::{GaConfig, GaRunner};
///
/// let catalog = reference_catalog().unwrap();
/// let evaluator = Evaluator::new(&catalog, ScoringConfig::default()).unwrap();
/// let config = GaConfig::default().with_max_generations(20).with_seed(42);
/// let result = GaRunner::run(&evaluator, &config).unwrap();
/// assert_eq!(result.history.len(), 21);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    pub fn run(evaluator: &Evaluator<'_>, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(evaluator, config, |_| {})
    }

    /// Runs the GA, calling `observer` with the statistics of every
    /// generation (including the initial and final populations).
    pub fn run_with_observer<F>(
        evaluator: &Evaluator<'_>,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let n = config.population_size;

        info!(
            population = n,
            generations = config.max_generations,
            tournament = config.tournament_size,
            "starting weighted GA"
        );

        // 1. Initialize population
        let mut population: Vec<Individual<Cost>> = (0..n)
            .map(|_| Individual::random(evaluator, &mut rng))
            .collect();

        let mut history = Vec::with_capacity(config.max_generations + 1);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // Sort population by cost (ascending = best first)
            population.sort_by_key(|ind| ind.score());
            record(gen, &population, &mut history, &mut observer);

            // Elite preservation
            let mut next_gen: Vec<Individual<Cost>> = population[..config.elite_count].to_vec();

            // Generate offspring
            while next_gen.len() < n {
                let p1 = select(&population, config.tournament_size, &mut rng);
                let p2 = select(&population, config.tournament_size, &mut rng);

                let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    Individual::crossover(&p1, &p2, evaluator, &mut rng)
                } else {
                    (p1, p2)
                };

                for child in [&mut c1, &mut c2] {
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        child.mutate(evaluator, &mut rng);
                    }
                }

                next_gen.push(c1);
                next_gen.push(c2);
            }
            next_gen.truncate(n);

            population = next_gen;
        }

        population.sort_by_key(|ind| ind.score());
        record(config.max_generations, &population, &mut history, &mut observer);

        let best = population.swap_remove(0);
        info!(best_cost = best.score(), "weighted GA finished");

        Ok(GaResult {
            best_cost: best.score(),
            best,
            generations: config.max_generations,
            history,
        })
    }
}

/// Tournament pick, returned as an owned copy.
fn select<R: Rng>(population: &[Individual<Cost>], k: usize, rng: &mut R) -> Individual<Cost> {
    population[tournament(population, k, rng)].clone()
}

/// Records stats for a population sorted best-first.
fn record<F: FnMut(&GenerationStats)>(
    generation: usize,
    sorted: &[Individual<Cost>],
    history: &mut Vec<GenerationStats>,
    observer: &mut F,
) {
    let total: f64 = sorted.iter().map(|ind| ind.score() as f64).sum();
    let stats = GenerationStats {
        generation,
        best_cost: sorted[0].score(),
        average_cost: total / sorted.len() as f64,
    };
    debug!(
        generation,
        best = stats.best_cost,
        average = stats.average_cost,
        "generation"
    );
    observer(&stats);
    history.push(stats);
}

// ============================================================================
// Tests
// ============================================================================
