//! NSGA-II loop over (violations, preference).
//!
//! Each generation:
//! 1. Breed `N` offspring by crowded binary tournament, crossover and mutation
//! 2. Merge parents and offspring (`2N`)
//! 3. Non-dominated sort of the merged set
//! 4. Fill the next population front by front; the front that does not fit
//!    is cut by descending crowding distance
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use std::cmp::Ordering;

use rand::Rng;
use tracing::{debug, info, warn};

use super::config::Nsga2Config;
use super::multi_objective::{crowding_distance, non_dominated_sort};
use super::selection::crowded_tournament;
use super::Individual;
use crate::error::ConfigError;
use crate::evaluator::{Evaluator, Objectives};
use crate::random::rng_from_option;

/// An individual with its NSGA-II bookkeeping for the current generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedIndividual {
    /// The individual.
    pub individual: Individual<Objectives>,
    /// Non-domination layer (0 = Pareto front).
    pub rank: usize,
    /// Crowding distance within its layer.
    pub crowding_distance: f64,
}

impl RankedIndividual {
    /// Shortcut for `individual.score()`.
    pub fn objectives(&self) -> Objectives {
        self.individual.score()
    }
}

/// Snapshot of one NSGA-II generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoGenerationStats {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Lowest violation count in the population.
    pub min_violations: u32,
    /// Lowest preference cost in the population.
    pub min_preference: u32,
    /// Mean violation count.
    pub mean_violations: f64,
    /// Mean preference cost.
    pub mean_preference: f64,
    /// Number of rank-0 individuals.
    pub front_size: usize,
}

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
pub struct ParetoResult {
    /// Rank-0 members of the final population.
    pub front: Vec<RankedIndividual>,

    /// Recommended timetable: the lowest-preference feasible front member,
    /// or the lowest-violation one if none is feasible.
    pub recommended: Individual<Objectives>,

    /// The whole final population.
    pub population: Vec<RankedIndividual>,

    /// Number of generations executed.
    pub generations: usize,

    /// Per-generation statistics, initial population first.
    pub history: Vec<ParetoGenerationStats>,
}

/// Executes NSGA-II.
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs NSGA-II.
    pub fn run(evaluator: &Evaluator<'_>, config: &Nsga2Config) -> Result<ParetoResult, ConfigError> {
        Self::run_with_observer(evaluator, config, |_| {})
    }

    /// Runs NSGA-II, calling `observer` with the statistics of every
    /// generation (including the initial and final populations).
    pub fn run_with_observer<F>(
        evaluator: &Evaluator<'_>,
        config: &Nsga2Config,
        mut observer: F,
    ) -> Result<ParetoResult, ConfigError>
    where
        F: FnMut(&ParetoGenerationStats),
    {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let n = config.population_size;

        info!(
            population = n,
            generations = config.max_generations,
            "starting NSGA-II"
        );

        let initial: Vec<Individual<Objectives>> = (0..n)
            .map(|_| Individual::random(evaluator, &mut rng))
            .collect();
        let mut population = survive(initial, n);

        let mut history = Vec::with_capacity(config.max_generations + 1);

        for gen in 0..config.max_generations {
            record(gen, &population, &mut history, &mut observer);

            let offspring = breed(&population, n, config, evaluator, &mut rng);

            let mut combined = population.into_members();
            combined.extend(offspring);
            population = survive(combined, n);
        }

        record(config.max_generations, &population, &mut history, &mut observer);

        let population = population.into_ranked();
        let front: Vec<RankedIndividual> =
            population.iter().filter(|r| r.rank == 0).cloned().collect();
        let recommended = recommend(&front)
            .expect("rank 0 of a non-empty population is non-empty")
            .individual
            .clone();

        if recommended.score().violations > 0 {
            warn!(
                violations = recommended.score().violations,
                "no feasible timetable on the Pareto front"
            );
        }
        info!(
            front_size = front.len(),
            violations = recommended.score().violations,
            preference = recommended.score().preference,
            "NSGA-II finished"
        );

        Ok(ParetoResult {
            front,
            recommended,
            population,
            generations: config.max_generations,
            history,
        })
    }
}

/// Picks the recommended member of a Pareto front.
///
/// Among zero-violation members, the lowest preference cost; otherwise the
/// lowest violation count. Ties go to the earliest member. Returns `None`
/// only for an empty front.
pub fn recommend(front: &[RankedIndividual]) -> Option<&RankedIndividual> {
    front
        .iter()
        .filter(|r| r.objectives().violations == 0)
        .min_by_key(|r| r.objectives().preference)
        .or_else(|| front.iter().min_by_key(|r| r.objectives().violations))
}

/// Members and their bookkeeping, index-aligned.
struct Population {
    members: Vec<Individual<Objectives>>,
    ranks: Vec<usize>,
    distances: Vec<f64>,
}

impl Population {
    fn into_members(self) -> Vec<Individual<Objectives>> {
        self.members
    }

    fn into_ranked(self) -> Vec<RankedIndividual> {
        self.members
            .into_iter()
            .zip(self.ranks)
            .zip(self.distances)
            .map(|((individual, rank), crowding_distance)| RankedIndividual {
                individual,
                rank,
                crowding_distance,
            })
            .collect()
    }
}

/// Produces exactly `n` offspring from the current population.
fn breed<R: Rng>(
    population: &Population,
    n: usize,
    config: &Nsga2Config,
    evaluator: &Evaluator<'_>,
    rng: &mut R,
) -> Vec<Individual<Objectives>> {
    let mut offspring = Vec::with_capacity(n + 1);

    while offspring.len() < n {
        let p1 = select(population, rng);
        let p2 = select(population, rng);

        let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
            Individual::crossover(&p1, &p2, evaluator, rng)
        } else {
            (p1, p2)
        };

        for child in [&mut c1, &mut c2] {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                child.mutate(evaluator, rng);
            }
        }

        offspring.push(c1);
        offspring.push(c2);
    }
    offspring.truncate(n);
    offspring
}

/// Crowded tournament pick, returned as an owned copy.
fn select<R: Rng>(population: &Population, rng: &mut R) -> Individual<Objectives> {
    let idx = crowded_tournament(&population.ranks, &population.distances, rng);
    population.members[idx].clone()
}

/// Elitist truncation of `candidates` to `n` survivors.
///
/// Whole fronts are taken in rank order while they fit; the first front
/// that does not fit contributes its most isolated members.
fn survive(candidates: Vec<Individual<Objectives>>, n: usize) -> Population {
    let objectives: Vec<Objectives> = candidates.iter().map(|c| c.score()).collect();
    let sorted = non_dominated_sort(&objectives);

    // (candidate index, rank, crowding distance)
    let mut chosen: Vec<(usize, usize, f64)> = Vec::with_capacity(n);

    for (rank, front) in sorted.fronts.iter().enumerate() {
        let remaining = n - chosen.len();
        if remaining == 0 {
            break;
        }

        let front_objectives: Vec<Objectives> = front.iter().map(|&i| objectives[i]).collect();
        let distances = crowding_distance(&front_objectives);

        if front.len() <= remaining {
            chosen.extend(
                front
                    .iter()
                    .zip(&distances)
                    .map(|(&i, &d)| (i, rank, d)),
            );
        } else {
            let mut order: Vec<usize> = (0..front.len()).collect();
            order.sort_by(|&a, &b| {
                distances[b]
                    .partial_cmp(&distances[a])
                    .unwrap_or(Ordering::Equal)
            });
            chosen.extend(
                order
                    .into_iter()
                    .take(remaining)
                    .map(|k| (front[k], rank, distances[k])),
            );
        }
    }

    let mut pool: Vec<Option<Individual<Objectives>>> = candidates.into_iter().map(Some).collect();
    let mut population = Population {
        members: Vec::with_capacity(chosen.len()),
        ranks: Vec::with_capacity(chosen.len()),
        distances: Vec::with_capacity(chosen.len()),
    };
    for (idx, rank, distance) in chosen {
        let member = pool[idx]
            .take()
            .expect("each candidate belongs to exactly one front");
        population.members.push(member);
        population.ranks.push(rank);
        population.distances.push(distance);
    }
    population
}

fn record<F: FnMut(&ParetoGenerationStats)>(
    generation: usize,
    population: &Population,
    history: &mut Vec<ParetoGenerationStats>,
    observer: &mut F,
) {
    let members = &population.members;
    let len = members.len() as f64;
    let stats = ParetoGenerationStats {
        generation,
        min_violations: members
            .iter()
            .map(|m| m.score().violations)
            .min()
            .unwrap_or(0),
        min_preference: members
            .iter()
            .map(|m| m.score().preference)
            .min()
            .unwrap_or(0),
        mean_violations: members
            .iter()
            .map(|m| f64::from(m.score().violations))
            .sum::<f64>()
            / len,
        mean_preference: members
            .iter()
            .map(|m| f64::from(m.score().preference))
            .sum::<f64>()
            / len,
        front_size: population.ranks.iter().filter(|&&r| r == 0).count(),
    };
    debug!(
        generation,
        min_violations = stats.min_violations,
        min_preference = stats.min_preference,
        front_size = stats.front_size,
        "generation"
    );
    observer(&stats);
    history.push(stats);
}

// ============================================================================
// Tests
// ============================================================================
