//! Evolutionary search over slot-assignment genomes.
//!
//! Two strategies share the genome, operators and evaluator:
//!
//! - [`GaRunner`]: weighted single-objective GA. Hard-constraint
//!   violations are folded into the cost through a penalty weight.
//! - [`Nsga2Runner`]: NSGA-II over the unweighted pair
//!   (violations, preference).
//!
//! # Key Types
//!
//! - [`Genome`]: one timeslot per subject
//! - [`Individual`]: a genome with its cached [`Score`]
//! - [`GaConfig`] / [`Nsga2Config`]: search parameters
//! - [`GaResult`] / [`ParetoResult`]: run outcomes with per-generation stats
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and reassign mutation
//! - [`selection`]: k-tournament and crowded binary tournament
//! - [`multi_objective`]: Pareto non-dominated sorting and crowding distance
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod genome;
pub mod multi_objective;
mod nsga2;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{GaConfig, Nsga2Config};
pub use genome::{Assignment, Genome};
pub use nsga2::{recommend, Nsga2Runner, ParetoGenerationStats, ParetoResult, RankedIndividual};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{Individual, Score};
