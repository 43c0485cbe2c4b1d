//! Course timetabling by evolutionary search.
//!
//! Assigns every subject one timeslot so that no teacher teaches twice in
//! the same slot and no slot exceeds room capacity, while minimizing the
//! teachers' preference penalties.
//!
//! - **Weighted GA**: hard-constraint violations are folded into a single
//!   cost through a large penalty weight; tournament selection,
//!   single-point crossover, reassign mutation, elitist replacement.
//! - **NSGA-II**: violations and preference cost are kept as two
//!   objectives; fast non-dominated sorting and crowding-distance
//!   truncation return an approximate Pareto front plus one recommended
//!   timetable.
//!
//! # Modules
//!
//! - **`models`**: `Subject`, `Teacher`, `SlotId`, and the validated `Catalog`
//! - **`evaluator`**: cost / objective computation
//! - **`ga`**: genome, operators, selection, both runners
//! - **`optimizer`**: single entry point over either strategy
//! - **`dataset`**: built-in reference instance
//!
//! # Example
//!
//! ```
//! use u_timetable::dataset::reference_catalog;
//! use u_timetable::evaluator::ScoringConfig;
//! use u_timetable::ga::GaConfig;
//! use u_timetable::optimizer::Optimizer;
//!
//! let catalog = reference_catalog().unwrap();
//! let optimizer = Optimizer::new(&catalog, ScoringConfig::default()).unwrap();
//! let result = optimizer
//!     .run_weighted(&GaConfig::default().with_seed(42))
//!     .unwrap();
//! assert!(result.best.genome().is_valid_for(&catalog));
//! ```

pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod ga;
pub mod models;
pub mod optimizer;
pub mod random;

pub use error::ConfigError;
