//! Optimization driver.
//!
//! [`Optimizer`] binds a [`Catalog`] to a [`ScoringConfig`] and runs either
//! search strategy against it. Reporting layers consume the returned
//! [`Outcome`] and the [`Progress`] events; nothing here formats or prints.

use crate::error::ConfigError;
use crate::evaluator::{Evaluator, ScoringConfig};
use crate::ga::{
    GaConfig, GaResult, GaRunner, GenerationStats, Nsga2Config, Nsga2Runner,
    ParetoGenerationStats, ParetoResult,
};
use crate::models::Catalog;

/// Which search to run, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Weighted single-objective GA.
    Weighted(GaConfig),
    /// NSGA-II over (violations, preference).
    Pareto(Nsga2Config),
}

/// Result of [`Optimizer::run`].
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Best individual of the weighted GA.
    Weighted(GaResult),
    /// Pareto front and recommended individual of NSGA-II.
    Pareto(ParetoResult),
}

/// Per-generation progress event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress<'a> {
    /// Weighted GA statistics.
    Weighted(&'a GenerationStats),
    /// NSGA-II statistics.
    Pareto(&'a ParetoGenerationStats),
}

/// Runs timetable searches against one catalog.
///
/// # Usage
///
/// ```
/// use u_timetable::dataset::reference_catalog;
/// use u_timetable::evaluator::ScoringConfig;
/// use u_timetable::ga::Nsga2Config;
/// use u_timetable::optimizer::{Optimizer, Outcome, Strategy};
///
/// let catalog = reference_catalog().unwrap();
/// let optimizer = Optimizer::new(&catalog, ScoringConfig::default()).unwrap();
/// let strategy = Strategy::Pareto(Nsga2Config::default().with_max_generations(10).with_seed(1));
/// match optimizer.run(&strategy).unwrap() {
///     Outcome::Pareto(result) => assert!(!result.front.is_empty()),
///     Outcome::Weighted(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optimizer<'c> {
    evaluator: Evaluator<'c>,
}

impl<'c> Optimizer<'c> {
    /// Validates `scoring` and prepares an evaluator over `catalog`.
    pub fn new(catalog: &'c Catalog, scoring: ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            evaluator: Evaluator::new(catalog, scoring)?,
        })
    }

    /// The evaluator used by every run.
    pub fn evaluator(&self) -> &Evaluator<'c> {
        &self.evaluator
    }

    /// Runs the weighted GA.
    pub fn run_weighted(&self, config: &GaConfig) -> Result<GaResult, ConfigError> {
        GaRunner::run(&self.evaluator, config)
    }

    /// Runs the weighted GA with a per-generation observer.
    pub fn run_weighted_with_observer<F>(&self, config: &GaConfig, observer: F) -> Result<GaResult, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        GaRunner::run_with_observer(&self.evaluator, config, observer)
    }

    /// Runs NSGA-II.
    pub fn run_pareto(&self, config: &Nsga2Config) -> Result<ParetoResult, ConfigError> {
        Nsga2Runner::run(&self.evaluator, config)
    }

    /// Runs NSGA-II with a per-generation observer.
    pub fn run_pareto_with_observer<F>(
        &self,
        config: &Nsga2Config,
        observer: F,
    ) -> Result<ParetoResult, ConfigError>
    where
        F: FnMut(&ParetoGenerationStats),
    {
        Nsga2Runner::run_with_observer(&self.evaluator, config, observer)
    }

    /// Runs the chosen strategy.
    pub fn run(&self, strategy: &Strategy) -> Result<Outcome, ConfigError> {
        self.run_with_observer(strategy, |_| {})
    }

    /// Runs the chosen strategy, reporting every generation to `observer`.
    pub fn run_with_observer<F>(&self, strategy: &Strategy, mut observer: F) -> Result<Outcome, ConfigError>
    where
        F: FnMut(Progress<'_>),
    {
        match strategy {
            Strategy::Weighted(config) => self
                .run_weighted_with_observer(config, |s| observer(Progress::Weighted(s)))
                .map(Outcome::Weighted),
            Strategy::Pareto(config) => self
                .run_pareto_with_observer(config, |s| observer(Progress::Pareto(s)))
                .map(Outcome::Pareto),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_catalog;

    #[test]
    fn test_rejects_bad_scoring() {
        let catalog = reference_catalog().unwrap();
        let err = Optimizer::new(&catalog, ScoringConfig::default().with_room_capacity(0));
        assert!(matches!(err, Err(ConfigError::InvalidParameter(_))));
    }

    #[test]
    fn test_run_dispatches_weighted() {
        let catalog = reference_catalog().unwrap();
        let opt = Optimizer::new(&catalog, ScoringConfig::default()).unwrap();
        let config = GaConfig::default().with_max_generations(10).with_seed(4);

        let mut events = 0;
        let outcome = opt
            .run_with_observer(&Strategy::Weighted(config.clone()), |p| {
                assert!(matches!(p, Progress::Weighted(_)));
                events += 1;
            })
            .unwrap();
        assert_eq!(events, 11);

        let direct = opt.run_weighted(&config).unwrap();
        match outcome {
            Outcome::Weighted(r) => assert_eq!(r.best, direct.best),
            Outcome::Pareto(_) => panic!("expected weighted outcome"),
        }
    }

    #[test]
    fn test_run_dispatches_pareto() {
        let catalog = reference_catalog().unwrap();
        let opt = Optimizer::new(&catalog, ScoringConfig::default()).unwrap();
        let config = Nsga2Config::default().with_max_generations(8).with_seed(4);

        let mut events = 0;
        let outcome = opt
            .run_with_observer(&Strategy::Pareto(config.clone()), |p| {
                assert!(matches!(p, Progress::Pareto(_)));
                events += 1;
            })
            .unwrap();
        assert_eq!(events, 9);

        let direct = opt.run_pareto(&config).unwrap();
        match outcome {
            Outcome::Pareto(r) => assert_eq!(r.recommended, direct.recommended),
            Outcome::Weighted(_) => panic!("expected pareto outcome"),
        }
    }

    #[test]
    fn test_invalid_strategy_config() {
        let catalog = reference_catalog().unwrap();
        let opt = Optimizer::new(&catalog, ScoringConfig::default()).unwrap();
        let bad = Strategy::Pareto(Nsga2Config::default().with_max_generations(0));
        assert!(opt.run(&bad).is_err());
    }
}
