//! Core types shared by both search strategies.
//!
//! [`Score`] abstracts over what an evaluation produces (a scalar
//! [`Cost`] or an [`Objectives`] pair); [`Individual`] pairs a genome with
//! its score and is the only place a genome can change.

use std::fmt::Debug;

use rand::Rng;

use super::Genome;
use crate::evaluator::{Cost, Evaluator, Objectives};

/// The cached result of evaluating a genome.
///
/// Implemented for [`Cost`] (weighted GA) and [`Objectives`] (NSGA-II).
pub trait Score: Copy + PartialEq + Debug {
    /// Scores `genome`.
    fn evaluate(evaluator: &Evaluator<'_>, genome: &Genome) -> Self;
}

impl Score for Cost {
    fn evaluate(evaluator: &Evaluator<'_>, genome: &Genome) -> Self {
        evaluator.cost(genome)
    }
}

impl Score for Objectives {
    fn evaluate(evaluator: &Evaluator<'_>, genome: &Genome) -> Self {
        evaluator.objectives(genome)
    }
}

/// A candidate timetable and its score.
///
/// The genome is private. Every constructor evaluates and [`mutate`]
/// re-evaluates before returning, so `score()` always matches the genome.
/// Cloning produces an independent copy.
///
/// [`mutate`]: Individual::mutate
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<S> {
    genome: Genome,
    score: S,
}

impl<S: Score> Individual<S> {
    /// Evaluates `genome` and wraps it.
    pub fn new(genome: Genome, evaluator: &Evaluator<'_>) -> Self {
        let score = S::evaluate(evaluator, &genome);
        Self { genome, score }
    }

    /// Creates an evaluated individual with a random valid genome.
    pub fn random<R: Rng>(evaluator: &Evaluator<'_>, rng: &mut R) -> Self {
        Self::new(Genome::random(evaluator.catalog(), rng), evaluator)
    }

    /// Single-point crossover; both children are evaluated.
    pub fn crossover<R: Rng>(
        parent1: &Self,
        parent2: &Self,
        evaluator: &Evaluator<'_>,
        rng: &mut R,
    ) -> (Self, Self) {
        let (g1, g2) = parent1.genome.crossover(&parent2.genome, rng);
        (Self::new(g1, evaluator), Self::new(g2, evaluator))
    }

    /// Redraws one gene and re-evaluates.
    pub fn mutate<R: Rng>(&mut self, evaluator: &Evaluator<'_>, rng: &mut R) {
        self.genome.mutate(evaluator.catalog(), rng);
        self.score = S::evaluate(evaluator, &self.genome);
    }

    /// Whether the cached score equals a fresh evaluation.
    pub fn is_consistent(&self, evaluator: &Evaluator<'_>) -> bool {
        S::evaluate(evaluator, &self.genome) == self.score
    }
}

impl<S: Copy> Individual<S> {
    /// The genome.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// The cached score.
    pub fn score(&self) -> S {
        self.score
    }

    /// Consumes the individual, returning its genome.
    pub fn into_genome(self) -> Genome {
        self.genome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_catalog;
    use crate::evaluator::ScoringConfig;
    use crate::random::create_rng;

    #[test]
    fn test_new_evaluates() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        let g = Genome::from_labels(&c, &["H1", "H1", "H2", "H3", "H5", "H2"]).unwrap();
        let ind: Individual<Cost> = Individual::new(g.clone(), &ev);
        assert_eq!(ind.score(), 1000);
        let ind: Individual<Objectives> = Individual::new(g, &ev);
        assert_eq!(ind.score(), Objectives::new(1, 0));
    }

    #[test]
    fn test_mutate_keeps_score_consistent() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        let mut rng = create_rng(42);
        let mut ind: Individual<Objectives> = Individual::random(&ev, &mut rng);
        for _ in 0..200 {
            ind.mutate(&ev, &mut rng);
            assert!(ind.is_consistent(&ev));
            assert!(ind.genome().is_valid_for(&c));
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        let mut rng = create_rng(1);
        let parent: Individual<Cost> = Individual::random(&ev, &mut rng);
        let snapshot = parent.clone();
        let mut child = parent.clone();
        for _ in 0..20 {
            child.mutate(&ev, &mut rng);
        }
        assert_eq!(parent, snapshot);
    }

    #[test]
    fn test_crossover_children_evaluated() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        let mut rng = create_rng(9);
        let a: Individual<Cost> = Individual::random(&ev, &mut rng);
        let b: Individual<Cost> = Individual::random(&ev, &mut rng);
        let (x, y) = Individual::crossover(&a, &b, &ev, &mut rng);
        assert!(x.is_consistent(&ev));
        assert!(y.is_consistent(&ev));
    }
}
