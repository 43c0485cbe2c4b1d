//! Constraint and preference evaluation.
//!
//! A genome is scored in one pass that yields a [`CostBreakdown`]:
//!
//! - **preference**: sum of each subject's teacher penalty for its slot,
//!   or [`ScoringConfig::unknown_slot_penalty`] if the teacher has no
//!   entry for that slot
//! - **teacher conflicts**: for every teacher and slot used by `c > 1` of
//!   that teacher's subjects, `c - 1`
//! - **capacity excess**: for every slot holding `c > room_capacity`
//!   subjects, `c - room_capacity`
//!
//! The single-objective search folds the two hard terms into one
//! [`Cost`] through [`ScoringConfig::hard_penalty`]. The multi-objective
//! search keeps them as an unweighted violation count next to the
//! preference term ([`Objectives`]).

use crate::error::ConfigError;
use crate::ga::multi_objective::{dominance_cmp, Dominance};
use crate::ga::Genome;
use crate::models::Catalog;

/// Scalar cost used by the weighted GA. Lower is better, 0 is ideal.
pub type Cost = u64;

/// Scoring parameters.
///
/// # Defaults
///
/// ```
/// use u_timetable::evaluator::ScoringConfig;
///
/// let scoring = ScoringConfig::default();
/// assert_eq!(scoring.hard_penalty, 1000);
/// assert_eq!(scoring.room_capacity, 2);
/// assert_eq!(scoring.unknown_slot_penalty, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    /// Cost charged per unit of hard-constraint violation (weighted mode only).
    pub hard_penalty: u64,

    /// Rooms available per timeslot.
    pub room_capacity: usize,

    /// Preference penalty for a slot missing from the teacher's table.
    pub unknown_slot_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hard_penalty: 1000,
            room_capacity: 2,
            unknown_slot_penalty: 100,
        }
    }
}

impl ScoringConfig {
    /// Sets the hard-constraint penalty weight.
    pub fn with_hard_penalty(mut self, penalty: u64) -> Self {
        self.hard_penalty = penalty;
        self
    }

    /// Sets the number of rooms per timeslot.
    pub fn with_room_capacity(mut self, capacity: usize) -> Self {
        self.room_capacity = capacity;
        self
    }

    /// Sets the fallback penalty for unknown slots.
    pub fn with_unknown_slot_penalty(mut self, penalty: u32) -> Self {
        self.unknown_slot_penalty = penalty;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_capacity == 0 {
            return Err(ConfigError::InvalidParameter(
                "room_capacity must be at least 1".into(),
            ));
        }
        if self.hard_penalty == 0 {
            return Err(ConfigError::InvalidParameter(
                "hard_penalty must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Raw terms of one evaluation, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    /// Soft preference cost.
    pub preference: u32,
    /// Excess subjects of the same teacher sharing a slot.
    pub teacher_conflicts: u32,
    /// Subjects beyond room capacity, summed over slots.
    pub capacity_excess: u32,
}

impl CostBreakdown {
    /// Total hard-constraint violations.
    pub fn violations(&self) -> u32 {
        self.teacher_conflicts + self.capacity_excess
    }

    /// Whether no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violations() == 0
    }
}

/// The two minimized objectives of the multi-objective search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    /// Hard-constraint violation count.
    pub violations: u32,
    /// Soft preference cost.
    pub preference: u32,
}

impl Objectives {
    /// Number of objectives.
    pub const COUNT: usize = 2;

    /// Creates an objective pair.
    pub fn new(violations: u32, preference: u32) -> Self {
        Self {
            violations,
            preference,
        }
    }

    /// Objective `m`: 0 = violations, 1 = preference.
    ///
    /// # Panics
    /// Panics if `m >= Objectives::COUNT`.
    pub fn get(&self, m: usize) -> u32 {
        match m {
            0 => self.violations,
            1 => self.preference,
            _ => panic!("objective index {m} out of range"),
        }
    }

    /// Whether `self` Pareto-dominates `other` (both minimized).
    pub fn dominates(&self, other: &Objectives) -> bool {
        dominance_cmp(self, other) == Dominance::Left
    }
}

/// Scores genomes against a [`Catalog`].
///
/// Evaluation is a pure function of the genome.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    catalog: &'c Catalog,
    scoring: ScoringConfig,
}

impl<'c> Evaluator<'c> {
    /// Creates an evaluator after validating `scoring`.
    pub fn new(catalog: &'c Catalog, scoring: ScoringConfig) -> Result<Self, ConfigError> {
        scoring.validate()?;
        Ok(Self { catalog, scoring })
    }

    /// The reference data being scored against.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// The scoring parameters.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Computes the raw cost terms of `genome`.
    ///
    /// The preference sum saturates at `u32::MAX`.
    pub fn breakdown(&self, genome: &Genome) -> CostBreakdown {
        let catalog = self.catalog;
        debug_assert_eq!(genome.len(), catalog.subject_count());

        let slot_count = catalog.slot_count();
        let mut per_teacher = vec![0u32; catalog.teachers().len() * slot_count];
        let mut per_slot = vec![0u32; slot_count];
        let mut preference = 0u32;

        for (subject, &slot) in genome.genes().iter().enumerate() {
            preference = preference.saturating_add(
                catalog
                    .penalty(subject, slot)
                    .unwrap_or(self.scoring.unknown_slot_penalty),
            );
            per_teacher[catalog.teacher_index(subject) * slot_count + slot.index()] += 1;
            per_slot[slot.index()] += 1;
        }

        let teacher_conflicts = per_teacher.iter().map(|&c| c.saturating_sub(1)).sum();
        let capacity = u32::try_from(self.scoring.room_capacity).unwrap_or(u32::MAX);
        let capacity_excess = per_slot.iter().map(|&c| c.saturating_sub(capacity)).sum();

        CostBreakdown {
            preference,
            teacher_conflicts,
            capacity_excess,
        }
    }

    /// Weighted scalar cost: preference + violations × hard penalty,
    /// saturating at `Cost::MAX`.
    pub fn cost(&self, genome: &Genome) -> Cost {
        let b = self.breakdown(genome);
        Cost::from(b.violations())
            .saturating_mul(self.scoring.hard_penalty)
            .saturating_add(Cost::from(b.preference))
    }

    /// Unweighted objective pair: (violations, preference).
    pub fn objectives(&self, genome: &Genome) -> Objectives {
        let b = self.breakdown(genome);
        Objectives::new(b.violations(), b.preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_catalog;
    use crate::models::{Subject, Teacher};

    fn genome(catalog: &Catalog, labels: &[&str]) -> Genome {
        Genome::from_labels(catalog, labels).unwrap()
    }

    // ---- Breakdown ----

    #[test]
    fn test_feasible_ideal_genome() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        // A: H1,H3  B: H2,H3  C: H2,H5 -> all zero-penalty, at most 2 per slot
        let g = genome(&c, &["H1", "H3", "H2", "H3", "H5", "H2"]);
        let b = ev.breakdown(&g);
        assert_eq!(b, CostBreakdown::default());
        assert!(b.is_feasible());
        assert_eq!(ev.cost(&g), 0);
        assert_eq!(ev.objectives(&g), Objectives::new(0, 0));
    }

    #[test]
    fn test_teacher_conflict_counted_once_per_duplicate() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        let clean = genome(&c, &["H1", "H3", "H2", "H3", "H5", "H2"]);
        // Both of Prof. A's subjects in H1
        let clash = genome(&c, &["H1", "H1", "H2", "H3", "H5", "H2"]);

        let before = ev.breakdown(&clean);
        let after = ev.breakdown(&clash);
        assert_eq!(after.teacher_conflicts, before.teacher_conflicts + 1);
        assert_eq!(after.capacity_excess, 0);
        assert_eq!(
            ev.objectives(&clash).violations,
            ev.objectives(&clean).violations + 1
        );
        assert_eq!(ev.cost(&clash), 1000);
    }

    #[test]
    fn test_capacity_excess() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        // Four subjects in H2: A(1), B(0), C(0), C(0)
        let g = genome(&c, &["H2", "H1", "H2", "H3", "H2", "H2"]);
        let b = ev.breakdown(&g);
        assert_eq!(b.capacity_excess, 2);
        assert_eq!(b.teacher_conflicts, 1); // Prof. C twice in H2
        assert_eq!(b.preference, 1);
        assert_eq!(ev.cost(&g), 1 + 3 * 1000);
        assert_eq!(ev.objectives(&g), Objectives::new(3, 1));
    }

    #[test]
    fn test_unknown_slot_fallback_penalty() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        // Prof. B has no H1 entry
        let g = genome(&c, &["H3", "H5", "H1", "H2", "H5", "H2"]);
        assert_eq!(ev.breakdown(&g).preference, 100);

        let ev = Evaluator::new(&c, ScoringConfig::default().with_unknown_slot_penalty(7)).unwrap();
        assert_eq!(ev.breakdown(&g).preference, 7);
    }

    #[test]
    fn test_penalty_weight_only_affects_cost() {
        let c = reference_catalog().unwrap();
        let g = genome(&c, &["H1", "H1", "H2", "H3", "H5", "H2"]);
        let light = Evaluator::new(&c, ScoringConfig::default().with_hard_penalty(10)).unwrap();
        let heavy = Evaluator::new(&c, ScoringConfig::default().with_hard_penalty(5000)).unwrap();
        assert_eq!(light.cost(&g), 10);
        assert_eq!(heavy.cost(&g), 5000);
        assert_eq!(light.objectives(&g), heavy.objectives(&g));
    }

    #[test]
    fn test_extreme_hard_penalty_saturates() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default().with_hard_penalty(u64::MAX)).unwrap();
        let clean = genome(&c, &["H1", "H3", "H2", "H3", "H5", "H2"]);
        let clash = genome(&c, &["H1", "H1", "H2", "H2", "H5", "H5"]);
        assert_eq!(ev.cost(&clean), 0);
        assert_eq!(ev.cost(&clash), Cost::MAX);
    }

    #[test]
    fn test_extreme_preference_saturates() {
        let c = Catalog::new(
            ["P1", "P2"],
            vec![Teacher::new(1, "T").with_preference("P1", u32::MAX)],
            vec![Subject::new(1, "S1", 1), Subject::new(2, "S2", 1)],
        )
        .unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();

        let both = genome(&c, &["P1", "P1"]);
        assert_eq!(ev.objectives(&both), Objectives::new(1, u32::MAX));
        assert_eq!(ev.cost(&both), 1000 + u64::from(u32::MAX));

        // P2 is outside the teacher's table and takes the fallback penalty
        let ev = Evaluator::new(&c, ScoringConfig::default().with_unknown_slot_penalty(u32::MAX)).unwrap();
        let split = genome(&c, &["P2", "P1"]);
        assert_eq!(ev.objectives(&split), Objectives::new(0, u32::MAX));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let c = reference_catalog().unwrap();
        let ev = Evaluator::new(&c, ScoringConfig::default()).unwrap();
        let g = genome(&c, &["H4", "H4", "H4", "H4", "H1", "H1"]);
        assert_eq!(ev.cost(&g), ev.cost(&g));
        assert_eq!(ev.breakdown(&g), ev.breakdown(&g));
    }

    // ---- Config ----

    #[test]
    fn test_scoring_validate() {
        assert!(ScoringConfig::default().validate().is_ok());
        assert!(ScoringConfig::default()
            .with_room_capacity(0)
            .validate()
            .is_err());
        assert!(ScoringConfig::default()
            .with_hard_penalty(0)
            .validate()
            .is_err());
    }

    // ---- Objectives ----

    #[test]
    fn test_objectives_accessors() {
        let o = Objectives::new(3, 8);
        assert_eq!(o.get(0), 3);
        assert_eq!(o.get(1), 8);
        assert!(Objectives::new(0, 3).dominates(&Objectives::new(1, 3)));
        assert!(!Objectives::new(0, 3).dominates(&Objectives::new(1, 1)));
        assert!(!o.dominates(&o));
    }
}
