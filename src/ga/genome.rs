//! Slot-assignment genome.
//!
//! # Encoding
//!
//! One gene per subject, index-aligned with [`Catalog::subjects`]. Gene `i`
//! is the [`SlotId`] assigned to subject `i`. The subject order is fixed
//! for the whole run, so no id map travels with the genome.

use rand::Rng;

use super::operators::{random_valid_slot, reassign_mutation, single_point_crossover};
use crate::error::ConfigError;
use crate::models::{Catalog, SlotId, Subject, Teacher};

/// A candidate timetable.
///
/// Serializable for reporting. Rebuild from data with
/// [`Genome::from_genes`] or [`Genome::from_labels`], which check it
/// against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Genome(Vec<SlotId>);

impl Genome {
    /// Draws each gene uniformly from its subject's valid slots.
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        Self(
            (0..catalog.subject_count())
                .map(|s| random_valid_slot(catalog, s, rng))
                .collect(),
        )
    }

    /// Wraps explicit genes, checking length and slot range.
    ///
    /// Genes need not be in the subject's teacher table; such genomes are
    /// legal and simply score the fallback penalty.
    pub fn from_genes(catalog: &Catalog, genes: Vec<SlotId>) -> Result<Self, ConfigError> {
        if genes.len() != catalog.subject_count() {
            return Err(ConfigError::InvalidParameter(format!(
                "genome has {} genes, catalog has {} subjects",
                genes.len(),
                catalog.subject_count()
            )));
        }
        if let Some(bad) = genes.iter().find(|g| g.index() >= catalog.slot_count()) {
            return Err(ConfigError::InvalidParameter(format!(
                "slot index {} out of range",
                bad.index()
            )));
        }
        Ok(Self(genes))
    }

    /// Builds a genome from timeslot labels, one per subject.
    pub fn from_labels(catalog: &Catalog, labels: &[&str]) -> Result<Self, ConfigError> {
        let genes = labels
            .iter()
            .map(|&label| {
                catalog.slot_id(label).ok_or_else(|| {
                    ConfigError::InvalidParameter(format!("unknown timeslot '{label}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_genes(catalog, genes)
    }

    /// The genes, one per subject.
    pub fn genes(&self) -> &[SlotId] {
        &self.0
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every gene is in its subject's teacher table.
    pub fn is_valid_for(&self, catalog: &Catalog) -> bool {
        self.0.len() == catalog.subject_count()
            && self
                .0
                .iter()
                .enumerate()
                .all(|(s, &slot)| catalog.is_valid_for(s, slot))
    }

    /// Decodes the genome into per-subject placements.
    ///
    /// Rooms are handed out per slot in subject order; subjects beyond
    /// `room_capacity` in a slot get `room: None`.
    pub fn assignments<'c>(&self, catalog: &'c Catalog, room_capacity: usize) -> Vec<Assignment<'c>> {
        let mut occupancy = vec![0usize; catalog.slot_count()];
        self.0
            .iter()
            .enumerate()
            .map(|(s, &slot)| {
                let used = &mut occupancy[slot.index()];
                let room = (*used < room_capacity).then_some(*used);
                *used += 1;
                Assignment {
                    subject: &catalog.subjects()[s],
                    teacher: catalog.teacher_of(s),
                    slot: catalog.slot_label(slot),
                    room,
                }
            })
            .collect()
    }

    pub(crate) fn crossover<R: Rng>(&self, other: &Genome, rng: &mut R) -> (Genome, Genome) {
        let (a, b) = single_point_crossover(&self.0, &other.0, rng);
        (Genome(a), Genome(b))
    }

    pub(crate) fn mutate<R: Rng>(&mut self, catalog: &Catalog, rng: &mut R) -> usize {
        reassign_mutation(&mut self.0, catalog, rng)
    }
}

/// One subject's placement in a decoded timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'c> {
    /// The subject being placed.
    pub subject: &'c Subject,
    /// Its teacher.
    pub teacher: &'c Teacher,
    /// Timeslot label.
    pub slot: &'c str,
    /// Zero-based room index, or `None` if the slot is over capacity.
    pub room: Option<usize>,
}
