//! Validated reference data shared by every individual of a run.
//!
//! Checks performed by [`Catalog::new`]:
//! 1. At least one timeslot, no duplicate labels
//! 2. No duplicate teacher or subject ids
//! 3. Every preference key is a known timeslot
//! 4. Every teacher has at least one preferred timeslot
//! 5. At least one subject, each referencing an existing teacher

use std::collections::{HashMap, HashSet};

use super::{Subject, Teacher};
use crate::error::ConfigError;

/// Index of a timeslot within the catalog's ordered label list.
///
/// Only a [`Catalog`] hands these out, so there is no `Deserialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotId(usize);

impl SlotId {
    /// Position of this slot in [`Catalog::slots`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// Immutable timetabling instance.
///
/// Subject order is significant: gene `i` of every genome is the timeslot
/// of `subjects()[i]`.
#[derive(Debug, Clone)]
pub struct Catalog {
    slots: Vec<String>,
    teachers: Vec<Teacher>,
    subjects: Vec<Subject>,
    /// Subject index → teacher index.
    owner: Vec<usize>,
    /// Teacher index → slot index → penalty (`None` = unknown slot).
    penalties: Vec<Vec<Option<u32>>>,
    /// Teacher index → slots the teacher can teach in, in catalog slot order.
    valid_slots: Vec<Vec<SlotId>>,
}

impl Catalog {
    /// Validates the reference data and builds the lookup tables.
    pub fn new<S, I>(
        slots: I,
        teachers: Vec<Teacher>,
        subjects: Vec<Subject>,
    ) -> Result<Self, ConfigError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let slots: Vec<String> = slots.into_iter().map(Into::into).collect();
        if slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }

        let mut slot_index = HashMap::with_capacity(slots.len());
        for (i, label) in slots.iter().enumerate() {
            if slot_index.insert(label.as_str(), i).is_some() {
                return Err(ConfigError::DuplicateSlot(label.clone()));
            }
        }

        let mut teacher_index = HashMap::with_capacity(teachers.len());
        let mut penalties = Vec::with_capacity(teachers.len());
        let mut valid_slots = Vec::with_capacity(teachers.len());

        for (t_idx, teacher) in teachers.iter().enumerate() {
            if teacher_index.insert(teacher.id, t_idx).is_some() {
                return Err(ConfigError::DuplicateTeacher(teacher.id));
            }
            if teacher.preferences.is_empty() {
                return Err(ConfigError::EmptyPreferences {
                    teacher: teacher.id,
                });
            }

            let mut row = vec![None; slots.len()];
            for (label, &penalty) in &teacher.preferences {
                let s_idx = *slot_index.get(label.as_str()).ok_or_else(|| {
                    ConfigError::UnknownSlot {
                        teacher: teacher.id,
                        slot: label.clone(),
                    }
                })?;
                row[s_idx] = Some(penalty);
            }

            valid_slots.push(
                row.iter()
                    .enumerate()
                    .filter(|(_, p)| p.is_some())
                    .map(|(s, _)| SlotId(s))
                    .collect(),
            );
            penalties.push(row);
        }

        if subjects.is_empty() {
            return Err(ConfigError::NoSubjects);
        }

        let mut subject_ids = HashSet::with_capacity(subjects.len());
        let mut owner = Vec::with_capacity(subjects.len());
        for subject in &subjects {
            if !subject_ids.insert(subject.id) {
                return Err(ConfigError::DuplicateSubject(subject.id));
            }
            let t_idx = *teacher_index.get(&subject.teacher_id).ok_or(
                ConfigError::UnknownTeacher {
                    subject: subject.id,
                    teacher: subject.teacher_id,
                },
            )?;
            owner.push(t_idx);
        }

        Ok(Self {
            slots,
            teachers,
            subjects,
            owner,
            penalties,
            valid_slots,
        })
    }

    /// Timeslot labels, in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Number of timeslots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Label of `slot`.
    pub fn slot_label(&self, slot: SlotId) -> &str {
        &self.slots[slot.0]
    }

    /// Looks up a slot by label.
    pub fn slot_id(&self, label: &str) -> Option<SlotId> {
        self.slots.iter().position(|s| s == label).map(SlotId)
    }

    /// Iterates over every slot id.
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> {
        (0..self.slots.len()).map(SlotId)
    }

    /// Teachers, in input order.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Subjects, in genome order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Number of subjects (the genome length).
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Index into [`teachers`](Self::teachers) of the teacher of `subject`.
    pub fn teacher_index(&self, subject: usize) -> usize {
        self.owner[subject]
    }

    /// Teacher of the subject at index `subject`.
    pub fn teacher_of(&self, subject: usize) -> &Teacher {
        &self.teachers[self.owner[subject]]
    }

    /// Slots the teacher of `subject` can teach in. Never empty.
    pub fn valid_slots(&self, subject: usize) -> &[SlotId] {
        &self.valid_slots[self.owner[subject]]
    }

    /// Preference penalty of placing `subject` in `slot`, or `None` if the
    /// teacher has no entry for that slot.
    pub fn penalty(&self, subject: usize, slot: SlotId) -> Option<u32> {
        self.penalties[self.owner[subject]]
            .get(slot.0)
            .copied()
            .flatten()
    }

    /// Whether `slot` is in the preference table of `subject`'s teacher.
    pub fn is_valid_for(&self, subject: usize, slot: SlotId) -> bool {
        self.penalty(subject, slot).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teachers() -> Vec<Teacher> {
        vec![
            Teacher::new(1, "A").with_preferences([("H1", 0), ("H3", 2)]),
            Teacher::new(2, "B").with_preferences([("H2", 1)]),
        ]
    }

    fn subjects() -> Vec<Subject> {
        vec![
            Subject::new(10, "Math", 1),
            Subject::new(11, "Art", 2),
            Subject::new(12, "History", 1),
        ]
    }

    #[test]
    fn test_valid_catalog() {
        let c = Catalog::new(["H1", "H2", "H3"], teachers(), subjects()).unwrap();
        assert_eq!(c.slot_count(), 3);
        assert_eq!(c.subject_count(), 3);
        assert_eq!(c.teacher_index(1), 1);
        assert_eq!(c.teacher_of(2).id, 1);

        let h1 = c.slot_id("H1").unwrap();
        let h2 = c.slot_id("H2").unwrap();
        let h3 = c.slot_id("H3").unwrap();
        assert_eq!(c.valid_slots(0), &[h1, h3]);
        assert_eq!(c.valid_slots(1), &[h2]);
        assert_eq!(c.penalty(0, h3), Some(2));
        assert_eq!(c.penalty(0, h2), None);
        assert!(c.is_valid_for(1, h2));
        assert!(!c.is_valid_for(1, h1));
        assert_eq!(c.slot_label(h2), "H2");
        assert_eq!(c.slot_ids().count(), 3);
    }

    #[test]
    fn test_unknown_teacher() {
        let mut subs = subjects();
        subs.push(Subject::new(13, "Ghost", 99));
        let err = Catalog::new(["H1", "H2", "H3"], teachers(), subs).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownTeacher {
                subject: 13,
                teacher: 99
            }
        );
    }

    #[test]
    fn test_empty_preferences() {
        let mut ts = teachers();
        ts.push(Teacher::new(3, "C"));
        let err = Catalog::new(["H1", "H2", "H3"], ts, subjects()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPreferences { teacher: 3 });
    }

    #[test]
    fn test_unknown_slot_in_preferences() {
        let err = Catalog::new(["H1", "H2"], teachers(), subjects()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownSlot {
                teacher: 1,
                slot: "H3".into()
            }
        );
    }

    #[test]
    fn test_duplicates() {
        let err = Catalog::new(["H1", "H1"], teachers(), subjects()).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSlot("H1".into()));

        let mut ts = teachers();
        ts.push(Teacher::new(1, "A again").with_preference("H1", 0));
        let err = Catalog::new(["H1", "H2", "H3"], ts, subjects()).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTeacher(1));

        let mut subs = subjects();
        subs.push(Subject::new(10, "Math again", 2));
        let err = Catalog::new(["H1", "H2", "H3"], teachers(), subs).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSubject(10));
    }

    #[test]
    fn test_empty_dimensions() {
        let no_slots: [&str; 0] = [];
        assert_eq!(
            Catalog::new(no_slots, teachers(), subjects()).unwrap_err(),
            ConfigError::NoSlots
        );
        assert_eq!(
            Catalog::new(["H1", "H2", "H3"], teachers(), vec![]).unwrap_err(),
            ConfigError::NoSubjects
        );
    }
}
