//! Teacher model.

use std::collections::BTreeMap;

/// A teacher and their timeslot preferences.
///
/// `preferences` maps a timeslot label to a penalty: 0 is the most preferred,
/// larger is worse. A slot missing from the map is one the teacher cannot
/// teach in. Random initialization and mutation never draw such a slot, and
/// the evaluator charges a fallback penalty if one shows up anyway.
///
/// The map is ordered so that iteration, and therefore seeded runs, are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Timeslot label → preference penalty.
    pub preferences: BTreeMap<String, u32>,
}

impl Teacher {
    /// Creates a teacher with no preferences yet.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            preferences: BTreeMap::new(),
        }
    }

    /// Adds (or overwrites) the penalty for one timeslot.
    pub fn with_preference(mut self, slot: impl Into<String>, penalty: u32) -> Self {
        self.preferences.insert(slot.into(), penalty);
        self
    }

    /// Adds penalties for several timeslots.
    pub fn with_preferences<S, I>(mut self, prefs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, u32)>,
    {
        self.preferences
            .extend(prefs.into_iter().map(|(slot, penalty)| (slot.into(), penalty)));
        self
    }

    /// Penalty for `slot`, or `None` if the teacher cannot teach then.
    pub fn penalty(&self, slot: &str) -> Option<u32> {
        self.preferences.get(slot).copied()
    }
}
