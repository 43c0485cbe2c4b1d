//! Subject model.

/// A subject to be placed in exactly one timeslot.
///
/// The owning teacher is referenced by id, not owned. [`Catalog::new`]
/// rejects subjects whose teacher id does not resolve.
///
/// [`Catalog::new`]: super::Catalog::new
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    /// Unique subject identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Id of the teacher who teaches this subject.
    pub teacher_id: u32,
}

impl Subject {
    /// Creates a subject taught by `teacher_id`.
    pub fn new(id: u32, name: impl Into<String>, teacher_id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            teacher_id,
        }
    }
}
