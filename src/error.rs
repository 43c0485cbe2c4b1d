//! Construction-time errors.
//!
//! Every check happens before the first individual is built. Once a
//! [`Catalog`](crate::models::Catalog) exists and a config has passed
//! `validate()`, the optimization loop has no failure path.

use thiserror::Error;

/// Invalid reference data or an out-of-range configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A subject points at a teacher id that is not in the catalog.
    #[error("subject {subject} references unknown teacher {teacher}")]
    UnknownTeacher {
        /// Offending subject id.
        subject: u32,
        /// Teacher id that could not be resolved.
        teacher: u32,
    },

    /// A teacher has no preferred timeslot, so there is nothing to draw from.
    #[error("teacher {teacher} has an empty preference table")]
    EmptyPreferences {
        /// Offending teacher id.
        teacher: u32,
    },

    /// A preference key is not one of the catalog's timeslot labels.
    #[error("teacher {teacher} lists unknown timeslot '{slot}'")]
    UnknownSlot {
        /// Offending teacher id.
        teacher: u32,
        /// Label that is not a catalog timeslot.
        slot: String,
    },

    /// Two teachers share an id.
    #[error("duplicate teacher id {0}")]
    DuplicateTeacher(u32),

    /// Two subjects share an id.
    #[error("duplicate subject id {0}")]
    DuplicateSubject(u32),

    /// A timeslot label appears twice.
    #[error("duplicate timeslot label '{0}'")]
    DuplicateSlot(String),

    /// The catalog defines no timeslots.
    #[error("catalog has no timeslots")]
    NoSlots,

    /// The catalog defines no subjects.
    #[error("catalog has no subjects")]
    NoSubjects,

    /// A search or scoring parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
