//! Built-in reference instance.
//!
//! Three teachers, six subjects, five timeslots (`H1`..`H5`) and two rooms.
//! Small enough to reason about by hand, which makes it the fixture for
//! most tests and benchmarks.

use crate::error::ConfigError;
use crate::models::{Catalog, Subject, Teacher};

/// Timeslot labels of the reference instance.
pub const REFERENCE_SLOTS: [&str; 5] = ["H1", "H2", "H3", "H4", "H5"];

/// Number of rooms available per timeslot in the reference instance.
pub const REFERENCE_ROOM_CAPACITY: usize = 2;

/// Teachers of the reference instance.
pub fn reference_teachers() -> Vec<Teacher> {
    vec![
        Teacher::new(1, "Prof. A").with_preferences([
            ("H1", 0),
            ("H2", 1),
            ("H3", 0),
            ("H4", 1),
            ("H5", 0),
        ]),
        Teacher::new(2, "Prof. B").with_preferences([("H2", 0), ("H3", 0), ("H4", 1)]),
        Teacher::new(3, "Prof. C").with_preferences([("H1", 1), ("H2", 0), ("H5", 0)]),
    ]
}

/// Subjects of the reference instance, two per teacher.
pub fn reference_subjects() -> Vec<Subject> {
    vec![
        Subject::new(101, "Expert Systems", 1),
        Subject::new(102, "Advanced Programming", 1),
        Subject::new(103, "Networks", 2),
        Subject::new(104, "Databases", 2),
        Subject::new(105, "Software Engineering", 3),
        Subject::new(106, "Algorithms", 3),
    ]
}

/// Builds the reference [`Catalog`].
pub fn reference_catalog() -> Result<Catalog, ConfigError> {
    Catalog::new(REFERENCE_SLOTS, reference_teachers(), reference_subjects())
}
