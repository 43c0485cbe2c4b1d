//! Timetabling domain models.
//!
//! Immutable reference data consumed by the optimizer. A dataset loader
//! builds [`Teacher`]s and [`Subject`]s, then hands them to
//! [`Catalog::new`], which validates cross-references once and derives the
//! lookup tables every evaluation relies on.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training center |
//! |-------------|------------|--------|-----------------|
//! | Subject | Course | Class | Session |
//! | Teacher | Lecturer | Teacher | Trainer |
//! | Timeslot | Lecture block | Period | Time block |

mod catalog;
mod subject;
mod teacher;

pub use catalog::{Catalog, SlotId};
pub use subject::Subject;
pub use teacher::Teacher;
