//! # Gradebook Roster
//!
//! The stateful heart of the workspace: the `Gradebook` that owns every `Student`,
//! validates every mutation, and answers ranking and statistics queries by handing
//! snapshots to the `ranking` and `analytics` crates.
//!
//! ## Public API
//!
//! - `Gradebook`: add / remove / find / update_grade, listings, rankings, statistics.
//! - `Student`: one student's name and grades, editable only through `add_grade`.
//! - The snapshot, ranking and statistics types re-exported from the crates below.

pub mod gradebook;
pub mod student;

pub use gradebook::Gradebook;
pub use student::Student;

pub use analytics::{ClassReport, SubjectStats};
pub use core_types::{CoreError, Grade, StudentRecord, SubjectSet};
pub use ranking::Ranked;
