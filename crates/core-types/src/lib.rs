//! # Gradebook Core Types
//!
//! Layer 0 of the workspace: the vocabulary every other crate speaks. It holds the
//! error taxonomy, the validated `Grade` value, the fixed `SubjectSet`, the read-only
//! `StudentRecord` snapshot and the pure validation functions that guard every
//! mutation.

pub mod error;
pub mod grade;
pub mod record;
pub mod subject;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use grade::{mean, Grade, GradeValue};
pub use record::StudentRecord;
pub use subject::SubjectSet;
pub use validation::{check_grade, check_subject, normalize_name, parse_grade};
