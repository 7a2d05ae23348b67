//! # Gradebook Analytics Engine
//!
//! Per-subject and whole-class statistics over student snapshots.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`.
//! - **Stateless Calculation:** The `AnalyticsEngine` takes `StudentRecord` snapshots
//!   as input and produces `SubjectStats` / `ClassReport` values as output.
//! - **No Data Is Not An Error:** A valid subject that nobody has been graded in yields
//!   `None`, never a mean of nothing.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `SubjectStats`: mean, max, min and count for one subject.
//! - `ClassReport`: the class-wide summary.

pub mod engine;
pub mod report;

pub use engine::AnalyticsEngine;
pub use report::{ClassReport, SubjectStats};
