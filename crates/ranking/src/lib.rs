//! # Gradebook Ranking Engine
//!
//! Orders student snapshots by average, by a single subject's grade, or by name.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate depending only on `core-types`. It receives
//!   owned `StudentRecord` snapshots and returns fresh sequences; it can never touch
//!   the gradebook that produced them.
//! - **Explicit Algorithms:** The orderings are the classic quadratic sorts with
//!   strict comparisons, so students with equal scores keep their input order.
//!
//! ## Public API
//!
//! - `bubble_sort_by_average`: highest average first, gradeless students omitted.
//! - `insertion_sort_by_subject`: highest grade in one subject first.
//! - `bubble_sort_by_name`: A to Z over every student.
//! - `Ranked`: a student snapshot paired with the score it was ranked on.

pub mod bubble;
pub mod insertion;
pub mod ranked;

pub use bubble::{bubble_sort_by_average, bubble_sort_by_name};
pub use insertion::insertion_sort_by_subject;
pub use ranked::Ranked;
