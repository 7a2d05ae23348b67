use core_types::Grade;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate figures for one subject over every student graded in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStats {
    pub subject: String,
    pub average: Decimal,
    pub max: Grade,
    pub min: Grade,
    /// Number of students holding a grade in the subject.
    pub count: usize,
}

/// A whole-class summary.
///
/// This struct is the final output of `AnalyticsEngine::class_report` and is what the
/// shell's summary view and the demo command render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub total_students: usize,
    pub graded_students: usize,
    /// Mean over every grade of every student. Zero when nothing is graded.
    pub class_average: Decimal,
    /// One entry per configured subject, in subject order. `None` means no student
    /// has been graded in that subject yet.
    pub subjects: IndexMap<String, Option<SubjectStats>>,
}

impl ClassReport {
    /// Creates an empty report for a class with no students.
    pub fn new() -> Self {
        Self {
            total_students: 0,
            graded_students: 0,
            class_average: Decimal::ZERO,
            subjects: IndexMap::new(),
        }
    }
}

impl Default for ClassReport {
    fn default() -> Self {
        Self::new()
    }
}
