use core_types::StudentRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// A student snapshot together with the score that placed it in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub score: Decimal,
    pub student: StudentRecord,
}

impl Ranked {
    pub fn new(score: Decimal, student: StudentRecord) -> Self {
        Self { score, student }
    }

    pub fn name(&self) -> &str {
        &self.student.name
    }
}
