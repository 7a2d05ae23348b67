use crate::grade::{mean, Grade};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

/// A read-only copy of one student, taken for the duration of a query.
///
/// Rankings and statistics operate on records rather than on the gradebook's own
/// students, so nothing they do can reach back into stored state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub grades: IndexMap<String, Grade>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, grades: IndexMap<String, Grade>) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }

    /// Mean of the recorded grades. A student with no grades averages exactly zero.
    pub fn average(&self) -> Decimal {
        mean(self.grades.values().copied()).unwrap_or(Decimal::ZERO)
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    pub fn grade(&self, subject: &str) -> Option<Grade> {
        self.grades.get(subject).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check_grade;
    use rust_decimal_macros::dec;

    #[test]
    fn test_average_of_empty_record_is_zero() {
        let record = StudentRecord::new("NewStudent", IndexMap::new());

        assert!(!record.has_grades());
        assert_eq!(record.average(), Decimal::ZERO);
    }

    #[test]
    fn test_average_and_lookup() {
        let mut grades = IndexMap::new();
        grades.insert("Math".to_string(), check_grade(95).unwrap());
        grades.insert("Science".to_string(), check_grade(90).unwrap());
        let record = StudentRecord::new("Sarah", grades);

        assert_eq!(record.average(), dec!(92.5));
        assert_eq!(record.grade("Math").map(|g| g.value()), Some(dec!(95)));
        assert_eq!(record.grade("English"), None);
    }
}
