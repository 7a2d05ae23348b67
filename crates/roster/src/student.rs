use core_types::{
    check_grade, check_subject, mean, CoreError, Grade, GradeValue, StudentRecord, SubjectSet,
};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::sync::Arc;

/// One student: a fixed name and the grades recorded so far.
///
/// Students are only ever created by [`crate::Gradebook::add`]. Their grades can only
/// change through [`Student::add_grade`], which validates the subject against the
/// gradebook's subject set and the value against the grade range before storing it.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    grades: IndexMap<String, Grade>,
    subjects: Arc<SubjectSet>,
}

impl Student {
    /// `name` must already be normalized.
    pub(crate) fn new(name: String, subjects: Arc<SubjectSet>) -> Self {
        Self {
            name,
            grades: IndexMap::new(),
            subjects,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records or overwrites the grade for `subject`.
    ///
    /// The subject is checked first, then the value. Either failure leaves the
    /// existing grades untouched.
    pub fn add_grade(&mut self, subject: &str, value: impl GradeValue) -> Result<(), CoreError> {
        check_subject(&self.subjects, subject)?;
        let grade = check_grade(value)?;

        let previous = self.grades.insert(subject.to_string(), grade);
        tracing::info!(
            student = %self.name,
            subject,
            %grade,
            previous = ?previous.map(|g| g.value()),
            "Recorded grade"
        );
        Ok(())
    }

    /// Mean of the recorded grades; exactly zero when there are none.
    pub fn average(&self) -> Decimal {
        mean(self.grades.values().copied()).unwrap_or(Decimal::ZERO)
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    pub fn grade(&self, subject: &str) -> Option<Grade> {
        self.grades.get(subject).copied()
    }

    /// Recorded grades in the order the subjects were first graded.
    pub fn grades(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.grades.iter().map(|(subject, grade)| (subject.as_str(), *grade))
    }

    /// A detached, read-only copy of this student.
    pub fn snapshot(&self) -> StudentRecord {
        StudentRecord::new(self.name.clone(), self.grades.clone())
    }
}
