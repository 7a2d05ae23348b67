use crate::report::{ClassReport, SubjectStats};
use core_types::{check_subject, mean, CoreError, StudentRecord, SubjectSet};
use rust_decimal::Decimal;

/// A stateless calculator for deriving grade statistics from student snapshots.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean, maximum and minimum of every grade recorded for `subject`.
    ///
    /// # Arguments
    ///
    /// * `subjects` - The gradebook's fixed subject set.
    /// * `students` - A snapshot of all students.
    /// * `subject` - The subject to aggregate.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(SubjectStats))` - at least one student is graded in the subject.
    /// * `Ok(None)` - the subject is valid but nobody has a grade in it yet.
    /// * `Err(CoreError::InvalidSubject)` - the subject is not in `subjects`.
    pub fn subject_stats(
        &self,
        subjects: &SubjectSet,
        students: &[StudentRecord],
        subject: &str,
    ) -> Result<Option<SubjectStats>, CoreError> {
        check_subject(subjects, subject)?;
        Ok(self.collect_stats(students, subject))
    }

    /// Mean over every grade of every student, across all subjects.
    pub fn class_average(&self, students: &[StudentRecord]) -> Decimal {
        mean(students.iter().flat_map(|s| s.grades.values().copied())).unwrap_or(Decimal::ZERO)
    }

    /// Builds the whole-class summary with one statistics section per subject.
    pub fn class_report(&self, subjects: &SubjectSet, students: &[StudentRecord]) -> ClassReport {
        let mut report = ClassReport::new();

        report.total_students = students.len();
        report.graded_students = students.iter().filter(|s| s.has_grades()).count();
        report.class_average = self.class_average(students);

        for subject in subjects.iter() {
            report
                .subjects
                .insert(subject.to_string(), self.collect_stats(students, subject));
        }

        report
    }

    /// Aggregates the grades for one subject. A student without a grade in the
    /// subject contributes nothing, not a zero.
    fn collect_stats(&self, students: &[StudentRecord], subject: &str) -> Option<SubjectStats> {
        let grades: Vec<_> = students.iter().filter_map(|s| s.grade(subject)).collect();

        let (Some(&max), Some(&min)) = (grades.iter().max(), grades.iter().min()) else {
            tracing::debug!(subject, "No grades recorded for subject");
            return None;
        };
        let average = mean(grades.iter().copied())?;

        Some(SubjectStats {
            subject: subject.to_string(),
            average,
            max,
            min,
            count: grades.len(),
        })
    }
}
