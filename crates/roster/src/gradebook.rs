use crate::student::Student;
use analytics::{AnalyticsEngine, ClassReport, SubjectStats};
use core_types::{check_subject, normalize_name, CoreError, GradeValue, StudentRecord, SubjectSet};
use indexmap::map::Entry;
use indexmap::IndexMap;
use ranking::Ranked;
use rust_decimal::Decimal;
use std::sync::Arc;

/// The collection of students for one class, keyed by normalized name.
///
/// The gradebook exclusively owns every `Student`. Mutating calls validate their
/// input before touching state, so a failed call never leaves a partial change.
/// Read-only queries work on snapshots taken at the time of the call.
#[derive(Debug, Clone)]
pub struct Gradebook {
    subjects: Arc<SubjectSet>,
    students: IndexMap<String, Student>,
}

impl Gradebook {
    /// Creates an empty gradebook over a fixed, ordered set of subjects.
    pub fn new<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_subjects(SubjectSet::new(subjects))
    }

    pub fn with_subjects(subjects: SubjectSet) -> Self {
        Self {
            subjects: Arc::new(subjects),
            students: IndexMap::new(),
        }
    }

    pub fn subjects(&self) -> &SubjectSet {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Whether a student with this name exists. Names that would fail validation are
    /// never present.
    pub fn contains(&self, name: &str) -> bool {
        normalize_name(name).is_ok_and(|name| self.students.contains_key(&name))
    }

    // ==========================================================================
    // Mutations
    // ==========================================================================

    /// Adds a student with no grades and returns it for further editing.
    pub fn add(&mut self, name: &str) -> Result<&mut Student, CoreError> {
        let name = normalize_name(name)?;

        match self.students.entry(name) {
            Entry::Occupied(entry) => Err(CoreError::DuplicateStudent(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::info!(student = %entry.key(), "Added student");
                let student = Student::new(entry.key().clone(), Arc::clone(&self.subjects));
                Ok(entry.insert(student))
            }
        }
    }

    /// Removes a student and returns a snapshot of what was removed.
    ///
    /// Removing the same name twice reports `StudentNotFound` the second time.
    pub fn remove(&mut self, name: &str) -> Result<StudentRecord, CoreError> {
        let name = normalize_name(name)?;

        let student = self
            .students
            .shift_remove(&name)
            .ok_or(CoreError::StudentNotFound(name))?;

        tracing::info!(student = %student.name(), "Removed student");
        Ok(student.snapshot())
    }

    /// Records or overwrites one grade for an existing student.
    pub fn update_grade(
        &mut self,
        name: &str,
        subject: &str,
        value: impl GradeValue,
    ) -> Result<(), CoreError> {
        self.find_mut(name)?.add_grade(subject, value)
    }

    // ==========================================================================
    // Lookups
    // ==========================================================================

    pub fn find(&self, name: &str) -> Result<&Student, CoreError> {
        let name = normalize_name(name)?;
        self.students
            .get(&name)
            .ok_or(CoreError::StudentNotFound(name))
    }

    /// Looks up a student for editing. Changes made through the returned reference
    /// are changes to the gradebook.
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Student, CoreError> {
        let name = normalize_name(name)?;
        self.students
            .get_mut(&name)
            .ok_or(CoreError::StudentNotFound(name))
    }

    /// Snapshots of every student, in the order they were added.
    pub fn list_all(&self) -> Vec<StudentRecord> {
        self.students.values().map(Student::snapshot).collect()
    }

    /// Case-insensitive partial-name search. No match is an empty result, not an error.
    pub fn search(&self, term: &str) -> Result<Vec<StudentRecord>, CoreError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Err(CoreError::EmptyName);
        }

        Ok(self
            .students
            .values()
            .filter(|s| s.name().to_lowercase().contains(&term))
            .map(Student::snapshot)
            .collect())
    }

    // ==========================================================================
    // Rankings
    // ==========================================================================

    /// Students with at least one grade, highest average first.
    pub fn rank_by_average(&self) -> Vec<Ranked> {
        ranking::bubble_sort_by_average(self.list_all())
    }

    /// Students graded in `subject`, highest grade first.
    pub fn rank_by_subject(&self, subject: &str) -> Result<Vec<Ranked>, CoreError> {
        check_subject(&self.subjects, subject)?;
        Ok(ranking::insertion_sort_by_subject(self.list_all(), subject))
    }

    /// Every student, A to Z.
    pub fn rank_by_name(&self) -> Vec<StudentRecord> {
        ranking::bubble_sort_by_name(self.list_all())
    }

    // ==========================================================================
    // Statistics
    // ==========================================================================

    /// Mean, max and min for one subject, or `None` when nobody is graded in it.
    pub fn subject_stats(&self, subject: &str) -> Result<Option<SubjectStats>, CoreError> {
        AnalyticsEngine::new().subject_stats(&self.subjects, &self.list_all(), subject)
    }

    pub fn class_average(&self) -> Decimal {
        AnalyticsEngine::new().class_average(&self.list_all())
    }

    pub fn class_report(&self) -> ClassReport {
        AnalyticsEngine::new().class_report(&self.subjects, &self.list_all())
    }
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::with_subjects(SubjectSet::default())
    }
}
