//! Pure input checks run by every mutating operation before it touches any state.

use crate::error::CoreError;
use crate::grade::{out_of_range, Grade, GradeValue};
use crate::subject::SubjectSet;

/// Trims a raw student name and rejects blank names or names containing digits.
///
/// Only the decimal digits `0`-`9` count. Other numeric characters such as Roman
/// numerals (`Ⅷ`) or vulgar fractions (`½`) are allowed in names.
pub fn normalize_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::EmptyName);
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

pub fn check_subject(subjects: &SubjectSet, subject: &str) -> Result<(), CoreError> {
    if subjects.contains(subject) {
        Ok(())
    } else {
        Err(CoreError::InvalidSubject(subject.to_string()))
    }
}

/// Validates a raw grade: it must be numeric and lie in `[0, 100]` inclusive.
pub fn check_grade(value: impl GradeValue) -> Result<Grade, CoreError> {
    let value = value.to_decimal()?;
    if value < Grade::MIN || value > Grade::MAX {
        return Err(out_of_range(value));
    }
    Ok(Grade::from_checked(value))
}

/// Parses a grade typed at a prompt.
pub fn parse_grade(raw: &str) -> Result<Grade, CoreError> {
    check_grade(raw)
}
