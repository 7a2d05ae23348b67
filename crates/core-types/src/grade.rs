use crate::error::CoreError;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A single recorded score, guaranteed to lie in `[0, 100]`.
///
/// The only way to obtain a `Grade` is through [`crate::validation::check_grade`],
/// so any `Grade` held by a student already satisfies the range invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(Decimal);

impl Grade {
    pub const MIN: Decimal = Decimal::ZERO;
    pub const MAX: Decimal = Decimal::ONE_HUNDRED;

    /// Wraps a value the caller has already range-checked.
    pub(crate) fn from_checked(value: Decimal) -> Self {
        Self(value.normalize())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Grade> for Decimal {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

pub(crate) fn out_of_range(value: impl fmt::Display) -> CoreError {
    CoreError::InvalidGrade(format!(
        "{value} is outside the range {}-{}",
        Grade::MIN,
        Grade::MAX
    ))
}

fn not_a_number(value: impl fmt::Display) -> CoreError {
    CoreError::InvalidGrade(format!("'{value}' is not a number"))
}

/// Anything a caller may hand in as a raw grade before validation.
///
/// Conversion only decides whether the input is numeric at all; the range check
/// happens afterwards in `check_grade`.
pub trait GradeValue {
    fn to_decimal(self) -> Result<Decimal, CoreError>;
}

impl GradeValue for Decimal {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        Ok(self)
    }
}

impl GradeValue for Grade {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        Ok(self.0)
    }
}

impl GradeValue for f64 {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        if self.is_nan() {
            return Err(not_a_number(self));
        }
        // Infinities and magnitudes beyond Decimal's range are numbers, just not grades.
        Decimal::from_f64(self).ok_or_else(|| out_of_range(self))
    }
}

impl GradeValue for f32 {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        if self.is_nan() {
            return Err(not_a_number(self));
        }
        Decimal::from_f32(self).ok_or_else(|| out_of_range(self))
    }
}

impl GradeValue for i32 {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        Ok(Decimal::from(self))
    }
}

impl GradeValue for i64 {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        Ok(Decimal::from(self))
    }
}

impl GradeValue for u32 {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        Ok(Decimal::from(self))
    }
}

impl GradeValue for &str {
    /// Parses without rounding. Text that is numeric but cannot be held exactly is
    /// rejected: as out of range when it lies outside the grade range, otherwise for
    /// carrying more digits than a grade keeps.
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        let trimmed = self.trim();
        if let Ok(value) = Decimal::from_str_exact(trimmed) {
            return Ok(value);
        }
        if trimmed.contains(['e', 'E']) {
            if let Ok(value) = Decimal::from_scientific(trimmed) {
                return Ok(value);
            }
        }

        match trimmed.parse::<f64>() {
            Ok(approx) if approx.is_nan() => Err(not_a_number(trimmed)),
            Ok(approx) if approx < 0.0 || approx > 100.0 => Err(out_of_range(trimmed)),
            Ok(_) => Err(CoreError::InvalidGrade(format!(
                "'{trimmed}' has more digits than a grade can hold"
            ))),
            Err(_) => Err(not_a_number(trimmed)),
        }
    }
}

impl GradeValue for String {
    fn to_decimal(self) -> Result<Decimal, CoreError> {
        self.as_str().to_decimal()
    }
}

/// Arithmetic mean of a set of grades, or `None` when there is nothing to average.
pub fn mean<I>(grades: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Grade>,
{
    let (sum, count) = grades
        .into_iter()
        .fold((Decimal::ZERO, 0u32), |(sum, count), grade| {
            (sum + grade.0, count + 1)
        });

    if count == 0 {
        return None;
    }
    Some(sum / Decimal::from(count))
}
