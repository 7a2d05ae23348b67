use crate::error::ConfigError;
use core_types::SubjectSet;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in the file; anything missing falls back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gradebook: GradebookSettings,
    pub logging: LoggingSettings,
    pub seed: SeedSettings,
}

impl Config {
    /// Rejects settings that would produce a gradebook with no usable subjects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let subjects = &self.gradebook.subjects;
        if subjects.is_empty() {
            return Err(ConfigError::ValidationError(
                "gradebook.subjects must list at least one subject".to_string(),
            ));
        }
        for (i, subject) in subjects.iter().enumerate() {
            if subject.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "gradebook.subjects[{i}] is blank"
                )));
            }
            if subjects[..i].iter().any(|s| s.trim() == subject.trim()) {
                return Err(ConfigError::ValidationError(format!(
                    "gradebook.subjects lists '{}' more than once",
                    subject.trim()
                )));
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level cannot be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the gradebook itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GradebookSettings {
    /// The fixed, ordered list of subjects grades are recorded against.
    pub subjects: Vec<String>,
}

impl GradebookSettings {
    pub fn subject_set(&self) -> SubjectSet {
        SubjectSet::new(&self.subjects)
    }
}

impl Default for GradebookSettings {
    fn default() -> Self {
        Self {
            subjects: SubjectSet::default().iter().map(str::to_string).collect(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive (e.g. "warn" or "roster=debug"). `RUST_LOG` overrides it.
    pub level: String,
    pub format: LogFormat,
    /// When set, logs go to `gradebook.log` in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Full,
            directory: None,
        }
    }
}

/// The students loaded into the gradebook at start-up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    pub enabled: bool,
    pub students: Vec<SeedStudent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedStudent {
    pub name: String,
    #[serde(default)]
    pub grades: Vec<SeedGrade>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedGrade {
    pub subject: String,
    pub score: Decimal,
}

impl SeedStudent {
    fn new(name: &str, grades: &[(&str, Decimal)]) -> Self {
        Self {
            name: name.to_string(),
            grades: grades
                .iter()
                .map(|&(subject, score)| SeedGrade {
                    subject: subject.to_string(),
                    score,
                })
                .collect(),
        }
    }
}

impl Default for SeedSettings {
    /// The sample class: three graded students and one with no grades yet.
    fn default() -> Self {
        Self {
            enabled: true,
            students: vec![
                SeedStudent::new(
                    "John",
                    &[("Math", dec!(85)), ("English", dec!(78)), ("Science", dec!(92))],
                ),
                SeedStudent::new(
                    "Sarah",
                    &[("Math", dec!(95)), ("English", dec!(88)), ("Science", dec!(85))],
                ),
                SeedStudent::new("David", &[("Math", dec!(78)), ("English", dec!(80))]),
                SeedStudent::new("NewStudent", &[]),
            ],
        }
    }
}
