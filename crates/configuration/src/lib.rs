use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    Config, GradebookSettings, LogFormat, LoggingSettings, SeedGrade, SeedSettings, SeedStudent,
};

/// Base name of the optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gradebook";

/// Prefix for environment overrides, e.g. `GRADEBOOK__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "GRADEBOOK";

/// Loads the application configuration.
///
/// Sources are layered from lowest to highest priority: the built-in defaults, the
/// TOML file, then `GRADEBOOK__*` environment variables. When `path` is given the
/// file must exist; otherwise `gradebook.toml` is used if present. The result is
/// validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("gradebook.subjects")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(
        subjects = ?config.gradebook.subjects,
        seed = config.seed.enabled,
        "Loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_file_overrides_defaults() {
        let (_dir, path) = write_config(
            r#"
[gradebook]
subjects = ["Math", "Art"]

[logging]
level = "debug"
format = "compact"

[seed]
enabled = true

[[seed.students]]
name = "Ada"
grades = [{ subject = "Math", score = 99.5 }, { subject = "Art", score = 70 }]

[[seed.students]]
name = "Grace"
"#,
        );

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.gradebook.subjects, vec!["Math", "Art"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.seed.students.len(), 2);
        assert_eq!(config.seed.students[0].grades[0].score, dec!(99.5));
        assert!(config.seed.students[1].grades.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("[seed]\nenabled = false\n");

        let config = load_config(Some(&path)).unwrap();

        assert!(!config.seed.enabled);
        assert_eq!(config.gradebook.subjects, vec!["Math", "English", "Science"]);
        assert_eq!(config.logging.format, LogFormat::Full);
    }

    #[test]
    fn test_duplicate_subjects_fail_validation() {
        let (_dir, path) = write_config("[gradebook]\nsubjects = [\"Math\", \"Math\"]\n");

        let result = load_config(Some(&path));

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_explicit_file_yields_crate_config() {
        let (_dir, path) = write_config("[logging]\nlevel = \"info\"\n");

        let config: Config = load_config(Some(&path)).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.gradebook.subject_set().len(), 3);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(load_config(Some(&path)), Err(ConfigError::LoadError(_))));
    }
}
