use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read gradebook configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid gradebook configuration: {0}")]
    ValidationError(String),

    #[error("Failed to initialise logging: {0}")]
    LoggingError(String),
}
