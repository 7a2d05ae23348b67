use crate::error::ConfigError;
use crate::settings::{LogFormat, LoggingSettings};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "gradebook.log";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr unless a
/// log directory is configured, in which case they are written to a file through a
/// non-blocking writer. The returned guard flushes that writer on drop and must be
/// held for the life of the process.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|e| {
            ConfigError::LoggingError(format!("invalid log level '{}': {e}", settings.level))
        })?,
    };

    match &settings.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).map_err(|e| {
                ConfigError::LoggingError(format!(
                    "cannot create log directory {}: {e}",
                    directory.display()
                ))
            })?;
            let appender = tracing_appender::rolling::never(directory, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            install(writer, false, filter, settings.format)?;
            Ok(Some(guard))
        }
        None => {
            install(std::io::stderr, true, filter, settings.format)?;
            Ok(None)
        }
    }
}

fn install<W>(
    writer: W,
    ansi: bool,
    filter: EnvFilter,
    format: LogFormat,
) -> Result<(), ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi);

    let result = match format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    result.map_err(|e| ConfigError::LoggingError(e.to_string()))
}
