#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::TerminalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Owns the background log writer. Dropping it flushes and closes the target,
/// so it must live until the process is about to exit.
pub struct LogSink {
    pub target: LogTarget,
    _guard: WorkerGuard,
}

pub fn open_log_file(path: &Path) -> Result<File, TerminalError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    return options
        .open(path)
        .map_err(|source| TerminalError::LogFileOpenFailure {
            path: path.to_path_buf(),
            source,
        });
}

impl LogSink {
    /// Opens `path` once for appending, or falls back to stderr.
    pub fn open(path: &Path) -> (NonBlocking, LogSink, Option<TerminalError>) {
        match open_log_file(path) {
            Ok(file) => {
                let (writer, guard) = tracing_appender::non_blocking(file);
                let sink = LogSink {
                    target: LogTarget::File(path.to_path_buf()),
                    _guard: guard,
                };
                return (writer, sink, None);
            }
            Err(err) => {
                let (writer, guard) = tracing_appender::non_blocking(io::stderr());
                let sink = LogSink {
                    target: LogTarget::Stderr,
                    _guard: guard,
                };
                return (writer, sink, Some(err));
            }
        }
    }

    /// Installs the global subscriber writing JSON lines to the configured log file.
    pub fn init(config: &Config) -> LogSink {
        let path = PathBuf::from(config.get(ConfigKey::LogFile));
        let (writer, sink, open_error) = LogSink::open(&path);
        let level = Level::from_str(&config.get(ConfigKey::LogLevel)).unwrap_or(Level::INFO);

        let _ = tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_writer(writer)
            .try_init();

        if let Some(err) = open_error {
            tracing::warn!(error = %err, "logging to stderr");
        }

        tracing::debug!(
            log_file = config.get(ConfigKey::LogFile),
            log_level = config.get(ConfigKey::LogLevel),
            title = config.get(ConfigKey::Title),
            placeholder = config.get(ConfigKey::Placeholder),
            "config"
        );

        return sink;
    }
}
