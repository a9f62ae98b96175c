use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can stop the game before or outside the main loop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_error_names_path() {
        let err = Error::LogFile {
            path: PathBuf::from("/tmp/rocket.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/rocket.log"));
        assert!(!msg.contains("terminal"));
    }
}
