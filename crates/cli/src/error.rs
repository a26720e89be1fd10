use std::path::PathBuf;

/// Docsweep error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable interpreter for launching the checker
    #[error("checker error: {0}")]
    Checker(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using docsweep Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Style violations found by doc8 are reported on the console but do not
/// feed into the exit code; only configuration and internal failures do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed (violations, if any, were reported)
    Success = 0,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Checker(_) => ExitCode::ConfigError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
