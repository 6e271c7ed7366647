use std::path::PathBuf;

/// Lintsuite error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lint engine could not be invoked or produced an unusable report.
    #[error("engine error: {path}: {message}")]
    Engine { path: PathBuf, message: String },
}

/// Result type using lintsuite Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract.
///
/// The observable contract is exactly two codes: 0 when every evaluated
/// category passes, 1 for failed categories and fatal errors alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All evaluated categories passed
    Success = 0,
    /// One or more categories failed, or a fatal error occurred
    Failure = 1,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
