//! CLI-specific error types
//!
//! Every CLI error terminates the process with a non-zero exit code.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file or stdin)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Runtime or server boot failure
    #[error("Boot failed: {0}")]
    Boot(String),

    /// One-shot explanation failed; message already user-facing
    #[error("{0}")]
    Explain(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
