//! CLI-specific error types
//!
//! Everything surfacing here is fatal: the command prints the error and the
//! process exits nonzero.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_message() {
        let err = CliError::from(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("storage error:"));
    }
}
