//! Error types for the command line front end.
//!
//! Scoring itself never fails; errors only arise from configuration and from
//! writing results.

use thiserror::Error;

/// Errors that can occur while running the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Results could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Results could not be serialised as JSON.
    #[error("JSON serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_error_displays_message() {
        let error = CliError::InvalidConfig("unknown output format".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: unknown output format"
        );
    }

    #[test]
    fn io_error_converts_from_std_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: CliError = io_err.into();
        assert!(matches!(error, CliError::Io(_)));
        assert!(error.to_string().contains("pipe closed"));
    }

    #[test]
    fn json_error_converts_from_serde_json() {
        let Err(json_err) = serde_json::from_str::<serde_json::Value>("{") else {
            panic!("truncated JSON should fail to parse");
        };
        let error: CliError = json_err.into();
        assert!(error.to_string().starts_with("JSON serialisation failed"));
    }
}
