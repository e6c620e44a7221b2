//! Error types for the sync pipeline
//!
//! Every variant is fatal: the orchestrator never catches an error and
//! carries on, so whatever reaches `main` ends the process with
//! [`SyncError::exit_code`].

pub mod handlers;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    /// Registry answered, but not with the listing we asked for
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// The copy tool ran and exited unsuccessfully
    #[error("Transfer error: copying {reference} failed ({})", describe_exit(.code))]
    Transfer { reference: String, code: Option<i32> },

    /// The copy tool could not be started at all
    #[error("Copy tool '{program}' could not be started: {reason}")]
    ToolUnavailable { program: String, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Process exit status for a fatal error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Short category name used in the final log line
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Discovery(_) => "discovery",
            SyncError::Transfer { .. } | SyncError::ToolUnavailable { .. } => "transfer",
            SyncError::Network(_) | SyncError::Timeout(_) => "network",
            SyncError::Validation(_) | SyncError::Config(_) => "configuration",
            SyncError::Io(_) => "io",
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<url::ParseError> for SyncError {
    fn from(err: url::ParseError) -> Self {
        SyncError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_error_message() {
        let err = SyncError::Transfer {
            reference: "docker://src:5000/app:v1".to_string(),
            code: Some(125),
        };
        assert_eq!(
            err.to_string(),
            "Transfer error: copying docker://src:5000/app:v1 failed (exit status 125)"
        );

        let err = SyncError::Transfer {
            reference: "docker://src:5000/app:v1".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("(terminated by signal)"));
    }

    #[test]
    fn test_every_error_is_fatal() {
        let errors = vec![
            SyncError::Discovery("missing field".to_string()),
            SyncError::Transfer {
                reference: "x".to_string(),
                code: Some(1),
            },
            SyncError::Network("refused".to_string()),
            SyncError::Validation("bad".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(SyncError::Discovery(String::new()).kind(), "discovery");
        assert_eq!(
            SyncError::ToolUnavailable {
                program: "skopeo".to_string(),
                reason: "not found".to_string()
            }
            .kind(),
            "transfer"
        );
        assert_eq!(SyncError::Timeout(String::new()).kind(), "network");
    }
}
