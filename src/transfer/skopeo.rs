//! Copy executor backed by `skopeo copy`

use crate::common::traits::{ImageTransfer, TransferOutcome};
use crate::error::{Result, SyncError};
use crate::logging::Logger;
use crate::registry::types::TransferTask;
use async_trait::async_trait;
use tokio::process::Command;

pub const DEFAULT_COPY_TOOL: &str = "skopeo";

/// Runs `<program> copy --src-tls-verify=false --dest-tls-verify=false <src> <dest>`
///
/// The child inherits stdout and stderr, and is awaited without a timeout.
#[derive(Debug, Clone)]
pub struct SkopeoTransfer {
    program: String,
    output: Logger,
}

impl SkopeoTransfer {
    pub fn new(output: Logger) -> Self {
        Self::with_program(DEFAULT_COPY_TOOL, output)
    }

    pub fn with_program(program: impl Into<String>, output: Logger) -> Self {
        Self {
            program: program.into(),
            output,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the copy tool for `task`
    pub fn command_args(task: &TransferTask) -> Vec<String> {
        vec![
            "copy".to_string(),
            "--src-tls-verify=false".to_string(),
            "--dest-tls-verify=false".to_string(),
            task.source_ref().docker_uri(),
            task.destination_ref().docker_uri(),
        ]
    }

    /// Printable form of the full command line
    pub fn command_line(&self, task: &TransferTask) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(Self::command_args(task));
        parts.join(" ")
    }
}

#[async_trait]
impl ImageTransfer for SkopeoTransfer {
    async fn copy(&self, task: &TransferTask) -> Result<TransferOutcome> {
        self.output.info(&format!("Syncing {}", task));
        self.output
            .debug(&format!("Running: {}", self.command_line(task)));

        let status = Command::new(&self.program)
            .args(Self::command_args(task))
            .status()
            .await
            .map_err(|e| SyncError::ToolUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let outcome = TransferOutcome::from_status(status);
        if !outcome.success {
            self.output.error("Failed");
            return Err(SyncError::Transfer {
                reference: task.source_ref().docker_uri(),
                code: outcome.exit_code,
            });
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;

    fn task() -> TransferTask {
        TransferTask::new("192.168.15.1:5000", "192.168.15.2:5000", "app", "v1")
    }

    fn logger() -> Logger {
        Logger::new("registry-sync", Verbosity::Critical)
    }

    #[test]
    fn test_command_args() {
        assert_eq!(
            SkopeoTransfer::command_args(&task()),
            vec![
                "copy",
                "--src-tls-verify=false",
                "--dest-tls-verify=false",
                "docker://192.168.15.1:5000/app:v1",
                "docker://192.168.15.2:5000/app:v1",
            ]
        );
    }

    #[test]
    fn test_command_line() {
        let transfer = SkopeoTransfer::new(logger());
        assert_eq!(transfer.program(), "skopeo");
        assert_eq!(
            transfer.command_line(&task()),
            "skopeo copy --src-tls-verify=false --dest-tls-verify=false \
             docker://192.168.15.1:5000/app:v1 docker://192.168.15.2:5000/app:v1"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_tool() {
        let transfer = SkopeoTransfer::with_program("true", logger());
        let outcome = transfer.copy(&task()).await.unwrap();
        assert_eq!(outcome, TransferOutcome::succeeded());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_tool_is_fatal() {
        let transfer = SkopeoTransfer::with_program("false", logger());
        match transfer.copy(&task()).await {
            Err(SyncError::Transfer { reference, code }) => {
                assert_eq!(reference, "docker://192.168.15.1:5000/app:v1");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected transfer error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_tool() {
        let transfer = SkopeoTransfer::with_program("registry-sync-no-such-copy-tool", logger());
        assert!(matches!(
            transfer.copy(&task()).await,
            Err(SyncError::ToolUnavailable { .. })
        ));
    }
}
