//! Capability traits at the two external seams of the pipeline

use crate::error::Result;
use crate::registry::types::TransferTask;
use async_trait::async_trait;

/// Read-only view of a registry's catalog and tag listings
#[async_trait]
pub trait RegistryReader: Send + Sync {
    /// Repository names in the order the registry returned them
    async fn fetch_catalog(&self, endpoint: &str) -> Result<Vec<String>>;

    /// Tags of `repository` in the order the registry returned them
    async fn fetch_tags(&self, endpoint: &str, repository: &str) -> Result<Vec<String>>;
}

/// Outcome of a finished copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl TransferOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
        }
    }

    pub fn from_status(status: std::process::ExitStatus) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
        }
    }
}

/// Something that can replicate one tagged image between registries
///
/// Implementations return `Ok` only for a successful copy; a failed copy is
/// reported as an error so the caller stops immediately.
#[async_trait]
pub trait ImageTransfer: Send + Sync {
    async fn copy(&self, task: &TransferTask) -> Result<TransferOutcome>;
}
