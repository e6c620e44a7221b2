//! Executor that reports transfers without performing them
//!
//! Each task's command line is printed to stdout regardless of verbosity,
//! since that listing is the whole point of a dry run.

use crate::common::traits::{ImageTransfer, TransferOutcome};
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::types::TransferTask;
use crate::transfer::skopeo::SkopeoTransfer;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct DryRunTransfer {
    inner: SkopeoTransfer,
    output: Logger,
}

impl DryRunTransfer {
    /// `program` is only used to print the command that would have run
    pub fn new(program: impl Into<String>, output: Logger) -> Self {
        Self {
            inner: SkopeoTransfer::with_program(program, output.clone()),
            output,
        }
    }
}

#[async_trait]
impl ImageTransfer for DryRunTransfer {
    async fn copy(&self, task: &TransferTask) -> Result<TransferOutcome> {
        self.output.debug(&format!("Dry run, skipping copy of {}", task));
        println!("{}", self.inner.command_line(task));
        Ok(TransferOutcome::succeeded())
    }
}
