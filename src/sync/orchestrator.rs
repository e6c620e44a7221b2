//! Catalog walk and sequential transfer loop

use crate::common::traits::{ImageTransfer, RegistryReader};
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::types::TransferTask;
use std::time::{Duration, Instant};

/// Where a run currently is
///
/// `Failed` is terminal and reachable from every other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    CatalogFetched,
    TagsFetched { repository: String },
    Transferring { repository: String, tag: String },
    Transferred { repository: String, tag: String },
    Done,
    Failed,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub repositories: usize,
    pub transferred: Vec<TransferTask>,
    pub elapsed: Duration,
}

pub struct Orchestrator<R, T> {
    registry: R,
    transfer: T,
    output: Logger,
    state: SyncState,
}

impl<R, T> Orchestrator<R, T>
where
    R: RegistryReader,
    T: ImageTransfer,
{
    pub fn new(registry: R, transfer: T, output: Logger) -> Self {
        Self {
            registry,
            transfer,
            output,
            state: SyncState::Idle,
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Mirror every tag of every repository on `source` to `destination`
    ///
    /// Stops at the first error. Transfers already done stay done.
    pub async fn run(&mut self, source: &str, destination: &str) -> Result<SyncReport> {
        self.state = SyncState::Idle;
        self.output.debug(&format!("Source registry: {}", source));
        self.output
            .debug(&format!("Destination registry: {}", destination));

        match self.walk(source, destination).await {
            Ok(report) => {
                self.state = SyncState::Done;
                Ok(report)
            }
            Err(e) => {
                self.state = SyncState::Failed;
                Err(e)
            }
        }
    }

    async fn walk(&mut self, source: &str, destination: &str) -> Result<SyncReport> {
        let start_time = Instant::now();
        let mut transferred = Vec::new();

        let catalog = self.registry.fetch_catalog(source).await?;
        self.state = SyncState::CatalogFetched;

        for repository in &catalog {
            let tags = self.registry.fetch_tags(source, repository).await?;
            self.state = SyncState::TagsFetched {
                repository: repository.clone(),
            };
            self.output.detail(&format!(
                "{} has {} tag(s)",
                repository,
                tags.len()
            ));

            for tag in &tags {
                let task = TransferTask::new(source, destination, repository, tag);
                self.state = SyncState::Transferring {
                    repository: repository.clone(),
                    tag: tag.clone(),
                };

                self.transfer.copy(&task).await?;

                self.state = SyncState::Transferred {
                    repository: repository.clone(),
                    tag: tag.clone(),
                };
                transferred.push(task);
            }
        }

        Ok(SyncReport {
            repositories: catalog.len(),
            transferred,
            elapsed: start_time.elapsed(),
        })
    }
}
