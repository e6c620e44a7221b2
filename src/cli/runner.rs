//! Runner that turns a validated configuration into one sync run

use crate::common::traits::ImageTransfer;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::RegistryClient;
use crate::sync::{Orchestrator, SyncReport};
use crate::transfer::{DryRunTransfer, SkopeoTransfer};
use crate::cli::args::PROGRAM;

pub struct Runner {
    config: SyncConfig,
    output: Logger,
}

impl Runner {
    pub fn new(config: SyncConfig) -> Result<Self> {
        config.validate()?;
        let output = Logger::new(PROGRAM, config.verbosity);
        Ok(Self { config, output })
    }

    pub fn logger(&self) -> &Logger {
        &self.output
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub async fn run(&self) -> Result<SyncReport> {
        self.output.section("Registry Sync");

        let registry = RegistryClient::builder()
            .with_timeout(self.config.timeout)
            .with_logger(self.output.clone())
            .build()?;

        let report = if self.config.dry_run {
            self.output.info("Dry run mode - copy commands are printed, not executed");
            let transfer = DryRunTransfer::new(self.config.copy_tool.clone(), self.output.clone());
            self.sync_with(registry, transfer).await?
        } else {
            let transfer =
                SkopeoTransfer::with_program(self.config.copy_tool.clone(), self.output.clone());
            self.sync_with(registry, transfer).await?
        };

        self.output.summary_kv(
            "Sync summary",
            &[
                ("Source", self.config.source.clone()),
                ("Destination", self.config.destination.clone()),
                ("Repositories", report.repositories.to_string()),
                ("Tags transferred", report.transferred.len().to_string()),
                ("Elapsed", self.output.format_duration(report.elapsed)),
            ],
        );

        Ok(report)
    }

    async fn sync_with<T: ImageTransfer>(
        &self,
        registry: RegistryClient,
        transfer: T,
    ) -> Result<SyncReport> {
        let mut orchestrator = Orchestrator::new(registry, transfer, self.output.clone());
        orchestrator
            .run(&self.config.source, &self.config.destination)
            .await
    }
}
