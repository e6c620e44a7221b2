//! Registry Sync Library
//!
//! Mirrors container images from one registry to another: the source
//! catalog is listed, each repository's tags are listed, and every
//! (repository, tag) pair is copied with an external image-copy tool, one
//! after another.

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod sync;
pub mod transfer;

pub use common::{ImageTransfer, RegistryReader, TransferOutcome};
pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use logging::{Logger, Verbosity};
pub use registry::{RegistryClient, TransferTask};
pub use sync::{Orchestrator, SyncReport, SyncState};
