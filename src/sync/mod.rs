//! Registry-to-registry synchronization
//!
//! The [`Orchestrator`] walks the source catalog, then each repository's tag
//! list, and hands every (repository, tag) pair to an image transfer
//! executor, one at a time.

pub mod orchestrator;

pub use orchestrator::{Orchestrator, SyncReport, SyncState};
