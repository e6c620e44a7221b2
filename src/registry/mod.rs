//! Registry module for Docker Registry HTTP API v2 discovery
//!
//! This module provides the read-only client used to walk a source registry:
//! catalog listing and per-repository tag listing.

pub mod client;
pub mod types;

pub use client::{RegistryClient, RegistryClientBuilder};
pub use types::{CatalogResponse, ImageReference, TagListResponse, TransferTask};
