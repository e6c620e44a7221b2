//! Common module - shared traits and interfaces
//!
//! The orchestrator only talks to the registry and to the copy tool through
//! the traits defined here, so either side can be swapped for a test double.

pub mod traits;

pub use traits::*;
