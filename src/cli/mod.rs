//! Command line interface module
//!
//! Argument parsing plus the runner that wires configuration, logging, the
//! registry client and the transfer executor into one sync run.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::Runner;
