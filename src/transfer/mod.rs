//! Image transfer executors
//!
//! [`SkopeoTransfer`] shells out to the external copy tool; [`DryRunTransfer`]
//! only reports what would be copied.

pub mod dry_run;
pub mod skopeo;

pub use dry_run::DryRunTransfer;
pub use skopeo::{DEFAULT_COPY_TOOL, SkopeoTransfer};
