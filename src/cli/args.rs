//! Command-line argument parsing

use crate::config::SyncConfig;
use crate::logging::Verbosity;
use clap::{Parser, ValueEnum};
use std::time::Duration;

pub const PROGRAM: &str = "registry-sync";
pub const RELEASE_DATE: &str = "2023-05-25";
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " 2023-05-25");

const EXAMPLES: &str = "example:
  registry-sync 192.168.15.1:5000 192.168.15.2:5000

Both registries are reached over plain HTTP without credentials.
Every tag is copied with: skopeo copy --src-tls-verify=false --dest-tls-verify=false";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum VerbosityArg {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl From<VerbosityArg> for Verbosity {
    fn from(arg: VerbosityArg) -> Self {
        match arg {
            VerbosityArg::Critical => Verbosity::Critical,
            VerbosityArg::Error => Verbosity::Error,
            VerbosityArg::Warning => Verbosity::Warning,
            VerbosityArg::Info => Verbosity::Info,
            VerbosityArg::Debug => Verbosity::Debug,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = PROGRAM)]
#[command(about = "Sync container images between two registries")]
#[command(version = VERSION, author)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Source registry
    #[arg(help = "Source registry (host:port)")]
    pub source: String,

    /// Destination registry
    #[arg(help = "Destination registry (host:port)")]
    pub destination: String,

    /// Log verbosity
    #[arg(
        long = "verbosity",
        short = 'v',
        value_enum,
        ignore_case = true,
        default_value = "ERROR",
        help = "Verbose mode, options: CRITICAL, ERROR (default), WARNING, INFO, DEBUG"
    )]
    pub verbosity: VerbosityArg,

    /// Timeout in seconds for registry API calls
    #[arg(
        long = "timeout",
        short = 't',
        default_value = "10",
        help = "API timeout in seconds"
    )]
    pub timeout: u64,

    /// Copy tool executable
    #[arg(
        long = "copy-tool",
        default_value = "skopeo",
        help = "Image copy executable to invoke"
    )]
    pub copy_tool: String,

    /// Dry run mode (discover without copying)
    #[arg(
        long = "dry-run",
        short = 'n',
        help = "List the copy commands without running them"
    )]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// True when the command line carries no arguments at all
    pub fn is_bare_invocation<I>(argv: I) -> bool
    where
        I: IntoIterator,
    {
        argv.into_iter().nth(1).is_none()
    }

    /// Short hint printed for a bare invocation
    pub fn usage_hint() -> String {
        format!(
            "{}: missing registry positional argument\nTry '{} --help' for more information.",
            PROGRAM, PROGRAM
        )
    }

    pub fn into_config(self) -> SyncConfig {
        SyncConfig::new(self.source, self.destination)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_verbosity(self.verbosity.into())
            .with_copy_tool(self.copy_tool)
            .with_dry_run(self.dry_run)
    }
}
