//! Leveled logging and output control
//!
//! This module provides the [`Logger`] handle that every component receives at
//! construction time. There is no process-wide logger: the runner builds one
//! from the configured [`Verbosity`] and clones it into the registry client,
//! the transfer executor and the orchestrator.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Severity threshold, from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    Debug,
    Info,
    Warning,
    #[default]
    Error,
    Critical,
}

impl Verbosity {
    pub const ALL: [Verbosity; 5] = [
        Verbosity::Critical,
        Verbosity::Error,
        Verbosity::Warning,
        Verbosity::Info,
        Verbosity::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Critical => "CRITICAL",
            Verbosity::Error => "ERROR",
            Verbosity::Warning => "WARNING",
            Verbosity::Info => "INFO",
            Verbosity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verbosity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "invalid verbosity '{}', expected one of: CRITICAL, ERROR, WARNING, INFO, DEBUG",
                    s
                )
            })
    }
}

/// Logger responsible for all user-visible output
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub level: Verbosity,
}

impl Logger {
    pub fn new(name: impl Into<String>, level: Verbosity) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Logger that only lets CRITICAL through
    pub fn new_quiet(name: impl Into<String>) -> Self {
        Self::new(name, Verbosity::Critical)
    }

    /// Whether a message at `level` would be printed
    pub fn enabled(&self, level: Verbosity) -> bool {
        level >= self.level
    }

    pub fn format_line(&self, level: Verbosity, message: &str) -> String {
        format!("{} {}: {}", self.name, level, message)
    }

    fn log(&self, level: Verbosity, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = self.format_line(level, message);
        if level >= Verbosity::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Verbosity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Verbosity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Verbosity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Verbosity::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Verbosity::Critical, message);
    }

    /// Main section heading, shown from INFO
    pub fn section(&self, title: &str) {
        if self.enabled(Verbosity::Info) {
            println!("\n=== {} ===", title);
        }
    }

    /// Indented detail line (only shown at DEBUG)
    pub fn detail(&self, message: &str) {
        if self.enabled(Verbosity::Debug) {
            println!("   {}", message);
        }
    }

    /// Pretty-print a value as JSON at DEBUG
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        if !self.enabled(Verbosity::Debug) {
            return;
        }
        match serde_json::to_string_pretty(value) {
            Ok(pretty) => self.debug(&pretty),
            Err(e) => self.debug(&format!("<unprintable value: {}>", e)),
        }
    }

    /// Key-value pair summary, shown from INFO
    pub fn summary_kv(&self, title: &str, items: &[(&str, String)]) {
        if self.enabled(Verbosity::Info) {
            self.section(title);
            for (key, value) in items {
                println!("  {}: {}", key, value);
            }
        }
    }

    /// Format duration in human-readable format
    pub fn format_duration(&self, duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{}.{:01}s", secs, duration.subsec_millis() / 100)
        } else if secs < 3600 {
            format!("{}m{}s", secs / 60, secs % 60)
        } else {
            format!("{}h{}m{}s", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_parse() {
        assert_eq!("DEBUG".parse::<Verbosity>(), Ok(Verbosity::Debug));
        assert_eq!("warning".parse::<Verbosity>(), Ok(Verbosity::Warning));
        assert_eq!(" Critical ".parse::<Verbosity>(), Ok(Verbosity::Critical));
        assert!("TRACE".parse::<Verbosity>().is_err());
        assert_eq!(Verbosity::default(), Verbosity::Error);
    }

    #[test]
    fn test_threshold() {
        let logger = Logger::new("registry-sync", Verbosity::Warning);
        assert!(logger.enabled(Verbosity::Critical));
        assert!(logger.enabled(Verbosity::Error));
        assert!(logger.enabled(Verbosity::Warning));
        assert!(!logger.enabled(Verbosity::Info));
        assert!(!logger.enabled(Verbosity::Debug));

        let quiet = Logger::new_quiet("registry-sync");
        assert!(!quiet.enabled(Verbosity::Error));
        assert!(quiet.enabled(Verbosity::Critical));
    }

    #[test]
    fn test_format_line() {
        let logger = Logger::new("registry-sync", Verbosity::Debug);
        assert_eq!(
            logger.format_line(Verbosity::Info, "Syncing app:v1"),
            "registry-sync INFO: Syncing app:v1"
        );
    }

    #[test]
    fn test_format_duration() {
        let logger = Logger::new("registry-sync", Verbosity::Error);
        assert_eq!(logger.format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(logger.format_duration(Duration::from_secs(125)), "2m5s");
        assert_eq!(logger.format_duration(Duration::from_secs(3725)), "1h2m5s");
    }
}
