//! Severity channels.

use crate::errors::{MultilogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed logging channels.
///
/// Every channel owns its own fan-out writer. The set is closed; there is no
/// ordering between severities beyond the declaration order used by
/// [`Severity::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational messages, always emitted
    Info,
    /// Debug messages, emitted only in verbose mode
    Debug,
    /// Warnings, always emitted
    Warning,
    /// Critical messages; the process terminates after writing
    Fatal,
}

impl Severity {
    /// All channels in registry order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warning,
        Severity::Fatal,
    ];

    /// Line prefix used by the text renderer: the channel tag and a colon,
    /// e.g. `"W:"`.
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "I:",
            Severity::Debug => "D:",
            Severity::Warning => "W:",
            Severity::Fatal => "C:",
        }
    }

    /// Position of this channel in [`Severity::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Severity {
    type Err = MultilogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "i" | "info" => Ok(Severity::Info),
            "d" | "debug" => Ok(Severity::Debug),
            "w" | "warn" | "warning" => Ok(Severity::Warning),
            "c" | "fatal" | "critical" => Ok(Severity::Fatal),
            _ => Err(MultilogError::InvalidSeverity(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Debug => write!(f, "debug"),
            Severity::Warning => write!(f, "warning"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}
