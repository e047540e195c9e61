//! Configuration types and structures.

use crate::Flags;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log configuration.
///
/// Deserialized from YAML such as:
///
/// ```yaml
/// flags: date|time|shortfile
/// verbose: true
/// files:
///   - /var/log/app.log
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Annotation flags for the default stdout sinks
    #[serde(default = "default_flags")]
    pub flags: Flags,
    /// Whether debug lines are emitted
    #[serde(default)]
    pub verbose: bool,
    /// Extra file destinations appended to every channel
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,
}

fn default_flags() -> Flags {
    Flags::STD | Flags::SHORT_FILE
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            flags: default_flags(),
            verbose: false,
            files: Vec::new(),
        }
    }
}
