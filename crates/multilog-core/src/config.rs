//! Configuration loading.
//!
//! A [`LogConfig`] is resolved in this priority order:
//! 1. Environment variables (`MULTILOG_VERBOSE`, `MULTILOG_FLAGS`)
//! 2. Values loaded from a YAML file
//! 3. Default values
//!
//! ## Example
//!
//! ```no_run
//! use multilog_core::{config, Registry};
//!
//! let registry = Registry::new();
//! let config = config::load("/etc/app/logging.yml")?;
//! config::apply(&registry, &config)?;
//! # Ok::<(), multilog_core::MultilogError>(())
//! ```

use crate::registry::{open_append, Registry};
use multilog_types::{bail, Flags, LogConfig, MultilogError, Result};
use std::fs::{self, File};
use std::path::Path;

/// Overrides [`LogConfig::verbose`].
pub const ENV_VERBOSE: &str = "MULTILOG_VERBOSE";

/// Overrides [`LogConfig::flags`].
pub const ENV_FLAGS: &str = "MULTILOG_FLAGS";

/// Load configuration from a YAML file, then apply environment overrides.
///
/// A missing file yields the defaults.
pub fn load(path: impl AsRef<Path>) -> Result<LogConfig> {
    let path = path.as_ref();
    let mut config = if path.exists() {
        let content = fs::read_to_string(path)?;
        from_yaml(&content)?
    } else {
        LogConfig::default()
    };
    apply_env(&mut config)?;
    Ok(config)
}

/// Parse configuration from a YAML document.
pub fn from_yaml(content: &str) -> Result<LogConfig> {
    if content.trim().is_empty() {
        return Ok(LogConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Apply overrides from the process environment.
pub fn apply_env(config: &mut LogConfig) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides<F>(config: &mut LogConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_VERBOSE) {
        config.verbose = match parse_bool(&value) {
            Some(verbose) => verbose,
            None => bail!(Config, "{} must be a boolean, got '{}'", ENV_VERBOSE, value),
        };
    }
    if let Some(value) = lookup(ENV_FLAGS) {
        config.flags = value.parse::<Flags>()?;
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply `config` to `registry`.
///
/// Every file is opened before the registry is touched: if any file fails to
/// open, the registry keeps its previous configuration.
pub fn apply(registry: &Registry, config: &LogConfig) -> Result<()> {
    let files = config
        .files
        .iter()
        .map(|path| open_append(path).map_err(MultilogError::from))
        .collect::<Result<Vec<File>>>()?;

    registry.configure(config.flags);
    registry.set_verbose(config.verbose);
    for file in files {
        registry.append_descriptor(file);
    }
    Ok(())
}
