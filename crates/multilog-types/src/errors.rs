//! Error types for multilog operations.

use thiserror::Error;

/// The main error type for multilog operations.
///
/// Only configuration-time failures are represented here. Errors raised by
/// individual sinks while writing a line never reach the caller.
#[derive(Error, Debug)]
pub enum MultilogError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown annotation flag name
    #[error("Invalid flag: {0}")]
    InvalidFlag(String),

    /// Unknown severity name
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    /// I/O error, e.g. a log file that cannot be opened or created
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for multilog operations.
pub type Result<T> = std::result::Result<T, MultilogError>;

/// Helper macro to bail out with a MultilogError
///
/// # Example
///
/// ```ignore
/// if path.is_empty() {
///     bail!(Config, "empty log file path");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::MultilogError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::MultilogError::$variant(format!($fmt, $($arg)*)))
    };
}
