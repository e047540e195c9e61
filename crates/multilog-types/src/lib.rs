//! # multilog Types
//!
//! Core types shared across the multilog crates.
//!
//! This crate provides the fundamental building blocks for the multilog
//! logging facade, including:
//!
//! - The closed set of severity channels and their line tags
//! - Annotation flags controlling what a rendered line is prefixed with
//! - Serializable logging configuration
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use multilog_types::{Flags, Severity};
//!
//! let flags = Flags::DATE | Flags::SHORT_FILE;
//! assert!(flags.contains(Flags::DATE));
//! assert!(!flags.contains(Flags::TIME));
//!
//! assert_eq!(Severity::Fatal.prefix(), "C:");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enums;
pub mod errors;
pub mod flags;

// Re-export common types for convenience
pub use config::LogConfig;
pub use enums::Severity;
pub use errors::{MultilogError, Result};
pub use flags::Flags;
