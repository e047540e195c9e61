//! Annotation flags.
//!
//! Bits are OR'ed together to control which metadata the text renderer
//! prepends to a line. The order the annotations appear in is fixed (the
//! order listed here). For example `Flags::DATE | Flags::TIME` produces
//!
//! ```text
//! I:2009/01/23 01:23:23 message
//! ```
//!
//! while `Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::LONG_FILE`
//! produces
//!
//! ```text
//! I:2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
//! ```

use crate::errors::{MultilogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitmask of line annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flags(u32);

impl Flags {
    /// The date in the local time zone: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// The time in the local time zone: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Assumes `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// If `DATE` or `TIME` is set, use UTC rather than the local time zone
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the channel prefix from the start of the line to just before the message
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// Initial values for the default sinks
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, Flags); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("longfile", Self::LONG_FILE),
        ("shortfile", Self::SHORT_FILE),
        ("utc", Self::UTC),
        ("msgprefix", Self::MSG_PREFIX),
    ];

    /// No annotations at all.
    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Build flags from raw bits, dropping unknown ones.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & 0x7f)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit in `other` is also set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any timestamp component is rendered.
    pub const fn has_timestamp(self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    /// Whether a file/line annotation is rendered.
    pub const fn has_file(self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl FromStr for Flags {
    type Err = MultilogError;

    /// Parse a `|`, `,` or whitespace separated list such as `"date|time|shortfile"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut flags = Flags::empty();
        for name in s
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|n| !n.is_empty())
        {
            let name = name.to_lowercase();
            match name.as_str() {
                "none" => {}
                "std" | "stdflags" => flags |= Flags::STD,
                _ => match Self::NAMED.iter().find(|(n, _)| *n == name) {
                    Some((_, flag)) => flags |= *flag,
                    None => crate::bail!(InvalidFlag, name),
                },
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        write!(f, "{}", names.join("|"))
    }
}

impl TryFrom<String> for Flags {
    type Error = MultilogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Flags> for String {
    fn from(flags: Flags) -> Self {
        flags.to_string()
    }
}
