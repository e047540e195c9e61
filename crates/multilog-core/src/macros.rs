//! Formatting macros.
//!
//! Each macro takes `format!` syntax and logs through the default registry,
//! or through an explicit registry with the `in registry;` form:
//!
//! ```
//! use multilog_core::{info, warning, Registry};
//!
//! let registry = Registry::silent();
//! info!(in registry; "connected to {}", "db-1");
//! warning!("retrying in {}s", 5);
//! ```

/// Log a formatted message at info level.
#[macro_export]
macro_rules! info {
    (in $registry:expr; $($arg:tt)+) => {
        $registry.info_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facade::info_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at debug level when verbose.
#[macro_export]
macro_rules! debug {
    (in $registry:expr; $($arg:tt)+) => {
        $registry.debug_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facade::debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at warning level.
#[macro_export]
macro_rules! warning {
    (in $registry:expr; $($arg:tt)+) => {
        $registry.warning_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facade::warning_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message to the fatal channel and exit.
#[macro_export]
macro_rules! fatal {
    (in $registry:expr; $($arg:tt)+) => {
        $registry.fatal_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facade::fatal_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a formatted line to the info channel, newline-terminated.
#[macro_export]
macro_rules! logln {
    (in $registry:expr; $($arg:tt)+) => {
        $registry.println(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facade::println(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message to the info channel.
#[macro_export]
macro_rules! logf {
    (in $registry:expr; $($arg:tt)+) => {
        $registry.printf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facade::printf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message to the info channel on behalf of a wrapper `up`
/// frames above the caller.
#[macro_export]
macro_rules! logf_level {
    (in $registry:expr; $up:expr, $($arg:tt)+) => {
        $registry.printf_level($up, ::std::format_args!($($arg)+))
    };
    ($up:expr, $($arg:tt)+) => {
        $crate::facade::printf_level($up, ::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::registry::Registry;
    use crate::testing::SharedBuffer;
    use multilog_types::Flags;

    #[test]
    fn test_macros_with_explicit_registry() {
        let buffer = SharedBuffer::default();
        let registry = Registry::silent();
        registry.append_writer_with(buffer.clone(), Flags::empty());

        crate::info!(in registry; "{} items", 3);
        crate::debug!(in registry; "hidden");
        registry.set_verbose(true);
        crate::debug!(in registry; "value={:?}", Some(1));
        crate::warning!(in registry; "low disk");
        crate::logln!(in registry; "done");
        crate::logf!(in registry; "{}%", 50);
        crate::logf_level!(in registry; 1, "{}", "wrapped");

        assert_eq!(
            buffer.contents(),
            "I:3 items\nD:value=Some(1)\nW:low disk\nI:done\nI:50%\nI:wrapped\n"
        );
    }

    #[test]
    fn test_macro_reports_call_site() {
        let buffer = SharedBuffer::default();
        let registry = Registry::silent();
        registry.append_writer_with(buffer.clone(), Flags::SHORT_FILE);

        let line = line!() + 1;
        crate::info!(in registry; "here");

        assert_eq!(buffer.contents(), format!("I:macros.rs:{}: here\n", line));
    }
}
