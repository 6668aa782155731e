//! Logging macros with automatic call-site capture.
//!
//! These are the ergonomic front door to the dispatch facade: each
//! macro stamps the caller's `module_path!()`, `line!()`, and `file!()`
//! onto the event and accepts `format!`-style arguments. With no active
//! logger they are no-ops.
//!
//! # Examples
//!
//! ```
//! use textlog::{facade, info, warning, Level};
//!
//! facade::activate(Level::Info);
//!
//! info!("server listening on port {}", 8080);
//! warning!("low disk space");
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// use textlog::{log, Level};
/// log!(Level::Info, "processed {} items", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::facade::log($level, &format!($($arg)+), module_path!(), line!(), file!())
    };
}

/// Mark entry into a function or scope.
#[macro_export]
macro_rules! entry {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Entry, $($arg)+)
    };
}

/// Mark exit from a function or scope.
#[macro_export]
macro_rules! exit {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Exit, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// use textlog::verbose;
/// verbose!("cache warmed with {} entries", 1000);
/// ```
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Verbose, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// use textlog::info;
/// info!("application started");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// use textlog::error;
/// error!("failed to connect: {}", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Critical, $($arg)+)
    };
}
