//! Status-line macros used across the workspace.
//!
//! Each macro wraps a `tracing` event with a fixed target so the terminal
//! formatter can pick a symbol for it without parsing the message.

/// A completed action. Rendered with a green check mark.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "libris::success", $($arg)*)
    };
}

/// A neutral notice. Rendered with an arrow.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "libris::info", $($arg)*)
    };
}

/// Recoverable input problems. Rendered with a warning sign.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "libris::warn", $($arg)*)
    };
}

/// A rejected operation. Rendered with a red cross.
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "libris::fail", $($arg)*)
    };
}
