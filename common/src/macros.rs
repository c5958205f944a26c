//! Logging macros shared by every crate in the workspace.
//!
//! These forward to `tracing`; the CLI installs a formatter that renders
//! each level with its own status symbol, so call sites never deal with
//! presentation.

/// Progress message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Positive outcome of a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Recoverable problem, run continues.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

/// Fatal problem, reported just before the run stops.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

/// Diagnostic detail, hidden unless the filter opts in.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}
