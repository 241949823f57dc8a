//! Shared building blocks for `ouisql`: run configuration, prefix
//! classification and the logging macros used across the workspace.

pub mod config;
pub mod prefix;

/// Logs an informational line under the `ouisql` target.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "ouisql", $($arg)*)
    };
}

/// Logs a completed step. Rendered with the success symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "ouisql::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "ouisql", $($arg)*)
    };
}

