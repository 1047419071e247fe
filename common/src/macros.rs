//! Logging shorthands used across the workspace.
//!
//! Each macro forwards to `tracing` with one of the targets below, the CLI
//! formatter picks the prefix and colour from the target and level.

/// Operations that completed successfully.
pub const SUCCESS_TARGET: &str = "evento::success";
/// Neutral status messages.
pub const INFO_TARGET: &str = "evento::info";
/// Recoverable problems with the user's input.
pub const WARN_TARGET: &str = "evento::warn";
/// Raw terminal output, printed without a prefix.
pub const PRINT_TARGET: &str = "evento::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::INFO_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::macros::WARN_TARGET, $($arg)*)
    };
}
