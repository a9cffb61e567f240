//! Logging facilities for multicheck.
//!
//! multicheck uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_max_level(tracing::Level::DEBUG)
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout multicheck for tracing.
pub mod span_names {
    /// Checkbox toggle span.
    pub const TOGGLE: &str = "multicheck::toggle";
    /// Column layout span.
    pub const LAYOUT: &str = "multicheck::layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives (for example
/// `RUST_LOG=multicheck::controller=debug`) to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "multicheck_core";
    /// Partitioner target.
    pub const PARTITION: &str = "multicheck_core::partition";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "multicheck_core::signal";
    /// Selection controller target.
    pub const CONTROLLER: &str = "multicheck::controller";
    /// Performance span target.
    pub const PERF: &str = "multicheck::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of layout and toggle operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These wrap the `tracing` macros with the controller target so every
/// widget-level event can be filtered together.
#[macro_export]
macro_rules! multicheck_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::logging::targets::CONTROLLER, $($arg)*)
    };
}

#[macro_export]
macro_rules! multicheck_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::logging::targets::CONTROLLER, $($arg)*)
    };
}

#[macro_export]
macro_rules! multicheck_warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::logging::targets::CONTROLLER, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // No subscriber installed; entering and dropping must be harmless.
        let _span = PerfSpan::new(span_names::LAYOUT);
    }

    #[test]
    fn test_macros_expand() {
        multicheck_trace!(value = "0001", "trace");
        multicheck_debug!(count = 3, "debug");
        multicheck_warn!("warn");
    }

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::PARTITION.starts_with(targets::CORE));
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::CONTROLLER.starts_with("multicheck::"));
        assert!(targets::PERF.starts_with("multicheck::"));
    }
}
