#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports of tracing macros when the `tracing` feature is enabled. When
//! the feature is disabled, no-op macros are provided for compatibility.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
