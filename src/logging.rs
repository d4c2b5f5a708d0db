//! Logging macros.
//!
//! Records go to the `log` facade when the `log` feature is enabled, and are
//! dropped at compile time otherwise.
#![allow(unused_macros, unused_imports)]

/// Emits a trace-level record.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "xri", $($tt)*);
    };
}

/// Emits a debug-level record.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "xri", $($tt)*);
    };
}

pub(crate) use {debug, trace};
