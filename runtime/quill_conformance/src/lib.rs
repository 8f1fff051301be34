//! Quill Conformance - Assertion scripts for the object model.
//!
//! Each module under [`features`] is a self-contained sequence of
//! assertions over one observable behavior of the runtime, executed top
//! to bottom and failing loudly on the first condition that does not
//! hold. The scripts share no state and do not interact.
//!
//! Run them all with the `quill-check` binary, or individually through
//! each module's `run()`.

use std::fmt;
use std::sync::Once;

pub mod features;

/// Failure of one conformance assertion.
///
/// There is no recovery: the first failed assertion aborts the script
/// it occurs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// An asserted condition was not true.
    AssertFailed,
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::AssertFailed => write!(f, "Assert failed"),
        }
    }
}

impl std::error::Error for CheckError {}

/// Assert that a condition holds.
///
/// The conformance scripts' only control flow: every observable fact is
/// funneled through here and propagated with `?`.
#[inline]
pub fn check(condition: bool) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::AssertFailed)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_proxy=trace` or similar.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn check_passes_only_on_true() {
        assert_eq!(check(true), Ok(()));
        assert_eq!(check(false), Err(CheckError::AssertFailed));
    }

    #[test]
    fn failure_message_is_fixed() {
        assert_eq!(CheckError::AssertFailed.to_string(), "Assert failed");
    }
}
