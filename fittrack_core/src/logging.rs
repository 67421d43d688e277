//! Logging infrastructure for FitTrack.
//!
//! The binary installs one stderr subscriber at startup, with its level
//! taken from `[logging] level` in the config file.

use crate::{Error, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over `default_level` when set. Output goes to stderr so
/// it never mixes with menu text on stdout. Fails if a subscriber is
/// already installed.
pub fn init_with_level(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_an_error() {
        // Another test may already own the global subscriber
        let _ = init_with_level("debug");
        assert!(matches!(init_with_level("warn"), Err(Error::Logging(_))));
    }
}
