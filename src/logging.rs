//! Logging configuration using tracing
//!
//! Logs go to stderr so that stdout carries only the rendered version info.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, VersionInfoError};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the filter is `debug` when `verbose`
/// is requested and `warn` for quiet pipeline output.
///
/// # Errors
/// Returns an error if the subscriber has already been initialized
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init()
        .map_err(|e| VersionInfoError::config(format!("Failed to initialize tracing: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        // The first call may succeed or fail depending on test order; the second must fail
        let _ = init(false);
        assert!(init(true).is_err());
        tracing::debug!(tag = "v1.2.3", "structured logging still works");
    }
}
