//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the Guardian tracing/logging system.
///
/// Reads the `GUARDIAN_LOG` environment variable for per-module log levels.
/// Format: `GUARDIAN_LOG=guardian_io=debug,guardian_redact=info`
///
/// Falls back to `fallback_filter` (normally the config's
/// `logging.filter`, else `guardian=info`) if `GUARDIAN_LOG` is unset or
/// invalid. Output goes to stderr so stdout stays free for the run report.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(fallback_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
