//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "BASKET_LOG";

/// Filter used when `BASKET_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "basket=info";

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Reads `BASKET_LOG` for per-module log levels, e.g.
/// `BASKET_LOG=basket_mining::growth=debug,basket_mining::rules=info`.
/// Falls back to `basket=info` if `BASKET_LOG` is not set or is invalid.
///
/// Idempotent. Library code never calls this; binaries and tests do.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host process.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
