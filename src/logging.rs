use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "DAYLOG_LOG";

static INIT: Once = Once::new();

/// Install the stderr subscriber. `DAYLOG_LOG` takes an `EnvFilter` directive,
/// e.g. `DAYLOG_LOG=daylog=debug`; without it only warnings are shown.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
