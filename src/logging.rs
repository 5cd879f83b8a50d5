//! Tracing setup
//!
//! Logs go to stderr; stdout is reserved for the deploy summary or NDJSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "deploy_local=info,warn",
        2 => "deploy_local=debug,info",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the `-v` level.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2),
        )
        .try_init();
}
