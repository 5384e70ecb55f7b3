//! Tracing subscriber setup for the command-line binary.

use eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Chooses the filter directive from the configured level and `-v` count.
#[must_use]
pub fn filter_directive(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_owned(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error when the directive is invalid or a global subscriber is
/// already installed.
pub fn init_logging(configured: &str, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(configured, verbose)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
