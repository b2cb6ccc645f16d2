//! Logging configuration

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;

/// Install the global tracing subscriber
///
/// Diagnostics go to stderr so they never interleave with result output.
/// `RUST_LOG` overrides the defaults; `verbose` raises the baseline to
/// debug for request tracing.
pub fn configure_logging(verbose: bool) {
    let default_filter = if verbose {
        "debug,api_request=debug"
    } else {
        "warn,api_request=warn"
    };

    let stderr_log = fmt::layer().with_writer(io::stderr).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    );

    tracing_subscriber::Registry::default()
        .with(stderr_log)
        .init();
}
