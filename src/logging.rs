//! Logging setup
//!
//! Diagnostics go to stderr so stdout carries only the report.
//! `RUST_LOG` overrides the default filter.

use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "package_checker=debug,warn"
    } else {
        "package_checker=info,warn"
    }
}

/// Install the global subscriber for the CLI
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal();

    // try_init: a subscriber may already be set when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
