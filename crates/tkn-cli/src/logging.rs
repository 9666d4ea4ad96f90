//! Diagnostic logging setup.
//!
//! Logs always go to stderr so they never mix with command output. The
//! `TKN_LOG` environment variable takes an `EnvFilter` directive and wins
//! over `--verbose`. Without it only events from this project's crates are
//! shown; the kube client reports failures through the returned error.

use std::io;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TKN_LOG";

const CRATES: [&str; 2] = ["tkn", "tkn_core"];

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let directive = filter_directive(verbose, std::env::var(LOG_ENV).ok().as_deref());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn filter_directive(verbose: bool, env: Option<&str>) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ => default_directive(verbose),
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
