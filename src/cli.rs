//! CLI argument parsing module for package-checker

use crate::checker::DEFAULT_CONCURRENCY;
use crate::registry::{DEFAULT_TIMEOUT, NPM_REGISTRY_URL};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

/// Default recency window
pub const DEFAULT_WINDOW: &str = "60d";

/// Parse duration string in format: Nd (days), Nw (weeks), Nm (months)
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix('d') {
        (n, 'd')
    } else if let Some(n) = s.strip_suffix('w') {
        (n, 'w')
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 'm')
    } else {
        return Err(format!("invalid duration format: {}", s));
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: {}", num_str))?;

    let unit_seconds: u64 = match unit {
        'd' => 24 * 60 * 60,      // days
        'w' => 7 * 24 * 60 * 60,  // weeks
        'm' => 30 * 24 * 60 * 60, // months (30 days)
        _ => unreachable!(),
    };

    let seconds = num
        .checked_mul(unit_seconds)
        .ok_or_else(|| format!("duration too large: {}", s))?;

    Ok(Duration::from_secs(seconds))
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid concurrency: {}", s)),
    }
}

/// CLI tool to find recently updated npm packages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "package-checker",
    version,
    about = "CLI tool to find recently updated NPM packages"
)]
pub struct CliArgs {
    /// Path to package.json file (or the directory containing it)
    #[arg(default_value = "package.json")]
    pub path: PathBuf,

    /// Report packages modified within this window (e.g., 60d, 8w, 2m)
    #[arg(long, default_value = DEFAULT_WINDOW, value_parser = parse_duration)]
    pub window: Duration,

    /// Base URL of the npm registry
    #[arg(long, env = "PACKAGE_CHECKER_REGISTRY", default_value = NPM_REGISTRY_URL)]
    pub registry: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Maximum number of registry lookups in flight at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable quiet mode - no progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Recency window in whole days
    pub fn window_days(&self) -> u64 {
        self.window.as_secs() / (24 * 60 * 60)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Whether the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Whether the text report should be colored
    pub fn use_color(&self) -> bool {
        !self.no_color && !self.json && std::io::stdout().is_terminal()
    }
}
