//! package-checker - CLI tool to find recently updated npm packages
//!
//! Reads dependencies and devDependencies from a package.json and lists
//! the ones whose registry entry was modified within the recency window.

use clap::Parser;
use package_checker::checker::Checker;
use package_checker::cli::CliArgs;
use package_checker::filter::RecencyFilter;
use package_checker::logging::init_cli_logger;
use package_checker::manifest::load_manifest;
use package_checker::output::{create_formatter, OutputConfig};
use package_checker::registry::{HttpClient, NpmAdapter};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_cli_logger(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    debug!("package-checker v{}", env!("CARGO_PKG_VERSION"));
    debug!("Registry: {}", args.registry);

    let manifest = load_manifest(&args.path)?;

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.use_color()));
    let mut stdout = io::stdout();

    if !manifest.is_empty() {
        formatter.format_start(&manifest, &mut stdout)?;
        stdout.flush()?;
    }

    let client = HttpClient::with_timeout(args.timeout())?;
    let adapter = NpmAdapter::with_base_url(client, &args.registry);
    let checker = Checker::new(Box::new(adapter), RecencyFilter::new(args.window))
        .with_concurrency(args.concurrency)
        .with_progress(args.show_progress());

    let outcome = checker.check(&manifest).await;
    debug!(
        "{} checked, {} recent, {} failed",
        outcome.checked,
        outcome.report.len(),
        outcome.failures.len()
    );

    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
