use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jsonval::cli::Args;
use jsonval::{scan, ReportFormatter, ScanError, ScanTarget};

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            // Target errors carry their own user-facing wording
            match e.downcast_ref::<ScanError>() {
                Some(scan_error) => eprintln!("{}", scan_error),
                None => eprintln!("Erreur : {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let target = ScanTarget::resolve(args.directory.as_deref())?;
    let config = args.to_scan_config();
    config.validate()?;

    let mut formatter = ReportFormatter::stdio();
    formatter
        .header(&target)
        .context("failed to write report header")?;

    let report = scan(&target, &config, &mut formatter)?;
    formatter
        .summary(&report)
        .context("failed to write report summary")?;

    debug!(
        files_visited = report.stats.files_visited,
        bytes_read = report.stats.bytes_read,
        elapsed_ms = report.stats.elapsed_ms,
        throughput = report.stats.throughput_bytes_per_sec(),
        started_at = %report.stats.started_at,
        "scan statistics"
    );

    Ok(ExitCode::from(report.exit_code()))
}
