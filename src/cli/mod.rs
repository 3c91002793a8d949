//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::validation::ScanConfig;

/// Recursively check that every .json file under a directory is valid JSON
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonval")]
#[command(about = "Recursively validate every .json file under a directory")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg()]
    pub directory: Option<PathBuf>,

    /// Do not descend into symbolic links
    #[arg(long)]
    pub no_follow_links: bool,

    /// Maximum directory depth to descend (1 = only the given directory)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the scan configuration from the parsed flags
    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig::new()
            .with_follow_links(!self.no_follow_links)
            .with_max_depth(self.max_depth)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "jsonval=debug"
        } else {
            "warn"
        }
    }
}
