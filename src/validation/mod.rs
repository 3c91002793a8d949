//! Directory scan driving the walker, filter and content validator

pub mod config;
pub mod stats;
pub mod target;

pub use config::ScanConfig;
pub use stats::ScanStatistics;
pub use target::ScanTarget;

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{FileError, ScanResult};
use crate::parser::directory::{walk_files, WalkIssue, WalkItem};
use crate::parser::{filter, validate_file};

/// Result of validating one matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Valid,
    Invalid(FileError),
}

impl FileOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FileOutcome::Valid)
    }
}

/// A file that failed to read or parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidEntry {
    pub path: PathBuf,
    pub error: FileError,
}

/// Everything a run produces, in traversal order
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub total_json_files: usize,
    pub invalid: Vec<InvalidEntry>,
    pub walk_issues: Vec<WalkIssue>,
    pub stats: ScanStatistics,
}

impl ScanReport {
    fn new() -> Self {
        Self {
            total_json_files: 0,
            invalid: Vec::new(),
            walk_issues: Vec::new(),
            stats: ScanStatistics::start(),
        }
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    /// True when every candidate parsed and the whole tree was readable
    pub fn is_success(&self) -> bool {
        self.invalid.is_empty() && self.walk_issues.is_empty()
    }

    /// Process exit status for this report
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Receives scan events as soon as they are known
pub trait ScanObserver {
    fn on_file(&mut self, _path: &Path, _outcome: &FileOutcome) -> io::Result<()> {
        Ok(())
    }

    fn on_walk_issue(&mut self, _issue: &WalkIssue) -> io::Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
impl ScanObserver for () {}

/// Validate a single candidate file, returning the outcome and bytes read
pub fn check_file(path: &Path) -> (FileOutcome, usize) {
    let (bytes, result) = validate_file(path);
    let outcome = match result {
        Ok(()) => FileOutcome::Valid,
        Err(error) => FileOutcome::Invalid(error),
    };
    (outcome, bytes)
}

/// Walk `target`, validating every `.json` file and notifying `observer`.
///
/// Per-file failures and walk issues are accumulated in the report; only a
/// failing observer aborts the scan.
pub fn scan<O: ScanObserver + ?Sized>(
    target: &ScanTarget,
    config: &ScanConfig,
    observer: &mut O,
) -> ScanResult<ScanReport> {
    config.validate()?;
    info!(root = %target, follow_links = config.follow_links, "starting scan");

    let mut report = ScanReport::new();

    for item in walk_files(target.path(), config) {
        let path = match item {
            WalkItem::File(path) => path,
            WalkItem::Issue(issue) => {
                debug!(path = %issue.path.display(), message = %issue.message, "walk issue");
                observer.on_walk_issue(&issue)?;
                report.walk_issues.push(issue);
                continue;
            }
        };

        report.stats.record_visit();
        if !filter::is_json_file(&path) {
            continue;
        }

        report.total_json_files += 1;
        let (outcome, bytes) = check_file(&path);
        report.stats.record_read(bytes);
        observer.on_file(&path, &outcome)?;

        if let FileOutcome::Invalid(error) = outcome {
            debug!(path = %path.display(), error = %error, "invalid file");
            report.invalid.push(InvalidEntry { path, error });
        }
    }

    report.stats.finish();
    info!(
        json_files = report.total_json_files,
        invalid = report.invalid_count(),
        walk_issues = report.walk_issues.len(),
        elapsed_ms = report.stats.elapsed_ms,
        "scan finished"
    );
    Ok(report)
}
