//! Recursive JSON validator
//!
//! Walks a directory tree, picks every file whose extension is `json`
//! (case-insensitive) and checks that it parses as strict RFC 8259 JSON.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use error::{FileError, ParseErrorCategory, ScanError, ScanResult};
pub use formatter::ReportFormatter;
pub use parser::{validate_bytes, validate_file};
pub use validation::{
    scan, FileOutcome, InvalidEntry, ScanConfig, ScanObserver, ScanReport, ScanTarget,
};

/// Scan `target` with default options, without printing anything
pub fn scan_quiet(target: &ScanTarget) -> ScanResult<ScanReport> {
    scan(target, &ScanConfig::default(), &mut ())
}
