//! Human-readable report rendering
//!
//! Per-file lines and the summary go to the primary writer (stdout in the
//! binary). Walk issues go to the error writer (stderr) as they happen.

use std::io::{self, Write};
use std::path::Path;

use crate::parser::directory::WalkIssue;
use crate::validation::{FileOutcome, ScanObserver, ScanReport, ScanTarget};

pub const OK_TAG: &str = "[OK]  ";
pub const FAIL_TAG: &str = "[FAIL]";
pub const SEPARATOR: &str = "-----------------------------";
pub const SUCCESS_LINE: &str = "Tous les fichiers .json sont valides ✅";

/// Writes the report for one run
pub struct ReportFormatter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ReportFormatter<io::Stdout, io::Stderr> {
    /// Formatter bound to the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ReportFormatter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Announce the resolved directory before scanning
    pub fn header(&mut self, target: &ScanTarget) -> io::Result<()> {
        writeln!(self.out, "Analyse du répertoire : {}", target)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print the summary block and, for failed runs, the detail block
    pub fn summary(&mut self, report: &ScanReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "Résumé :")?;
        writeln!(self.out, "  Fichiers .json trouvés : {}", report.total_json_files)?;
        writeln!(self.out, "  Fichiers invalides     : {}", report.invalid_count())?;
        if !report.walk_issues.is_empty() {
            writeln!(self.out, "  Erreurs de parcours    : {}", report.walk_issues.len())?;
        }

        if !report.invalid.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "Détail des fichiers invalides :")?;
            for entry in &report.invalid {
                writeln!(self.out, " - {}", entry.path.display())?;
                writeln!(self.out, "     Erreur : {}", entry.error)?;
            }
        } else if report.walk_issues.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "{}", SUCCESS_LINE)?;
        }

        self.out.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ScanObserver for ReportFormatter<O, E> {
    fn on_file(&mut self, path: &Path, outcome: &FileOutcome) -> io::Result<()> {
        let tag = if outcome.is_valid() { OK_TAG } else { FAIL_TAG };
        writeln!(self.out, "{} {}", tag, path.display())
    }

    fn on_walk_issue(&mut self, issue: &WalkIssue) -> io::Result<()> {
        writeln!(
            self.err,
            "Avertissement : {} : {}",
            issue.path.display(),
            issue.message
        )
    }
}
