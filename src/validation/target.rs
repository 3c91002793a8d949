use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ScanError, ScanResult};

/// Canonical absolute directory a run is rooted at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget(PathBuf);

impl ScanTarget {
    /// Resolve `input` (or the current directory when absent) to a canonical
    /// directory path.
    pub fn resolve(input: Option<&Path>) -> ScanResult<Self> {
        let requested = match input {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir().map_err(|source| ScanError::CurrentDir { source })?,
        };

        if !requested.is_dir() {
            return Err(ScanError::invalid_target(requested));
        }

        let canonical = requested
            .canonicalize()
            .map_err(|_| ScanError::invalid_target(&requested))?;
        Ok(Self(canonical))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
