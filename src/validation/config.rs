//! Configuration options for a validation run

use crate::error::{ScanError, ScanResult};

/// Options controlling how the directory tree is walked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Descend into directories and files reached through symbolic links
    pub follow_links: bool,
    /// Maximum descent below the root (`None` = unlimited, 1 = root only)
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_links: true,
            max_depth: None,
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> ScanResult<()> {
        if self.max_depth == Some(0) {
            return Err(ScanError::configuration(
                "max depth must be at least 1 to reach any file",
            ));
        }
        Ok(())
    }

    /// Builder: follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Builder: limit traversal depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }
}
