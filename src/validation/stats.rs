//! Diagnostic counters for a validation run

use serde::Serialize;
use std::time::{Duration, Instant};

/// Timing and volume figures collected while scanning
#[derive(Debug, Clone, Serialize)]
pub struct ScanStatistics {
    /// Regular files seen by the walker, matched or not
    pub files_visited: usize,
    /// Bytes read from matched files
    pub bytes_read: u64,
    /// Wall-clock duration of the scan in milliseconds
    pub elapsed_ms: u64,
    /// When the scan started
    pub started_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip)]
    started: Option<Instant>,
}

impl Default for ScanStatistics {
    fn default() -> Self {
        Self {
            files_visited: 0,
            bytes_read: 0,
            elapsed_ms: 0,
            started_at: chrono::Utc::now(),
            started: None,
        }
    }
}

impl ScanStatistics {
    /// Start collecting statistics now
    pub fn start() -> Self {
        Self {
            started: Some(Instant::now()),
            ..Self::default()
        }
    }

    pub fn record_visit(&mut self) {
        self.files_visited += 1;
    }

    pub fn record_read(&mut self, bytes: usize) {
        self.bytes_read += bytes as u64;
    }

    /// Freeze the elapsed time
    pub fn finish(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed_ms = started.elapsed().as_millis() as u64;
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// Throughput in bytes per second, zero when nothing was timed
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        if self.elapsed_ms == 0 {
            0.0
        } else {
            self.bytes_read as f64 / (self.elapsed_ms as f64 / 1000.0)
        }
    }
}
