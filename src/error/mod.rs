//! Error types and handling infrastructure for JSON validation runs

use serde::Serialize;
use std::path::PathBuf;

/// Message recorded for a matched file whose content could not be read
pub const UNREADABLE_FILE_MESSAGE: &str =
    "Impossible de lire le fichier (permissions ou autre erreur IO).";

/// Fatal errors that stop a run before or during the scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Erreur : '{}' n'est pas un répertoire valide.", path.display())]
    InvalidTarget { path: PathBuf },

    #[error("Erreur : impossible de déterminer le répertoire courant ({source})")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Failed to write report: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn invalid_target(path: impl Into<PathBuf>) -> Self {
        Self::InvalidTarget { path: path.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Broad class of a JSON syntax failure, mirrored from the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorCategory {
    /// Input is not syntactically valid JSON
    Syntax,
    /// Input ended before a value was complete
    Eof,
    /// Input was syntactically valid but semantically rejected
    Data,
    /// Underlying reader failed mid-parse
    Io,
}

impl From<serde_json::error::Category> for ParseErrorCategory {
    fn from(category: serde_json::error::Category) -> Self {
        match category {
            serde_json::error::Category::Syntax => Self::Syntax,
            serde_json::error::Category::Eof => Self::Eof,
            serde_json::error::Category::Data => Self::Data,
            serde_json::error::Category::Io => Self::Io,
        }
    }
}

/// Per-file failure. Recorded and reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileError {
    #[error("{message}")]
    Unreadable { message: String },

    #[error("{message}")]
    MalformedJson {
        message: String,
        line: usize,
        column: usize,
        category: ParseErrorCategory,
    },
}

impl FileError {
    pub fn unreadable() -> Self {
        Self::Unreadable {
            message: UNREADABLE_FILE_MESSAGE.to_string(),
        }
    }

    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::MalformedJson { .. })
    }

    /// Human-readable message shown in the report
    pub fn message(&self) -> &str {
        match self {
            Self::Unreadable { message } | Self::MalformedJson { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for FileError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedJson {
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
            category: error.classify().into(),
        }
    }
}

/// Result type for run-level operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Convenience result type for single-file validation
pub type FileResult<T> = Result<T, FileError>;
