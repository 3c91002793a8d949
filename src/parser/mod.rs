//! JSON reading and strict syntax validation

pub mod directory;
pub mod filter;

use crate::error::{FileError, FileResult, ParseErrorCategory};
use std::path::Path;
use std::str::Utf8Error;
use tracing::debug;

/// Check that `bytes` hold exactly one well-formed JSON value.
///
/// Parsing is strict RFC 8259: no comments, no trailing commas, no trailing
/// data after the value, and the input must be valid UTF-8. Empty input is
/// rejected as an unexpected end of input. Lone `\u` surrogate escapes are
/// rejected too, since strings and keys are fully decoded.
pub fn validate_bytes(bytes: &[u8]) -> FileResult<()> {
    let text = std::str::from_utf8(bytes).map_err(|e| invalid_utf8(bytes, e))?;
    serde_json::from_str::<serde_json::Value>(text)?;
    Ok(())
}

/// Locate the first invalid UTF-8 sequence as a 1-based line and column
fn invalid_utf8(bytes: &[u8], error: Utf8Error) -> FileError {
    let valid = &bytes[..error.valid_up_to()];
    let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = match valid.iter().rposition(|&b| b == b'\n') {
        Some(newline) => valid.len() - newline,
        None => valid.len() + 1,
    };

    FileError::MalformedJson {
        message: format!("invalid UTF-8 sequence at line {} column {}", line, column),
        line,
        column,
        category: ParseErrorCategory::Syntax,
    }
}

/// Read a whole file into memory.
///
/// The handle is closed before this returns, whatever the outcome.
pub fn read_file(path: &Path) -> FileResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "failed to read file");
        FileError::unreadable()
    })
}

/// Read and validate a single file.
///
/// Returns the number of bytes read (zero when the read itself failed)
/// alongside the validation result, so failed parses still count as read.
pub fn validate_file(path: &Path) -> (usize, FileResult<()>) {
    match read_file(path) {
        Ok(content) => (content.len(), validate_bytes(&content)),
        Err(error) => (0, Err(error)),
    }
}
