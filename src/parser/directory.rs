use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::validation::ScanConfig;

/// A directory entry the walker could not descend into or stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkIssue {
    pub path: PathBuf,
    pub message: String,
}

impl WalkIssue {
    fn from_walkdir(error: walkdir::Error, root: &Path) -> Self {
        let path = error.path().unwrap_or(root).to_path_buf();
        let message = match error.loop_ancestor() {
            Some(ancestor) => format!(
                "boucle de liens symboliques vers {}",
                ancestor.display()
            ),
            None => match error.io_error() {
                Some(io) => io.to_string(),
                None => error.to_string(),
            },
        };
        Self { path, message }
    }
}

/// A followed link whose target does not exist is not a file, so it is skipped
/// rather than reported.
fn is_dangling_link(error: &walkdir::Error) -> bool {
    error.loop_ancestor().is_none()
        && error
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
        && error.path().is_some_and(|path| {
            path.symlink_metadata()
                .is_ok_and(|meta| meta.file_type().is_symlink())
        })
}

/// One step of the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkItem {
    /// A regular file (after following links when enabled)
    File(PathBuf),
    /// An entry that could not be read
    Issue(WalkIssue),
}

/// Lazily walk every regular file under `root`.
///
/// Entries are sorted by file name within each directory so the order is
/// stable for an unchanged tree. Directories, special files and dangling
/// links are skipped.
pub fn walk_files<'a>(root: &'a Path, config: &ScanConfig) -> impl Iterator<Item = WalkItem> + 'a {
    let mut walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name();
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    walker.into_iter().filter_map(move |entry| match entry {
        Ok(entry) if entry.file_type().is_file() => Some(WalkItem::File(entry.into_path())),
        Ok(_) => None,
        Err(error) if is_dangling_link(&error) => {
            debug!(path = ?error.path(), "skipping dangling link");
            None
        }
        Err(error) => Some(WalkItem::Issue(WalkIssue::from_walkdir(error, root))),
    })
}

/// Collect all JSON candidates under `dir`, plus any issues met on the way.
pub fn find_json_files(dir: &Path, config: &ScanConfig) -> (Vec<PathBuf>, Vec<WalkIssue>) {
    let mut json_files = Vec::new();
    let mut issues = Vec::new();

    for item in walk_files(dir, config) {
        match item {
            WalkItem::File(path) if crate::parser::filter::is_json_file(&path) => {
                json_files.push(path)
            }
            WalkItem::File(_) => {}
            WalkItem::Issue(issue) => issues.push(issue),
        }
    }

    (json_files, issues)
}
