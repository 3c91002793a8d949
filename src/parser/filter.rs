use std::path::Path;

/// Extension that marks a file as a validation candidate
pub const JSON_EXTENSION: &str = "json";

/// Return the text after the last `.` of the file name, if any.
///
/// Unlike [`Path::extension`], a dotfile such as `.json` yields `json`.
pub fn file_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rsplit_once('.').map(|(_, ext)| ext.to_string())
}

/// Return true if the file name ends in `.json`, ignoring ASCII case
pub fn is_json_file(path: &Path) -> bool {
    file_extension(path).is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION))
}
