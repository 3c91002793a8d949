use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

use jsonval::parser::directory as parser_dir;
use jsonval::{scan, scan_quiet, ScanConfig, ScanTarget};

#[test]
fn test_find_json_files_case_insensitive() {
    let td = TempDir::new().unwrap();
    for name in ["data.json", "DATA2.JSON", "data3.Json", "data.jsonx", "data.txt"] {
        let mut f = File::create(td.path().join(name)).unwrap();
        write!(f, "{{\"name\": \"A\"}}\n").unwrap();
    }

    let (files, issues) = parser_dir::find_json_files(td.path(), &ScanConfig::default());
    assert!(issues.is_empty());
    assert_eq!(files.len(), 3);
}

#[test]
fn test_three_levels_deep_visited_once() {
    let td = TempDir::new().unwrap();
    let deep = td.path().join("a/b/c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("deep.json"), "{\"ok\": true}").unwrap();

    let target = ScanTarget::resolve(Some(td.path())).unwrap();
    let report = scan_quiet(&target).unwrap();

    assert_eq!(report.total_json_files, 1);
    assert!(report.is_success());
}

#[test]
fn test_non_json_files_are_not_counted() {
    let td = TempDir::new().unwrap();
    fs::write(td.path().join("broken.txt"), "{").unwrap();
    fs::write(td.path().join("broken.jsonx"), "{").unwrap();
    fs::write(td.path().join("README"), "{").unwrap();

    let target = ScanTarget::resolve(Some(td.path())).unwrap();
    let report = scan_quiet(&target).unwrap();

    assert_eq!(report.total_json_files, 0);
    assert_eq!(report.stats.files_visited, 3);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_depth_limited_scan() {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("sub")).unwrap();
    fs::write(td.path().join("top.json"), "{}").unwrap();
    fs::write(td.path().join("sub/below.json"), "{oops}").unwrap();

    let target = ScanTarget::resolve(Some(td.path())).unwrap();
    let config = ScanConfig::new().with_max_depth(Some(1));
    let report = scan(&target, &config, &mut ()).unwrap();

    assert_eq!(report.total_json_files, 1);
    assert!(report.is_success());
}

#[test]
fn test_report_serializes_error_kinds() {
    let td = TempDir::new().unwrap();
    fs::write(td.path().join("bad.json"), "[1,2,]").unwrap();

    let target = ScanTarget::resolve(Some(td.path())).unwrap();
    let report = scan_quiet(&target).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["total_json_files"], 1);
    assert_eq!(value["invalid"][0]["error"]["kind"], "malformed_json");
    assert_eq!(value["invalid"][0]["error"]["category"], "syntax");
}
