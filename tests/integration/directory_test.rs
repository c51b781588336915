//! Integration tests for recursive folder scanning

use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn run_slugcheck(dir: &std::path::Path) -> (i32, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_slugcheck"))
        .arg(dir)
        .arg("--no-color")
        .output()
        .expect("Failed to execute slugcheck");
    (
        output.status.code().unwrap(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn test_nested_folders_are_scanned() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("sub/deeper");
    fs::create_dir_all(&nested).unwrap();

    fs::write(dir.path().join("top.json"), r#"{"ok": 1}"#).unwrap();
    fs::write(nested.join("inner.json"), r#"{"NotOk": 1}"#).unwrap();
    fs::write(nested.join("ignored.txt"), r#"{"NotOk": 1}"#).unwrap();
    fs::write(nested.join("ignored.JSON"), r#"{"NotOk": 1}"#).unwrap();

    let (code, stdout) = run_slugcheck(dir.path());
    assert_eq!(code, 1);
    assert!(stdout.contains("Found 2 JSON file(s)"), "{}", stdout);
    assert!(stdout.contains(&format!("{}:", nested.join("inner.json").display())));
    assert!(!stdout.contains("ignored"));
}

#[test]
fn test_files_reported_in_path_order() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("z.json"), r#"{"Z": 1}"#).unwrap();
    fs::write(dir.path().join("a/m.json"), r#"{"M": 1}"#).unwrap();
    fs::write(dir.path().join("b.json"), r#"{"B": 1}"#).unwrap();

    let (_, stdout) = run_slugcheck(dir.path());
    let positions: Vec<usize> = ["a/m.json:", "b.json:", "z.json:"]
        .iter()
        .map(|name| stdout.find(name).unwrap_or_else(|| panic!("{name} missing:\n{stdout}")))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", stdout);
}
