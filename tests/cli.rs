//! Command-line tests for the headless subcommands

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

const SELECT: &str = r#"{
  "proxmox-notes": {
    "resources": { "image fqdn": "https://img.example.com/icons", "image width": 48, "image height": 48 },
    "select01": { "Linux": { "fa-objects": "fa-linux", "text": "" } },
    "select02": { "Ubuntu": "ubuntu" },
    "select03": { "Ubuntu 24.04": "Ubuntu 24.04" }
  }
}"#;

const NOTES: &str = r#"{
  "h": { "s1": "fa-linux", "t1": "gitlab", "s2": "ubuntu", "m1": "Self-hosted Git", "m2": "" },
  "sections": {
    "network": [ { "k": "IP", "v": "10.0.0.12" } ]
  }
}"#;

/// Run the binary inside `dir`, keeping its log files there too
fn vmnotes(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vmnotes"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("VMNOTES_LOG_DIR", dir.join("logs"))
        .env_remove("VMNOTES_LOG")
        .output()
        .expect("failed to run vmnotes")
}

fn project() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("select.json"), SELECT).unwrap();
    fs::write(dir.path().join("gitlab.json"), NOTES).unwrap();
    dir
}

#[test]
fn test_render_prints_markdown() {
    let dir = project();
    let out = vmnotes(dir.path(), &["render", "gitlab.json"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("# <i class=\"fa fa-linux\"></i> gitlab"));
    assert!(stdout.contains("https://img.example.com/icons/ubuntu48x48.png"));
    assert!(stdout.contains("**IP:** 10.0.0.12"));
}

#[test]
fn test_render_html() {
    let dir = project();
    let out = vmnotes(dir.path(), &["render", "gitlab.json", "--html"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("<h1>"));
    assert!(!stdout.contains("| - | - |"));
}

#[test]
fn test_render_missing_file_fails() {
    let dir = project();
    let out = vmnotes(dir.path(), &["render", "absent.json"]);
    assert!(!out.status.success());
}

#[test]
fn test_validate_default_path_passes() {
    let dir = project();
    let out = vmnotes(dir.path(), &["validate"]);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "No validation errors.\n"
    );
}

#[test]
fn test_validate_blocking_errors_exit_one() {
    let dir = project();
    fs::write(
        dir.path().join("broken.json"),
        r#"{"proxmox-notes": {"resources": {"image width": -5}, "select03": {"": "x"}}}"#,
    )
    .unwrap();

    let out = vmnotes(dir.path(), &["validate", "broken.json"]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("error: Resources: \"image width\" must be present"));
    assert!(stdout.contains("error: OS: Missing Label."));
}

#[test]
fn test_validate_json_output() {
    let dir = project();
    let out = vmnotes(dir.path(), &["validate", "--json"]);

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["valid"], true);
    assert!(value["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_validate_missing_root_fails() {
    let dir = project();
    fs::write(dir.path().join("other.json"), r#"{"settings": {}}"#).unwrap();

    let out = vmnotes(dir.path(), &["validate", "other.json"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("proxmox-notes"));
}

#[test]
fn test_validate_zero_width_exits_one() {
    let dir = project();
    fs::write(
        dir.path().join("select.json"),
        SELECT.replace("\"image width\": 48", "\"image width\": 0"),
    )
    .unwrap();

    let out = vmnotes(dir.path(), &["validate"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout)
        .contains("error: Resources: \"image width\" must be present"));
}

#[test]
fn test_validate_absent_height_exits_one() {
    let dir = project();
    fs::write(
        dir.path().join("select.json"),
        SELECT.replace(", \"image height\": 48", ""),
    )
    .unwrap();

    let out = vmnotes(dir.path(), &["validate", "--json"]);

    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(
        value["errors"][0],
        "Resources: \"image height\" must be present and a positive number."
    );
}
