//! Integration test: the `lintgate` binary end to end.
//!
//! A `sh` one-liner stands in for the external checker. It reports SA1600 on
//! line 1 of every target file that contains the word `bad`.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"
[engine]
command = "sh"
args = ["-c", 'for f in "$@"; do case "$f" in *.cs) if grep -q bad "$f"; then echo "{\"path\":\"$f\",\"name\":\"$(basename "$f")\",\"line\":1,\"rule\":\"SA1600\",\"message\":\"doc\"}"; fi;; esac; done', "engine"]
"#;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Builds:
/// ```text
/// lintgate.toml
/// proj/A.cs          (contains "bad")
/// proj/B.cs
/// proj/notes.md
/// proj/sub/C.cs
/// ```
fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("lintgate.toml"), CONFIG);
    write(&tmp.path().join("proj/A.cs"), "class A {} // bad\n");
    write(&tmp.path().join("proj/B.cs"), "class B {}\n");
    write(&tmp.path().join("proj/notes.md"), "bad\n");
    write(&tmp.path().join("proj/sub/C.cs"), "class C {}\n");
    tmp
}

fn lintgate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lintgate"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("lintgate.toml"))
        .args(args)
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn missing_mode_prints_usage_to_stdout() {
    let tmp = fixture();
    let out = lintgate(tmp.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(text(&out.stdout).contains("Usage:"));
    assert_eq!(text(&out.stderr), "");
}

#[test]
fn clean_run_is_silent() {
    let tmp = fixture();
    fs::write(tmp.path().join("proj/A.cs"), "class A {}\n").unwrap();
    let out = lintgate(tmp.path(), &["-r", "proj"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stderr), "");
    assert_eq!(text(&out.stdout), "");
}

#[test]
fn violations_go_to_stderr_and_fail() {
    let tmp = fixture();
    let out = lintgate(tmp.path(), &["-r", "proj"]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        text(&out.stderr),
        "A.cs - 1 violations.\n      SA1600: Line 1-doc\n"
    );
    assert_eq!(text(&out.stdout), "");
}

#[test]
fn list_file_selects_targets() {
    let tmp = fixture();
    write(&tmp.path().join("changed.txt"), "proj/B.cs\nproj/A.cs\n\n");
    let out = lintgate(tmp.path(), &["changed.txt"]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        text(&out.stderr),
        "A.cs - 1 violations.\n      SA1600: Line 1-doc\n"
    );
}

#[test]
fn ignore_list_silences_violations() {
    let tmp = fixture();
    write(&tmp.path().join("proj/StyleCop.ignore"), "proj/A.cs\n");
    let out = lintgate(tmp.path(), &["-r", "proj"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stderr), "");
}

#[test]
fn list_mode_writes_stdout_only() {
    let tmp = fixture();
    let out = lintgate(tmp.path(), &["-l", "proj"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stdout), "proj/A.cs\nproj/B.cs\nproj/sub/C.cs\n");
    assert_eq!(text(&out.stderr), "");
}
