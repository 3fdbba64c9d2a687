#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `utf8-guard` binary: exit codes and stdout format.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SUCCESS: &str = "\u{2705} All checked files are valid UTF-8.\n";

fn guard(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_utf8-guard"));
    cmd.arg("--root").arg(root).env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn empty_tree_exits_zero() {
    let tmp = TempDir::new().unwrap();
    guard(tmp.path()).assert().code(0).stdout(SUCCESS);
}

#[test]
fn ascii_markdown_exits_zero() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "ok.md", b"hello\n");
    guard(tmp.path()).assert().code(0).stdout(SUCCESS);
}

#[test]
fn invalid_json_exits_one_with_report() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "bad.json", &[0xFF, 0xFE]);
    let bad = tmp.path().canonicalize().unwrap().join("bad.json");

    let expected = format!(
        "Non-UTF8 files detected:\n- {} @ byte offset 0\n  bytes around: ff fe\n",
        bad.display()
    );
    guard(tmp.path()).assert().code(1).stdout(expected);
}

#[test]
fn txt_file_is_skipped() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "junk.txt", &[0xFF, 0xFE, 0xFD]);
    guard(tmp.path()).assert().code(0).stdout(SUCCESS);
}

#[test]
fn node_modules_is_skipped() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "node_modules/pkg/index.js", &[0xFF]);
    guard(tmp.path()).assert().code(0).stdout(SUCCESS);
}

#[test]
fn two_runs_produce_identical_output() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.ts", &[b'x', 0xC3]);
    write(tmp.path(), "b/c.yaml", &[0xE9, b':', b' ', b'1']);

    let first = guard(tmp.path()).output().unwrap();
    let second = guard(tmp.path()).output().unwrap();
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn exclude_flag_skips_files() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "legacy/latin1.md", &[0xE9]);
    guard(tmp.path()).assert().code(1);
    guard(tmp.path())
        .args(["--exclude", "legacy/*"])
        .assert()
        .code(0)
        .stdout(SUCCESS);
}

#[test]
fn json_format_reports_violations() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "x.cjs", &[b'a', 0x80]);

    let out = guard(tmp.path()).args(["--format", "json"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["violations"][0]["offset"], 1);
    assert_eq!(json["violations"][0]["bytes_around"], "61 80");
}

#[test]
fn missing_root_is_a_fault() {
    let tmp = TempDir::new().unwrap();
    guard(&tmp.path().join("missing"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn logs_go_to_stderr_only() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "ok.md", b"fine\n");
    guard(tmp.path())
        .arg("-vv")
        .assert()
        .code(0)
        .stdout(SUCCESS)
        .stderr(predicate::str::contains("scan finished"));
}

#[cfg(unix)]
#[test]
fn symlinked_bad_file_exits_one() {
    let tmp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write(outside.path(), "strings.json", &[0xFF, 0xFE]);
    std::os::unix::fs::symlink(outside.path().join("strings.json"), tmp.path().join("strings.json"))
        .unwrap();
    let link = tmp.path().canonicalize().unwrap().join("strings.json");

    guard(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("- {} @ byte offset 0", link.display())));
}

#[test]
fn help_documents_exit_codes() {
    Command::new(env!("CARGO_BIN_EXE_utf8-guard"))
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("2 the scan could not complete"));
}
