use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn mt22(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mt22"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to spawn mt22 binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn build_prints_the_ast_dump() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("ok.mt22"), "x: integer = 1 + 2;").expect("write script");

    let output = mt22(&["build", "ok.mt22"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "Program([\n\tVarDecl(x, IntegerType, BinExpr(+, IntegerLit(1), IntegerLit(2)))\n])"
    );
}

#[test]
fn build_json_names_each_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("f.mt22"), "main: function void() { return; }").expect("write");

    let output = mt22(&["build", "--format", "json", "f.mt22"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(value[0]["file"], "f.mt22");
    assert_eq!(value[0]["program"]["decls"][0]["Func"]["name"], "main");
    assert_eq!(value[0]["program"]["decls"][0]["Func"]["return_type"], "Void");
}

#[test]
fn build_writes_to_output_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.mt22"), "b: boolean;").expect("write script");

    let output = mt22(&["build", "a.mt22", "-o", "a.ast"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).trim().is_empty());

    let written = fs::read_to_string(dir.path().join("a.ast")).expect("output file exists");
    assert!(written.contains("VarDecl(b, BooleanType)"));
}

#[test]
fn build_of_several_files_labels_each_program() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("one.mt22"), "a: integer;").expect("write");
    fs::write(dir.path().join("two.mt22"), "b: float;").expect("write");

    let output = mt22(&["build", "*.mt22"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let one = text.find("// one.mt22").expect("one.mt22 header");
    let two = text.find("// two.mt22").expect("two.mt22 header");
    assert!(one < two);
}

#[test]
fn check_reports_failures_and_exits_nonzero() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("good.mt22"), "a, b: integer;").expect("write");
    fs::write(dir.path().join("bad.mt22"), "a: integer = 1, 2;").expect("write");

    let output = mt22(&["check", "--format", "json", "*.mt22"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("MT22 | ERROR"));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(value[0]["file"], "bad.mt22");
    assert_eq!(value[0]["status"], "failed");
    assert_eq!(value[1]["file"], "good.mt22");
    assert_eq!(value[1]["status"], "ok");
    assert_eq!(value[1]["stats"]["globals"], 2);
}

#[test]
fn check_table_lists_the_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("good.mt22"), "f: function void() {}").expect("write");

    let output = mt22(&["check", "good.mt22"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let table = stdout(&output);
    assert!(table.contains("good.mt22"));
    assert!(table.contains("ok"));
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let output = mt22(&["build", "absent.mt22"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Missing script"));
}
