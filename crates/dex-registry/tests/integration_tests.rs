//! End-to-end tests driving the `dex-registry` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test context with a temporary project root containing `build/`
struct TestContext {
    temp_dir: TempDir,
    build_dir: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let build_dir = temp_dir.path().join("build");
        Self {
            temp_dir,
            build_dir,
        }
    }

    fn with_archives(names: &[&str]) -> Self {
        let ctx = Self::new();
        fs::create_dir_all(&ctx.build_dir).expect("failed to create build dir");
        for name in names {
            fs::write(ctx.build_dir.join(name), b"").expect("failed to write archive");
        }
        ctx
    }

    fn registry_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_dex-registry");
        let mut cmd = Command::new(bin_path);
        cmd.arg("--build-dir").arg(&self.build_dir);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn run(&self) -> Output {
        self.registry_cmd()
            .output()
            .expect("failed to run dex-registry")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_dex-registry"))
        .arg("--help")
        .output()
        .expect("failed to run dex-registry");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_missing_build_dir() {
    let ctx = TestContext::new();
    let output = ctx.run();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "{\n  \"packages\": {}\n}\n");
}

#[test]
fn test_empty_build_dir() {
    let ctx = TestContext::with_archives(&[]);
    let output = ctx.run();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "{\n  \"packages\": {}\n}\n");
}

#[test]
fn test_groups_packages() {
    let ctx = TestContext::with_archives(&[
        "tools-0.9.1.tar.gz",
        "base-dev-1.2.0.tar.gz",
        "base-dev-1.0.0.tar.gz",
        "notes.txt",
    ]);
    let output = ctx.run();
    assert!(output.status.success());

    let expected = serde_json::json!({
        "packages": {
            "base-dev": {"versions": ["1.0.0", "1.2.0"], "latest": "1.2.0"},
            "tools": {"versions": ["0.9.1"], "latest": "0.9.1"}
        }
    });
    assert_eq!(json(&output), expected);

    let text = stdout(&output);
    assert!(text.find("\"base-dev\"").unwrap() < text.find("\"tools\"").unwrap());
    assert!(text.contains("\n    \"base-dev\": {\n      \"versions\": [\n"));
}

#[test]
fn test_latest_is_last_in_filename_order() {
    let ctx = TestContext::with_archives(&["pkg-9.0.0.tar.gz", "pkg-10.0.0.tar.gz"]);
    let output = ctx.run();
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(
        value["packages"]["pkg"]["versions"],
        serde_json::json!(["10.0.0", "9.0.0"])
    );
    assert_eq!(value["packages"]["pkg"]["latest"], "9.0.0");
}

#[test]
fn test_latest_highest_flag() {
    let ctx = TestContext::with_archives(&["pkg-9.0.0.tar.gz", "pkg-10.0.0.tar.gz"]);
    let output = ctx
        .registry_cmd()
        .args(["--latest", "highest"])
        .output()
        .expect("failed to run dex-registry");
    assert!(output.status.success());

    assert_eq!(json(&output)["packages"]["pkg"]["latest"], "10.0.0");
}

#[test]
fn test_output_is_deterministic() {
    let ctx = TestContext::with_archives(&[
        "b-1.0.0.tar.gz",
        "a-2.0.0-rc1.tar.gz",
        "a-1.0.0.tar.gz",
        "Z-0.1.0.tar.gz",
    ]);
    let first = ctx.run();
    let second = ctx.run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_output_file() {
    let ctx = TestContext::with_archives(&["tools-0.9.1.tar.gz"]);
    let target = ctx.temp_dir.path().join("dist").join("registry.json");
    let output = ctx
        .registry_cmd()
        .arg("--output")
        .arg(&target)
        .output()
        .expect("failed to run dex-registry");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["packages"]["tools"]["latest"], "0.9.1");
}

#[test]
fn test_logs_stay_off_stdout() {
    let ctx = TestContext::with_archives(&["tools-0.9.1.tar.gz", "junk.tar.gz"]);
    let output = ctx
        .registry_cmd()
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run dex-registry");

    assert!(output.status.success());
    assert_eq!(json(&output)["packages"]["tools"]["latest"], "0.9.1");
    assert!(String::from_utf8_lossy(&output.stderr).contains("junk.tar.gz"));
}

/// Install the binary as `<root>/scripts/dex-registry` and run it without flags.
fn install_script(root: &Path) -> PathBuf {
    let scripts = root.join("scripts");
    fs::create_dir_all(&scripts).expect("failed to create scripts dir");
    let script = scripts.join("dex-registry");
    fs::copy(env!("CARGO_BIN_EXE_dex-registry"), &script).expect("failed to copy binary");
    script
}

#[test]
fn test_default_build_dir_is_project_root() {
    let ctx = TestContext::with_archives(&["base-dev-1.0.0.tar.gz"]);
    let script = install_script(ctx.temp_dir.path());

    let output = Command::new(&script)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run installed dex-registry");

    assert!(output.status.success());
    assert_eq!(json(&output)["packages"]["base-dev"]["latest"], "1.0.0");
}
