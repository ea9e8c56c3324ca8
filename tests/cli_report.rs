// tests/cli_report.rs - End-to-end CLI runs against a temp workspace
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("racy.py"),
        "import threading\n\ncounter = 0\n\ndef work():\n    counter += 1\n",
    )
    .unwrap();
    d
}

fn run_raceguard(dir: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_raceguard"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("failed to execute raceguard")
}

#[test]
fn missing_path_exits_nonzero_with_message() {
    let d = workspace();
    let output = run_raceguard(&d, &["no/such/path"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
}

#[test]
fn scan_writes_json_report_to_default_output() {
    let d = workspace();
    let output = run_raceguard(&d, &["racy.py"]);
    assert!(output.status.success());

    let report = fs::read_to_string(d.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert!(value["summary"]["total_conditions"].as_u64().unwrap() >= 1);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Report saved to: report.json"));
    assert!(stdout.contains("potential race conditions"));
}

#[test]
fn text_format_writes_the_report_header() {
    let d = workspace();
    let output = run_raceguard(&d, &["racy.py", "--format", "text", "--output", "out.txt"]);
    assert!(output.status.success());

    let report = fs::read_to_string(d.path().join("out.txt")).unwrap();
    assert!(report.starts_with("Race Condition Security Report"));
    assert!(report.contains("Total conditions found:"));
}

#[test]
fn verbose_directory_scan_reports_each_file() {
    let d = workspace();
    fs::write(
        d.path().join("other.py"),
        "import threading\n\ncounter = 0\n\ncounter += 1\n",
    )
    .unwrap();

    let output = run_raceguard(&d, &[".", "--verbose"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("racy.py"), "stderr: {stderr}");
    assert!(stderr.contains("other.py"), "stderr: {stderr}");
}

#[test]
fn directory_argument_scans_recursively() {
    let d = workspace();
    fs::create_dir_all(d.path().join("sub")).unwrap();
    fs::write(
        d.path().join("sub/more.py"),
        "import threading\n\ncounter = 0\n\ncounter += 1\n",
    )
    .unwrap();

    let output = run_raceguard(&d, &["."]);
    assert!(output.status.success());

    let report = fs::read_to_string(d.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    let conditions = value["conditions"].as_array().unwrap();
    assert!(conditions.iter().any(|c| {
        c["file_path"]
            .as_str()
            .is_some_and(|p| p.ends_with("more.py"))
    }));
}
