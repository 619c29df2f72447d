use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Run the binary inside `dir` with no configuration file or `QRGEN_*` overrides in reach.
fn qrgen(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qrgen"));
    cmd.args(args).current_dir(dir).env("XDG_CONFIG_HOME", dir);
    for (key, _) in std::env::vars() {
        if key.starts_with("QRGEN_") {
            cmd.env_remove(key);
        }
    }
    cmd.output().expect("spawn qrgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn success_reports_saved_path() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["https://example.com", "-o", "build/out/qr.png"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "Saved QR to: build/out/qr.png");
    assert!(stderr(&output).is_empty(), "unexpected stderr: {}", stderr(&output));
    let written = fs::read(dir.path().join("build/out/qr.png")).unwrap();
    assert!(written.starts_with(PNG_MAGIC));
}

#[test]
fn default_output_is_qr_png() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["hello"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "Saved QR to: qr.png");
    assert!(dir.path().join("qr.png").is_file());
}

#[test]
fn svg_output_selected_by_extension() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["hello", "-o", "qr.svg", "--fill-color", "navy"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let doc = fs::read_to_string(dir.path().join("qr.svg")).unwrap();
    assert!(doc.contains("<svg"));
    assert!(doc.contains("fill=\"navy\""));
}

#[test]
fn bad_color_exits_with_error_line() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["hello", "-o", "out/qr.png", "--fill-color", "blurple"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("Error: "), "stderr: {}", stderr(&output));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn whitespace_payload_exits_with_error_line() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["   "]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: "), "stderr: {}", stderr(&output));
    assert!(!dir.path().join("qr.png").exists());
}

#[test]
fn huge_size_exits_with_error_line() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["hi", "--size", "100000000"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: "), "stderr: {}", stderr(&output));
    assert!(!dir.path().join("qr.png").exists());
}

#[test]
fn missing_input_file_takes_usage_path() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &["fallback text", "--input-file", "absent.txt"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Input file not found: absent.txt"), "stderr: {err}");
    assert!(err.contains("Usage:"), "stderr: {err}");
    assert!(!dir.path().join("qr.png").exists());
}

#[test]
fn no_input_takes_usage_path() {
    let dir = TempDir::new().unwrap();

    let output = qrgen(dir.path(), &[]);

    assert_ne!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("--input-file"));
    assert!(!dir.path().join("qr.png").exists());
}

#[test]
fn input_file_overrides_positional_text() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("payload.txt"), "from file").unwrap();

    let output = qrgen(dir.path(), &["from arg", "--input-file", "payload.txt"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let img = image::open(dir.path().join("qr.png")).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(img);
    let grids = prepared.detect_grids();
    let (_meta, content) = grids[0].decode().expect("decode symbol");
    assert_eq!(content, "from file");
}
