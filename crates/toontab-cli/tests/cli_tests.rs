//! Integration tests for the `toontab` binary.
//!
//! Uses `assert_cmd` and `predicates` to drive the encode, decode, and stats
//! subcommands through the real executable: stdin/stdout piping, file I/O,
//! error exits, and a full encode→decode cycle.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_stdin_to_stdout() {
    let input = r#"{"id":1,"name":"Test Product","price":99.99}"#;

    Command::cargo_bin("toontab")
        .unwrap()
        .arg("encode")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("id, name, price;"))
        .stdout(predicate::str::contains("1, Test Product, 99.99"));
}

#[test]
fn encode_file_to_stdout() {
    Command::cargo_bin("toontab")
        .unwrap()
        .args(["encode", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("product, price, in_stock, reviews;"))
        .stdout(predicate::str::contains("reviews[2]{"))
        .stdout(predicate::str::contains("id, customer, rating;"));
}

#[test]
fn encode_file_to_file() {
    let output_path = "/tmp/toontab-test-encode-output.toon";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("toontab")
        .unwrap()
        .args(["encode", "-i", sample_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("reviews[2]{"));
    assert!(content.contains("1, Alice, 5"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn encode_compact_flag() {
    Command::cargo_bin("toontab")
        .unwrap()
        .args(["encode", "--compact"])
        .write_stdin(r#"{"id":1,"name":"X"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("id,name;"))
        .stdout(predicate::str::contains("1,X"));
}

#[test]
fn encode_custom_indent() {
    Command::cargo_bin("toontab")
        .unwrap()
        .args(["encode", "--indent", "4"])
        .write_stdin(r#"[{"a":1}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("    a;"));
}

#[test]
fn encode_invalid_json_fails() {
    Command::cargo_bin("toontab")
        .unwrap()
        .arg("encode")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to encode"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_stdin_to_stdout() {
    Command::cargo_bin("toontab")
        .unwrap()
        .arg("decode")
        .write_stdin("id, name;\n1, Alice")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Alice\""))
        .stdout(predicate::str::contains("\"id\": 1"));
}

#[test]
fn decode_malformed_toon_fails() {
    Command::cargo_bin("toontab")
        .unwrap()
        .arg("decode")
        .write_stdin("id, name\n1, Alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));
}

#[test]
fn decode_file_to_file() {
    let toon_path = "/tmp/toontab-test-decode-input.toon";
    let json_path = "/tmp/toontab-test-decode-output.json";
    std::fs::write(
        toon_path,
        "reviews[2]{\n  id, customer, rating;\n  1, Alice, 5\n  2, Bob, 4\n}",
    )
    .expect("fixture write must succeed");
    let _ = std::fs::remove_file(json_path);

    Command::cargo_bin("toontab")
        .unwrap()
        .args(["decode", "-i", toon_path, "-o", json_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(json_path).expect("output file must exist");
    assert!(content.contains("\"customer\": \"Alice\""));

    let _ = std::fs::remove_file(toon_path);
    let _ = std::fs::remove_file(json_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode → decode cycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_then_decode_reproduces_the_document() {
    let encoded = Command::cargo_bin("toontab")
        .unwrap()
        .args(["encode", "-i", sample_json_path()])
        .output()
        .expect("encode must run");
    assert!(encoded.status.success());

    let toon = String::from_utf8(encoded.stdout).expect("TOON output is UTF-8");

    let decoded = Command::cargo_bin("toontab")
        .unwrap()
        .arg("decode")
        .write_stdin(toon)
        .output()
        .expect("decode must run");
    assert!(decoded.status.success());

    let json = String::from_utf8(decoded.stdout).expect("JSON output is UTF-8");
    let roundtripped: serde_json::Value =
        serde_json::from_str(&json).expect("decode output is JSON");
    let original: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(sample_json_path()).expect("fixture must exist"),
    )
    .expect("fixture is JSON");
    assert_eq!(roundtripped, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_reports_sizes_and_timings() {
    Command::cargo_bin("toontab")
        .unwrap()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON size:"))
        .stdout(predicate::str::contains("TOON size:"))
        .stdout(predicate::str::contains("Reduction:"))
        .stdout(predicate::str::contains("Encode:"))
        .stdout(predicate::str::contains("Decode:"));
}
