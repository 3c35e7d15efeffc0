//! Integration tests for the `encode` subcommand.

use assert_cmd::Command;
use encoding_rs::EUC_JP;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("eucjp").unwrap()
}

fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn encode_to_stdout() {
    let file = write_temp("日本語".as_bytes());
    cmd()
        .arg("encode")
        .arg(file.path())
        .assert()
        .success()
        .stdout(vec![0xC6u8, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC]);
}

#[test]
fn encode_to_output_file_matches_encoding_rs() {
    let text = "ひらがな カタカナ ｶﾀｶﾅ 漢字 ASCII ①";
    let file = write_temp(text.as_bytes());
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.euc");

    cmd()
        .arg("encode")
        .arg(file.path())
        .args(["--output"])
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read(&out).unwrap();
    assert_eq!(written, EUC_JP.encode(text).0.into_owned());
}

#[test]
fn encode_substitutes_and_warns() {
    let file = write_temp("A€B".as_bytes());
    cmd()
        .arg("encode")
        .arg(file.path())
        .assert()
        .success()
        .stdout("A?B")
        .stderr(predicate::str::contains("UNMAPPABLE_CODE_POINT"))
        .stderr(predicate::str::contains("U+20AC"));
}

#[test]
fn encode_strict_fails_on_unmappable() {
    let file = write_temp("ok 😀".as_bytes());
    cmd()
        .args(["encode", "--strict"])
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("U+1F600 at position 3"));
}

#[test]
fn encode_strict_writes_nothing_on_failure() {
    let file = write_temp("😀".as_bytes());
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.euc");

    cmd()
        .args(["encode", "--strict"])
        .arg(file.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .failure();

    assert!(!out.exists());
}

#[test]
fn encode_rejects_invalid_utf8() {
    let file = write_temp(&[0x41, 0xA4, 0xA2]);
    cmd()
        .arg("encode")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn encode_then_decode_round_trip() {
    let text = "往復テスト";
    let file = write_temp(text.as_bytes());
    let dir = tempfile::tempdir().unwrap();
    let encoded = dir.path().join("encoded.euc");

    cmd()
        .arg("encode")
        .arg(file.path())
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success();

    cmd()
        .arg("decode")
        .arg(&encoded)
        .assert()
        .success()
        .stdout(text);
}
