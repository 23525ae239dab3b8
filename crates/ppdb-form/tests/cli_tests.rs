#![cfg(feature = "cli")]

mod common;

use std::fs;

use assert_cmd::Command;
use common::record_lengkap;
use predicates::prelude::*;

fn write_record(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("record.json");
    let raw = serde_json::to_string_pretty(&record_lengkap()).unwrap();
    fs::write(&path, raw).unwrap();
    path
}

#[test]
fn validate_accepts_a_complete_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(&dir);

    Command::cargo_bin("ppdb-form")
        .unwrap()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("record valid"));
}

#[test]
fn validate_fails_with_the_offending_field_named() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = record_lengkap();
    record.ayah.nama = String::new();
    let path = dir.path().join("record.json");
    fs::write(&path, serde_json::to_string_pretty(&record).unwrap()).unwrap();

    Command::cargo_bin("ppdb-form")
        .unwrap()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("/ayah/nama"))
        .stderr(predicate::str::contains("record tidak valid"));
}

#[test]
fn summary_renders_the_printable_letter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(&dir);

    Command::cargo_bin("ppdb-form")
        .unwrap()
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "FORMULIR PENDAFTARAN PESERTA DIDIK BARU",
        ))
        .stdout(predicate::str::contains("MUHAMMAD ZIDAN AL-FARISI"));
}

#[test]
fn summary_writes_to_a_file_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(&dir);
    let out = dir.path().join("surat.txt");

    Command::cargo_bin("ppdb-form")
        .unwrap()
        .arg("summary")
        .arg(&path)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("AHMAD SUBAGIYO"));
}

#[test]
fn wilayah_lists_the_bundled_provinces() {
    Command::cargo_bin("ppdb-form")
        .unwrap()
        .args(["wilayah", "provinces"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JAWA TIMUR"));
}

#[test]
fn wilayah_villages_show_their_postal_codes() {
    Command::cargo_bin("ppdb-form")
        .unwrap()
        .args(["wilayah", "villages", "352411"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SIDOKUMPUL (62212)"));
}
