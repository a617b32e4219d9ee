//! # QClip Lookup Integration Tests
//!
//! File: bot/tests/lookup.rs
//!
//! Runs `qclip lookup` against the fixture dataset and checks the rendered
//! preview as well as the lookup failures.
//!

mod common;
use common::*;
use predicates::prelude::*;

fn lookup(args: &[&str]) -> assert_cmd::assert::Assert {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["lookup", "--data"])
        .arg(fixture_path())
        .args(args)
        .assert()
}

#[test]
fn test_lookup_renders_preview() {
    lookup(&["2:255"])
        .success()
        .stdout(predicate::str::contains("【 Al-Baqarah || 2:255 】"))
        .stdout(predicate::str::contains("﴿ البقرة || ٢:٢٥٥ ﴾"))
        .stdout(predicate::str::contains("بِسْمِ"))
        .stdout(predicate::str::contains("📄 Page No. 42 || رقم الصفحة ٤٢"));
}

#[test]
fn test_lookup_accepts_arabic_digits_and_spaces() {
    lookup(&[" ٢ : ٢٥٥ "])
        .success()
        .stdout(predicate::str::contains("2:255"));
}

#[test]
fn test_lookup_chapter_nine_has_no_basmala() {
    lookup(&["9:1"])
        .success()
        .stdout(predicate::str::contains("At-Tawbah"))
        .stdout(predicate::str::contains("بِسْمِ").not());
}

#[test]
fn test_lookup_prints_requested_glyphs() {
    lookup(&["2:255", "--glyph", "secondary"])
        .success()
        .stdout(predicate::str::contains("Glyph V2: ﲂ ﲃ ﲄ ﲅ"));
}

#[test]
fn test_lookup_invalid_format() {
    lookup(&["abc"])
        .failure()
        .stderr(predicate::str::contains("Invalid reference format"));
}

#[test]
fn test_lookup_not_found() {
    lookup(&["99:999"])
        .failure()
        .stderr(predicate::str::contains("No verse found for 99:999"));
}

#[test]
fn test_lookup_out_of_range_numbers_are_not_found() {
    lookup(&["--", "-2:255"])
        .failure()
        .stderr(predicate::str::contains("No verse found for -2:255"));
    lookup(&["1:4294967296"])
        .failure()
        .stderr(predicate::str::contains("No verse found for 1:4294967296"));
}

#[test]
fn test_lookup_accepts_fullwidth_digits() {
    lookup(&["２:２５５"])
        .success()
        .stdout(predicate::str::contains("【 Al-Baqarah || 2:255 】"));
}

#[test]
fn test_lookup_uses_project_config_dataset() {
    let sandbox = Sandbox::new();
    let config = format!(
        "[dataset]\npath = {:?}\n",
        fixture_path().to_string_lossy()
    );
    sandbox.write(".qclip.toml", &config);
    sandbox
        .cmd()
        .args(["lookup", "114:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("An-Nas"));
}

#[test]
fn test_lookup_missing_dataset_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["lookup", "1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("QClip.csv"));
}
