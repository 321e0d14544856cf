//! Integration tests for hintpatch
//!
//! These tests run the full load → patch → save pass over real files,
//! and drive the binary the way an operator would.

use std::fs;
use std::path::PathBuf;

use hintpatch::{GENERIC_LEAD_HINT, HintTable, dataset, patcher};
use serde_json::json;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("questions.json");
    let content = json!([
        {
            "id": "q1",
            "answer": "Ohm's Law",
            "category": "Physics",
            "difficulty": "medium",
            "hints": [GENERIC_LEAD_HINT, "x", "y", "z"]
        },
        {
            "id": "q2",
            "answer": "Antarctica",
            "category": "Geography",
            "difficulty": "easy",
            "hints": [GENERIC_LEAD_HINT, "x", "y", "z", "Home of the South Pole station"]
        },
        {
            "id": "q3",
            "answer": "Leonardo da Vinci",
            "category": "Art & History",
            "difficulty": "easy",
            "hints": ["This Renaissance master created famous paintings", "x", "y", "z"]
        },
        {
            "id": "q4",
            "answer": "Flux Capacitor",
            "category": "Fiction",
            "difficulty": "hard",
            "hints": [GENERIC_LEAD_HINT, "x", "y", "z"]
        }
    ])
    .to_string();
    fs::write(&path, content).expect("Failed to write test dataset");
    path
}

// =============================================================================
// Library End-to-End Tests
// =============================================================================

#[test]
fn test_full_pass_over_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = write_dataset(&temp);
    let table = HintTable::builtin();

    let mut questions = dataset::load(&path).expect("Failed to load dataset");
    let outcome = patcher::patch_all(&mut questions, &table);
    dataset::save(&path, &questions).expect("Failed to save dataset");

    // q1 and q2 match both gates; q3 has no marker, q4 has no table row
    assert_eq!(outcome.replaced, vec!["Ohm's Law", "Antarctica"]);

    let reloaded = dataset::load(&path).expect("Failed to reload dataset");
    assert_eq!(reloaded.len(), 4);

    // Replaced record: exactly the 4 builtin hints
    assert_eq!(reloaded[0].hints, table.get("Ohm's Law").unwrap().to_vec());

    // Replaced record with a hand-written 5th hint: builtin 4 plus the keeper
    assert_eq!(reloaded[1].hints.len(), 5);
    assert_eq!(reloaded[1].hints[4], "Home of the South Pole station");

    // Untouched records
    assert_eq!(reloaded[2].hints[0], "This Renaissance master created famous paintings");
    assert_eq!(reloaded[3].hints[0], GENERIC_LEAD_HINT);

    // Non-hint fields preserved across the rewrite
    assert_eq!(reloaded[0].extra["id"], json!("q1"));
    assert_eq!(reloaded[0].extra["category"], json!("Physics"));
    assert_eq!(reloaded[3].extra["difficulty"], json!("hard"));
}

#[test]
fn test_patching_twice_converges() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = write_dataset(&temp);
    let table = HintTable::builtin();

    let mut questions = dataset::load(&path).expect("Failed to load dataset");
    patcher::patch_all(&mut questions, &table);
    dataset::save(&path, &questions).expect("Failed to save dataset");
    let after_first = fs::read_to_string(&path).expect("Failed to read file");

    let mut questions = dataset::load(&path).expect("Failed to reload dataset");
    let second = patcher::patch_all(&mut questions, &table);
    dataset::save(&path, &questions).expect("Failed to re-save dataset");
    let after_second = fs::read_to_string(&path).expect("Failed to read file");

    assert_eq!(second.count(), 0);
    assert_eq!(after_first, after_second);
}

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_patch_and_rerun() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = write_dataset(&temp);

    let mut cmd = assert_cmd::Command::cargo_bin("hp").expect("Binary should build");
    cmd.args(["patch", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Replaced generic hints for 2 questions."));

    let content = fs::read_to_string(&path).expect("Failed to read patched file");
    assert!(content.contains("voltage, current, and resistance"));

    // Second run finds nothing left to replace
    let mut cmd = assert_cmd::Command::cargo_bin("hp").expect("Binary should build");
    cmd.args(["patch", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Replaced generic hints for 0 questions."));
}

#[test]
fn test_cli_check_writes_nothing() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = write_dataset(&temp);
    let before = fs::read_to_string(&path).expect("Failed to read file");

    let mut cmd = assert_cmd::Command::cargo_bin("hp").expect("Binary should build");
    cmd.args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 of 3 pending records covered"));

    let after = fs::read_to_string(&path).expect("Failed to read file");
    assert_eq!(before, after);
}

#[test]
fn test_cli_stats() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = write_dataset(&temp);

    let mut cmd = assert_cmd::Command::cargo_bin("hp").expect("Binary should build");
    cmd.args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Questions: 4"))
        .stdout(predicates::str::contains("Pending (generic lead hint): 3"));
}

#[test]
fn test_cli_missing_dataset_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let missing = temp.path().join("nope.json");

    let mut cmd = assert_cmd::Command::cargo_bin("hp").expect("Binary should build");
    cmd.args(["patch", missing.to_str().unwrap()]).assert().failure();
}
