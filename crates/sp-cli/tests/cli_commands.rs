//! Integration tests for the sp CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small lexicon and a text file.
fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let lexicon = dir.path().join("lexicon.json");
    fs::write(
        &lexicon,
        r#"{
    "stop_words": ["the", "a"],
    "tags": {
        "the": "OTHER",
        "knight": "NN",
        "knights": "NNS",
        "sword": "NN",
        "gave": "VBD"
    },
    "entries": [
        {
            "word": "knight",
            "pos": "noun",
            "senses": [
                {
                    "lemmas": [{"name": "knight"}, {"name": "horseman"}],
                    "hypernyms": ["warrior"]
                }
            ]
        }
    ],
    "corpus": {"noun": ["stone", "river"]},
    "lexemes": {"give": {"past": "gave"}}
}"#,
    )
    .unwrap();
    let text = dir.path().join("text.txt");
    fs::write(&text, "The knight gave a sword.\n").unwrap();
    (dir, lexicon, text)
}

#[test]
fn garble_at_full_skill_is_identity() {
    let (_dir, lexicon, text) = fixture();
    Command::cargo_bin("sp")
        .unwrap()
        .args(["garble", "--skill", "1.0", "--lexicon"])
        .arg(&lexicon)
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::contains("The knight gave a sword."));
}

#[test]
fn garble_is_reproducible_for_a_seed() {
    let (_dir, lexicon, text) = fixture();
    let run = || {
        let output = Command::cargo_bin("sp")
            .unwrap()
            .args(["garble", "--skill", "0.3", "--seed", "7", "--lexicon"])
            .arg(&lexicon)
            .arg(&text)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn garble_reads_stdin() {
    let (_dir, lexicon, _text) = fixture();
    Command::cargo_bin("sp")
        .unwrap()
        .args(["garble", "--skill", "1.0", "--lexicon"])
        .arg(&lexicon)
        .arg("-")
        .write_stdin("The knight.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The knight."));
}

#[test]
fn garble_via_roll_and_difficulty() {
    let (_dir, lexicon, text) = fixture();
    // A roll at the difficulty means perfect skill: identity output.
    Command::cargo_bin("sp")
        .unwrap()
        .args(["garble", "--roll", "30", "--difficulty", "30", "--lexicon"])
        .arg(&lexicon)
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::contains("The knight gave a sword."));
}

#[test]
fn garble_requires_a_skill_source() {
    let (_dir, lexicon, text) = fixture();
    Command::cargo_bin("sp")
        .unwrap()
        .args(["garble", "--lexicon"])
        .arg(&lexicon)
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--skill or --roll"));
}

#[test]
fn garble_rejects_missing_lexicon() {
    let (dir, _lexicon, text) = fixture();
    Command::cargo_bin("sp")
        .unwrap()
        .args(["garble", "--skill", "0.5", "--lexicon"])
        .arg(dir.path().join("missing.json"))
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn skill_prints_the_level() {
    Command::cargo_bin("sp")
        .unwrap()
        .args(["skill", "--roll", "0", "--difficulty", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2500"));
    Command::cargo_bin("sp")
        .unwrap()
        .args(["skill", "--roll", "30", "--difficulty", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000"));
}

#[test]
fn pools_lists_candidates() {
    let (_dir, lexicon, _text) = fixture();
    Command::cargo_bin("sp")
        .unwrap()
        .args(["pools", "knight", "--pos", "noun", "--lexicon"])
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("horseman")
                .and(predicate::str::contains("warrior"))
                .and(predicate::str::contains("misleading")),
        );
}

#[test]
fn pools_rejects_bad_pos() {
    let (_dir, lexicon, _text) = fixture();
    Command::cargo_bin("sp")
        .unwrap()
        .args(["pools", "knight", "--pos", "pronoun", "--lexicon"])
        .arg(&lexicon)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown part of speech"));
}
