//! Binary-level wire contract tests

use std::process::Command;

fn triagescore() -> Command {
    Command::new(env!("CARGO_BIN_EXE_triagescore"))
}

#[test]
fn missing_text_argument_emits_sentinel_and_fails() {
    let output = triagescore()
        .args(["score"])
        .output()
        .expect("failed to run binary");

    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-1");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn score_emits_single_positive_integer_with_lexicon_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("triagescore.yaml");
    std::fs::write(&config, "classifier:\n  backend:\n    type: lexicon\n").unwrap();

    let output = triagescore()
        .args(["--config"])
        .arg(&config)
        .args(["score", "severe chest pain"])
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let level: i64 = stdout.trim().parse().expect("stdout must be one integer");
    assert!((1..=100).contains(&level), "got {level}");
    assert!(output.status.success());
}

#[test]
fn empty_text_scores_one_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("triagescore.yaml");
    std::fs::write(&config, "classifier:\n  backend:\n    type: lexicon\n").unwrap();

    let output = triagescore()
        .args(["--config"])
        .arg(&config)
        .args(["score", "   "])
        .output()
        .expect("failed to run binary");

    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
    assert!(output.status.success());
}
