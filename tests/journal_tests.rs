//! Integration tests for the journal aggregate commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod common;
use common::{innercompass_cmd, write_journal};

fn sample_journal(temp: &TempDir) -> PathBuf {
    write_journal(
        temp.path(),
        &[
            ("Gentle", "Healing", "Calm", "2025-01-17T08:30:00"),
            ("Gentle", "Healing", "Calm", "2025-01-18T09:00:00"),
            ("Empowering", "Growth", "Hopeful", "2025-01-18 20:00:00"),
            ("Gentle", "Healing", "Anxious", "2025-01-20"),
        ],
    )
}

#[test]
fn test_summary_reports_top_labels() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .arg("summary")
        .arg("--journal")
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("carry a Gentle tone"))
        .stdout(predicate::str::contains("themes like 💗 Healing"))
        .stdout(predicate::str::contains("a mood of Calm"))
        .stdout(predicate::str::contains(
            "Advice: Consider embracing moments of stillness and self-compassion.",
        ))
        .stdout(predicate::str::contains(
            "Timeline: Entries from 2025-01-17 to 2025-01-20",
        ))
        .stdout(predicate::str::contains("Reflections: 4"));
}

#[test]
fn test_summary_of_empty_journal() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("empty.toml");
    fs::write(&journal, "").unwrap();

    innercompass_cmd()
        .args(["summary", "--journal"])
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("Timeline: No entries yet."))
        .stdout(predicate::str::contains(
            "Advice: Embrace the journey of self-discovery with an open heart.",
        ));
}

#[test]
fn test_summary_missing_journal() {
    let temp = TempDir::new().unwrap();

    innercompass_cmd()
        .args(["summary", "--journal"])
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Journal file not found"));
}

#[test]
fn test_summary_invalid_journal() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("bad.toml");
    fs::write(&journal, "[[entry]]\ntone = \"Gentle\"\n").unwrap();

    innercompass_cmd()
        .args(["summary", "--journal"])
        .arg(&journal)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("[[entry]]"));
}

#[test]
fn test_milestones_default_thresholds() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .args(["milestones", "--journal"])
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("📝 First Reflection"))
        .stdout(predicate::str::contains("🎭 Tone Shift"))
        .stdout(predicate::str::contains("🌿 Theme Cluster"))
        .stdout(predicate::str::contains("Export Ready").not())
        .stdout(predicate::str::contains(
            "Milestone triggered by 4 reflections across 2 tones.",
        ))
        .stdout(predicate::str::contains("Reflection milestones").not());
}

#[test]
fn test_milestones_custom_thresholds() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .args(["milestones", "--theme-threshold", "3", "--tone-threshold", "3", "--journal"])
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Theme Healing reached in 3 reflections",
        ))
        .stdout(predicate::str::contains("- Tone Gentle appears 3 times"));
}

#[test]
fn test_milestones_zero_threshold_rejected() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .args(["milestones", "--theme-threshold", "0", "--journal"])
        .arg(&journal)
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_milestones_thresholds_from_config() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);
    let config = temp.path().join("innercompass.toml");
    fs::write(&config, "theme_threshold = 2\n").unwrap();

    innercompass_cmd()
        .arg("--config")
        .arg(&config)
        .args(["milestones", "--journal"])
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Theme Healing reached in 3 reflections",
        ))
        .stdout(predicate::str::contains("Tone Gentle appears").not());
}

#[test]
fn test_stats_frequencies_and_days() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .args(["stats", "--journal"])
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tone frequency:"))
        .stdout(predicate::str::contains("Mood frequency:"))
        .stdout(predicate::str::contains("  3  ###"))
        .stdout(predicate::str::contains("2025-01-18    2"))
        .stdout(predicate::str::contains("2025-01-20    1"));
}

#[test]
fn test_export_text() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .args(["export", "--journal"])
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-17 08:30"))
        .stdout(predicate::str::contains("    Reflection 3"))
        .stdout(predicate::str::contains("Unspecified / Unspecified"));
}

#[test]
fn test_export_toml_reloads() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    let output = innercompass_cmd()
        .args(["export", "--format", "toml", "--journal"])
        .arg(&journal)
        .output()
        .unwrap();
    assert!(output.status.success());

    let exported = temp.path().join("exported.toml");
    fs::write(&exported, &output.stdout).unwrap();

    innercompass_cmd()
        .args(["summary", "--journal"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reflections: 4"))
        .stdout(predicate::str::contains(
            "Timeline: Entries from 2025-01-17 to 2025-01-20",
        ));
}

#[test]
fn test_export_invalid_format() {
    let temp = TempDir::new().unwrap();
    let journal = sample_journal(&temp);

    innercompass_cmd()
        .args(["export", "--format", "csv", "--journal"])
        .arg(&journal)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid export format"));
}
