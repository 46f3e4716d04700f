//! Integration tests for compose, affirm and prompts

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::innercompass_cmd;

#[test]
fn test_compose_classifies_message() {
    innercompass_cmd()
        .args(["compose", "--seed", "1", "I", "feel", "overwhelmed", "and", "want", "to"])
        .args(["let", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tone: Gentle"))
        .stdout(predicate::str::contains("Theme: 💗 Healing"));
}

#[test]
fn test_compose_keyword_beats_sentiment() {
    innercompass_cmd()
        .args(["compose", "--seed", "1", "ready to change everything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tone: Empowering"))
        .stdout(predicate::str::contains("Growth"));
}

#[test]
fn test_compose_is_reproducible_with_seed() {
    let run = || {
        innercompass_cmd()
            .args(["compose", "--seed", "7", "I am tired and lonely"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_compose_guided_mode_without_theme() {
    innercompass_cmd()
        .args(["compose", "--mode", "guided", "--seed", "3", "the weather today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: ❔ Unspecified"))
        .stdout(predicate::str::contains(
            "What would you like to reflect on today?",
        ));
}

#[test]
fn test_compose_invalid_mode() {
    innercompass_cmd()
        .args(["compose", "--mode", "loud", "hello"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid mode"));
}

#[test]
fn test_compose_requires_text() {
    innercompass_cmd().arg("compose").assert().failure();
}

#[test]
fn test_affirm_prints_reflection_and_affirmation() {
    innercompass_cmd()
        .args(["affirm", "--tone", "gentle", "--theme", "growth", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Affirmation: You are allowed to feel deeply and heal slowly.",
        ));
}

#[test]
fn test_affirm_without_variants_falls_back() {
    innercompass_cmd()
        .args(["affirm", "--tone", "still", "--theme", "rest"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "You are present, and that is enough.",
        ));
}

#[test]
fn test_affirm_invalid_length() {
    innercompass_cmd()
        .args(["affirm", "--length", "epic"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid length"));
}

#[test]
fn test_prompts_lists_flow_themes() {
    innercompass_cmd()
        .args(["prompts", "--flow", "evening"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gratitude"))
        .stdout(predicate::str::contains("Rest"))
        .stdout(predicate::str::contains("Growth").not());
}

#[test]
fn test_prompts_for_theme() {
    innercompass_cmd()
        .args(["prompts", "--flow", "guided", "--theme", "forgiveness"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Is there someone you're ready to forgive today?",
        ))
        .stdout(predicate::str::contains("3. How might forgiveness free you emotionally?"));
}

#[test]
fn test_prompts_unknown_theme_uses_generic_prompt() {
    innercompass_cmd()
        .args(["prompts", "--flow", "weekly", "--theme", "courage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. What would you like to reflect on today?",
        ));
}

#[test]
fn test_prompts_invalid_flow() {
    innercompass_cmd()
        .args(["prompts", "--flow", "midnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid flow"));
}
