use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn innercompass_cmd() -> Command {
    let mut cmd = Command::cargo_bin("innercompass").unwrap();
    cmd.env_remove("INNERCOMPASS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a journal file with one `[[entry]]` per (tone, theme, mood, timestamp)
#[allow(dead_code)]
pub fn write_journal(dir: &Path, entries: &[(&str, &str, &str, &str)]) -> PathBuf {
    let mut contents = String::new();
    for (i, (tone, theme, mood, timestamp)) in entries.iter().enumerate() {
        contents.push_str(&format!(
            "[[entry]]\ntext = \"Reflection {}\"\ntone = \"{}\"\ntheme = \"{}\"\nmood = \"{}\"\ntimestamp = \"{}\"\n\n",
            i + 1,
            tone,
            theme,
            mood,
            timestamp
        ));
    }
    let path = dir.join("journal.toml");
    fs::write(&path, contents).unwrap();
    path
}
