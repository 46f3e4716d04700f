//! Output formatting utilities

use crate::application::{JourneyReport, WeeklyChain};
use crate::domain::summary::{Tally, NO_ENTRIES};
use crate::domain::{
    Composition, FlowStep, JournalEntry, Label, ProgressMilestone, SummaryEngine, Theme,
};
use crate::infrastructure::Config;

const NO_MILESTONES: &str = "No milestones yet. Your journey is just beginning.";

/// Format a composed reply with its classification
pub fn format_composition(composition: &Composition) -> String {
    format!(
        "{}  Tone: {}   Theme: {}\n\n{}\n",
        composition.tone.icon(),
        composition.tone,
        composition.theme.decorated(),
        composition.response
    )
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<14} {:<14} {:<12} {} / {}\n",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.tone.decorated(),
            entry.theme.decorated(),
            entry.mood.label(),
            entry.source,
            entry.reflection_type
        ));
        for line in entry.text.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output
}

/// Format the summary view
pub fn format_report(report: &JourneyReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n\n", report.summary));
    output.push_str(&format!("Advice: {}\n", report.advice));
    output.push_str(&format!("Timeline: {}\n", report.timeline));
    output.push_str(&format!("Reflections: {}\n", report.total));
    output
}

/// Format both milestone lists
pub fn format_milestones(report: &JourneyReport) -> String {
    if report.reflection_milestones.is_empty() && report.progress.is_empty() {
        return NO_MILESTONES.to_string();
    }

    let mut output = String::new();
    if !report.progress.is_empty() {
        output.push_str("Milestones reached:\n");
        if let Some(caption) = &report.progress_caption {
            output.push_str(&format!("  {}\n", caption));
        }
        if let Some(depth) = &report.theme_depth {
            output.push_str(&format!("  {}\n", depth));
        }
        output.push_str(&format_badges(&report.progress));
    }

    if !report.reflection_milestones.is_empty() {
        output.push_str("Reflection milestones:\n");
        for milestone in &report.reflection_milestones {
            output.push_str(&format!("  - {}\n", milestone));
        }
    }
    output
}

fn format_badges(badges: &[ProgressMilestone]) -> String {
    badges
        .iter()
        .map(|badge| format!("  {} {}\n", badge.icon(), badge))
        .collect()
}

fn format_tally<L: Label>(title: &str, tally: &Tally<L>) -> String {
    let mut output = format!("{}:\n", title);
    for (label, count) in tally.ranked() {
        output.push_str(&format!(
            "  {:<18} {:>3}  {}\n",
            label.decorated(),
            count,
            "#".repeat(count)
        ));
    }
    output
}

/// Format frequency tables and the per-day timeline
pub fn format_stats(engine: &SummaryEngine) -> String {
    if engine.total() == 0 {
        return NO_ENTRIES.to_string();
    }

    let mut output = String::new();
    output.push_str(&format_tally("Tone frequency", engine.tones()));
    output.push('\n');
    output.push_str(&format_tally("Theme frequency", engine.themes()));
    output.push('\n');
    output.push_str(&format_tally("Mood frequency", engine.moods()));
    output.push('\n');
    output.push_str("Entries per day:\n");
    for (day, count) in engine.entries_per_day() {
        output.push_str(&format!("  {}  {:>3}\n", day.format("%Y-%m-%d"), count));
    }
    output
}

/// Format one step of a reflection flow
pub fn format_flow_step(step: &FlowStep) -> String {
    match step {
        FlowStep::Prompt {
            step,
            total,
            prompt,
        } => format!("Assistant: {}\n(Step {} of {})", prompt, step, total),
        FlowStep::Complete(entry) => format!(
            "{} Journey complete. Reflection saved to journal ({}).",
            entry.theme.icon(),
            entry.theme
        ),
    }
}

/// Format the weekly continuation view
pub fn format_weekly(chain: Option<&WeeklyChain>) -> String {
    let Some(chain) = chain else {
        return "No reflections found from the past week.".to_string();
    };

    let tones: Vec<&str> = chain.tones.iter().map(|t| t.label()).collect();
    let mut output = format!(
        "Your reflections this week centered around {}.\n\
        {} reflections explored {}.\n\
        Affirmation: {}\n",
        chain.theme.decorated(),
        chain.count,
        chain.theme,
        chain.affirmation
    );
    for (i, prompt) in chain.prompts.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, prompt));
    }
    output.push_str(&format!(
        "Your reflections on {} carried tones of {}.\n",
        chain.theme,
        tones.join(", ")
    ));
    output
}

/// Format the themes of a flow
pub fn format_theme_list(themes: &[Theme]) -> String {
    themes
        .iter()
        .map(|theme| format!("{}\n", theme.decorated()))
        .collect()
}

/// Format a prompt sequence
pub fn format_prompt_list(prompts: &[&str]) -> String {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| format!("{}. {}\n", i + 1, prompt))
        .collect()
}

/// Format every config key
pub fn format_config(config: &Config) -> String {
    crate::infrastructure::config::CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            config
                .get(key)
                .ok()
                .map(|value| format!("{} = {}\n", key, value))
        })
        .collect()
}
