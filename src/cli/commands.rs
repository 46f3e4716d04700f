//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "innercompass")]
#[command(about = "Reflection journaling companion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $INNERCOMPASS_CONFIG, then built-in defaults)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a message and compose a reply
    Compose {
        /// Message text
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,

        /// Reply mode (conversational, guided)
        #[arg(short, long)]
        mode: Option<String>,

        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a reflection for a tone and theme
    Affirm {
        /// Tone (e.g., Gentle, Empowering, Philosophical, Neutral)
        #[arg(long, default_value = "Neutral")]
        tone: String,

        /// Theme (e.g., Growth, Forgiveness, Resilience, Courage)
        #[arg(long, default_value = "Unspecified")]
        theme: String,

        /// Reflection length (short, medium, long)
        #[arg(short, long, default_value = "short")]
        length: String,

        /// Seed for reproducible reflections
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List flow themes, or the prompts of one theme
    Prompts {
        /// Flow (guided, daily, evening, weekly, auto)
        #[arg(short, long, default_value = "auto")]
        flow: String,

        /// Theme whose prompt sequence to show
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Summarize a journal file
    Summary {
        /// Journal file (TOML, one [[entry]] per reflection)
        #[arg(short, long)]
        journal: PathBuf,
    },

    /// Detect milestones in a journal file
    Milestones {
        /// Journal file
        #[arg(short, long)]
        journal: PathBuf,

        /// Entries a theme needs (default from config)
        #[arg(long)]
        theme_threshold: Option<usize>,

        /// Entries a tone needs (default from config)
        #[arg(long)]
        tone_threshold: Option<usize>,
    },

    /// Show tone, theme and mood frequencies and entries per day
    Stats {
        /// Journal file
        #[arg(short, long)]
        journal: PathBuf,
    },

    /// Print the entries of a journal file
    Export {
        /// Journal file
        #[arg(short, long)]
        journal: PathBuf,

        /// Output format (text, toml)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Start an interactive journaling session
    Session {
        /// Journal file to start from
        #[arg(short, long)]
        journal: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,

        /// Write a default config file to this path
        #[arg(long, value_name = "FILE", conflicts_with_all = ["key", "list"])]
        init: Option<PathBuf>,
    },
}
