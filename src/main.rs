use chrono::Local;
use clap::Parser;
use innercompass::application::compose::rng_from_seed;
use innercompass::application::{ComposeService, JourneyReport, Session};
use innercompass::cli::{output, run_session, Cli, Commands};
use innercompass::domain::affirmation::{affirmation, generate_reflection, ReflectionLength};
use innercompass::domain::{
    ComposeMode, FlowKind, Label, MilestoneThresholds, SummaryEngine, Theme, Tone,
};
use innercompass::error::{CompassError, Result};
use innercompass::infrastructure::logging::init_logging;
use innercompass::infrastructure::repository::to_toml;
use innercompass::infrastructure::{Config, EntrySource, JournalFile};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Compose { text, mode, seed }) => {
            let mode = match mode {
                Some(m) => ComposeMode::from_str(&m).map_err(CompassError::InvalidArgument)?,
                None => config.compose_mode,
            };
            let mut service = ComposeService::new(seed.or(config.seed));
            let composition = service.execute(&text.join(" "), mode);
            print!("{}", output::format_composition(&composition));
            Ok(())
        }
        Some(Commands::Affirm {
            tone,
            theme,
            length,
            seed,
        }) => {
            let tone = Tone::from_label(&tone);
            let theme = Theme::from_label(&theme);
            let length =
                ReflectionLength::from_str(&length).map_err(CompassError::InvalidArgument)?;

            let mut rng = rng_from_seed(seed.or(config.seed));
            println!("{}", generate_reflection(tone, theme, length, &mut rng));
            println!();
            println!("{} Affirmation: {}", tone.icon(), affirmation(tone));
            Ok(())
        }
        Some(Commands::Prompts { flow, theme }) => {
            let kind = if flow.eq_ignore_ascii_case("auto") {
                FlowKind::for_time(Local::now().naive_local())
            } else {
                FlowKind::from_str(&flow).map_err(CompassError::InvalidArgument)?
            };

            match theme {
                Some(theme) => {
                    let theme = Theme::from_label(&theme);
                    println!("{} flow, {}:", kind, theme.decorated());
                    print!("{}", output::format_prompt_list(&kind.prompts(theme)));
                }
                None => {
                    println!("{} flow themes:", kind);
                    print!("{}", output::format_theme_list(&kind.themes()));
                }
            }
            Ok(())
        }
        Some(Commands::Summary { journal }) => {
            let entries = JournalFile::new(journal).load_entries()?;
            let report = JourneyReport::build(&entries, config.thresholds());
            print!("{}", output::format_report(&report));
            Ok(())
        }
        Some(Commands::Milestones {
            journal,
            theme_threshold,
            tone_threshold,
        }) => {
            let thresholds = MilestoneThresholds {
                theme: positive("theme-threshold", theme_threshold)?
                    .unwrap_or(config.theme_threshold),
                tone: positive("tone-threshold", tone_threshold)?.unwrap_or(config.tone_threshold),
            };
            let entries = JournalFile::new(journal).load_entries()?;
            let report = JourneyReport::build(&entries, thresholds);
            println!("{}", output::format_milestones(&report).trim_end());
            Ok(())
        }
        Some(Commands::Stats { journal }) => {
            let entries = JournalFile::new(journal).load_entries()?;
            let engine = SummaryEngine::new(&entries);
            println!("{}", output::format_stats(&engine).trim_end());
            Ok(())
        }
        Some(Commands::Export { journal, format }) => {
            let entries = JournalFile::new(journal).load_entries()?;
            match format.to_lowercase().as_str() {
                "text" => println!("{}", output::format_entry_list(&entries).trim_end()),
                "toml" => print!("{}", to_toml(&entries)?),
                other => {
                    return Err(CompassError::InvalidArgument(format!(
                        "Invalid export format: '{}'. Valid formats are: text, toml",
                        other
                    )))
                }
            }
            Ok(())
        }
        Some(Commands::Session { journal }) => {
            let mut session = Session::new(&config);
            if let Some(path) = journal {
                let count = session.load(&JournalFile::new(&path))?;
                println!("Loaded {} entries from {}", count, path.display());
            }

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_session(&mut session, stdin.lock(), &mut stdout)
        }
        Some(Commands::Config {
            key,
            value,
            list,
            init,
        }) => {
            if let Some(path) = init {
                Config::default().create_at(&path)?;
                println!("Created config at {}", path.display());
                Ok(())
            } else if list {
                print!("{}", output::format_config(&config));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    let path = Config::locate(cli.config.as_deref()).ok_or_else(|| {
                        CompassError::Config(
                            "No config file to update. Pass --config or set INNERCOMPASS_CONFIG"
                                .to_string(),
                        )
                    })?;
                    let mut updated = config;
                    updated.set(&k, &v)?;
                    updated.save_to_path(&path)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", config.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: innercompass config [--list | --init <FILE> | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    innercompass::infrastructure::config::CONFIG_KEYS.join(", ")
                );
                Ok(())
            }
        }
        None => {
            println!("innercompass - Reflection journaling companion");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn positive(flag: &str, value: Option<usize>) -> Result<Option<usize>> {
    match value {
        Some(0) => Err(CompassError::InvalidArgument(format!(
            "--{} must be at least 1",
            flag
        ))),
        other => Ok(other),
    }
}
