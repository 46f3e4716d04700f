//! Interactive session loop

use crate::application::Session;
use crate::cli::output;
use crate::domain::{ComposeMode, FlowKind, Label, Mood, Theme, Tone};
use crate::error::{CompassError, Result};
use crate::infrastructure::repository::to_toml;
use crate::infrastructure::JournalFile;
use chrono::Local;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const HELP: &str = "\
Commands:
  say <text>                    reply to a message and save it
  guided <theme>                start a guided journey
  flow <kind> <theme>           start a daily, evening or weekly flow
  cancel                        abandon the running flow
  mood <label>                  set the mood recorded on new entries
  tone <label>                  set the tone recorded on flow entries
  mode <conversational|guided>  set the reply mode
  entry <tone> <theme> <text>   save a reflection directly
  summary | milestones | stats | weekly
  export [text|toml]            print the journal
  load <file>                   replace the journal with a file
  help | quit";

const FLOW_HELP: &str = "\
A flow is running: each line answers the current prompt.
  cancel   leave the flow without saving
  quit     leave the flow and end the session";

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Say(String),
    Flow(FlowKind, Theme),
    Cancel,
    Mood(Mood),
    Tone(Tone),
    Mode(ComposeMode),
    Entry { tone: Tone, theme: Theme, text: String },
    Summary,
    Milestones,
    Stats,
    Weekly,
    Export { toml: bool },
    Load(PathBuf),
    Help,
    Quit,
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn require<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(CompassError::InvalidArgument(format!(
            "'{}' needs an argument",
            command
        )))
    } else {
        Ok(rest)
    }
}

impl FromStr for SessionCommand {
    type Err = CompassError;

    fn from_str(line: &str) -> Result<Self> {
        let (command, rest) = split_word(line);
        let parsed = match command.to_lowercase().as_str() {
            "say" => SessionCommand::Say(require(command, rest)?.to_string()),
            "guided" => {
                SessionCommand::Flow(FlowKind::Guided, Theme::from_label(require(command, rest)?))
            }
            "flow" => {
                let (kind, theme) = split_word(require(command, rest)?);
                let kind = FlowKind::from_str(kind).map_err(CompassError::InvalidArgument)?;
                SessionCommand::Flow(kind, Theme::from_label(require("flow", theme)?))
            }
            "cancel" => SessionCommand::Cancel,
            "mood" => SessionCommand::Mood(Mood::from_label(require(command, rest)?)),
            "tone" => SessionCommand::Tone(Tone::from_label(require(command, rest)?)),
            "mode" => SessionCommand::Mode(
                ComposeMode::from_str(require(command, rest)?)
                    .map_err(CompassError::InvalidArgument)?,
            ),
            "entry" => {
                let (tone, rest) = split_word(require(command, rest)?);
                let (theme, text) = split_word(rest);
                SessionCommand::Entry {
                    tone: Tone::from_label(tone),
                    theme: Theme::from_label(require("entry", theme)?),
                    text: require("entry", text)?.to_string(),
                }
            }
            "summary" => SessionCommand::Summary,
            "milestones" => SessionCommand::Milestones,
            "stats" => SessionCommand::Stats,
            "weekly" => SessionCommand::Weekly,
            "export" => match rest.to_lowercase().as_str() {
                "" | "text" => SessionCommand::Export { toml: false },
                "toml" => SessionCommand::Export { toml: true },
                other => {
                    return Err(CompassError::InvalidArgument(format!(
                        "Invalid export format: '{}'. Valid formats are: text, toml",
                        other
                    )))
                }
            },
            "load" => SessionCommand::Load(PathBuf::from(require(command, rest)?)),
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(CompassError::UnknownCommand(command.to_string())),
        };
        Ok(parsed)
    }
}

/// Apply one command; `Ok(None)` asks the loop to stop
pub fn execute(session: &mut Session, command: SessionCommand) -> Result<Option<String>> {
    let text = match command {
        SessionCommand::Say(text) => output::format_composition(&session.say(&text)),
        SessionCommand::Flow(kind, theme) => {
            output::format_flow_step(&session.start_flow(kind, theme))
        }
        SessionCommand::Cancel => {
            if session.cancel_flow() {
                "Flow cancelled.".to_string()
            } else {
                "No flow in progress.".to_string()
            }
        }
        SessionCommand::Mood(mood) => {
            session.set_mood(mood);
            format!("Mood set to {}", mood.decorated())
        }
        SessionCommand::Tone(tone) => {
            session.set_tone(tone);
            format!("Tone set to {}", tone.decorated())
        }
        SessionCommand::Mode(mode) => {
            session.set_mode(mode);
            format!("Mode set to {}", mode)
        }
        SessionCommand::Entry { tone, theme, text } => {
            let entry = session.submit(tone, theme, &text);
            format!("Saved {} reflection on {}.", entry.tone, entry.theme)
        }
        SessionCommand::Summary => output::format_report(&session.report()),
        SessionCommand::Milestones => output::format_milestones(&session.report()),
        SessionCommand::Stats => output::format_stats(&session.engine()),
        SessionCommand::Weekly => output::format_weekly(session.weekly_chain().as_ref()),
        SessionCommand::Export { toml: false } => output::format_entry_list(session.entries()),
        SessionCommand::Export { toml: true } => to_toml(session.entries())?,
        SessionCommand::Load(path) => {
            let count = session.load(&JournalFile::new(&path))?;
            format!("Loaded {} entries from {}", count, path.display())
        }
        SessionCommand::Help => HELP.to_string(),
        SessionCommand::Quit => return Ok(None),
    };
    Ok(Some(text))
}

/// Read commands from `input` until `quit` or end of input.
/// While a flow is running, lines other than `cancel`, `help` and `quit`
/// are answers.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "innercompass session. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if session.in_flow() {
            match trimmed.to_lowercase().as_str() {
                "cancel" => {}
                "quit" | "exit" => {
                    session.cancel_flow();
                    writeln!(out, "Flow discarded.")?;
                    break;
                }
                "help" | "?" => {
                    writeln!(out, "{}", FLOW_HELP)?;
                    continue;
                }
                _ => {
                    if let Some(step) = session.answer(trimmed, Local::now().naive_local()) {
                        writeln!(out, "{}", output::format_flow_step(&step))?;
                    }
                    continue;
                }
            }
        }

        if trimmed.is_empty() {
            continue;
        }

        let result = trimmed
            .parse::<SessionCommand>()
            .and_then(|command| execute(session, command));
        match result {
            Ok(Some(text)) => writeln!(out, "{}", text.trim_end())?,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(line = trimmed, error = %e, "session command failed");
                writeln!(out, "{}", e.display_with_suggestions())?;
            }
        }
    }

    writeln!(out, "Goodbye.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::io::Cursor;

    fn run(script: &str) -> (Session, String) {
        let config = Config {
            seed: Some(3),
            ..Config::default()
        };
        let mut session = Session::new(&config);
        let mut out = Vec::new();
        run_session(&mut session, Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "say hello there".parse::<SessionCommand>().unwrap(),
            SessionCommand::Say("hello there".to_string())
        );
        assert_eq!(
            "guided forgiveness".parse::<SessionCommand>().unwrap(),
            SessionCommand::Flow(FlowKind::Guided, Theme::Forgiveness)
        );
        assert_eq!(
            "flow evening rest".parse::<SessionCommand>().unwrap(),
            SessionCommand::Flow(FlowKind::Evening, Theme::Rest)
        );
        assert_eq!(
            "entry gentle healing slow morning".parse::<SessionCommand>().unwrap(),
            SessionCommand::Entry {
                tone: Tone::Gentle,
                theme: Theme::Healing,
                text: "slow morning".to_string()
            }
        );
        assert_eq!(
            "EXPORT toml".parse::<SessionCommand>().unwrap(),
            SessionCommand::Export { toml: true }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "dance".parse::<SessionCommand>(),
            Err(CompassError::UnknownCommand(_))
        ));
        assert!(matches!(
            "say".parse::<SessionCommand>(),
            Err(CompassError::InvalidArgument(_))
        ));
        assert!(matches!(
            "mode loud".parse::<SessionCommand>(),
            Err(CompassError::InvalidArgument(_))
        ));
        assert!(matches!(
            "entry gentle healing".parse::<SessionCommand>(),
            Err(CompassError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_session_records_chat_and_entries() {
        let (session, out) = run(
            "mood grateful\n\
            say I am so grateful for my friends\n\
            entry still rest quiet evening\n\
            quit\n\
            say never reached\n",
        );
        assert_eq!(session.entries().len(), 2);
        assert_eq!(session.entries()[0].mood, Mood::Grateful);
        assert_eq!(session.entries()[1].tone, Tone::Still);
        assert!(out.contains("Mood set to"));
        assert!(out.contains("Saved Still reflection on Rest."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_session_guided_flow() {
        let (session, out) = run(
            "guided resilience\n\
            a hard week\n\
            \n\
            patience\n\
            rest and a walk\n\
            summary\n",
        );
        assert_eq!(session.entries().len(), 1);
        let entry = &session.entries()[0];
        assert_eq!(entry.theme, Theme::Resilience);
        assert_eq!(entry.source, "Guided");
        assert_eq!(entry.text, "a hard week\n\npatience\n\nrest and a walk");
        assert!(out.contains("(Step 1 of 3)"));
        assert!(out.contains("Journey complete."));
    }

    #[test]
    fn test_session_cancel_flow() {
        let (session, out) = run("flow daily growth\nfirst answer\ncancel\nstats\n");
        assert!(session.entries().is_empty());
        assert!(out.contains("Flow cancelled."));
        assert!(out.contains("No entries yet."));
    }

    #[test]
    fn test_session_help_and_quit_are_not_flow_answers() {
        let (session, out) = run("guided healing\nhelp\nfirst answer\nquit\nsecond\n");
        assert!(session.entries().is_empty());
        assert!(!session.in_flow());
        assert!(out.contains("A flow is running"));
        assert!(out.contains("(Step 2 of 3)"));
        assert!(out.contains("Flow discarded."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let (session, out) = run("dance\nload /no/such/journal.toml\nentry neutral growth ok\n");
        assert!(out.contains("Unknown session command: 'dance'"));
        assert!(out.contains("Journal file not found"));
        assert_eq!(session.entries().len(), 1);
    }
}
