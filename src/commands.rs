//! Command parsing and routing layer
//!
//! Provides a simple, custom command parser for the interactive mode. The
//! clap CLI converts into the same `Command` enum (see `cli::runner`) so both
//! surfaces share the dispatcher.

use crate::tax::ActivityCategory;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare regimes: `compare <revenue> [activity]`
    Compare {
        revenue: String,
        activity: ActivityCategory,
    },
    /// Set the revenue entry: `revenue <text>` or just the amount
    SetRevenue { raw: String },
    /// Set the activity: `activity <comercio|servico|ambos>`
    SetActivity { activity: ActivityCategory },
    /// Re-render the current comparison: `show`
    Show,
    /// List activity options and their DAS: `activities`
    Activities,
    /// Show the active schedule: `schedule`
    Schedule,
    /// Show help
    Help,
    /// Exit/quit
    Exit,
}

/// Error type for command parsing
#[derive(Debug, Clone)]
pub struct CommandParseError {
    pub message: String,
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandParseError {}

fn parse_activity(s: &str) -> Result<ActivityCategory, CommandParseError> {
    s.parse().map_err(|e: crate::error::CalcError| CommandParseError {
        message: e.to_string(),
    })
}

/// Parse a command string into a Command enum
///
/// Supports both "long form" and slash commands, in English or Portuguese.
/// Examples:
/// - `3.000,00` or `revenue 3000,00` or `/faturamento 300000`
/// - `activity comercio` or `/atividade ambos`
/// - `compare 8000,00 comercio`
pub fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let input = input.trim();

    // Handle empty input
    if input.is_empty() {
        return Err(CommandParseError {
            message: "Empty command. Type `/help` for commands.".to_string(),
        });
    }

    // Remove leading slash if present
    let input = input.strip_prefix('/').unwrap_or(input);

    // A bare amount ("3.000,00", "R$ 1500") sets the revenue
    if input.starts_with(|c: char| c.is_ascii_digit()) || input.starts_with("R$") {
        return Ok(Command::SetRevenue {
            raw: input.to_string(),
        });
    }

    let (cmd, rest) = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    };

    match cmd.to_lowercase().as_str() {
        "revenue" | "faturamento" => Ok(Command::SetRevenue {
            raw: rest.to_string(),
        }),
        "activity" | "atividade" => {
            if rest.is_empty() {
                return Err(CommandParseError {
                    message: "activity requires a value. Usage: activity <comercio|servico|ambos>"
                        .to_string(),
                });
            }
            Ok(Command::SetActivity {
                activity: parse_activity(rest)?,
            })
        }
        "compare" | "comparar" => {
            let mut parts = rest.split_whitespace().collect::<Vec<_>>();
            if parts.is_empty() {
                return Err(CommandParseError {
                    message: "compare requires a revenue. Usage: compare <revenue> [activity]"
                        .to_string(),
                });
            }

            // A trailing word without digits is the activity
            let activity = match parts.last() {
                Some(&last) if parts.len() > 1 && !last.chars().any(|c| c.is_ascii_digit()) => {
                    let activity = parse_activity(last)?;
                    parts.pop();
                    activity
                }
                _ => ActivityCategory::default(),
            };

            Ok(Command::Compare {
                revenue: parts.join(" "),
                activity,
            })
        }
        "show" | "mostrar" => Ok(Command::Show),
        "activities" | "atividades" => Ok(Command::Activities),
        "schedule" | "tabela" => Ok(Command::Schedule),
        "help" | "ajuda" | "?" => Ok(Command::Help),
        "exit" | "quit" | "sair" => Ok(Command::Exit),
        other => Err(CommandParseError {
            message: format!("Unknown command '{}'. Type `/help` for commands.", other),
        }),
    }
}
