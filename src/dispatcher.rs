//! Command dispatcher that routes parsed commands to their handlers.
//!
//! Both the one-shot CLI and the interactive mode feed `Command`s through
//! here, against a `Session` that owns the current inputs.

use anyhow::Result;
use std::io;
use tracing::info;

use crate::cli::formatters::{
    format_activity_options, format_comparison, format_empty_result, format_schedule,
    JsonComparison,
};
use crate::cli::help::{render_help, RenderOpts};
use crate::commands::Command;
use crate::session::Session;

/// Whether the caller should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Route a parsed command to its handler
pub fn dispatch_command(
    command: Command,
    session: &mut Session,
    json_output: bool,
) -> Result<Outcome> {
    match command {
        Command::Compare { revenue, activity } => {
            info!("Comparing regimes for revenue '{}' ({})", revenue, activity);
            session.set_activity(activity);
            session.set_revenue_text(&revenue);
            println!("{}", render_current(session, json_output)?);
        }
        Command::SetRevenue { raw } => {
            session.set_revenue_text(&raw);
            println!("{}", render_current(session, json_output)?);
        }
        Command::SetActivity { activity } => {
            session.set_activity(activity);
            println!("{}", render_current(session, json_output)?);
        }
        Command::Show => {
            println!("{}", render_current(session, json_output)?);
        }
        Command::Activities => {
            println!(
                "{}",
                format_activity_options(session.schedule(), session.activity())
            );
        }
        Command::Schedule => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(session.schedule())?);
            } else {
                println!("{}", format_schedule(session.schedule()));
            }
        }
        Command::Help => {
            render_help(io::stdout(), &RenderOpts::default())?;
        }
        Command::Exit => return Ok(Outcome::Exit),
    }

    Ok(Outcome::Continue)
}

/// Render the session's current comparison (or the empty-state hint)
pub fn render_current(session: &Session, json_output: bool) -> Result<String> {
    if json_output {
        let doc = JsonComparison::new(
            session.schedule(),
            session.revenue(),
            session.activity(),
            session.result(),
        );
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    Ok(match session.result() {
        Some(result) => format_comparison(result, session.schedule()),
        None => format_empty_result(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::ActivityCategory;

    #[test]
    fn test_dispatch_help_command() {
        let mut session = Session::default();
        let result = dispatch_command(Command::Help, &mut session, false);
        assert_eq!(result.unwrap(), Outcome::Continue);
    }

    #[test]
    fn test_dispatch_exit_command() {
        let mut session = Session::default();
        let result = dispatch_command(Command::Exit, &mut session, false);
        assert_eq!(result.unwrap(), Outcome::Exit);
    }

    #[test]
    fn test_dispatch_compare_updates_session() {
        let mut session = Session::default();
        dispatch_command(
            Command::Compare {
                revenue: "8.000,00".to_string(),
                activity: ActivityCategory::Commerce,
            },
            &mut session,
            true,
        )
        .unwrap();

        assert_eq!(session.activity(), ActivityCategory::Commerce);
        let result = session.result().expect("result computed");
        assert!(!result.within_limit);
    }

    #[test]
    fn test_render_current_json_without_revenue() {
        let session = Session::default();
        let json = render_current(&session, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["result"].is_null());
        assert_eq!(value["regimes"].as_array().unwrap().len(), 0);
    }
}
