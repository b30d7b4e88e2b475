//! Interactive mode: a readline REPL that recomputes the comparison on every
//! revenue or activity change.

pub mod readline;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;

use crate::cli::formatters::{format_activity_options, format_empty_result};
use crate::commands::parse_command;
use crate::dispatcher::{dispatch_command, Outcome};
use crate::session::Session;
use crate::tax::ActivityCategory;

const COMMANDS: &[&str] = &[
    "revenue",
    "compare",
    "show",
    "activities",
    "schedule",
    "help",
    "exit",
    "quit",
];

/// Completion patterns: plain commands plus `activity <value>`
fn command_patterns() -> Vec<Vec<String>> {
    let mut patterns: Vec<Vec<String>> = COMMANDS.iter().map(|c| vec![c.to_string()]).collect();
    for activity in ActivityCategory::ALL {
        patterns.push(vec!["activity".to_string(), activity.as_str().to_string()]);
    }
    patterns
}

fn prompt(session: &Session) -> String {
    format!(
        "mei [{} | R$ {}]> ",
        session.activity().as_str(),
        session.revenue().masked()
    )
}

/// Launch the interactive REPL.
pub fn launch_interactive(mut session: Session, json_output: bool) -> Result<()> {
    println!("{}", "MEI Simulator - Interactive Mode".bold());
    println!(
        "Type your monthly revenue (e.g. {}), {} for help, {} to exit\n",
        "3.000,00".cyan(),
        "/help".cyan(),
        "/exit".cyan()
    );
    println!(
        "{}",
        format_activity_options(session.schedule(), session.activity())
    );
    println!("{}", format_empty_result());

    let mut rl = readline::Readline::new(command_patterns(), None)?;

    loop {
        match rl.readline(&prompt(&session)) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_command(trimmed) {
                    Ok(cmd) => match dispatch_command(cmd, &mut session, json_output) {
                        Ok(Outcome::Exit) => {
                            println!("Goodbye!");
                            break;
                        }
                        Ok(Outcome::Continue) => {}
                        Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                    },
                    Err(e) => {
                        eprintln!("{} {}", "Parse error:".yellow().bold(), e.message);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}
