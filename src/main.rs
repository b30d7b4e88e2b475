use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mei::cli::runner::to_internal_command;
use mei::cli::{Cli, Commands};
use mei::dispatcher::dispatch_command;
use mei::session::Session;
use mei::tax::resolve_schedule;

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays clean for --json)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let schedule = resolve_schedule(cli.schedule.as_deref())?;
    debug!("Active tax schedule: period {}", schedule.period);

    let command = cli.command.unwrap_or(Commands::Interactive);

    match to_internal_command(&command)? {
        Some(cmd) => {
            let mut session = Session::new(schedule);
            dispatch_command(cmd, &mut session, cli.json)?;
            Ok(())
        }
        None => match command {
            Commands::Schedule { toml: true } => {
                print!("{}", schedule.to_toml_string()?);
                Ok(())
            }
            _ => mei::ui::launch_interactive(Session::new(schedule), cli.json),
        },
    }
}
