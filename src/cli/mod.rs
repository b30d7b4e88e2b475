use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod formatters;
pub mod help;
pub mod runner;

#[derive(Parser)]
#[command(name = "mei")]
#[command(
    version,
    about = "Brazilian MEI tax simulator: MEI vs. self-employed vs. Simples Nacional"
)]
#[command(
    long_about = "Estimate the monthly DAS under the MEI regime for a given monthly revenue and activity, check it against the annual MEI ceiling, and compare it with rough self-employed (Autônomo PF) and Simples Nacional estimates. Figures are informational only."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Tax schedule TOML file (overrides MEI_SCHEDULE and the config file)
    #[arg(long = "schedule", global = true, value_name = "PATH")]
    pub schedule: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare MEI, self-employed and Simples Nacional for a monthly revenue
    Compare {
        /// Monthly revenue as typed in a currency mask; digits only, the last
        /// two are centavos (e.g. 3.000,00 or 300000)
        revenue: String,

        /// Activity: comercio, servico or ambos
        #[arg(short, long, default_value = "servico")]
        activity: String,
    },

    /// Show the active tax schedule
    Schedule {
        /// Print the schedule as TOML (starting point for a custom file)
        #[arg(long)]
        toml: bool,
    },

    /// List activities and their monthly DAS
    Activities,

    /// Launch interactive mode (default)
    Interactive,
}
