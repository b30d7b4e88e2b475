use anyhow::{Context, Result};

use crate::cli::Commands;
use crate::commands::Command;
use crate::tax::ActivityCategory;

/// Convert clap `Commands` into the internal `commands::Command` when possible.
/// Returns Ok(Some(Command)) when conversion succeeds, Ok(None) when the CLI
/// command requires special handling (e.g., `interactive`, `schedule --toml`),
/// and Err on invalid arguments (e.g., an unknown activity).
pub fn to_internal_command(c: &Commands) -> Result<Option<Command>> {
    match c {
        Commands::Compare { revenue, activity } => {
            let activity: ActivityCategory = activity
                .parse()
                .with_context(|| format!("Invalid --activity '{}'", activity))?;
            Ok(Some(Command::Compare {
                revenue: revenue.clone(),
                activity,
            }))
        }
        Commands::Schedule { toml: false } => Ok(Some(Command::Schedule)),
        Commands::Schedule { toml: true } => Ok(None),
        Commands::Activities => Ok(Some(Command::Activities)),
        Commands::Interactive => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_compare_with_activity() {
        let cmd = Commands::Compare {
            revenue: "3.000,00".to_string(),
            activity: "comercio".to_string(),
        };

        let converted = to_internal_command(&cmd).expect("conversion failed");
        match converted {
            Some(Command::Compare { revenue, activity }) => {
                assert_eq!(revenue, "3.000,00");
                assert_eq!(activity, ActivityCategory::Commerce);
            }
            other => panic!("unexpected converted result: {:?}", other),
        }
    }

    #[test]
    fn convert_compare_rejects_unknown_activity() {
        let cmd = Commands::Compare {
            revenue: "3.000,00".to_string(),
            activity: "industria".to_string(),
        };

        let err = to_internal_command(&cmd).unwrap_err();
        assert!(err.to_string().contains("Invalid --activity 'industria'"));
    }

    #[test]
    fn interactive_and_toml_need_special_handling() {
        assert!(to_internal_command(&Commands::Interactive).unwrap().is_none());
        assert!(to_internal_command(&Commands::Schedule { toml: true })
            .unwrap()
            .is_none());
        assert_eq!(
            to_internal_command(&Commands::Schedule { toml: false }).unwrap(),
            Some(Command::Schedule)
        );
    }
}
