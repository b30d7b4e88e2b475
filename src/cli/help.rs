use colored::Colorize;
use std::io::{self, Write};

pub struct RenderOpts {
    pub show_examples: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        RenderOpts {
            show_examples: true,
        }
    }
}

pub fn render_help<W: Write>(mut out: W, opts: &RenderOpts) -> io::Result<()> {
    writeln!(out, "{}", "MEI Simulator - Help".bold())?;
    writeln!(out)?;

    writeln!(out, "{}", "Inputs:".bold())?;
    writeln!(
        out,
        "  {:28} - Set monthly revenue (digits only, last two are centavos)",
        "<amount> | revenue <amount>"
    )?;
    writeln!(
        out,
        "  {:28} - Choose activity: comercio, servico or ambos",
        "activity <activity>"
    )?;
    writeln!(
        out,
        "  {:28} - Set both at once",
        "compare <amount> [activity]"
    )?;

    writeln!(out)?;
    writeln!(out, "{}", "Views:".bold())?;
    writeln!(out, "  {:28} - Show the current comparison", "show")?;
    writeln!(out, "  {:28} - List activities and their DAS", "activities")?;
    writeln!(out, "  {:28} - Show the active tax schedule", "schedule")?;

    writeln!(out)?;
    writeln!(out, "{}", "Session:".bold())?;
    writeln!(out, "  {:28} - Show this help", "help")?;
    writeln!(out, "  {:28} - Exit the application", "exit")?;

    writeln!(out)?;
    if opts.show_examples {
        writeln!(out, "{}", "Examples:".bold())?;
        writeln!(out, "  3.000,00")?;
        writeln!(out, "  activity comercio")?;
        writeln!(out, "  compare 8.000,00 ambos")?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Estimates only. Consult an accountant for tax decisions."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_commands_and_examples() {
        let mut buf = Vec::new();
        render_help(&mut buf, &RenderOpts::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("activity <activity>"));
        assert!(text.contains("compare 8.000,00 ambos"));
    }

    #[test]
    fn test_help_without_examples() {
        let mut buf = Vec::new();
        render_help(
            &mut buf,
            &RenderOpts {
                show_examples: false,
            },
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("Examples:"));
    }
}
