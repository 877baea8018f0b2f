//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::Args;
use std::convert::Infallible;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Only log errors and skip follow-up hints.
    ///
    /// Styled status lines are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only log errors and skip hints"
    )]
    pub quiet: bool,

    /// Disable ANSI colour in diagnostic logs and error reports.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). Styled status lines on stdout are
    /// unaffected.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = parse_no_color,
        help = "Disable colored logs and error reports"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

/// Any non-empty `NO_COLOR` disables color. `"false"` is clap's unset default
/// for the flag and `"true"` its value when `--no-color` is passed.
fn parse_no_color(value: &str) -> Result<bool, Infallible> {
    Ok(!value.is_empty() && value != "false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_accepts_any_non_empty_value() {
        for value in ["1", "true", "yes-please", "0"] {
            assert_eq!(parse_no_color(value), Ok(true), "{value}");
        }
    }

    #[test]
    fn no_color_unset_defaults() {
        assert_eq!(parse_no_color(""), Ok(false));
        assert_eq!(parse_no_color("false"), Ok(false));
    }
}
