use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::focus::parse_duration;

#[derive(Parser)]
#[command(name = "pomotrack")]
#[command(about = "A work/break countdown timer for the terminal")]
#[command(long_about = "pomotrack - A work/break countdown timer

Counts down a work session (25 minutes by default) or a 5-minute break.
Start, pause, reset, or switch into a break at any time.

QUICK START:
  pomotrack                 Open the full-screen timer
  pomotrack run             Count down in the current terminal line
  pomotrack run --break     Count down a 5-minute break
  pomotrack status -m 50    Show a 50-minute session before starting it

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomotrack <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to general.default_output from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of ~/.pomotrack/config.yaml
    #[arg(long, global = true, env = "POMOTRACK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand; opens the full-screen timer when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full-screen interactive timer
    ///
    /// Keys:
    ///   s / space   start or pause
    ///   p           pause
    ///   r           reset the current session
    ///   b           switch to a 5-minute break
    ///   ?           help
    ///   q / Esc     quit
    ///
    /// # Examples
    ///
    ///   pomotrack tui
    ///   pomotrack tui --minutes 50
    Tui(TimerArgs),

    /// Count down without the full-screen interface
    ///
    /// Starts immediately and exits when the countdown reaches 00:00.
    /// With --output json, prints one JSON record per tick.
    ///
    /// # Examples
    ///
    ///   pomotrack run
    ///   pomotrack run -m 15
    ///   pomotrack run --break
    ///   pomotrack run -o json | jq .
    Run(RunArgs),

    /// Show the timer state for the configured session lengths
    ///
    /// # Examples
    ///
    ///   pomotrack status
    ///   pomotrack status --minutes 45 -o json
    Status(TimerArgs),

    /// Inspect or create the configuration file
    ///
    /// # Subcommands
    ///
    ///   show   Print the effective configuration
    ///   path   Print the config file location
    ///   init   Write a default config file
    Config(ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   pomotrack completions bash > ~/.bash_completion.d/pomotrack
    ///   pomotrack completions zsh > ~/.zfunc/_pomotrack
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments shared by commands that build a timer.
#[derive(Args, Debug, Clone, Default)]
pub struct TimerArgs {
    /// Work session length (e.g. 25, 50m, 1h)
    ///
    /// Overrides timer.work_minutes from the config file.
    #[arg(short, long, value_parser = parse_minutes_arg)]
    pub minutes: Option<u32>,
}

/// Arguments for the headless countdown.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Count down a break instead of a work session
    #[arg(long = "break", short = 'b')]
    pub break_session: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Parse a session length into whole minutes.
///
/// # Errors
///
/// Returns a message if the value is not a positive whole number of minutes.
pub fn parse_minutes_arg(s: &str) -> Result<u32, String> {
    let duration =
        parse_duration(s).ok_or_else(|| format!("invalid duration '{s}' (try 25, 50m, 1h)"))?;

    if duration.num_seconds() % 60 != 0 {
        return Err(format!("'{s}' is not a whole number of minutes"));
    }

    u32::try_from(duration.num_minutes()).map_err(|_| format!("'{s}' is too long"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["pomotrack"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["pomotrack", "--output", "json", "status"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_after_subcommand() {
        let cli = Cli::try_parse_from(["pomotrack", "status", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_run_minutes() {
        let cli = Cli::try_parse_from(["pomotrack", "run", "-m", "50m"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.timer.minutes, Some(50));
            assert!(!args.break_session);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_break() {
        let cli = Cli::try_parse_from(["pomotrack", "run", "--break"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert!(args.break_session);
            assert_eq!(args.timer.minutes, None);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_tui_hours() {
        let cli = Cli::try_parse_from(["pomotrack", "tui", "--minutes", "1h"]).unwrap();
        if let Some(Commands::Tui(args)) = cli.command {
            assert_eq!(args.minutes, Some(60));
        } else {
            panic!("Expected Tui command");
        }
    }

    #[test]
    fn test_cli_rejects_bad_minutes() {
        assert!(Cli::try_parse_from(["pomotrack", "run", "-m", "0"]).is_err());
        assert!(Cli::try_parse_from(["pomotrack", "run", "-m", "90s"]).is_err());
        assert!(Cli::try_parse_from(["pomotrack", "run", "-m", "soon"]).is_err());
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["pomotrack", "config", "init", "--force"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Init { force: true }));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["pomotrack", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }

    #[test]
    fn test_parse_minutes_arg() {
        assert_eq!(parse_minutes_arg("25"), Ok(25));
        assert_eq!(parse_minutes_arg("1h30m"), Ok(90));
        assert_eq!(parse_minutes_arg("120s"), Ok(2));
        assert!(parse_minutes_arg("61s").is_err());
    }

    #[test]
    fn test_parse_minutes_arg_too_long() {
        assert!(parse_minutes_arg("9223372036854775807").is_err());
        assert!(parse_minutes_arg("99999999999999999h").is_err());
        assert_eq!(parse_minutes_arg(&u32::MAX.to_string()), Ok(u32::MAX));
    }

    #[test]
    fn test_cli_rejects_huge_minutes() {
        assert!(Cli::try_parse_from(["pomotrack", "run", "-m", "9223372036854775807"]).is_err());
    }
}
