use clap::Parser;
use colored::Colorize;

use pomotrack::cli::args::{Cli, Commands, ConfigArgs, ConfigCommands, TimerArgs};
use pomotrack::cli::commands;
use pomotrack::config::{Config, Paths};
use pomotrack::error::PomotrackError;
use pomotrack::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), PomotrackError> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    // `config init` must work even when the existing file is broken
    let config = match &cli.command {
        Some(Commands::Config(ConfigArgs {
            command: ConfigCommands::Init { .. },
        })) => Config::default(),
        _ => Config::load_from_path(&config_path)?,
    };

    config.general.color.apply();
    logging::init(&config.logging, &paths)?;
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        None => commands::tui(&TimerArgs::default(), &config)?,
        Some(Commands::Tui(args)) => commands::tui(&args, &config)?,
        Some(Commands::Run(args)) => commands::run(&args, &config, format)?,
        Some(Commands::Status(args)) => commands::status(&args, &config, format)?,
        Some(Commands::Config(args)) => {
            commands::config(args.command, &config, &config_path, format)?
        }
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
