use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use stargaze::cli::{Cli, Commands, ConfigAction, SearchArgs};
use stargaze::commands::{cmd_browse, cmd_config_path, cmd_config_show, cmd_page, load_config};
use stargaze::config::Config;
use stargaze::error::Result;
use stargaze::logging::{self, LogTarget};

async fn run(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Browse { search } => {
            let config = load_config(config_path, &search)?;
            cmd_browse(&config).await
        }
        Commands::Page { page, json, search } => {
            let config = load_config(config_path, &search)?;
            cmd_page(&config, page, json).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(&Config::resolve(config_path)?),
            ConfigAction::Path => cmd_config_path(config_path),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse {
        search: SearchArgs::default(),
    });

    // The browse view owns the terminal
    let log_target = match command {
        Commands::Browse { .. } => LogTarget::for_tui(),
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(log_target) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }

    match run(command, cli.config.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
