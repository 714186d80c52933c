mod api;
mod catalog;
mod cli;
mod config;
mod import;

use anyhow::Result;
use clap::Parser;
use colored::*;
use log::debug;

use cli::commands::preview::handle_preview_command;
use cli::commands::upload::handle_upload_command;
use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials usually live in a .env next to the CSV files
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("{}", format!("Loaded {}", path.display()).dimmed());
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Preview(args) => handle_preview_command(args, config_path).await,
        Commands::Upload(args) => handle_upload_command(args, config_path).await,
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "エラーが発生しました:".red().bold(), err);
        std::process::exit(1);
    }

    Ok(())
}
