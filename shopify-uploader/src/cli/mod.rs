//! Command-line interface definition

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::preview::PreviewCommands;
use commands::upload::UploadCommands;

#[derive(Debug, Parser)]
#[command(
    name = "shopify-uploader",
    version,
    about = "Publish apparel products from a CSV export to Shopify as drafts"
)]
pub struct Cli {
    /// Settings file (defaults to ~/.config/shopify-uploader/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable info-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a CSV file and show its first rows
    Preview(PreviewCommands),
    /// Create one draft product per handle in the CSV file
    Upload(UploadCommands),
}
