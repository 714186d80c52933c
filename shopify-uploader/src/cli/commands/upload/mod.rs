//! `upload` command arguments

pub mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_upload_command;

#[derive(Debug, Clone, Args)]
pub struct UploadCommands {
    /// Product CSV file
    pub file: PathBuf,

    /// Text encoding of the file (default: shift_jis)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Fabric label written into every description (default: Polyester)
    #[arg(long)]
    pub fabric: Option<String>,

    /// Pause after each product, in milliseconds (default: 1000)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Print the payloads as JSON instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
