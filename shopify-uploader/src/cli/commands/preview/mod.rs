//! `preview` command arguments

pub mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_preview_command;

#[derive(Debug, Clone, Args)]
pub struct PreviewCommands {
    /// Product CSV file
    pub file: PathBuf,

    /// Number of rows to show
    #[arg(long, default_value_t = 5)]
    pub rows: usize,

    /// Text encoding of the file (default: shift_jis)
    #[arg(long)]
    pub encoding: Option<String>,
}
