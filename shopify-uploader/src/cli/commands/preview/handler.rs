//! Preview command handler

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use super::PreviewCommands;
use crate::catalog::{Dataset, group_rows};
use crate::config::{ImportSettings, SettingsOverrides};

/// Show the first rows of the file and how many products it contains
pub async fn handle_preview_command(args: PreviewCommands, config_path: Option<&Path>) -> Result<()> {
    let settings = ImportSettings::load(config_path)?.with_overrides(SettingsOverrides {
        encoding: args.encoding.clone(),
        ..Default::default()
    });

    let dataset = Dataset::from_path(&args.file, &settings.encoding)
        .with_context(|| format!("Failed to load CSV: {}", args.file.display()))?;
    println!("{}", "CSV読み込み成功！".green());
    println!();

    print!("{}", format_head(&dataset, args.rows));

    let groups = group_rows(&dataset).context("Failed to group rows by Handle")?;
    println!();
    println!(
        "{} rows, {} products",
        dataset.len().to_string().bright_green(),
        groups.len().to_string().bright_green()
    );

    Ok(())
}

/// Tab-separated header plus the first `n` rows
fn format_head(dataset: &Dataset, n: usize) -> String {
    let mut out = String::new();
    out.push_str(&dataset.headers.join("\t"));
    out.push('\n');

    for row in dataset.head(n) {
        let cells: Vec<&str> = dataset
            .headers
            .iter()
            .map(|h| row.get(h).unwrap_or(""))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}
