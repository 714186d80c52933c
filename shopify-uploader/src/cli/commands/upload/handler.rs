//! Upload command handler

use anyhow::{Context, Result};
use colored::*;
use log::{info, warn};
use std::path::Path;

use super::UploadCommands;
use crate::api::{ProductPayload, ProductRequest, ShopifyClient};
use crate::catalog::{Dataset, GroupError, PayloadBuilder, ProductGroup, group_rows};
use crate::config::{ImportSettings, SettingsOverrides, ShopConfig};
use crate::import::{ConsoleReporter, ImportRunner};

/// Load the CSV, build every product and send each one to the shop
pub async fn handle_upload_command(args: UploadCommands, config_path: Option<&Path>) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let settings = ImportSettings::load(config_path)?.with_overrides(SettingsOverrides {
        encoding: args.encoding.clone(),
        fabric: args.fabric.clone(),
        delay_ms: args.delay_ms,
    });
    info!("Using settings: {:?}", settings);

    let dataset = Dataset::from_path(&args.file, &settings.encoding)
        .with_context(|| format!("Failed to load CSV: {}", args.file.display()))?;
    println!("{} ({} rows)", "CSV読み込み成功！".green(), dataset.len());
    if dataset.is_empty() {
        warn!("{} contains no product rows", args.file.display());
    }

    let groups = group_rows(&dataset).context("Failed to group rows by Handle")?;
    let builder = PayloadBuilder::new(settings.fabric.clone());

    if args.dry_run {
        let (payloads, errors) = build_all(&builder, &groups);
        for (handle, err) in &errors {
            eprintln!("{} {}: {}", "skip".yellow(), handle, err);
        }
        println!("{}", payloads_to_json(&payloads)?);
        return Ok(());
    }

    let shop = ShopConfig::from_env();
    let client = ShopifyClient::new(&shop)?;
    info!("Uploading to {}", client.products_url());

    let runner = ImportRunner::new(&client, builder, settings.delay);
    let mut reporter = ConsoleReporter;
    runner.run(&groups, &mut reporter).await;

    Ok(())
}

/// Build every group without sending anything
fn build_all<'g>(
    builder: &PayloadBuilder,
    groups: &'g [ProductGroup],
) -> (Vec<ProductPayload>, Vec<(&'g str, GroupError)>) {
    let mut payloads = Vec::new();
    let mut errors = Vec::new();

    for group in groups {
        match builder.build_payload(group) {
            Ok(payload) => payloads.push(payload),
            Err(err) => errors.push((group.handle(), err)),
        }
    }

    (payloads, errors)
}

/// The request bodies exactly as they would be POSTed, as a JSON array
fn payloads_to_json(payloads: &[ProductPayload]) -> Result<String> {
    let requests: Vec<ProductRequest<'_>> = payloads
        .iter()
        .map(|product| ProductRequest { product })
        .collect();
    serde_json::to_string_pretty(&requests).context("Failed to format JSON output")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<ProductGroup> {
        let csv = "Handle,Title,Vendor,Product Type,Tags,Option1 Value,Option2 Value,Variant Price,Variant SKU,Variant Inventory Qty\n\
                   A,Tee A,V,P,G,S,Red,1000,A-1,1\n\
                   B,Tee B,V,P,G,S,Red,1000,B-1,many\n";
        group_rows(&Dataset::from_csv_str(csv).unwrap()).unwrap()
    }

    #[test]
    fn test_build_all_separates_failures() {
        let groups = groups();
        let (payloads, errors) = build_all(&PayloadBuilder::default(), &groups);

        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].handle, "A");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "B");
    }

    #[test]
    fn test_dry_run_json_is_wrapped() {
        let groups = groups();
        let (payloads, _) = build_all(&PayloadBuilder::default(), &groups);
        let json = payloads_to_json(&payloads).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["product"]["handle"], "A");
        assert_eq!(value[0]["product"]["status"], "draft");
    }
}
