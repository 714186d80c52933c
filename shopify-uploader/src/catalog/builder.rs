//! Turning a product group into a Shopify product payload

use crate::api::models::{
    InventoryManagement, ProductOption, ProductPayload, ProductStatus, Variant,
};
use crate::config::DEFAULT_FABRIC;

use super::columns;
use super::dataset::Row;
use super::error::GroupError;
use super::group::ProductGroup;
use super::size_table::render_size_table;
use super::sku::format_sku;

/// Option names, in the order of `option1` / `option2` on each variant
pub const OPTION_NAMES: [&str; 2] = ["サイズ", "色"];

/// Builds product payloads from grouped rows
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    fabric: String,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FABRIC)
    }
}

impl PayloadBuilder {
    pub fn new(fabric: impl Into<String>) -> Self {
        Self {
            fabric: fabric.into(),
        }
    }

    /// Description HTML: SKU, colors, fabric and the size chart.
    ///
    /// Field values are inserted verbatim; nothing is HTML-escaped.
    pub fn build_description(&self, group: &ProductGroup) -> Result<String, GroupError> {
        let first = group.representative();
        let sku = format_sku(first.require(columns::VARIANT_SKU)?);
        let colors = distinct_colors(group).join(", ");
        let size_table = render_size_table(first);

        Ok(format!(
            "<div style=\"font-size: 9pt; line-height: 2;\">\n\
             <p>SKU: {sku}<br>\n\
             Color: {colors}<br>\n\
             Fabric: {fabric}</p>\n\
             {size_table}\n\
             </div>",
            fabric = self.fabric,
        ))
    }

    /// One variant per row, in row order
    pub fn build_variants(&self, group: &ProductGroup) -> Result<Vec<Variant>, GroupError> {
        group.rows().iter().map(build_variant).collect()
    }

    /// Assemble the full payload for one group
    pub fn build_payload(&self, group: &ProductGroup) -> Result<ProductPayload, GroupError> {
        let first = group.representative();

        Ok(ProductPayload {
            handle: group.handle().to_string(),
            title: first.require(columns::TITLE)?.to_string(),
            status: ProductStatus::Draft,
            body_html: self.build_description(group)?,
            vendor: first.require(columns::VENDOR)?.to_string(),
            product_type: first.require(columns::PRODUCT_TYPE)?.to_string(),
            tags: first.require(columns::TAGS)?.to_string(),
            options: OPTION_NAMES.iter().map(|n| ProductOption::new(*n)).collect(),
            variants: self.build_variants(group)?,
        })
    }
}

/// Non-empty color values across the group, first occurrence wins
fn distinct_colors(group: &ProductGroup) -> Vec<&str> {
    let mut colors: Vec<&str> = Vec::new();
    for color in group.rows().iter().filter_map(|r| r.value(columns::OPTION2_VALUE)) {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    colors
}

fn build_variant(row: &Row) -> Result<Variant, GroupError> {
    let raw_quantity = row.require(columns::VARIANT_INVENTORY_QTY)?;
    let inventory_quantity =
        parse_quantity(raw_quantity).ok_or_else(|| GroupError::Conversion {
            column: columns::VARIANT_INVENTORY_QTY.to_string(),
            value: raw_quantity.to_string(),
        })?;

    Ok(Variant {
        option1: row.value(columns::OPTION1_VALUE).map(str::to_string),
        option2: row.value(columns::OPTION2_VALUE).map(str::to_string),
        price: row.require(columns::VARIANT_PRICE)?.to_string(),
        sku: row.require(columns::VARIANT_SKU)?.to_string(),
        inventory_quantity,
        inventory_management: InventoryManagement::Shopify,
    })
}

/// Parse an inventory count.
///
/// Accepts plain integers and whole-valued decimals such as `10.0`, which
/// spreadsheet exports produce for numeric columns.
fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }

    let f: f64 = raw.parse().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
