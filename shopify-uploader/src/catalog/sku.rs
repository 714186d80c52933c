//! SKU formatting for product descriptions

/// Maximum length of a formatted SKU, in characters
pub const FORMATTED_SKU_LEN: usize = 12;

/// Strip hyphens and cut to the first 12 characters.
///
/// Shorter SKUs are not padded. Applying this twice gives the same
/// result as applying it once.
pub fn format_sku(sku: &str) -> String {
    sku.chars()
        .filter(|&c| c != '-')
        .take(FORMATTED_SKU_LEN)
        .collect()
}
