//! Column names of the product CSV export

/// Product identifier shared by every variant row of one product
pub const HANDLE: &str = "Handle";
pub const TITLE: &str = "Title";
pub const VENDOR: &str = "Vendor";
pub const PRODUCT_TYPE: &str = "Product Type";
pub const TAGS: &str = "Tags";
/// Size option value (e.g. "M")
pub const OPTION1_VALUE: &str = "Option1 Value";
/// Color option value (e.g. "Red")
pub const OPTION2_VALUE: &str = "Option2 Value";
pub const VARIANT_PRICE: &str = "Variant Price";
pub const VARIANT_SKU: &str = "Variant SKU";
pub const VARIANT_INVENTORY_QTY: &str = "Variant Inventory Qty";
