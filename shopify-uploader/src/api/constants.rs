//! Shopify Admin API constants

/// Admin REST API version used when none is configured
pub const DEFAULT_API_VERSION: &str = "2023-10";

/// Header carrying the Admin API access token
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Environment variable names
pub mod env {
    pub const SHOP_NAME: &str = "SHOPIFY_SHOP_NAME";
    pub const ACCESS_TOKEN: &str = "SHOPIFY_ACCESS_TOKEN";
    pub const API_VERSION: &str = "SHOPIFY_API_VERSION";
}
