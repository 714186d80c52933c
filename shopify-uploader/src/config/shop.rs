//! Shop endpoint and credentials

use log::warn;

use crate::api::constants::{DEFAULT_API_VERSION, env};

/// Connection settings for one Shopify store.
///
/// Built once at startup and handed to the client; lives for the whole
/// process.
#[derive(Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Store domain, e.g. `plumdesign.myshopify.com`
    pub shop_name: String,
    pub access_token: String,
    pub api_version: String,
}

impl ShopConfig {
    pub fn new(
        shop_name: impl Into<String>,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let shop_name: String = shop_name.into();
        let shop_name = shop_name
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string();

        Self {
            shop_name,
            access_token: access_token.into(),
            api_version: api_version.into(),
        }
    }

    /// Read the shop settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Missing values are not an error here: they are logged and left
    /// empty, and the API rejects the requests later.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let shop_name = lookup(env::SHOP_NAME).unwrap_or_default();
        let access_token = lookup(env::ACCESS_TOKEN).unwrap_or_default();
        let api_version = lookup(env::API_VERSION)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        if shop_name.is_empty() {
            warn!("{} is not set", env::SHOP_NAME);
        }
        if access_token.is_empty() {
            warn!("{} is not set; requests will be rejected", env::ACCESS_TOKEN);
        }

        Self::new(shop_name, access_token, api_version)
    }

    /// Endpoint for creating products
    pub fn products_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/products.json",
            self.shop_name, self.api_version
        )
    }
}

impl std::fmt::Debug for ShopConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopConfig")
            .field("shop_name", &self.shop_name)
            .field("access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}
