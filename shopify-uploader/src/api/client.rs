//! HTTP client for the Shopify Admin products endpoint

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use super::constants::ACCESS_TOKEN_HEADER;
use super::models::{ProductPayload, ProductRequest, SubmitOutcome};
use crate::config::ShopConfig;

/// Something that can create a product from a payload.
///
/// `Ok` means a response was received, whatever its status; `Err` is a
/// transport failure (DNS, TLS, connection reset, ...).
#[async_trait]
pub trait ProductSubmitter: Send + Sync {
    async fn submit(&self, payload: &ProductPayload) -> Result<SubmitOutcome>;
}

/// Shopify Admin REST client bound to one store
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    products_url: String,
}

impl ShopifyClient {
    pub fn new(config: &ShopConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut token = HeaderValue::from_str(&config.access_token)
            .context("Access token contains characters not allowed in an HTTP header")?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            products_url: config.products_url(),
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

#[async_trait]
impl ProductSubmitter for ShopifyClient {
    async fn submit(&self, payload: &ProductPayload) -> Result<SubmitOutcome> {
        debug!("POST {} (handle: {})", self.products_url, payload.handle);

        let response = self
            .http
            .post(&self.products_url)
            .json(&ProductRequest { product: payload })
            .send()
            .await
            .with_context(|| format!("Failed to send product '{}'", payload.handle))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        debug!("Response {} for handle {}", status, payload.handle);
        Ok(SubmitOutcome::from_status(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_shop_url() {
        let config = ShopConfig::new("shop.myshopify.com", "shpat_123", "2024-01");
        let client = ShopifyClient::new(&config).unwrap();
        assert_eq!(
            client.products_url(),
            "https://shop.myshopify.com/admin/api/2024-01/products.json"
        );
    }

    #[test]
    fn test_empty_token_still_builds() {
        let config = ShopConfig::new("shop.myshopify.com", "", "2023-10");
        assert!(ShopifyClient::new(&config).is_ok());
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let config = ShopConfig::new("shop.myshopify.com", "bad\ntoken", "2023-10");
        assert!(ShopifyClient::new(&config).is_err());
    }
}
