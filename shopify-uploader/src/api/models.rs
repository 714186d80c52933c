//! Request and response types for the Shopify Admin products endpoint

use serde::Serialize;

/// Publication status of a created product. Products are only ever
/// created as drafts for review in the Shopify admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
}

/// Who tracks a variant's inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryManagement {
    Shopify,
}

/// A product option definition (e.g. size, color)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOption {
    pub name: String,
}

impl ProductOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One sellable size/color combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub option1: Option<String>,
    pub option2: Option<String>,
    pub price: String,
    pub sku: String,
    pub inventory_quantity: i64,
    pub inventory_management: InventoryManagement,
}

/// Product creation payload, one per handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPayload {
    pub handle: String,
    pub title: String,
    pub status: ProductStatus,
    pub body_html: String,
    pub vendor: String,
    pub product_type: String,
    pub tags: String,
    pub options: Vec<ProductOption>,
    pub variants: Vec<Variant>,
}

/// Request envelope expected by `POST /products.json`
#[derive(Debug, Serialize)]
pub struct ProductRequest<'a> {
    pub product: &'a ProductPayload,
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether the API accepted the product (HTTP 201)
    pub succeeded: bool,
    pub status_code: u16,
    pub response_body: String,
}

impl SubmitOutcome {
    pub fn from_status(status_code: u16, response_body: impl Into<String>) -> Self {
        Self {
            succeeded: status_code == 201,
            status_code,
            response_body: response_body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let payload = ProductPayload {
            handle: "TSHIRT-RED".to_string(),
            title: "Red Tee".to_string(),
            status: ProductStatus::Draft,
            body_html: "<p></p>".to_string(),
            vendor: "Plum".to_string(),
            product_type: "T-Shirt".to_string(),
            tags: "summer, cotton".to_string(),
            options: vec![ProductOption::new("サイズ"), ProductOption::new("色")],
            variants: vec![Variant {
                option1: Some("S".to_string()),
                option2: None,
                price: "1980".to_string(),
                sku: "ABC-123-001".to_string(),
                inventory_quantity: 10,
                inventory_management: InventoryManagement::Shopify,
            }],
        };

        let value = serde_json::to_value(ProductRequest { product: &payload }).unwrap();
        assert_eq!(value["product"]["status"], json!("draft"));
        assert_eq!(value["product"]["options"][0]["name"], json!("サイズ"));
        assert_eq!(
            value["product"]["variants"][0],
            json!({
                "option1": "S",
                "option2": null,
                "price": "1980",
                "sku": "ABC-123-001",
                "inventory_quantity": 10,
                "inventory_management": "shopify"
            })
        );
    }

    #[test]
    fn test_only_201_succeeds() {
        assert!(SubmitOutcome::from_status(201, "").succeeded);
        assert!(!SubmitOutcome::from_status(200, "").succeeded);
        assert!(!SubmitOutcome::from_status(422, "{\"errors\":{}}").succeeded);
    }
}
