//! Product catalog import
//!
//! Reads the product CSV, groups variant rows by handle and builds one
//! Shopify product payload per group, including the generated
//! description and size chart.

pub mod builder;
pub mod columns;
pub mod dataset;
pub mod error;
pub mod group;
pub mod size_table;
pub mod sku;

pub use builder::PayloadBuilder;
pub use dataset::{DEFAULT_ENCODING, Dataset};
pub use error::GroupError;
pub use group::{ProductGroup, group_rows};
