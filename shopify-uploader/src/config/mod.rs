//! Runtime configuration: shop credentials and import settings

pub mod settings;
pub mod shop;

pub use settings::{DEFAULT_FABRIC, ImportSettings, SettingsOverrides};
pub use shop::ShopConfig;
