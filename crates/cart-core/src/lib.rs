//! Cart domain types for the storefront cart page.
//!
//! This crate provides the pieces the cart view is rendered from:
//!
//! - **Product**: a line item in the cart, with its quantity
//! - **Prices**: currency-aware price formatting (`format_price`)
//! - **Store**: the `CartStore` capability contract and an in-memory store
//! - **Logging / Config**: structured logs and storefront configuration
//!
//! # Example
//!
//! ```rust
//! use cart_core::prelude::*;
//!
//! let store = MemoryCartStore::new().with_products(vec![
//!     Product::new(ProductId::new(1), "Tênis de Caminhada", 10.0, "https://img/1.jpg", 2),
//! ]);
//!
//! store.update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3));
//! assert_eq!(store.cart()[0].amount, 3);
//! assert_eq!(format_price(25.0), "R$\u{a0}25,00");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod logging;
pub mod money;
pub mod product;
pub mod store;

pub use config::{StorefrontConfig, CONFIG_ENV_VAR};
pub use error::CartError;
pub use ids::ProductId;
pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
pub use money::{format_price, Currency, PriceFormatter};
pub use product::Product;
pub use store::{
    remove_item, set_item_amount, unit_count, CartStore, MemoryCartStore, UpdateProductAmount,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::logging::{LogFormat, LogLevel, StructuredLogger};
    pub use crate::money::{format_price, Currency, PriceFormatter};
    pub use crate::product::Product;
    pub use crate::store::{CartStore, MemoryCartStore, UpdateProductAmount};
}
