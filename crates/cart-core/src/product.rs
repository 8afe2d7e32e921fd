//! Cart line item.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// One product entry in the cart, with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price in currency units.
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Quantity in the cart. Stores keep this at one or more.
    pub amount: u32,
}

impl Product {
    /// Create a new line item.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        amount: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            amount,
        }
    }

    /// Unit price times amount.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}
