//! Cart error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur when a cart store applies a request.
#[derive(Error, Debug)]
pub enum CartError {
    /// Product is not in the cart.
    #[error("Product not in cart: {0}")]
    ProductNotFound(ProductId),

    /// Requested amount is below the one-unit floor.
    #[error("Invalid amount: {0}")]
    InvalidAmount(u32),

    /// Requested amount exceeds the known stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart quantity")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
