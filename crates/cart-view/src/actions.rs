//! Quantity and removal handlers.
//!
//! Handlers send one request to the store and return. They never wait for or
//! inspect an outcome; a store that rejects a request deals with it itself.

use cart_core::{CartStore, ProductId, StructuredLogger, UpdateProductAmount};
use serde::{Deserialize, Serialize};

/// A line item's id and the amount currently shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAmount {
    pub product_id: ProductId,
    pub amount: u32,
}

impl ProductAmount {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }
}

/// A page event addressed to one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "productId", rename_all = "lowercase")]
pub enum CartAction {
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
}

/// Handlers bound to a store.
pub struct CartActions<S> {
    store: S,
    logger: StructuredLogger,
}

impl<S: CartStore> CartActions<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            logger: StructuredLogger::default().with_component("cart-view"),
        }
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Request one more unit. No upper bound is applied here.
    pub fn handle_product_increment(&self, product: ProductAmount) {
        self.store.update_product_amount(UpdateProductAmount::new(
            product.product_id,
            product.amount.saturating_add(1),
        ));
    }

    /// Request one less unit, unless that would leave none.
    ///
    /// The request is dropped silently when the result would not stay above
    /// zero, even though the control is already disabled in that state.
    pub fn handle_product_decrement(&self, product: ProductAmount) {
        match product.amount.checked_sub(1) {
            Some(amount) if amount > 0 => {
                self.store
                    .update_product_amount(UpdateProductAmount::new(product.product_id, amount));
            }
            _ => {
                self.logger
                    .debug_builder("Decrement below one unit ignored")
                    .field_i64("product_id", i64::from(product.product_id.get()))
                    .field_i64("amount", i64::from(product.amount))
                    .emit();
            }
        }
    }

    /// Request removal of the line item.
    pub fn handle_remove_product(&self, product_id: ProductId) {
        self.store.remove_product(product_id);
    }

    /// Route an event to its handler, using the amount the store holds now.
    ///
    /// Events for products no longer in the cart are dropped.
    pub fn dispatch(&self, action: CartAction) {
        match action {
            CartAction::Increment(product_id) => {
                if let Some(current) = self.current_amount(product_id) {
                    self.handle_product_increment(current);
                }
            }
            CartAction::Decrement(product_id) => {
                if let Some(current) = self.current_amount(product_id) {
                    self.handle_product_decrement(current);
                }
            }
            CartAction::Remove(product_id) => self.handle_remove_product(product_id),
        }
    }

    fn current_amount(&self, product_id: ProductId) -> Option<ProductAmount> {
        let amount = self
            .store
            .cart()
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.amount);

        if amount.is_none() {
            self.logger
                .debug_builder("Action for product not in cart ignored")
                .field_i64("product_id", i64::from(product_id.get()))
                .emit();
        }
        amount.map(|amount| ProductAmount::new(product_id, amount))
    }
}
