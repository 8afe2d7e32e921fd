//! The cart store contract and an in-memory store.
//!
//! A [`CartStore`] owns the ordered line items. Views read a copy of the cart
//! and send requests back; requests never report an outcome to the caller.
//! Whether and how a rejected request is surfaced is up to the store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::ProductId;
use crate::logging::StructuredLogger;
use crate::product::Product;

/// Request to set a line item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: u32,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }
}

/// Cart state capability consumed by the cart view.
pub trait CartStore {
    /// Current line items, in cart order.
    fn cart(&self) -> Vec<Product>;

    /// Request deletion of a line item.
    fn remove_product(&self, product_id: ProductId);

    /// Request a new quantity for a line item.
    fn update_product_amount(&self, update: UpdateProductAmount);
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn cart(&self) -> Vec<Product> {
        (**self).cart()
    }

    fn remove_product(&self, product_id: ProductId) {
        (**self).remove_product(product_id)
    }

    fn update_product_amount(&self, update: UpdateProductAmount) {
        (**self).update_product_amount(update)
    }
}

impl<S: CartStore + ?Sized> CartStore for Rc<S> {
    fn cart(&self) -> Vec<Product> {
        (**self).cart()
    }

    fn remove_product(&self, product_id: ProductId) {
        (**self).remove_product(product_id)
    }

    fn update_product_amount(&self, update: UpdateProductAmount) {
        (**self).update_product_amount(update)
    }
}

/// Set the amount of the line item with the given id.
///
/// Returns whether the item was found. Other items and their order are untouched.
pub fn set_item_amount(items: &mut [Product], update: UpdateProductAmount) -> bool {
    match items.iter_mut().find(|p| p.id == update.product_id) {
        Some(item) => {
            item.amount = update.amount;
            true
        }
        None => false,
    }
}

/// Remove the line item with the given id. Returns whether it was found.
pub fn remove_item(items: &mut Vec<Product>, product_id: ProductId) -> bool {
    let len_before = items.len();
    items.retain(|p| p.id != product_id);
    items.len() < len_before
}

/// Total number of units across line items.
pub fn unit_count(items: &[Product]) -> u64 {
    items.iter().map(|p| u64::from(p.amount)).sum()
}

/// In-memory cart store.
///
/// Quantities are kept at one or more and, for products with a known stock
/// level, at or below that stock. Rejected requests are logged at warn level
/// and counted.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    items: RefCell<Vec<Product>>,
    stock: HashMap<ProductId, u32>,
    failures: Cell<usize>,
    logger: StructuredLogger,
}

impl MemoryCartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            logger: StructuredLogger::default().with_component("cart-store"),
            ..Default::default()
        }
    }

    /// Seed the store with line items.
    pub fn with_products(self, products: Vec<Product>) -> Self {
        *self.items.borrow_mut() = products;
        self
    }

    /// Record the available stock for a product.
    pub fn with_stock(mut self, product_id: ProductId, available: u32) -> Self {
        self.stock.insert(product_id, available);
        self
    }

    /// Use the given logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Add a product, or one more unit of it if already in the cart.
    pub fn add_product(&self, product: Product) -> Result<(), CartError> {
        let existing = self
            .items
            .borrow()
            .iter()
            .find(|p| p.id == product.id)
            .map(|p| p.amount);

        match existing {
            Some(amount) => {
                let next = amount.checked_add(1).ok_or(CartError::Overflow)?;
                self.try_update_product_amount(UpdateProductAmount::new(product.id, next))
            }
            None => {
                let amount = product.amount.max(1);
                self.check_stock(product.id, amount)?;
                self.items.borrow_mut().push(Product { amount, ..product });
                Ok(())
            }
        }
    }

    /// Set a line item's quantity, reporting why a request was rejected.
    pub fn try_update_product_amount(&self, update: UpdateProductAmount) -> Result<(), CartError> {
        if update.amount == 0 {
            return Err(CartError::InvalidAmount(update.amount));
        }
        self.check_stock(update.product_id, update.amount)?;

        if !set_item_amount(&mut self.items.borrow_mut(), update) {
            return Err(CartError::ProductNotFound(update.product_id));
        }
        Ok(())
    }

    /// Remove a line item, reporting an unknown product.
    pub fn try_remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        if !remove_item(&mut self.items.borrow_mut(), product_id) {
            return Err(CartError::ProductNotFound(product_id));
        }
        Ok(())
    }

    /// Number of requests rejected through the [`CartStore`] interface.
    pub fn failures(&self) -> usize {
        self.failures.get()
    }

    /// Serialize the line items as JSON.
    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string(&*self.items.borrow())?)
    }

    /// Build a store from JSON line items.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new().with_products(products))
    }

    fn check_stock(&self, product_id: ProductId, requested: u32) -> Result<(), CartError> {
        match self.stock.get(&product_id) {
            Some(&available) if requested > available => Err(CartError::OutOfStock {
                product_id,
                requested,
                available,
            }),
            _ => Ok(()),
        }
    }

    fn record_failure(&self, operation: &str, product_id: ProductId, err: &CartError) {
        self.failures.set(self.failures.get() + 1);
        self.logger
            .warn_builder("Cart request rejected")
            .field("operation", operation)
            .field_i64("product_id", i64::from(product_id.get()))
            .field("error", err.to_string())
            .emit();
    }
}

impl CartStore for MemoryCartStore {
    fn cart(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    fn remove_product(&self, product_id: ProductId) {
        if let Err(e) = self.try_remove_product(product_id) {
            self.record_failure("remove_product", product_id, &e);
        }
    }

    fn update_product_amount(&self, update: UpdateProductAmount) {
        if let Err(e) = self.try_update_product_amount(update) {
            self.record_failure("update_product_amount", update.product_id, &e);
        }
    }
}
