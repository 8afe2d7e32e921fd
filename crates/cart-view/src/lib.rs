//! Cart page view.
//!
//! Renders the shopping-cart page from a [`CartStore`]:
//! - Derived display data per line item (unit price and subtotal, formatted)
//! - The cart total
//! - Increment / decrement / remove handlers that send requests back to the store
//! - HTML for the page, with `data-testid` hooks on rows and controls
//!
//! Nothing derived here is stored: every [`CartView::snapshot`] and
//! [`CartView::render`] reads the store again.

mod actions;
mod formatted;
mod render;

pub use actions::*;
pub use formatted::*;
pub use render::*;

use cart_core::{CartStore, PriceFormatter, StructuredLogger};

/// The cart page bound to a store.
pub struct CartView<S> {
    actions: CartActions<S>,
    formatter: PriceFormatter,
}

impl<S: CartStore> CartView<S> {
    /// Create a view over a store, formatting prices in the default currency.
    pub fn new(store: S) -> Self {
        Self {
            actions: CartActions::new(store),
            formatter: PriceFormatter::default(),
        }
    }

    /// Use the given price formatter.
    pub fn with_formatter(mut self, formatter: PriceFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Use the given logger for handler diagnostics.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.actions = self.actions.with_logger(logger);
        self
    }

    /// The store this view reads from.
    pub fn store(&self) -> &S {
        self.actions.store()
    }

    /// Handlers that send requests to the store.
    pub fn actions(&self) -> &CartActions<S> {
        &self.actions
    }

    /// Derive the display data for the current cart.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from_cart(&self.store().cart(), &self.formatter)
    }

    /// Render the page for the current cart.
    pub fn render(&self) -> String {
        render_cart_page(&self.snapshot())
    }

    /// Route a page event to its handler.
    pub fn dispatch(&self, action: CartAction) {
        self.actions.dispatch(action);
    }
}
