//! Display data derived from the cart.

use cart_core::{Product, ProductId, PriceFormatter};
use serde::Serialize;

/// A line item with its prices formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedProduct {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub amount: u32,
    /// Formatted unit price.
    pub price: String,
    /// Formatted subtotal (unit price times amount).
    pub price_amount: String,
    /// The line item this entry was derived from.
    pub origin: Product,
}

impl FormattedProduct {
    /// Derive the display entry for one line item.
    pub fn new(product: &Product, formatter: &PriceFormatter) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            amount: product.amount,
            price: formatter.format(product.price),
            price_amount: formatter.format(product.subtotal()),
            origin: product.clone(),
        }
    }

    /// Whether the decrement control is disabled for this line.
    pub fn decrement_disabled(&self) -> bool {
        is_decrement_disabled(self.amount)
    }
}

/// The decrement control is disabled at one unit or less.
pub fn is_decrement_disabled(amount: u32) -> bool {
    amount <= 1
}

/// Derive display entries for every line item, in cart order.
pub fn format_cart(cart: &[Product], formatter: &PriceFormatter) -> Vec<FormattedProduct> {
    cart.iter()
        .map(|product| FormattedProduct::new(product, formatter))
        .collect()
}

/// Sum of `amount * price` over the cart.
pub fn cart_total(cart: &[Product]) -> f64 {
    cart.iter()
        .fold(0.0, |sum_total, product| sum_total + f64::from(product.amount) * product.price)
}

/// The cart total, formatted.
pub fn formatted_total(cart: &[Product], formatter: &PriceFormatter) -> String {
    formatter.format(cart_total(cart))
}

/// Everything the page shows for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub items: Vec<FormattedProduct>,
    pub total: String,
}

impl CartSnapshot {
    pub fn from_cart(cart: &[Product], formatter: &PriceFormatter) -> Self {
        Self {
            items: format_cart(cart, formatter),
            total: formatted_total(cart, formatter),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::Currency;

    fn product(id: u32, price: f64, amount: u32) -> Product {
        Product::new(ProductId::new(id), "Tênis", price, "https://img", amount)
    }

    #[test]
    fn test_format_cart_keeps_origin() {
        let cart = vec![product(1, 10.0, 2)];
        let formatted = format_cart(&cart, &PriceFormatter::default());

        assert_eq!(formatted[0].price, "R$\u{a0}10,00");
        assert_eq!(formatted[0].price_amount, "R$\u{a0}20,00");
        assert_eq!(formatted[0].origin, cart[0]);
    }

    #[test]
    fn test_cart_total() {
        let cart = vec![product(1, 10.0, 2), product(2, 5.0, 1)];
        assert_eq!(cart_total(&cart), 25.0);
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_total_rounds_only_when_formatted() {
        let cart = vec![product(1, 0.1, 1), product(2, 0.2, 1)];
        assert_ne!(cart_total(&cart), 0.3);
        assert_eq!(formatted_total(&cart, &PriceFormatter::default()), "R$\u{a0}0,30");
    }

    #[test]
    fn test_snapshot_uses_formatter_currency() {
        let cart = vec![product(1, 1999.0, 1)];
        let snapshot = CartSnapshot::from_cart(&cart, &PriceFormatter::new(Currency::USD));
        assert_eq!(snapshot.total, "$1,999.00");
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_decrement_disabled() {
        assert!(is_decrement_disabled(0));
        assert!(is_decrement_disabled(1));
        assert!(!is_decrement_disabled(2));
    }
}
