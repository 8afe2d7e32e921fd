//! Reactive cart store shared through context.

use cart_core::{
    remove_item, set_item_amount, unit_count, CartStore, Product, ProductId, UpdateProductAmount,
};
use leptos::prelude::*;

/// Cart state for the page, readable and writable from any component.
///
/// Reading through [`CartStore::cart`] subscribes the calling reactive scope,
/// so views re-render when a handler changes the cart.
#[derive(Debug, Clone, Copy)]
pub struct CartContext {
    items: RwSignal<Vec<Product>>,
}

impl CartContext {
    pub fn new(initial: Vec<Product>) -> Self {
        Self {
            items: RwSignal::new(initial),
        }
    }

    /// Total number of units in the cart.
    pub fn item_count(&self) -> u64 {
        self.items.with(|items| unit_count(items))
    }
}

impl CartStore for CartContext {
    fn cart(&self) -> Vec<Product> {
        self.items.get()
    }

    fn remove_product(&self, product_id: ProductId) {
        self.items.update(|items| {
            remove_item(items, product_id);
        });
    }

    fn update_product_amount(&self, update: UpdateProductAmount) {
        if update.amount == 0 {
            return;
        }
        self.items.update(|items| {
            set_item_amount(items, update);
        });
    }
}

/// Install the cart store for the component tree.
pub fn provide_cart(initial: Vec<Product>) -> CartContext {
    let cart = CartContext::new(initial);
    provide_context(cart);
    cart
}

/// The cart store installed by [`provide_cart`].
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}

/// Products the demo session starts with.
pub fn demo_cart() -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new(1),
            "Tênis de Caminhada Leve Confortável",
            179.9,
            "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg",
            2,
        ),
        Product::new(
            ProductId::new(2),
            "Tênis VR Caminhada Confortável Detalhes Couro Masculino",
            139.9,
            "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis2.jpg",
            1,
        ),
    ]
}
