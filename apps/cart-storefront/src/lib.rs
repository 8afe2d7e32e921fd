//! Storefront cart page.
//!
//! A Leptos app whose `/cart` route renders the cart view:
//! - `use_cart()` gives components the reactive cart store
//! - `CartPage` shows line items, quantity controls and the total
//! - Streaming SSR on Spin with the `ssr` feature, hydration with `hydrate`

pub mod app;
pub mod cart;

#[cfg(feature = "ssr")]
mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
