//! Application components and pages.

use cart_core::{CartStore, PriceFormatter, StorefrontConfig};
use cart_view::{CartActions, CartSnapshot, FormattedProduct, ProductAmount};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::cart::{demo_cart, provide_cart, use_cart, CartContext};

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provided by the server from STOREFRONT_CONFIG; the client falls back to defaults.
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    provide_context(config.price_formatter());
    provide_context(config.logger("cart-view"));
    provide_cart(demo_cart());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/cart_storefront.css"/>
        <Title text="Carrinho | Storefront"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/cart") view=CartPage/>
                </Routes>
            </main>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let cart = use_cart();

    view! {
        <header>
            <a href="/"><h1>"Storefront"</h1></a>
            <a href="/cart" class="cart-link">
                <strong>"Meu carrinho"</strong>
                <span>{move || format!("{} itens", cart.item_count())}</span>
            </a>
        </header>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <a href="/cart" class="btn">"Ver carrinho"</a>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <a href="/">"Voltar"</a>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

/// Shopping cart page.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let formatter = use_context::<PriceFormatter>().unwrap_or_default();
    let mut cart_actions = CartActions::new(cart);
    if let Some(logger) = use_context::<cart_core::StructuredLogger>() {
        cart_actions = cart_actions.with_logger(logger);
    }
    let actions = StoredValue::new(cart_actions);

    // Derived on every read, from the store's current items.
    let snapshot = move || CartSnapshot::from_cart(&cart.cart(), &formatter);

    view! {
        <div class="cart-container">
            <table class="product-table">
                <thead>
                    <tr>
                        <th aria-label="product image"></th>
                        <th>"PRODUTO"</th>
                        <th>"QTD"</th>
                        <th>"SUBTOTAL"</th>
                        <th aria-label="delete icon"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        snapshot()
                            .items
                            .into_iter()
                            .map(|product| view! { <CartRow product=product actions=actions/> })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <footer>
                <button type="button">"Finalizar pedido"</button>
                <div class="total">
                    <span>"TOTAL"</span>
                    <strong data-testid="cart-total">{move || snapshot().total}</strong>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn CartRow(
    product: FormattedProduct,
    actions: StoredValue<CartActions<CartContext>>,
) -> impl IntoView {
    let current = ProductAmount::new(product.id, product.amount);
    let product_id = product.id;
    let decrement_disabled = product.decrement_disabled();

    view! {
        <tr data-testid="product">
            <td>
                <img src=product.image alt=product.title.clone()/>
            </td>
            <td>
                <strong>{product.title}</strong>
                <span>{product.price}</span>
            </td>
            <td>
                <div>
                    <button
                        type="button"
                        data-testid="decrement-product"
                        disabled=decrement_disabled
                        on:click=move |_| actions.with_value(|a| a.handle_product_decrement(current))
                    >
                        "-"
                    </button>
                    <input
                        type="text"
                        data-testid="product-amount"
                        readonly=true
                        value=product.amount.to_string()
                    />
                    <button
                        type="button"
                        data-testid="increment-product"
                        on:click=move |_| actions.with_value(|a| a.handle_product_increment(current))
                    >
                        "+"
                    </button>
                </div>
            </td>
            <td>
                <strong>{product.price_amount}</strong>
            </td>
            <td>
                <button
                    type="button"
                    data-testid="remove-product"
                    on:click=move |_| actions.with_value(|a| a.handle_remove_product(product_id))
                >
                    "Remover"
                </button>
            </td>
        </tr>
    }
}
