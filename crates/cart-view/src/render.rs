//! HTML renderer for the cart page.
//!
//! Rows and controls carry fixed `data-testid` hooks (`product`,
//! `decrement-product`, `product-amount`, `increment-product`,
//! `remove-product`). Buttons also carry `data-product-id` and `data-action`
//! so a host page can route clicks back through [`crate::CartAction`].

use crate::formatted::{CartSnapshot, FormattedProduct};

/// Render the full cart page.
pub fn render_cart_page(snapshot: &CartSnapshot) -> String {
    let rows: String = snapshot.items.iter().map(render_product_row).collect();

    format!(
        r#"<div class="cart-container">
    <table class="product-table">
        <thead>
            <tr>
                <th aria-label="product image"></th>
                <th>PRODUTO</th>
                <th>QTD</th>
                <th>SUBTOTAL</th>
                <th aria-label="delete icon"></th>
            </tr>
        </thead>
        <tbody>{rows}</tbody>
    </table>
    <footer>
        <button type="button">Finalizar pedido</button>
        <div class="total">
            <span>TOTAL</span>
            <strong data-testid="cart-total">{total}</strong>
        </div>
    </footer>
</div>"#,
        rows = rows,
        total = escape_html(&snapshot.total),
    )
}

/// Render one line item row.
pub fn render_product_row(product: &FormattedProduct) -> String {
    let id = product.id;
    let disabled = if product.decrement_disabled() {
        " disabled"
    } else {
        ""
    };

    format!(
        r#"
            <tr data-testid="product" data-product-id="{id}">
                <td><img src="{image}" alt="{title}"></td>
                <td>
                    <strong>{title}</strong>
                    <span>{price}</span>
                </td>
                <td>
                    <div>
                        <button type="button" data-testid="decrement-product" data-action="decrement" data-product-id="{id}"{disabled}>-</button>
                        <input type="text" data-testid="product-amount" readonly value="{amount}">
                        <button type="button" data-testid="increment-product" data-action="increment" data-product-id="{id}">+</button>
                    </div>
                </td>
                <td><strong>{price_amount}</strong></td>
                <td>
                    <button type="button" data-testid="remove-product" data-action="remove" data-product-id="{id}">Remover</button>
                </td>
            </tr>"#,
        id = id,
        image = escape_html(&product.image),
        title = escape_html(&product.title),
        price = escape_html(&product.price),
        disabled = disabled,
        amount = product.amount,
        price_amount = escape_html(&product.price_amount),
    )
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{PriceFormatter, Product, ProductId};

    fn snapshot(products: Vec<Product>) -> CartSnapshot {
        CartSnapshot::from_cart(&products, &PriceFormatter::default())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_row_escapes_title() {
        let html = render_cart_page(&snapshot(vec![Product::new(
            ProductId::new(1),
            "<script>",
            1.0,
            "https://img/\"x\".jpg",
            1,
        )]));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"src="https://img/&quot;x&quot;.jpg""#));
    }

    #[test]
    fn test_decrement_disabled_attribute() {
        let html = render_product_row(&snapshot(vec![Product::new(
            ProductId::new(7),
            "Tênis",
            1.0,
            "https://img",
            1,
        )])
        .items[0]);
        assert!(html.contains(r#"data-product-id="7" disabled>"#));

        let html = render_product_row(&snapshot(vec![Product::new(
            ProductId::new(7),
            "Tênis",
            1.0,
            "https://img",
            2,
        )])
        .items[0]);
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_headers() {
        let html = render_cart_page(&snapshot(vec![]));
        for header in ["PRODUTO", "QTD", "SUBTOTAL", "TOTAL", "Finalizar pedido"] {
            assert!(html.contains(header), "missing {header}");
        }
    }
}
