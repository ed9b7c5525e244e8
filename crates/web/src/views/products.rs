//! Product list page

use std::fmt::Write as _;

use rusty_money::iso::Currency;

use bazaar_app::domain::products::models::Product;

use super::{escape, layout, money};

pub(crate) fn index(products: &[Product], cart_lines: usize, currency: &'static Currency) -> String {
    let mut body = format!(
        r#"<p><a href="/cart">Cart ({cart_lines} {})</a></p>
<p>Buy any two different products and get 40% off the third item in your cart.</p>
"#,
        if cart_lines == 1 { "item" } else { "items" }
    );

    if products.is_empty() {
        body.push_str("<p>No products available.</p>\n");

        return layout("Products", &body);
    }

    body.push_str("<ul class=\"products\">\n");

    for product in products {
        _ = writeln!(
            body,
            r#"<li><span class="name">{name}</span> <span class="price">{price}</span>
<form method="post" action="/cart/add/{uuid}"><button type="submit">Add to cart</button></form></li>"#,
            name = escape(&product.name),
            price = money(product.price, currency),
            uuid = product.uuid,
        );
    }

    body.push_str("</ul>\n");

    layout("Products", &body)
}
