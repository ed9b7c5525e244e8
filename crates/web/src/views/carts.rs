//! Cart page

use std::fmt::Write as _;

use bazaar_app::domain::carts::summary::CartSummary;

use super::{escape, layout};

pub(crate) fn show(summary: &CartSummary) -> String {
    if summary.is_empty() {
        return layout(
            "Cart",
            "<p>Your cart is empty.</p>\n<p><a href=\"/\">Continue shopping</a></p>\n",
        );
    }

    let mut body = String::from(
        "<table class=\"cart\">\n<thead><tr><th>#</th><th>Item</th><th>Price</th><th>Discount</th><th>Total</th><th></th></tr></thead>\n<tbody>\n",
    );

    for line in &summary.lines {
        let discount = if line.discount > 0 {
            format!("-{}", summary.format_amount(line.discount))
        } else {
            String::new()
        };

        _ = writeln!(
            body,
            r#"<tr><td>{number}</td><td>{name}</td><td>{price}</td><td>{discount}</td><td>{total}</td><td><form method="post" action="/cart/remove/{item}"><button type="submit">Remove</button></form></td></tr>"#,
            number = line.number,
            name = escape(&line.product_name),
            price = summary.format_amount(line.price),
            total = summary.format_amount(line.total),
            item = line.item_uuid,
        );
    }

    body.push_str("</tbody>\n</table>\n");

    _ = writeln!(
        body,
        "<p>Subtotal: {}</p>",
        summary.format_amount(summary.subtotal)
    );

    if summary.discount_applied() {
        _ = writeln!(
            body,
            "<p class=\"discount\">Discount: -{}</p>",
            summary.format_amount(summary.discount)
        );
    }

    _ = writeln!(
        body,
        "<p><strong>Total: {}</strong></p>\n<p><a href=\"/cart/receipt\">Receipt</a> | <a href=\"/purchase\">Checkout</a></p>",
        summary.format_amount(summary.total)
    );

    layout("Cart", &body)
}
