//! HTML Views
//!
//! Pages are small enough to be built with `format!`. Every value that comes
//! from the database or the request goes through [`escape`].

use rusty_money::{Money, iso::Currency};

pub(crate) mod carts;
pub(crate) mod products;
pub(crate) mod purchase;

/// Escape text for use in HTML element content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Format minor units in the shop currency, e.g. `$12.00`.
pub(crate) fn money(amount: u64, currency: &'static Currency) -> String {
    i64::try_from(amount).map_or_else(
        |_err| amount.to_string(),
        |minor| Money::from_minor(minor, currency).to_string(),
    )
}

/// Wrap page content in the shared document layout.
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Bazaar</title>
</head>
<body>
<nav><a href="/">Products</a> | <a href="/cart">Cart</a> | <a href="/purchase">Checkout</a></nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}
