//! Purchase form page

use std::fmt::Write as _;

use bazaar_app::domain::orders::{BuyerError, models::MAX_BUYER_FIELD_LEN};

use super::{escape, layout};

pub(crate) fn form(person: &str, address: &str, errors: &[BuyerError]) -> String {
    let mut body = String::new();

    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");

        for error in errors {
            _ = writeln!(body, "<li>{}</li>", escape(&error.to_string()));
        }

        body.push_str("</ul>\n");
    }

    _ = write!(
        body,
        r#"<form method="post" action="/purchase">
<p><label for="person">Name</label>
<input id="person" name="person" maxlength="{MAX_BUYER_FIELD_LEN}" required value="{person}"></p>
<p><label for="address">Address</label>
<input id="address" name="address" maxlength="{MAX_BUYER_FIELD_LEN}" required value="{address}"></p>
<p><button type="submit">Purchase</button></p>
</form>
"#,
        person = escape(person),
        address = escape(address),
    );

    layout("Checkout", &body)
}

pub(crate) fn thank_you(person: &str) -> String {
    format!("Thank you for your purchase, {person}!")
}
