//! Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;
use tracing::info;

use bazaar_app::domain::orders::models::Buyer;

use crate::{extensions::*, purchase::errors::into_status_error, state::State, views};

/// Purchase form submission
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PurchaseForm {
    pub(crate) person: String,
    pub(crate) address: String,
}

/// Checkout Handler
///
/// Valid submissions always get the thank-you message, whether or not the
/// session had anything in its cart. Invalid ones get the form back.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let form = req
        .parse_form::<PurchaseForm>()
        .await
        .or_400("invalid purchase form")?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_500()?;

    let buyer = match Buyer::new(&form.person, &form.address) {
        Ok(buyer) => buyer,
        Err(errors) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Text::Html(views::purchase::form(
                &form.person,
                &form.address,
                &errors,
            )));

            return Ok(());
        }
    };

    let person = buyer.person().to_string();

    let order = state
        .app
        .orders
        .checkout(session, buyer)
        .await
        .map_err(into_status_error)?;

    if order.is_none() {
        info!(%session, "checkout with empty cart");
    }

    res.render(Text::Plain(views::purchase::thank_you(&person)));

    Ok(())
}
