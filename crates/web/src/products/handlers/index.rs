//! Product List Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::errors::into_status_error as cart_status_error, extensions::*,
    products::errors::into_status_error, state::State, views,
};

/// Product List Handler
///
/// Lists the catalog with an add-to-cart button per product.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_500()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    let count = state
        .app
        .carts
        .line_count(session)
        .await
        .map_err(cart_status_error)?;

    Ok(Text::Html(views::products::index(
        &products,
        count,
        state.currency(),
    )))
}
