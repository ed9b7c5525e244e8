//! Add Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Add Cart Item Handler
///
/// Appends one unit of the product to the session's cart and returns to the
/// product list.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let product = req
        .param::<Uuid>("product")
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_500()?;

    state
        .app
        .carts
        .add_item(session, product.into())
        .await
        .map_err(into_status_error)?;

    res.see_other("/")
}

/// Adding only happens through the product list form.
#[handler]
pub(crate) async fn redirect(res: &mut Response) -> Result<(), StatusError> {
    res.see_other("/")
}
