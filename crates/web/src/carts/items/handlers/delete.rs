//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::debug;
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
///
/// Removes a line from the session's cart. Unknown lines are ignored.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_500()?;

    if let Some(item) = req.param::<Uuid>("item") {
        let removed = state
            .app
            .carts
            .remove_item(session, item.into())
            .await
            .map_err(into_status_error)?;

        if !removed {
            debug!(%item, "cart item not in session cart");
        }
    }

    res.see_other("/cart")
}

/// Removing only happens through the cart page form.
#[handler]
pub(crate) async fn redirect(res: &mut Response) -> Result<(), StatusError> {
    res.see_other("/cart")
}
