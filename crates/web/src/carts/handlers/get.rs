//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{carts::errors::into_status_error, extensions::*, state::State, views};

/// Get Cart Handler
///
/// Shows the session's cart priced with the current promotion.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_500()?;

    let summary = state
        .app
        .carts
        .view_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(Text::Html(views::carts::show(&summary)))
}
