//! Cart Receipt Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Receipt Handler
///
/// Renders the session's cart as a plain-text table.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_500()?;

    let receipt = state
        .app
        .carts
        .receipt(session)
        .await
        .map_err(into_status_error)?;

    Ok(Text::Plain(receipt))
}
