//! Healthcheck Handler

use salvo::prelude::*;

/// Healthcheck handler
///
/// Answers `ok` while the server is accepting requests.
#[handler]
pub(crate) async fn handler() -> Text<&'static str> {
    Text::Plain("ok")
}
