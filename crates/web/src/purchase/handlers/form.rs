//! Purchase Form Handler

use salvo::prelude::*;

use crate::views;

#[handler]
pub(crate) async fn handler() -> Text<String> {
    Text::Html(views::purchase::form("", "", &[]))
}
