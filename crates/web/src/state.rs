//! State

use std::sync::Arc;

use bazaar_app::context::AppContext;
use rusty_money::iso::Currency;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    /// Currency every price in the shop is in.
    pub(crate) fn currency(&self) -> &'static Currency {
        self.app.currency
    }
}
