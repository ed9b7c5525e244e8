//! Shop Config

use std::path::PathBuf;

use clap::Args;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

/// The configured currency code is not an ISO 4217 currency.
#[derive(Debug, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

/// Shop settings.
#[derive(Debug, Args)]
pub struct ShopConfig {
    /// ISO currency code every price is in
    #[arg(long, env = "SHOP_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// YAML catalog loaded into an empty products table at startup
    #[arg(long, env = "CATALOG_FIXTURE")]
    pub catalog: Option<PathBuf>,
}

impl ShopConfig {
    /// Resolve the configured currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not a known ISO currency.
    pub fn currency(&self) -> Result<&'static Currency, UnknownCurrency> {
        iso::find(&self.currency).ok_or_else(|| UnknownCurrency(self.currency.clone()))
    }
}
