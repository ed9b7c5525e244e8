use clap::{Args, Parser, Subcommand};
use rusty_money::iso::{self, Currency};

use bazaar_app::context::AppContext;

mod catalog;
mod db;
mod order;

#[derive(Debug, Parser)]
#[command(name = "bazaar-app", about = "Bazaar administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Db(db::DbCommand),
    Order(order::OrderCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Db(command) => db::run(command).await,
            Commands::Order(command) => order::run(command).await,
        }
    }
}

/// Connection settings shared by commands that open the shop database.
#[derive(Debug, Args)]
pub(crate) struct ShopArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://bazaar.db")]
    database_url: String,

    /// ISO currency code all prices are in
    #[arg(long, env = "SHOP_CURRENCY", default_value = "USD")]
    currency: String,
}

impl ShopArgs {
    pub(crate) fn currency(&self) -> Result<&'static Currency, String> {
        iso::find(&self.currency).ok_or_else(|| format!("unknown currency: {}", self.currency))
    }

    pub(crate) async fn connect(&self) -> Result<AppContext, String> {
        AppContext::from_database_url(&self.database_url, self.currency()?)
            .await
            .map_err(|error| format!("failed to open database: {error}"))
    }
}
