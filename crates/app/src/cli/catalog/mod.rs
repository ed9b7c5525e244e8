use clap::{Args, Subcommand};

mod list;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List catalog products
    List(list::ListProductsArgs),
    /// Load products from a YAML fixture into an empty catalog
    Seed(seed::SeedCatalogArgs),
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::List(args) => list::run(args).await,
        CatalogSubcommand::Seed(args) => seed::run(args).await,
    }
}
