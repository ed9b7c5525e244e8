use std::path::PathBuf;

use bazaar::fixtures::CatalogFixture;
use clap::Args;

use crate::cli::ShopArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedCatalogArgs {
    #[command(flatten)]
    shop: ShopArgs,

    /// Catalog fixture file
    #[arg(long, env = "CATALOG_FIXTURE")]
    file: PathBuf,
}

pub(crate) async fn run(args: SeedCatalogArgs) -> Result<(), String> {
    let fixture = CatalogFixture::from_path(&args.file)
        .map_err(|error| format!("failed to load {}: {error}", args.file.display()))?;

    let ctx = args.shop.connect().await?;

    let created = ctx
        .seed_catalog(&fixture)
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    println!("products_created: {created}");

    Ok(())
}
