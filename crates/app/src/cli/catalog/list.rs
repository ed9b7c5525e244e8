use clap::Args;
use rusty_money::Money;

use crate::cli::ShopArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    shop: ShopArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let ctx = args.shop.connect().await?;

    let products = ctx
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        let price = i64::try_from(product.price)
            .map_err(|error| format!("invalid price for {}: {error}", product.uuid))?;

        println!(
            "{}  {}  {}",
            product.uuid,
            Money::from_minor(price, ctx.currency),
            product.name
        );
    }

    Ok(())
}
