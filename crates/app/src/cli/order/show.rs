use clap::Args;
use uuid::Uuid;

use bazaar_app::domain::orders::models::OrderUuid;

use crate::cli::ShopArgs;

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    #[command(flatten)]
    shop: ShopArgs,

    /// Order UUID
    order_uuid: Uuid,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let ctx = args.shop.connect().await?;

    let order = ctx
        .orders
        .get_order(OrderUuid::from_uuid(args.order_uuid))
        .await
        .map_err(|error| format!("failed to load order {}: {error}", args.order_uuid))?;

    println!("order_uuid: {}", order.uuid);
    println!("person: {}", order.person);
    println!("address: {}", order.address);
    println!("created_at: {}", order.created_at);

    for item in &order.items {
        println!(
            "line {}: product {} price {} discount {}",
            item.position + 1,
            item.product_uuid,
            item.price,
            item.discount
        );
    }

    println!("subtotal: {}", order.subtotal);
    println!("discount: {}", order.discount);
    println!("total: {}", order.total);

    Ok(())
}
