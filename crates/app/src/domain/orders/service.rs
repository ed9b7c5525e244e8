//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rusty_money::iso::Currency;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            models::{Cart, SessionUuid},
            repositories::{SqliteCartItemsRepository, SqliteCartsRepository},
            summary::CartSummary,
        },
        orders::{
            errors::OrdersServiceError,
            models::{Buyer, Order, OrderUuid},
            repositories::{
                NewOrder, NewOrderItem, SqliteOrderItemsRepository, SqliteOrdersRepository,
            },
        },
    },
};

#[derive(Debug, Clone)]
pub struct SqliteOrdersService {
    db: Db,
    currency: &'static Currency,
    orders_repository: SqliteOrdersRepository,
    items_repository: SqliteOrderItemsRepository,
    carts_repository: SqliteCartsRepository,
    cart_items_repository: SqliteCartItemsRepository,
}

impl SqliteOrdersService {
    #[must_use]
    pub fn new(db: Db, currency: &'static Currency) -> Self {
        Self {
            db,
            currency,
            orders_repository: SqliteOrdersRepository::new(),
            items_repository: SqliteOrderItemsRepository::new(),
            carts_repository: SqliteCartsRepository::new(),
            cart_items_repository: SqliteCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for SqliteOrdersService {
    async fn checkout(
        &self,
        session: SessionUuid,
        buyer: Buyer,
    ) -> Result<Option<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(cart) = self
            .carts_repository
            .find_cart_by_session(&mut tx, session)
            .await?
        else {
            debug!(session = %session, "checkout without a cart");

            return Ok(None);
        };

        let items = self
            .cart_items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        if items.is_empty() {
            debug!(cart = %cart.uuid, "checkout of an empty cart");

            return Ok(None);
        }

        let cart = Cart { items, ..cart };
        let summary = CartSummary::from_cart(&cart, self.currency)?;

        let mut order = self
            .orders_repository
            .create_order(
                &mut tx,
                NewOrder {
                    uuid: OrderUuid::new(),
                    buyer: &buyer,
                    subtotal: summary.subtotal,
                    discount: summary.discount,
                    total: summary.total,
                },
            )
            .await?;

        for (position, line) in summary.lines.iter().enumerate() {
            let item = self
                .items_repository
                .create_order_item(
                    &mut tx,
                    order.uuid,
                    NewOrderItem {
                        product_uuid: line.product_uuid,
                        position: u32::try_from(position)?,
                        price: line.price,
                        discount: line.discount,
                    },
                )
                .await?;

            order.items.push(item);
        }

        self.carts_repository.delete_cart(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        info!(
            order = %order.uuid,
            cart = %cart.uuid,
            items = order.items.len(),
            total = order.total,
            "checkout completed"
        );

        Ok(Some(order))
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self.orders_repository.get_order(&mut tx, order).await?;

        found.items = self.items_repository.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        Ok(found)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the session's cart into an order and delete the cart.
    ///
    /// Returns `None`, creating nothing, when the session has no cart or its
    /// cart is empty.
    async fn checkout(
        &self,
        session: SessionUuid,
        buyer: Buyer,
    ) -> Result<Option<Order>, OrdersServiceError>;

    /// Retrieve an order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::carts::CartsService, test::TestContext};

    use super::*;

    fn buyer() -> TestResult<Buyer> {
        Ok(Buyer::new("Ada Lovelace", "12 Analytical Row")
            .map_err(|errors| format!("{errors:?}"))?)
    }

    #[tokio::test]
    async fn checkout_persists_lines_with_discount_and_clears_cart() -> TestResult {
        let ctx = TestContext::new().await?;
        let a = ctx.create_product("A", 1_000).await?;
        let b = ctx.create_product("B", 2_000).await?;
        let c = ctx.create_product("C", 3_000).await?;
        let session = SessionUuid::new();

        for product in [&a, &b, &c] {
            ctx.carts.add_item(session, product.uuid).await?;
        }

        let cart = ctx.carts.resolve_cart(session).await?;

        let order = ctx
            .orders
            .checkout(session, buyer()?)
            .await?
            .ok_or("expected an order")?;

        assert_eq!(order.person, "Ada Lovelace");
        assert_eq!(order.subtotal, 6_000);
        assert_eq!(order.discount, 1_200);
        assert_eq!(order.total, 4_800);

        let stored = ctx.orders.get_order(order.uuid).await?;

        assert_eq!(stored, order);

        let lines = stored
            .items
            .iter()
            .map(|item| (item.product_uuid, item.position, item.price, item.discount))
            .collect::<Vec<_>>();

        assert_eq!(
            lines,
            [
                (a.uuid, 0, 1_000, 0),
                (b.uuid, 1, 2_000, 0),
                (c.uuid, 2, 3_000, 1_200),
            ]
        );

        let fresh = ctx.carts.resolve_cart(session).await?;

        assert_ne!(fresh.uuid, cart.uuid);
        assert!(fresh.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn second_checkout_creates_nothing() -> TestResult {
        let ctx = TestContext::new().await?;
        let a = ctx.create_product("A", 1_000).await?;
        let session = SessionUuid::new();

        ctx.carts.add_item(session, a.uuid).await?;

        assert!(ctx.orders.checkout(session, buyer()?).await?.is_some());
        assert!(ctx.orders.checkout(session, buyer()?).await?.is_none());
        assert_eq!(ctx.count_rows("order_items").await?, 1);
        assert_eq!(ctx.count_rows("orders").await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_of_empty_cart_creates_nothing() -> TestResult {
        let ctx = TestContext::new().await?;
        let session = SessionUuid::new();

        ctx.carts.resolve_cart(session).await?;

        assert!(ctx.orders.checkout(session, buyer()?).await?.is_none());
        assert_eq!(ctx.count_rows("orders").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_removes_cart_items() -> TestResult {
        let ctx = TestContext::new().await?;
        let a = ctx.create_product("A", 1_000).await?;
        let session = SessionUuid::new();

        ctx.carts.add_item(session, a.uuid).await?;
        ctx.carts.add_item(session, a.uuid).await?;

        ctx.orders.checkout(session, buyer()?).await?;

        assert_eq!(ctx.count_rows("cart_items").await?, 0);
        assert_eq!(ctx.count_rows("carts").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_uuid_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx.orders.get_order(OrderUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
