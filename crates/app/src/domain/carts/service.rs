//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use rusty_money::iso::Currency;
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartItem, CartItemUuid, CartUuid, SessionUuid},
            repositories::{SqliteCartItemsRepository, SqliteCartsRepository},
            summary::{CartSummary, render_receipt},
        },
        products::models::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteCartsService {
    db: Db,
    currency: &'static Currency,
    carts_repository: SqliteCartsRepository,
    items_repository: SqliteCartItemsRepository,
}

impl SqliteCartsService {
    #[must_use]
    pub fn new(db: Db, currency: &'static Currency) -> Self {
        Self {
            db,
            currency,
            carts_repository: SqliteCartsRepository::new(),
            items_repository: SqliteCartItemsRepository::new(),
        }
    }

    async fn resolve_cart_in(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        session: SessionUuid,
    ) -> Result<Cart, CartsServiceError> {
        let cart = match self
            .carts_repository
            .find_cart_by_session(tx, session)
            .await?
        {
            Some(cart) => cart,
            None => {
                let cart = self
                    .carts_repository
                    .create_cart(tx, CartUuid::new(), session)
                    .await?;

                info!(cart = %cart.uuid, session = %session, "cart created");

                cart
            }
        };

        let items = self.items_repository.get_cart_items(tx, cart.uuid).await?;

        Ok(Cart { items, ..cart })
    }
}

#[async_trait]
impl CartsService for SqliteCartsService {
    async fn resolve_cart(&self, session: SessionUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.resolve_cart_in(&mut tx, session).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn line_count(&self, session: SessionUuid) -> Result<usize, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(cart) = self
            .carts_repository
            .find_cart_by_session(&mut tx, session)
            .await?
        else {
            return Ok(0);
        };

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        Ok(items.len())
    }

    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
    ) -> Result<CartItem, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.resolve_cart_in(&mut tx, session).await?;

        let item = self
            .items_repository
            .create_cart_item(&mut tx, cart.uuid, product)
            .await
            .map_err(|error| match CartsServiceError::from(error) {
                CartsServiceError::InvalidReference => CartsServiceError::ProductNotFound,
                other => other,
            })?;

        tx.commit().await?;

        debug!(cart = %cart.uuid, item = %item.uuid, product = %product, "item added");

        Ok(item)
    }

    async fn remove_item(
        &self,
        session: SessionUuid,
        item: CartItemUuid,
    ) -> Result<bool, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(cart) = self
            .carts_repository
            .find_cart_by_session(&mut tx, session)
            .await?
        else {
            return Ok(false);
        };

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, cart.uuid, item)
            .await?;

        tx.commit().await?;

        debug!(cart = %cart.uuid, item = %item, removed = rows_affected > 0, "item removal");

        Ok(rows_affected > 0)
    }

    async fn view_cart(&self, session: SessionUuid) -> Result<CartSummary, CartsServiceError> {
        let cart = self.resolve_cart(session).await?;

        CartSummary::from_cart(&cart, self.currency)
    }

    async fn receipt(&self, session: SessionUuid) -> Result<String, CartsServiceError> {
        let cart = self.resolve_cart(session).await?;

        render_receipt(&cart, self.currency)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Return the session's cart, creating an empty one when it has none.
    async fn resolve_cart(&self, session: SessionUuid) -> Result<Cart, CartsServiceError>;

    /// Number of lines in the session's cart, without creating one.
    async fn line_count(&self, session: SessionUuid) -> Result<usize, CartsServiceError>;

    /// Append one unit of the product as the last line of the session's cart.
    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
    ) -> Result<CartItem, CartsServiceError>;

    /// Remove a line from the session's cart. Returns whether a line was removed.
    async fn remove_item(
        &self,
        session: SessionUuid,
        item: CartItemUuid,
    ) -> Result<bool, CartsServiceError>;

    /// Price the session's cart.
    async fn view_cart(&self, session: SessionUuid) -> Result<CartSummary, CartsServiceError>;

    /// Render the session's cart as a plain-text receipt.
    async fn receipt(&self, session: SessionUuid) -> Result<String, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn resolve_cart_creates_cart_once_per_session() -> TestResult {
        let ctx = TestContext::new().await?;
        let session = SessionUuid::new();

        let first = ctx.carts.resolve_cart(session).await?;
        let second = ctx.carts.resolve_cart(session).await?;

        assert_eq!(first.uuid, second.uuid);
        assert_eq!(first.session, session);
        assert!(first.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn line_count_does_not_create_a_cart() -> TestResult {
        let ctx = TestContext::new().await?;
        let apple = ctx.create_product("Apple", 1_000).await?;
        let session = SessionUuid::new();

        assert_eq!(ctx.carts.line_count(session).await?, 0);
        assert_eq!(ctx.count_rows("carts").await?, 0);

        ctx.carts.add_item(session, apple.uuid).await?;
        ctx.carts.add_item(session, apple.uuid).await?;

        assert_eq!(ctx.carts.line_count(session).await?, 2);
        assert_eq!(ctx.carts.line_count(SessionUuid::new()).await?, 0);
        assert_eq!(ctx.count_rows("carts").await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn sessions_get_separate_carts() -> TestResult {
        let ctx = TestContext::new().await?;
        let product = ctx.create_product("Apple", 1_000).await?;

        let session_a = SessionUuid::new();
        let session_b = SessionUuid::new();

        ctx.carts.add_item(session_a, product.uuid).await?;

        let cart_a = ctx.carts.resolve_cart(session_a).await?;
        let cart_b = ctx.carts.resolve_cart(session_b).await?;

        assert_ne!(cart_a.uuid, cart_b.uuid);
        assert_eq!(cart_a.items.len(), 1);
        assert!(cart_b.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_item_appends_lines_in_order_without_merging() -> TestResult {
        let ctx = TestContext::new().await?;
        let apple = ctx.create_product("Apple", 1_000).await?;
        let banana = ctx.create_product("Banana", 2_000).await?;
        let session = SessionUuid::new();

        ctx.carts.add_item(session, banana.uuid).await?;
        ctx.carts.add_item(session, apple.uuid).await?;
        ctx.carts.add_item(session, banana.uuid).await?;

        let cart = ctx.carts.resolve_cart(session).await?;
        let names = cart
            .items
            .iter()
            .map(|item| item.product_name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["Banana", "Apple", "Banana"]);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_unknown_product_returns_product_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx
            .carts
            .add_item(SessionUuid::new(), ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_deletes_only_that_line() -> TestResult {
        let ctx = TestContext::new().await?;
        let apple = ctx.create_product("Apple", 1_000).await?;
        let session = SessionUuid::new();

        let first = ctx.carts.add_item(session, apple.uuid).await?;
        let second = ctx.carts.add_item(session, apple.uuid).await?;

        assert!(ctx.carts.remove_item(session, first.uuid).await?);

        let cart = ctx.carts.resolve_cart(session).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().map(|item| item.uuid), Some(second.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_unknown_item_is_ignored() -> TestResult {
        let ctx = TestContext::new().await?;

        let removed = ctx
            .carts
            .remove_item(SessionUuid::new(), CartItemUuid::new())
            .await?;

        assert!(!removed);

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_cannot_touch_another_sessions_cart() -> TestResult {
        let ctx = TestContext::new().await?;
        let apple = ctx.create_product("Apple", 1_000).await?;
        let owner = SessionUuid::new();
        let other = SessionUuid::new();

        let item = ctx.carts.add_item(owner, apple.uuid).await?;

        ctx.carts.resolve_cart(other).await?;

        assert!(!ctx.carts.remove_item(other, item.uuid).await?);
        assert_eq!(ctx.carts.resolve_cart(owner).await?.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn view_cart_applies_third_item_discount() -> TestResult {
        let ctx = TestContext::new().await?;
        let a = ctx.create_product("A", 1_000).await?;
        let b = ctx.create_product("B", 2_000).await?;
        let c = ctx.create_product("C", 3_000).await?;
        let session = SessionUuid::new();

        for product in [&a, &b, &c] {
            ctx.carts.add_item(session, product.uuid).await?;
        }

        let summary = ctx.carts.view_cart(session).await?;

        assert_eq!(summary.discount, 1_200);
        assert_eq!(summary.total, 4_800);

        Ok(())
    }

    #[tokio::test]
    async fn view_cart_repeated_first_product_has_no_discount() -> TestResult {
        let ctx = TestContext::new().await?;
        let a = ctx.create_product("A", 1_000).await?;
        let c = ctx.create_product("C", 3_000).await?;
        let session = SessionUuid::new();

        for product in [&a, &a, &c] {
            ctx.carts.add_item(session, product.uuid).await?;
        }

        let summary = ctx.carts.view_cart(session).await?;

        assert_eq!(summary.discount, 0);
        assert_eq!(summary.total, 5_000);

        Ok(())
    }

    #[tokio::test]
    async fn receipt_renders_cart_lines() -> TestResult {
        let ctx = TestContext::new().await?;
        let apple = ctx.create_product("Apple", 1_000).await?;
        let session = SessionUuid::new();

        ctx.carts.add_item(session, apple.uuid).await?;

        let text = ctx.carts.receipt(session).await?;

        assert!(text.contains("Apple"));
        assert!(text.contains("$10.00"));

        Ok(())
    }
}
