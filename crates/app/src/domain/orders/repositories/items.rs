//! Order Items Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_timestamp},
    domain::{
        orders::models::{OrderItem, OrderItemUuid, OrderUuid},
        products::models::ProductUuid,
    },
};

const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");

/// One checked-out cart line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NewOrderItem {
    pub product_uuid: ProductUuid,
    pub position: u32,
    pub price: u64,
    pub discount: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteOrderItemsRepository;

impl SqliteOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderUuid,
        item: NewOrderItem,
    ) -> Result<OrderItem, sqlx::Error> {
        query_as::<Sqlite, OrderItem>(CREATE_ORDER_ITEM_SQL)
            .bind(OrderItemUuid::new().into_uuid())
            .bind(order.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(item.position)
            .bind(amount_to_i64(item.price, "price")?)
            .bind(amount_to_i64(item.discount, "discount")?)
            .bind(Timestamp::now().to_string())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderUuid,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        query_as::<Sqlite, OrderItem>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for OrderItem {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            position: row.try_get("position")?,
            price: try_get_amount(row, "price")?,
            discount: try_get_amount(row, "discount")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
