//! Orders Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_timestamp},
    domain::orders::models::{Buyer, Order, OrderUuid},
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");

/// Order totals to persist.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NewOrder<'a> {
    pub uuid: OrderUuid,
    pub buyer: &'a Buyer,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteOrdersRepository;

impl SqliteOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: NewOrder<'_>,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Sqlite, Order>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.buyer.person())
            .bind(order.buyer.address())
            .bind(amount_to_i64(order.subtotal, "subtotal")?)
            .bind(amount_to_i64(order.discount, "discount")?)
            .bind(amount_to_i64(order.total, "total")?)
            .bind(Timestamp::now().to_string())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderUuid,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Sqlite, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for Order {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            person: row.try_get("person")?,
            address: row.try_get("address")?,
            subtotal: try_get_amount(row, "subtotal")?,
            discount: try_get_amount(row, "discount")?,
            total: try_get_amount(row, "total")?,
            items: Vec::new(),
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
