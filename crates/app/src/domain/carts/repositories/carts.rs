//! Carts Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::{
    database::try_get_timestamp,
    domain::carts::models::{Cart, CartUuid, SessionUuid},
};

const GET_CART_BY_SESSION_SQL: &str = include_str!("../sql/get_cart_by_session.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const DELETE_CART_SQL: &str = include_str!("../sql/delete_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteCartsRepository;

impl SqliteCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// The session's cart, without its items.
    pub(crate) async fn find_cart_by_session(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        session: SessionUuid,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Sqlite, Cart>(GET_CART_BY_SESSION_SQL)
            .bind(session.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartUuid,
        session: SessionUuid,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Sqlite, Cart>(CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(session.into_uuid())
            .bind(Timestamp::now().to_string())
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete a cart. Its items go with it.
    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Cart {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            session: SessionUuid::from_uuid(row.try_get("session_uuid")?),
            items: Vec::new(),
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
