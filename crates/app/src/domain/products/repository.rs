//! Products Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_timestamp},
    domain::products::models::{NewProduct, Product, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Sqlite, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name)
            .bind(amount_to_i64(product.price, "price")?)
            .bind(Timestamp::now().to_string())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
