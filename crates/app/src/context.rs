//! App Context

use std::sync::Arc;

use bazaar::fixtures::{CatalogFixture, FixtureError};
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, SqliteCartsService},
        orders::{OrdersService, SqliteOrdersService},
        products::{
            ProductsService, ProductsServiceError, SqliteProductsService,
            models::{NewProduct, ProductUuid},
        },
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),

    #[error("failed to load catalog fixture")]
    Fixture(#[from] FixtureError),

    #[error("failed to seed catalog")]
    Seed(#[from] ProductsServiceError),

    #[error("product price out of range")]
    Price(#[from] std::num::TryFromIntError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub currency: &'static Currency,
}

impl AppContext {
    /// Build application context from a database URL, applying migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_database_url(
        url: &str,
        currency: &'static Currency,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_db(Db::new(pool), currency))
    }

    #[must_use]
    pub fn from_db(db: Db, currency: &'static Currency) -> Self {
        Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            carts: Arc::new(SqliteCartsService::new(db.clone(), currency)),
            orders: Arc::new(SqliteOrdersService::new(db, currency)),
            currency,
        }
    }

    /// Create the fixture's products when the catalog is empty.
    ///
    /// Returns the number of products created.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixture is priced in another currency or a
    /// product cannot be stored.
    pub async fn seed_catalog(&self, fixture: &CatalogFixture) -> Result<usize, AppInitError> {
        if !self.products.list_products().await?.is_empty() {
            info!("catalog already populated, skipping seed");

            return Ok(0);
        }

        let products = fixture.products(self.currency)?;

        for product in &products {
            self.products
                .create_product(NewProduct {
                    uuid: ProductUuid::new(),
                    name: product.name.clone(),
                    price: u64::try_from(product.price.to_minor_units())?,
                })
                .await?;
        }

        info!(count = products.len(), "catalog seeded");

        Ok(products.len())
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("currency", &self.currency.iso_alpha_code)
            .finish_non_exhaustive()
    }
}
