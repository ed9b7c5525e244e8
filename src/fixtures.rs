//! Fixtures
//!
//! The product catalog is seeded from a YAML file:
//!
//! ```yaml
//! products:
//!   - name: Apple
//!     price: "10.00 USD"
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::products::Product;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product priced in a currency other than the shop's (product, price currency, shop currency)
    #[error("Product {0} is priced in {1}, but the shop uses {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// Catalog fixture file
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products, in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "10.00 USD")
    pub price: String,
}

impl CatalogFixture {
    /// Parse a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Convert the fixture into products priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is malformed or uses another currency.
    pub fn products(
        &self,
        currency: &'static Currency,
    ) -> Result<Vec<Product<'static>>, FixtureError> {
        self.products
            .iter()
            .map(|fixture| {
                let (minor_units, price_currency) = parse_price(&fixture.price)?;

                if price_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        fixture.name.clone(),
                        price_currency.iso_alpha_code,
                        currency.iso_alpha_code,
                    ));
                }

                Ok(Product {
                    name: fixture.name.clone(),
                    price: Money::from_minor(minor_units, price_currency),
                })
            })
            .collect()
    }
}

/// Parse price string (e.g., "2.99 USD") into minor units and currency
///
/// The amount is scaled by the currency's exponent, so "500 JPY" is 500 minor
/// units and "5.00 USD" is 500 as well.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if
/// the amount is negative or not a decimal, or if the currency code is not
/// recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = iso::find(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency(currency_code.to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rusty_money::iso::{EUR, JPY, USD};
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = "
products:
  - name: Apple
    price: \"10.00 USD\"
  - name: Banana
    price: \"20.00 USD\"
  - name: Cherry
    price: \"30 USD\"
";

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00 USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_scales_by_currency_exponent() -> TestResult {
        assert_eq!(parse_price("1.00 USD")?, (100, USD));
        assert_eq!(parse_price("2.50 EUR")?, (250, EUR));
        assert_eq!(parse_price("500 JPY")?, (500, JPY));

        Ok(())
    }

    #[test]
    fn catalog_products_keep_file_order() -> TestResult {
        let fixture = CatalogFixture::from_yaml_str(CATALOG)?;
        let products = fixture.products(USD)?;

        let names = products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();

        assert_eq!(names, ["Apple", "Banana", "Cherry"]);
        assert_eq!(
            products.last().map(|p| p.price),
            Some(Money::from_minor(3_000, USD))
        );

        Ok(())
    }

    #[test]
    fn catalog_rejects_foreign_currency() -> TestResult {
        let fixture = CatalogFixture::from_yaml_str(CATALOG)?;

        let result = fixture.products(EUR);

        assert!(matches!(
            result,
            Err(FixtureError::CurrencyMismatch(name, "USD", "EUR")) if name == "Apple"
        ));

        Ok(())
    }

    #[test]
    fn from_path_reads_catalog_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CATALOG.as_bytes())?;

        let fixture = CatalogFixture::from_path(file.path())?;

        assert_eq!(fixture.products.len(), 3);

        Ok(())
    }

    #[test]
    fn from_yaml_str_rejects_malformed_yaml() {
        let result = CatalogFixture::from_yaml_str("products: [name: ");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }
}
