//! Basket
//!
//! An ordered sequence of cart lines in a single currency. Line order is
//! insertion order and is significant: promotions look at positions.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    items::Item,
    pricing::{TotalPriceError, total_price},
};

/// Errors related to basket construction or totals.
#[derive(Debug, Error)]
pub enum BasketError {
    /// An item's currency differs from the basket currency (index, item currency, basket currency).
    #[error("Item {0} has currency {1}, but basket has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// An item was not found in the basket.
    #[error("Item {0} not found")]
    ItemNotFound(usize),
}

/// Basket
#[derive(Debug)]
pub struct Basket<'a> {
    items: Vec<Item<'a>>,
    currency: &'static Currency,
}

impl<'a> Basket<'a> {
    /// Create a new, empty basket.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Basket {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a new basket with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if there was a currency mismatch error.
    pub fn with_items(
        items: impl Into<Vec<Item<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, BasketError> {
        let items = items.into();

        items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_currency(i, item, currency))?;

        Ok(Basket { items, currency })
    }

    /// Append an item as the last line of the basket.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if the item's currency differs from the basket's.
    pub fn push(&mut self, item: Item<'a>) -> Result<(), BasketError> {
        check_currency(self.items.len(), &item, self.currency)?;

        self.items.push(item);

        Ok(())
    }

    /// Calculate the subtotal of the basket.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic or currency mismatch error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.items)
    }

    /// Get an item from the basket.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError::ItemNotFound` if the item is not found.
    pub fn get_item(&self, item: usize) -> Result<&Item<'a>, BasketError> {
        self.items.get(item).ok_or(BasketError::ItemNotFound(item))
    }

    /// The items of the basket, in insertion order.
    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    /// Iterate over the items in the basket.
    pub fn iter(&self) -> impl Iterator<Item = &Item<'a>> {
        self.items.iter()
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the basket.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn check_currency(
    idx: usize,
    item: &Item<'_>,
    currency: &'static Currency,
) -> Result<(), BasketError> {
    let item_currency = item.price().currency();

    if item_currency == currency {
        Ok(())
    } else {
        Err(BasketError::CurrencyMismatch(
            idx,
            item_currency.iso_alpha_code,
            currency.iso_alpha_code,
        ))
    }
}
