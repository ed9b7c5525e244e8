//! Items

use rusty_money::{Money, iso::Currency};

use crate::products::ProductKey;

/// One unit of one product, as added to a cart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Item<'a> {
    product: ProductKey,
    price: Money<'a, Currency>,
}

impl<'a> Item<'a> {
    /// Creates a new item for the given product at the given unit price.
    #[must_use]
    pub fn new(product: ProductKey, price: Money<'a, Currency>) -> Self {
        Self { product, price }
    }

    /// Returns the product of the item
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Returns the price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}
