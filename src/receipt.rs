//! Receipt
//!
//! A receipt is recomputed from the basket every time it is needed. It is never
//! stored: the order records written at checkout keep their own copy of the
//! prices and discounts.

use std::io;

use rusty_money::{Money, MoneyError, iso::Currency};
use slotmap::SlotMap;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    basket::Basket,
    discounts::DiscountError,
    pricing::TotalPriceError,
    products::{Product, ProductKey},
    promotions::{PositionalDiscountPromotion, PromotionApplication},
};

/// Errors that can occur when building or printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating total price from basket items.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Error calculating the promotion discount.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Error finding a product in the product catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One basket line as it appears on the receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Index of the item in the basket
    pub item_idx: usize,

    /// Product of the item
    pub product: ProductKey,

    /// Unit price before any discount
    pub base_price: Money<'a, Currency>,

    /// Price paid for the line
    pub final_price: Money<'a, Currency>,
}

impl<'a> ReceiptLine<'a> {
    /// Amount taken off this line.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the prices are in different currencies.
    pub fn discount(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.base_price.sub(self.final_price)
    }

    /// Whether the line was discounted.
    pub fn is_discounted(&self) -> bool {
        self.final_price != self.base_price
    }
}

/// Priced view of a basket.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: SmallVec<[ReceiptLine<'a>; 10]>,

    promotion_application: Option<PromotionApplication<'a>>,

    /// Total cost before the promotion
    subtotal: Money<'a, Currency>,

    /// Total amount to pay after the promotion
    total: Money<'a, Currency>,

    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Price the basket, applying `promotion` to at most one line.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the discount or totals cannot be calculated.
    pub fn from_basket(
        basket: &Basket<'a>,
        promotion: &PositionalDiscountPromotion<'a>,
    ) -> Result<Self, ReceiptError> {
        let currency = basket.currency();
        let promotion_application = promotion.apply(basket)?;

        let lines = basket
            .iter()
            .enumerate()
            .map(|(item_idx, item)| {
                let final_price = match &promotion_application {
                    Some(app) if app.item_idx == item_idx => app.final_price,
                    _ => *item.price(),
                };

                ReceiptLine {
                    item_idx,
                    product: item.product(),
                    base_price: *item.price(),
                    final_price,
                }
            })
            .collect::<SmallVec<[ReceiptLine<'a>; 10]>>();

        let subtotal = basket.subtotal()?;

        let total = lines
            .iter()
            .try_fold(Money::from_minor(0, currency), |total, line| {
                total.add(line.final_price)
            })?;

        Ok(Self {
            lines,
            promotion_application,
            subtotal,
            total,
            currency,
        })
    }

    /// Receipt lines in basket order
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// The promotion application, if the basket qualified
    pub fn promotion_application(&self) -> Option<&PromotionApplication<'a>> {
        self.promotion_application.as_ref()
    }

    /// Total cost before the promotion
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount to pay
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Currency of all amounts on the receipt
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the savings made by the promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Writes the receipt as a plain-text table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns an error if a line's product is missing from `products` or the
    /// output cannot be written.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        products: &SlotMap<ProductKey, Product<'_>>,
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Price", "Discount", "Total"]);

        for line in &self.lines {
            let product = products
                .get(line.product)
                .ok_or(ReceiptError::MissingProduct(line.product))?;

            let discount = if line.is_discounted() {
                format!("-{}", line.discount()?)
            } else {
                String::new()
            };

            builder.push_record([
                (line.item_idx + 1).to_string(),
                product.name.clone(),
                line.base_price.to_string(),
                discount,
                line.final_price.to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Alignment::center());
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

        let summary = [
            ("Subtotal:", self.subtotal.to_string()),
            ("Discount:", self.savings()?.to_string()),
            ("Total:", self.total.to_string()),
        ];

        let value_width = summary
            .iter()
            .map(|(_, value)| value.len())
            .max()
            .unwrap_or_default();

        for (label, value) in summary {
            writeln!(out, "{label:>10} {value:>value_width$}").map_err(|_err| ReceiptError::IO)?;
        }

        Ok(())
    }
}
