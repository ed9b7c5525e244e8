//! Positional Discount
//!
//! A promotion that discounts the item at a fixed basket position, provided
//! the leading items of the basket are all different products. The shop runs
//! it as "buy two different products, get 40% off the third line".
//!
//! Positions are basket (insertion) positions, not price ranks: re-ordering a
//! basket changes whether it qualifies, and items after the discounted
//! position are never considered.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    basket::Basket, discounts::DiscountError, discounts::SimpleDiscount,
    promotions::PromotionApplication,
};

/// A Positional Discount Promotion
#[derive(Debug, Clone)]
pub struct PositionalDiscountPromotion<'a> {
    lead: u16,
    position: u16,
    discount: SimpleDiscount<'a>,
}

impl<'a> PositionalDiscountPromotion<'a> {
    /// Create a new positional discount promotion.
    ///
    /// `lead` is how many leading items must be distinct products and
    /// `position` is the 0-based index of the item that receives `discount`.
    pub fn new(lead: u16, position: u16, discount: SimpleDiscount<'a>) -> Self {
        Self {
            lead,
            position,
            discount,
        }
    }

    /// 40% off the third item when the first two items are different products.
    pub fn third_item_forty_percent_off() -> Self {
        Self::new(
            2,
            2,
            SimpleDiscount::PercentageOff(Percentage::from(Decimal::new(40, 2))),
        )
    }

    /// Return the number of leading items that must be distinct
    pub fn lead(&self) -> u16 {
        self.lead
    }

    /// Return the discounted position
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Return the discount
    pub fn discount(&self) -> &SimpleDiscount<'a> {
        &self.discount
    }

    /// Whether the basket qualifies for the promotion.
    pub fn qualifies(&self, basket: &Basket<'a>) -> bool {
        let items = basket.items();

        if items.len() <= usize::from(self.position) {
            return false;
        }

        let Some(lead) = items.get(..usize::from(self.lead)) else {
            return false;
        };

        lead.iter().enumerate().all(|(idx, item)| {
            lead.iter()
                .skip(idx + 1)
                .all(|other| other.product() != item.product())
        })
    }

    /// Apply the promotion to the basket.
    ///
    /// Returns `None` when the basket does not qualify.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the discount cannot be calculated.
    pub fn apply(
        &self,
        basket: &Basket<'a>,
    ) -> Result<Option<PromotionApplication<'a>>, DiscountError> {
        if !self.qualifies(basket) {
            return Ok(None);
        }

        let item_idx = usize::from(self.position);

        let Some(item) = basket.items().get(item_idx) else {
            return Ok(None);
        };

        let original_price = *item.price();
        let final_price = self.discount.discounted_price(&original_price)?;

        Ok(Some(PromotionApplication {
            item_idx,
            original_price,
            final_price,
        }))
    }
}

impl Default for PositionalDiscountPromotion<'_> {
    fn default() -> Self {
        Self::third_item_forty_percent_off()
    }
}
