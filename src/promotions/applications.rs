//! Promotion Applications

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};

/// Result of applying a promotion to an item
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionApplication<'a> {
    /// Index of the item in the basket
    pub item_idx: usize,

    /// Original price of the item
    pub original_price: Money<'a, Currency>,

    /// Final price after discount
    pub final_price: Money<'a, Currency>,
}

impl<'a> PromotionApplication<'a> {
    /// Calculate the item savings from this promotion application
    ///
    /// # Errors
    ///
    /// Returns an error if the original price or final price cannot be subtracted.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.original_price.sub(self.final_price)
    }

    /// Calculates the savings made by applying the promotion as a percentage
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, MoneyError> {
        let savings = self.savings()?;

        let savings_minor = savings.to_minor_units();
        let original_minor = self.original_price.to_minor_units();

        if original_minor == 0 {
            return Ok(Percentage::from(Decimal::ZERO));
        }

        let savings_dec = Decimal::from_i64(savings_minor).unwrap_or(Decimal::ZERO);
        let original_dec = Decimal::from_i64(original_minor).unwrap_or(Decimal::ZERO);

        Ok(Percentage::from(savings_dec / original_dec))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn savings_returns_difference_between_original_and_final() {
        let app = PromotionApplication {
            item_idx: 2,
            original_price: Money::from_minor(3_000, USD),
            final_price: Money::from_minor(1_800, USD),
        };

        assert_eq!(app.savings(), Ok(Money::from_minor(1_200, USD)));
    }

    #[test]
    fn savings_percent_is_relative_to_original_price() -> TestResult {
        let app = PromotionApplication {
            item_idx: 2,
            original_price: Money::from_minor(3_000, USD),
            final_price: Money::from_minor(1_800, USD),
        };

        assert_eq!(
            app.savings_percent()? * Decimal::ONE,
            Decimal::new(40, 2),
            "expected 40% savings"
        );

        Ok(())
    }

    #[test]
    fn savings_percent_of_free_item_is_zero() -> TestResult {
        let app = PromotionApplication {
            item_idx: 0,
            original_price: Money::from_minor(0, GBP),
            final_price: Money::from_minor(0, GBP),
        };

        assert_eq!(app.savings_percent()? * Decimal::ONE, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn savings_with_mismatched_currencies_errors() {
        let app = PromotionApplication {
            item_idx: 0,
            original_price: Money::from_minor(100, GBP),
            final_price: Money::from_minor(50, USD),
        };

        assert!(app.savings().is_err());
    }
}
