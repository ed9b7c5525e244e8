//! Discounts
//!
//! Discount amounts are always worked out in minor units of the price they
//! apply to and never exceed that price.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Discount applied to a single item price.
#[derive(Debug, Copy, Clone)]
pub enum SimpleDiscount<'a> {
    /// Apply a percentage discount (e.g., "40% off")
    PercentageOff(Percentage),

    /// Subtract a fixed amount from item price (e.g., "$2 off")
    AmountOff(Money<'a, Currency>),
}

impl<'a> SimpleDiscount<'a> {
    /// Amount taken off `price` by this discount.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage cannot be represented in minor units,
    /// or if an amount-off discount is in a different currency than the price.
    pub fn discount_on(
        &self,
        price: &Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        let price_minor = price.to_minor_units();

        let off_minor = match self {
            SimpleDiscount::PercentageOff(percent) => percent_of_minor(percent, price_minor)?,
            SimpleDiscount::AmountOff(amount) => {
                let remaining = price.sub(*amount)?.to_minor_units().max(0);

                price_minor - remaining
            }
        };

        Ok(Money::from_minor(
            off_minor.clamp(0, price_minor.max(0)),
            price.currency(),
        ))
    }

    /// Price left after applying this discount to `price`.
    ///
    /// # Errors
    ///
    /// See [`SimpleDiscount::discount_on`].
    pub fn discounted_price(
        &self,
        price: &Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        Ok(price.sub(self.discount_on(price)?)?)
    }
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// Rounds half away from zero.
///
/// # Errors
///
/// Returns an error if:
/// - The percentage calculation overflows or cannot be safely represented (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage crate doesn't actually expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    fn forty_percent() -> Percentage {
        Percentage::from(Decimal::new(40, 2))
    }

    #[test]
    fn percent_of_minor_calculates_correctly() -> TestResult {
        assert_eq!(percent_of_minor(&forty_percent(), 3_000)?, 1_200);
        assert_eq!(percent_of_minor(&forty_percent(), 1_000)?, 400);

        Ok(())
    }

    #[test]
    fn percent_of_minor_rounds_half_away_from_zero() -> TestResult {
        // 40% of 5 = 2.0, 40% of 7 = 2.8, 40% of 3 = 1.2, 50% of 5 = 2.5
        assert_eq!(percent_of_minor(&forty_percent(), 5)?, 2);
        assert_eq!(percent_of_minor(&forty_percent(), 7)?, 3);
        assert_eq!(percent_of_minor(&forty_percent(), 3)?, 1);
        assert_eq!(percent_of_minor(&Percentage::from(Decimal::new(5, 1)), 5)?, 3);

        Ok(())
    }

    #[test]
    fn percent_of_minor_checked_mul_overflow_returns_error() -> TestResult {
        let percent = Percentage::try_from("100000000000000000000")?;
        let result = percent_of_minor(&percent, i64::MAX);

        assert!(matches!(result, Err(DiscountError::PercentConversion)));

        Ok(())
    }

    #[test]
    fn percentage_off_discount_and_price() -> TestResult {
        let discount = SimpleDiscount::PercentageOff(forty_percent());
        let price = Money::from_minor(3_000, USD);

        assert_eq!(discount.discount_on(&price)?, Money::from_minor(1_200, USD));
        assert_eq!(
            discount.discounted_price(&price)?,
            Money::from_minor(1_800, USD)
        );

        Ok(())
    }

    #[test]
    fn percentage_off_zero_price_is_zero() -> TestResult {
        let discount = SimpleDiscount::PercentageOff(forty_percent());

        assert_eq!(
            discount.discount_on(&Money::from_minor(0, USD))?,
            Money::from_minor(0, USD)
        );

        Ok(())
    }

    #[test]
    fn amount_off_never_exceeds_price() -> TestResult {
        let discount = SimpleDiscount::AmountOff(Money::from_minor(500, USD));

        assert_eq!(
            discount.discount_on(&Money::from_minor(2_000, USD))?,
            Money::from_minor(500, USD)
        );
        assert_eq!(
            discount.discount_on(&Money::from_minor(300, USD))?,
            Money::from_minor(300, USD)
        );
        assert_eq!(
            discount.discounted_price(&Money::from_minor(300, USD))?,
            Money::from_minor(0, USD)
        );

        Ok(())
    }

    #[test]
    fn amount_off_other_currency_errors() {
        let discount = SimpleDiscount::AmountOff(Money::from_minor(500, GBP));

        let result = discount.discount_on(&Money::from_minor(2_000, USD));

        assert!(matches!(result, Err(DiscountError::Money(_))));
    }
}
