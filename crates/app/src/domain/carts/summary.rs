//! Cart Summary
//!
//! Cart pricing is recomputed from the stored lines on every read.

use bazaar::{
    basket::Basket,
    items::Item,
    products::{Product, ProductKey},
    promotions::PositionalDiscountPromotion,
    receipt::{Receipt, ReceiptError},
};
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use slotmap::SlotMap;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, CartItemUuid},
    },
    products::models::ProductUuid,
};

/// One priced cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// 1-based line number
    pub number: usize,
    pub item_uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    /// Unit price
    pub price: u64,
    /// Amount taken off this line by the promotion
    pub discount: u64,
    /// Price paid for this line
    pub total: u64,
}

/// Priced view of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    pub currency: &'static Currency,
}

impl CartSummary {
    /// Price a cart.
    ///
    /// # Errors
    ///
    /// Returns an error if a price does not fit the money type or the
    /// promotion cannot be calculated.
    pub fn from_cart(cart: &Cart, currency: &'static Currency) -> Result<Self, CartsServiceError> {
        let priced = PricedCart::new(cart, currency)?;

        let lines = cart
            .items
            .iter()
            .zip(priced.receipt.lines())
            .map(|(item, line)| {
                let discount = line.discount().map_err(ReceiptError::from)?;

                Ok(CartLine {
                    number: line.item_idx + 1,
                    item_uuid: item.uuid,
                    product_uuid: item.product_uuid,
                    product_name: item.product_name.clone(),
                    price: item.price,
                    discount: minor_units(discount)?,
                    total: minor_units(line.final_price)?,
                })
            })
            .collect::<Result<Vec<_>, CartsServiceError>>()?;

        let savings = priced.receipt.savings().map_err(ReceiptError::from)?;

        Ok(Self {
            lines,
            subtotal: minor_units(priced.receipt.subtotal())?,
            discount: minor_units(savings)?,
            total: minor_units(priced.receipt.total())?,
            currency,
        })
    }

    /// Whether the promotion took anything off.
    pub fn discount_applied(&self) -> bool {
        self.discount > 0
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Format an amount of minor units in the cart currency, e.g. `$12.00`.
    pub fn format_amount(&self, amount: u64) -> String {
        i64::try_from(amount).map_or_else(
            |_err| amount.to_string(),
            |minor| Money::from_minor(minor, self.currency).to_string(),
        )
    }
}

/// Render the cart as a plain-text receipt table.
///
/// # Errors
///
/// Returns an error if the cart cannot be priced.
pub fn render_receipt(cart: &Cart, currency: &'static Currency) -> Result<String, CartsServiceError> {
    let priced = PricedCart::new(cart, currency)?;

    let mut out = Vec::new();
    priced.receipt.write_to(&mut out, &priced.products)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

struct PricedCart {
    products: SlotMap<ProductKey, Product<'static>>,
    receipt: Receipt<'static>,
}

impl PricedCart {
    fn new(cart: &Cart, currency: &'static Currency) -> Result<Self, CartsServiceError> {
        let mut products = SlotMap::with_key();
        let mut keys = FxHashMap::<ProductUuid, ProductKey>::default();
        let mut basket = Basket::new(currency);

        for item in &cart.items {
            let price = Money::from_minor(i64::try_from(item.price)?, currency);

            let key = *keys.entry(item.product_uuid).or_insert_with(|| {
                products.insert(Product {
                    name: item.product_name.clone(),
                    price,
                })
            });

            basket.push(Item::new(key, price))?;
        }

        let receipt = Receipt::from_basket(&basket, &PositionalDiscountPromotion::default())?;

        Ok(Self { products, receipt })
    }
}

fn minor_units(amount: Money<'_, Currency>) -> Result<u64, CartsServiceError> {
    Ok(u64::try_from(amount.to_minor_units())?)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::domain::carts::models::{CartItem, CartUuid, SessionUuid};

    use super::*;

    fn cart(products: &[(ProductUuid, &str, u64)]) -> Cart {
        Cart {
            uuid: CartUuid::new(),
            session: SessionUuid::new(),
            items: products
                .iter()
                .map(|(product_uuid, name, price)| CartItem {
                    uuid: CartItemUuid::new(),
                    product_uuid: *product_uuid,
                    product_name: (*name).to_string(),
                    price: *price,
                    created_at: Timestamp::now(),
                })
                .collect(),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn distinct_first_lines_discount_the_third() -> TestResult {
        let (a, b, c) = (ProductUuid::new(), ProductUuid::new(), ProductUuid::new());
        let cart = cart(&[(a, "A", 1_000), (b, "B", 2_000), (c, "C", 3_000)]);

        let summary = CartSummary::from_cart(&cart, USD)?;

        assert_eq!(summary.subtotal, 6_000);
        assert_eq!(summary.discount, 1_200);
        assert_eq!(summary.total, 4_800);
        assert!(summary.discount_applied());

        let discounts = summary.lines.iter().map(|l| l.discount).collect::<Vec<_>>();
        let totals = summary.lines.iter().map(|l| l.total).collect::<Vec<_>>();
        let numbers = summary.lines.iter().map(|l| l.number).collect::<Vec<_>>();

        assert_eq!(discounts, [0, 0, 1_200]);
        assert_eq!(totals, [1_000, 2_000, 1_800]);
        assert_eq!(numbers, [1, 2, 3]);

        Ok(())
    }

    #[test]
    fn same_product_twice_is_not_discounted() -> TestResult {
        let (a, c) = (ProductUuid::new(), ProductUuid::new());
        let cart = cart(&[(a, "A", 1_000), (a, "A", 1_000), (c, "C", 3_000)]);

        let summary = CartSummary::from_cart(&cart, USD)?;

        assert_eq!(summary.discount, 0);
        assert_eq!(summary.total, 5_000);
        assert!(!summary.discount_applied());

        Ok(())
    }

    #[test]
    fn two_lines_are_not_discounted() -> TestResult {
        let cart = cart(&[
            (ProductUuid::new(), "A", 1_000),
            (ProductUuid::new(), "B", 2_000),
        ]);

        let summary = CartSummary::from_cart(&cart, USD)?;

        assert_eq!(summary.discount, 0);
        assert_eq!(summary.total, 3_000);

        Ok(())
    }

    #[test]
    fn line_totals_add_up_for_every_cart_shape() -> TestResult {
        let (a, b, c, d) = (
            ProductUuid::new(),
            ProductUuid::new(),
            ProductUuid::new(),
            ProductUuid::new(),
        );

        let shapes = [
            cart(&[]),
            cart(&[(a, "A", 999)]),
            cart(&[(a, "A", 1_000), (a, "A", 1_000)]),
            cart(&[(a, "A", 1_000), (b, "B", 2_000), (c, "C", 3_333)]),
            cart(&[(a, "A", 1_000), (a, "A", 1_000), (c, "C", 3_000)]),
            cart(&[(a, "A", 5), (b, "B", 7), (a, "A", 1)]),
            cart(&[
                (d, "D", 250),
                (c, "C", 1_999),
                (b, "B", 12_345),
                (a, "A", 1),
                (d, "D", 250),
            ]),
        ];

        for cart in &shapes {
            let summary = CartSummary::from_cart(cart, USD)?;
            let line_totals = summary.lines.iter().map(|l| l.total).sum::<u64>();
            let line_discounts = summary.lines.iter().map(|l| l.discount).sum::<u64>();

            assert_eq!(line_totals, summary.total, "lines of {:?}", cart.items);
            assert_eq!(line_discounts, summary.discount);
            assert_eq!(summary.subtotal - summary.discount, summary.total);
            assert_eq!(summary.lines.len(), cart.items.len());
        }

        Ok(())
    }

    #[test]
    fn empty_cart_is_zero() -> TestResult {
        let summary = CartSummary::from_cart(&cart(&[]), USD)?;

        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);

        Ok(())
    }

    #[test]
    fn format_amount_uses_cart_currency() -> TestResult {
        let summary = CartSummary::from_cart(&cart(&[]), USD)?;

        assert_eq!(summary.format_amount(1_200), "$12.00");

        Ok(())
    }

    #[test]
    fn render_receipt_lists_products_and_total() -> TestResult {
        let (a, b, c) = (ProductUuid::new(), ProductUuid::new(), ProductUuid::new());
        let cart = cart(&[(a, "Apple", 1_000), (b, "Banana", 2_000), (c, "Cherry", 3_000)]);

        let text = render_receipt(&cart, USD)?;

        assert!(text.contains("Apple"));
        assert!(text.contains("Cherry"));
        assert!(text.contains("$48.00"));

        Ok(())
    }
}
