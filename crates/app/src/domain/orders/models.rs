//! Order Models

use jiff::Timestamp;

use crate::{
    domain::{orders::errors::BuyerError, products::models::ProductUuid},
    uuids::TypedUuid,
};

/// Longest accepted person name or address, in characters.
pub const MAX_BUYER_FIELD_LEN: usize = 200;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub person: String,
    pub address: String,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// Order Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    /// 0-based cart line position
    pub position: u32,
    /// Unit price at checkout
    pub price: u64,
    /// Amount taken off this line
    pub discount: u64,
    pub created_at: Timestamp,
}

/// Buyer details submitted with the purchase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buyer {
    person: String,
    address: String,
}

impl Buyer {
    /// Validate the purchase form fields.
    ///
    /// Both fields are trimmed and must be non-empty and at most
    /// [`MAX_BUYER_FIELD_LEN`] characters.
    ///
    /// # Errors
    ///
    /// Returns every problem found with the fields.
    pub fn new(person: &str, address: &str) -> Result<Self, Vec<BuyerError>> {
        let mut errors = Vec::new();

        let person = check_field("person", person, &mut errors);
        let address = check_field("address", address, &mut errors);

        if errors.is_empty() {
            Ok(Self { person, address })
        } else {
            Err(errors)
        }
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

fn check_field(field: &'static str, value: &str, errors: &mut Vec<BuyerError>) -> String {
    let value = value.trim();

    if value.is_empty() {
        errors.push(BuyerError::Missing(field));
    } else if value.chars().count() > MAX_BUYER_FIELD_LEN {
        errors.push(BuyerError::TooLong(field, MAX_BUYER_FIELD_LEN));
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn buyer_fields_are_trimmed() -> TestResult {
        let buyer = Buyer::new("  Ada Lovelace ", "\t12 Analytical Row\n")
            .map_err(|errors| format!("{errors:?}"))?;

        assert_eq!(buyer.person(), "Ada Lovelace");
        assert_eq!(buyer.address(), "12 Analytical Row");

        Ok(())
    }

    #[test]
    fn blank_fields_are_rejected() {
        let result = Buyer::new("   ", "");

        assert_eq!(
            result,
            Err(vec![
                BuyerError::Missing("person"),
                BuyerError::Missing("address")
            ])
        );
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let long = "x".repeat(MAX_BUYER_FIELD_LEN + 1);

        let result = Buyer::new("Ada", &long);

        assert_eq!(
            result,
            Err(vec![BuyerError::TooLong("address", MAX_BUYER_FIELD_LEN)])
        );
    }

    #[test]
    fn length_limit_counts_characters() -> TestResult {
        let name = "é".repeat(MAX_BUYER_FIELD_LEN);

        let buyer = Buyer::new(&name, "Somewhere").map_err(|errors| format!("{errors:?}"))?;

        assert_eq!(buyer.person().chars().count(), MAX_BUYER_FIELD_LEN);

        Ok(())
    }
}
