//! Bazaar
//!
//! Pricing core for the Bazaar shop: products, baskets of cart lines, the
//! positional discount promotion and receipts.

pub mod basket;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod receipt;
