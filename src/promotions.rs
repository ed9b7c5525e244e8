//! Promotions

pub mod applications;
pub mod positional_discount;

pub use applications::PromotionApplication;
pub use positional_discount::PositionalDiscountPromotion;
