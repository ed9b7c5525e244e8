//! Cart Models

use jiff::Timestamp;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Browser Session
#[derive(Debug)]
pub struct Session;

/// Session UUID, carried in the session cookie
pub type SessionUuid = TypedUuid<Session>;

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub session: SessionUuid,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Cart Item Model
///
/// One unit of one product. Adding the same product twice gives two items.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub price: u64,
    pub created_at: Timestamp,
}
