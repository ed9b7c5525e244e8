//! Purchase
//!
//! Checkout turns the session's cart into an order.

mod errors;
pub(crate) mod handlers;

pub(crate) use handlers::*;
