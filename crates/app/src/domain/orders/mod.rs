//! Orders
//!
//! An order is the permanent record of a checkout. Orders keep the unit price
//! and discount of every line as they were at checkout time.

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::{BuyerError, OrdersServiceError};
pub use service::*;
