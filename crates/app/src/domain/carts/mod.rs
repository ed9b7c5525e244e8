//! Carts
//!
//! Every browser session owns at most one cart. Carts are created on first
//! use and deleted, together with their items, at checkout.

pub mod errors;
pub mod models;
pub(crate) mod repositories;
pub mod service;
pub mod summary;

pub use errors::CartsServiceError;
pub use service::*;
