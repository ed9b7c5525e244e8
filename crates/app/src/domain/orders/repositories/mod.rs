//! Order Repositories

mod items;
mod orders;

pub(crate) use items::{NewOrderItem, SqliteOrderItemsRepository};
pub(crate) use orders::{NewOrder, SqliteOrdersRepository};
