//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::orders::OrdersServiceError;

use crate::carts::errors::into_status_error as cart_status_error;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Cart(source) => cart_status_error(source),
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
        error @ (OrdersServiceError::AlreadyExists
        | OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData
        | OrdersServiceError::InvalidAmount(_)) => {
            error!("failed to record order: {error}");

            StatusError::internal_server_error()
        }
    }
}
