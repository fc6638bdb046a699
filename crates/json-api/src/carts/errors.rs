//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use shopfront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => {
            StatusError::conflict().brief("User already has a cart")
        }
        CartsServiceError::Conflict => StatusError::conflict()
            .brief("Cart was changed by another request, reload it and try again"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::ItemNotFound => {
            StatusError::not_found().brief("Product is not in the cart")
        }
        CartsServiceError::Unavailable => {
            StatusError::bad_request().brief("Product is not available")
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be greater than zero")
        }
        CartsServiceError::EmptyCart => {
            StatusError::bad_request().brief("Cannot check out an empty cart")
        }
        CartsServiceError::Overflow => StatusError::bad_request().brief("Amount out of range"),
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
