//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use shopfront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InUse => StatusError::conflict()
            .brief("Product is still in a cart, archive it instead of deleting it"),
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn caller_errors_map_to_client_statuses() {
        let cases = [
            (ProductsServiceError::AlreadyExists, StatusCode::CONFLICT),
            (ProductsServiceError::InUse, StatusCode::CONFLICT),
            (ProductsServiceError::InvalidData, StatusCode::BAD_REQUEST),
            (ProductsServiceError::MissingRequiredData, StatusCode::BAD_REQUEST),
            (ProductsServiceError::NotFound, StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }
}
