//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::errors::into_status_error, extensions::*, responses::MessageResponse, state::State,
};

/// Delete Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(cart, depot),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    state
        .app
        .carts
        .delete_cart(cart.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Cart deleted")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::carts::{CartsServiceError, records::CartUuid};

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, admin, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(
            authentication,
            Router::with_path("carts/{cart}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_cart_as_admin() -> TestResult {
        let cart = CartUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_delete_cart()
            .once()
            .withf(move |uuid| *uuid == cart)
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete(format!("http://example.com/carts/{cart}"))
            .send(&make_service(mocks, admin()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_cart_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_delete_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/carts/{}", CartUuid::new()))
            .send(&make_service(mocks, admin()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_cart_requires_admin() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.carts.expect_delete_cart().never();

        let res = TestClient::delete(format!("http://example.com/carts/{}", CartUuid::new()))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
