//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{access::accessible_cart, errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip_all,
    fields(cart_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let cart = cart.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();
    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(product));

    let cart = accessible_cart(state, &claims, cart.into()).await?;

    let cart = state
        .app
        .carts
        .remove_item(cart.uuid, product.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::{
        carts::{CartsServiceError, records::CartUuid},
        products::records::ProductUuid,
    };

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, OTHER_USER_UUID, TEST_USER_UUID, admin, make_cart, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(
            authentication,
            Router::with_path("carts/{cart}/items/{product}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_item_returns_cart() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, TEST_USER_UUID)));

        mocks
            .carts
            .expect_remove_item()
            .once()
            .withf(move |uuid, line| *uuid == cart && *line == product)
            .return_once(|uuid, _| Ok(make_cart(uuid, TEST_USER_UUID)));

        let mut res = TestClient::delete(format!(
            "http://example.com/carts/{cart}/items/{product}"
        ))
        .send(&make_service(mocks, user()))
        .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.cart.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_may_remove_from_any_cart() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, OTHER_USER_UUID)));

        mocks
            .carts
            .expect_remove_item()
            .once()
            .return_once(|uuid, _| Ok(make_cart(uuid, OTHER_USER_UUID)));

        let res = TestClient::delete(format!(
            "http://example.com/carts/{}/items/{}",
            CartUuid::new(),
            ProductUuid::new()
        ))
        .send(&make_service(mocks, admin()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_item_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, TEST_USER_UUID)));

        mocks
            .carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::delete(format!(
            "http://example.com/carts/{}/items/{}",
            CartUuid::new(),
            ProductUuid::new()
        ))
        .send(&make_service(mocks, user()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
