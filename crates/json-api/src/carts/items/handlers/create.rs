//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    carts::{
        access::accessible_cart, errors::into_status_error, items::models::AddItemRequest,
        models::CartResponse,
    },
    extensions::*,
    state::State,
};

/// Add Cart Item Handler
///
/// Adding a product already in the cart increases that line's quantity.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or product unavailable"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::CONFLICT, description = "The cart changed concurrently"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip_all,
    fields(cart_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<AddItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let cart = cart.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();
    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(request.product_uuid));

    let cart = accessible_cart(state, &claims, cart.into()).await?;

    let cart = state
        .app
        .carts
        .add_item(cart.uuid, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::domain::{
        carts::{CartsServiceError, records::CartUuid},
        products::records::ProductUuid,
    };

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, OTHER_USER_UUID, TEST_USER_UUID, make_cart, make_cart_item, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(
            authentication,
            Router::with_path("carts/{cart}/items").post(handler),
        )
    }

    fn owned_cart(mocks: &mut Mocks) {
        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, TEST_USER_UUID)));
    }

    #[tokio::test]
    async fn test_add_item_returns_updated_cart() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();
        let mut mocks = Mocks::new();

        owned_cart(&mut mocks);

        mocks
            .carts
            .expect_add_item()
            .once()
            .withf(move |uuid, item| {
                *uuid == cart && item.product_uuid == product && item.quantity == 2
            })
            .return_once(move |uuid, item| {
                let mut record = make_cart(uuid, TEST_USER_UUID);
                record.items.push(make_cart_item(item.product_uuid, item.quantity, 1000));
                record.subtotal = 2000;
                record.version = 1;
                Ok(record)
            });

        let mut res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "product_uuid": product.into_uuid(), "quantity": 2 }))
            .send(&make_service(mocks, user()))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart.subtotal, 2000);
        assert_eq!(body.cart.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unavailable_product_returns_400() -> TestResult {
        let mut mocks = Mocks::new();

        owned_cart(&mut mocks);

        mocks
            .carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Unavailable));

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 1 }))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_zero_quantity_returns_400() -> TestResult {
        let mut mocks = Mocks::new();

        owned_cart(&mut mocks);

        mocks
            .carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::InvalidQuantity));

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 0 }))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        owned_cart(&mut mocks);

        mocks
            .carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 1 }))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_to_someone_elses_cart_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, OTHER_USER_UUID)));

        mocks.carts.expect_add_item().never();

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 1 }))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
