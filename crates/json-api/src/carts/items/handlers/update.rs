//! Set Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    carts::{
        access::accessible_cart, errors::into_status_error, items::models::SetQuantityRequest,
        models::CartItemsResponse,
    },
    extensions::*,
    state::State,
};

/// Set Cart Item Quantity Handler
///
/// The cart subtotal is not touched; use the recalculate endpoint to refresh it.
#[endpoint(
    tags("carts"),
    summary = "Set Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.update",
    skip_all,
    fields(cart_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    json: JsonBody<SetQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let cart = cart.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();
    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(product));

    let cart = accessible_cart(state, &claims, cart.into()).await?;

    let items = state
        .app
        .carts
        .set_item_quantity(cart.uuid, product.into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into()))
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
        test_helpers::{Mocks, TEST_USER_UUID, make_cart, make_cart_item, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(
            authentication,
            Router::with_path("carts/{cart}/items/{product}").patch(handler),
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
    async fn test_set_quantity_returns_items() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();
        let mut mocks = Mocks::new();

        owned_cart(&mut mocks);

        mocks
            .carts
            .expect_set_item_quantity()
            .once()
            .withf(move |uuid, line, quantity| *uuid == cart && *line == product && *quantity == 5)
            .return_once(|_, line, quantity| Ok(vec![make_cart_item(line, quantity, 1000)]));

        let mut res = TestClient::patch(format!(
            "http://example.com/carts/{cart}/items/{product}"
        ))
        .json(&json!({ "quantity": 5 }))
        .send(&make_service(mocks, user()))
        .await;

        let body: CartItemsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.items.first().map(|i| (i.product_uuid, i.quantity)),
            Some((product.into_uuid(), 5))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_set_quantity_for_missing_item_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        owned_cart(&mut mocks);

        mocks
            .carts
            .expect_set_item_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::patch(format!(
            "http://example.com/carts/{}/items/{}",
            CartUuid::new(),
            ProductUuid::new()
        ))
        .json(&json!({ "quantity": 1 }))
        .send(&make_service(mocks, user()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_set_quantity_anonymous_returns_401() -> TestResult {
        let res = TestClient::patch(format!(
            "http://example.com/carts/{}/items/{}",
            CartUuid::new(),
            ProductUuid::new()
        ))
        .json(&json!({ "quantity": 1 }))
        .send(&make_service(Mocks::new(), Authentication::Anonymous))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
