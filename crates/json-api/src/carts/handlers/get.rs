//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{access::accessible_cart, models::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let cart = accessible_cart(state, &claims, cart.into_inner().into()).await?;

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
        test_helpers::{
            Mocks, OTHER_USER_UUID, TEST_USER_UUID, admin, make_cart, make_cart_item, user,
        },
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(authentication, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_get_own_cart() -> TestResult {
        let cart = CartUuid::new();
        let product = ProductUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .withf(move |uuid| *uuid == cart)
            .return_once(move |uuid| {
                let mut record = make_cart(uuid, TEST_USER_UUID);
                record.items.push(make_cart_item(product, 3, 500));
                record.subtotal = 1500;
                Ok(record)
            });

        let mut res = TestClient::get(format!("http://example.com/carts/{cart}"))
            .send(&make_service(mocks, user()))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart.subtotal, 1500);
        assert_eq!(
            body.cart.items.first().map(|i| (i.product_uuid, i.quantity)),
            Some((product.into_uuid(), 3))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_someone_elses_cart_returns_404() -> TestResult {
        let cart = CartUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, OTHER_USER_UUID)));

        let res = TestClient::get(format!("http://example.com/carts/{cart}"))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_may_read_any_cart() -> TestResult {
        let cart = CartUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|uuid| Ok(make_cart(uuid, OTHER_USER_UUID)));

        let res = TestClient::get(format!("http://example.com/carts/{cart}"))
            .send(&make_service(mocks, admin()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/carts/{}", CartUuid::new()))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_with_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/carts/not-a-uuid")
            .send(&make_service(Mocks::new(), user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
