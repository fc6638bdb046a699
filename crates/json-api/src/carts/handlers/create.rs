//! Create Cart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use shopfront_app::domain::carts::{data::NewCart, records::CartUuid};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Create Cart Handler
///
/// Opens an empty cart for the caller. A user owns at most one cart.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "The caller already has a cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip_all,
    fields(cart_uuid = tracing::field::Empty, user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let uuid = CartUuid::new();

    let span = tracing::Span::current();
    span.record("cart_uuid", tracing::field::display(uuid));
    span.record("user_uuid", tracing::field::display(claims.user_uuid()));

    let cart = state
        .app
        .carts
        .create_cart(NewCart {
            uuid,
            user_uuid: claims.user_uuid(),
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::carts::CartsServiceError;

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, TEST_USER_UUID, make_cart, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(authentication, Router::with_path("carts").post(handler))
    }

    #[tokio::test]
    async fn test_create_cart_for_caller() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_create_cart()
            .once()
            .withf(|new| new.user_uuid == TEST_USER_UUID)
            .return_once(|new| Ok(make_cart(new.uuid, new.user_uuid)));

        let mut res = TestClient::post("http://example.com/carts")
            .send(&make_service(mocks, user()))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.cart.user_uuid, TEST_USER_UUID.into_uuid());
        assert!(body.cart.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_second_cart_returns_409() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_create_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/carts")
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_cart_anonymous_returns_401() -> TestResult {
        let res = TestClient::post("http://example.com/carts")
            .send(&make_service(Mocks::new(), Authentication::Anonymous))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
