//! Current User's Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrdersResponse},
    state::State,
};

/// Current User's Orders Handler
#[endpoint(
    tags("users", "orders"),
    summary = "Current User's Orders",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders_for_user(claims.user_uuid())
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::orders::records::OrderUuid;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, make_order, user};

    use super::*;

    #[tokio::test]
    async fn test_my_orders_lists_callers_orders() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_list_orders_for_user()
            .once()
            .withf(|owner| *owner == TEST_USER_UUID)
            .return_once(|owner| {
                Ok(vec![
                    make_order(OrderUuid::new(), owner),
                    make_order(OrderUuid::new(), owner),
                ])
            });

        let mut res = TestClient::get("http://example.com/users/me/orders")
            .send(&mocks.service(user(), Router::with_path("users/me/orders").get(handler)))
            .await;

        let body: OrdersResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.orders.len(), 2);

        Ok(())
    }
}
