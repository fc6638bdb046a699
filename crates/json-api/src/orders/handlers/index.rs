//! List Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrdersResponse},
    state::State,
};

/// List Orders Handler
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every order"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::orders::records::OrderUuid;

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, OTHER_USER_UUID, TEST_USER_UUID, admin, make_order, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(authentication, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_lists_every_order() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.orders.expect_list_orders().once().return_once(|| {
            Ok(vec![
                make_order(OrderUuid::new(), TEST_USER_UUID),
                make_order(OrderUuid::new(), OTHER_USER_UUID),
            ])
        });

        let mut res = TestClient::get("http://example.com/orders")
            .send(&make_service(mocks, admin()))
            .await;

        let body: OrdersResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.orders.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_requires_admin() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
