//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*, orders::errors::into_status_error, responses::MessageResponse, state::State,
};

/// Delete Order Handler
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
    ),
)]
#[tracing::instrument(
    name = "orders.delete",
    skip(order, depot),
    fields(order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let order = order.into_inner();

    tracing::Span::current().record("order_uuid", tracing::field::display(order));

    state
        .app
        .orders
        .delete_order(order.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Order deleted")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::orders::{OrdersServiceError, records::OrderUuid};

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, admin, user},
    };

    use super::*;

    fn make_service(mocks: Mocks, authentication: Authentication) -> Service {
        mocks.service(
            authentication,
            Router::with_path("orders/{order}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_order_as_admin() -> TestResult {
        let order = OrderUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_delete_order()
            .once()
            .withf(move |uuid| *uuid == order)
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete(format!("http://example.com/orders/{order}"))
            .send(&make_service(mocks, admin()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_order_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_delete_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/orders/{}", OrderUuid::new()))
            .send(&make_service(mocks, admin()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_order_requires_admin() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.orders.expect_delete_order().never();

        let res = TestClient::delete(format!("http://example.com/orders/{}", OrderUuid::new()))
            .send(&make_service(mocks, user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
