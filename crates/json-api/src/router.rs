//! App Router

use salvo::Router;

use crate::{auth, carts, orders, products, users};

/// Every resource route, behind the auth middleware.
///
/// Static segments are registered before `{param}` siblings so that
/// `/products/count` never reaches the uuid extractor.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(users_router())
        .push(products_router())
        .push(carts_router())
        .push(orders_router())
}

fn users_router() -> Router {
    Router::with_path("users")
        .get(users::index::handler)
        .push(Router::with_path("register").post(users::register::handler))
        .push(Router::with_path("login").post(users::login::handler))
        .push(Router::with_path("check-email").post(users::check_email::handler))
        .push(Router::with_path("count").get(users::count::handler))
        .push(
            Router::with_path("me")
                .get(users::me::handler)
                .push(Router::with_path("cart").get(users::my_cart::handler))
                .push(Router::with_path("orders").get(users::my_orders::handler))
                .push(Router::with_path("password").patch(users::password::handler)),
        )
        .push(
            Router::with_path("{user}")
                .delete(users::delete::handler)
                .push(
                    Router::with_path("admin")
                        .put(users::grant_admin::handler)
                        .delete(users::revoke_admin::handler),
                ),
        )
}

fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(Router::with_path("all").get(products::all::handler))
        .push(Router::with_path("count").get(products::count::handler))
        .push(Router::with_path("search/{name}").get(products::search::handler))
        .push(
            Router::with_path("{product}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler)
                .push(Router::with_path("archive").patch(products::archive::handler))
                .push(Router::with_path("activate").patch(products::activate::handler)),
        )
}

fn carts_router() -> Router {
    Router::with_path("carts")
        .get(carts::index::handler)
        .post(carts::create::handler)
        .push(
            Router::with_path("{cart}")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(Router::with_path("checkout").post(carts::checkout::handler))
                .push(Router::with_path("recalculate").post(carts::recalculate::handler))
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .patch(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                ),
        )
}

fn orders_router() -> Router {
    Router::with_path("orders")
        .get(orders::index::handler)
        .post(orders::create::handler)
        .push(Router::with_path("count").get(orders::count::handler))
        .push(Router::with_path("total-sales").get(orders::total_sales::handler))
        .push(Router::with_path("user/{user}").get(orders::for_user::handler))
        .push(
            Router::with_path("{order}")
                .get(orders::get::handler)
                .delete(orders::delete::handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{responses::CountResponse, test_helpers::Mocks};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn static_segments_win_over_uuid_params() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.products.expect_count_products().once().return_once(|| Ok(4));

        let mut res = TestClient::get("http://example.com/products/count")
            .send(&make_service(mocks))
            .await;

        let body: CountResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.count, 4);

        Ok(())
    }

    #[tokio::test]
    async fn garbled_authorization_header_is_401_not_500() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.users.expect_get_user().never();

        let res = TestClient::get("http://example.com/users/me")
            .add_header("authorization", "Bearer", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn missing_authorization_header_is_401_not_500() -> TestResult {
        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(Mocks::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
