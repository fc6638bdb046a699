//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns the products currently offered for sale.
#[endpoint(tags("products"), summary = "List Available Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_available_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::products::records::ProductUuid;

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, make_product},
    };

    use super::*;

    #[tokio::test]
    async fn test_index_lists_available_products_anonymously() -> TestResult {
        let uuid = ProductUuid::new();
        let mut mocks = Mocks::new();

        mocks
            .products
            .expect_list_available_products()
            .once()
            .return_once(move || Ok(vec![make_product(uuid)]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&mocks.service(
                Authentication::Anonymous,
                Router::with_path("products").get(handler),
            ))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.products.len(), 1);
        assert_eq!(
            body.products.first().map(|product| product.uuid),
            Some(uuid.into_uuid())
        );

        Ok(())
    }
}
