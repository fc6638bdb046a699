//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::{Db, MAX_AMOUNT},
    domain::products::{
        data::{NewProduct, ProductDetails},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

/// Highest rating a product may carry.
pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }

    async fn set_availability(
        &self,
        product: ProductUuid,
        available: bool,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .set_availability(&mut tx, product, available)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

/// Reject details the storage constraints would also refuse, before touching the database.
fn validate_details(details: &ProductDetails) -> Result<(), ProductsServiceError> {
    if details.name.trim().is_empty() {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if details.price > MAX_AMOUNT {
        return Err(ProductsServiceError::InvalidData);
    }

    if let Some(rating) = details.rating
        && !(0.0..=MAX_RATING).contains(&rating)
    {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_available_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_available_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn search_products(&self, name: &str) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.search_products(&mut tx, name).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate_details(&product.details)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, product.uuid, &product.details)
            .await?;

        tx.commit().await?;

        info!(product = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductDetails,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate_details(&update)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn archive_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.set_availability(product, false).await
    }

    async fn activate_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.set_availability(product, true).await
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_product(&mut tx, product)
            .await
            .map_err(|error| match ProductsServiceError::from(error) {
                ProductsServiceError::InvalidReference => ProductsServiceError::InUse,
                other => other,
            })?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%product, "deleted product");

        Ok(())
    }

    async fn count_products(&self) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_products(&mut tx).await?;

        tx.commit().await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product, available or not.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products currently offered for sale.
    async fn list_available_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Case-insensitive substring search over product names.
    async fn search_products(&self, name: &str) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces every mutable field of a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductDetails,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Marks a product unavailable. Archiving an archived product is a no-op.
    async fn archive_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Marks a product available again. Activating an available product is a no-op.
    async fn activate_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Hard-deletes a product that no cart refers to.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Number of products in the catalog.
    async fn count_products(&self) -> Result<u64, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::records::{Category, Size},
        test::{TestContext, helpers::product_details},
    };

    use super::*;

    #[test]
    fn validate_details_rejects_blank_names() {
        let mut details = product_details("Denim Jacket", 4999);
        details.name = "   ".to_string();

        assert!(matches!(
            validate_details(&details),
            Err(ProductsServiceError::MissingRequiredData)
        ));
    }

    #[test]
    fn validate_details_rejects_out_of_range_ratings() {
        let mut details = product_details("Denim Jacket", 4999);
        details.rating = Some(5.5);

        assert!(matches!(
            validate_details(&details),
            Err(ProductsServiceError::InvalidData)
        ));

        details.rating = Some(-0.1);

        assert!(matches!(
            validate_details(&details),
            Err(ProductsServiceError::InvalidData)
        ));
    }

    #[test]
    fn validate_details_rejects_prices_beyond_storage_range() {
        let details = product_details("Denim Jacket", u64::MAX);

        assert!(matches!(
            validate_details(&details),
            Err(ProductsServiceError::InvalidData)
        ));
    }

    #[test]
    fn validate_details_accepts_the_largest_storable_price() {
        let details = product_details("Denim Jacket", MAX_AMOUNT);

        assert!(validate_details(&details).is_ok());
        assert!(matches!(
            validate_details(&product_details("Denim Jacket", MAX_AMOUNT + 1)),
            Err(ProductsServiceError::InvalidData)
        ));
    }

    #[test]
    fn validate_details_accepts_full_rating_range() {
        let mut details = product_details("Denim Jacket", 0);

        for rating in [None, Some(0.0), Some(2.5), Some(MAX_RATING)] {
            details.rating = rating;

            assert!(validate_details(&details).is_ok(), "{rating:?} should be accepted");
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn create_product_returns_stored_details() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                details: product_details("Denim Jacket", 4999),
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.name, "Denim Jacket");
        assert_eq!(product.category, Category::Outerwear);
        assert_eq!(product.size, Size::M);
        assert_eq!(product.price, 4999);
        assert!(product.available);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn available_listing_excludes_archived_products() -> TestResult {
        let ctx = TestContext::new().await;

        let kept = ctx.create_product("Linen Shirt", 2500).await?;
        let archived = ctx.create_product("Wool Scarf", 1500).await?;

        ctx.products.archive_product(archived.uuid).await?;

        let available: Vec<ProductUuid> = ctx
            .products
            .list_available_products()
            .await?
            .iter()
            .map(|p| p.uuid)
            .collect();

        let all = ctx.products.list_products().await?;

        assert_eq!(available, vec![kept.uuid]);
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn archive_twice_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx.create_product("Wool Scarf", 1500).await?;

        let first = ctx.products.archive_product(product.uuid).await?;
        let second = ctx.products.archive_product(product.uuid).await?;

        assert!(!first.available);
        assert!(!second.available);
        assert_eq!(first.updated_at, second.updated_at);

        let activated = ctx.products.activate_product(product.uuid).await?;

        assert!(activated.available);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn search_is_case_insensitive_and_literal() -> TestResult {
        let ctx = TestContext::new().await;

        let jacket = ctx.create_product("Denim Jacket", 4999).await?;
        ctx.create_product("Leather Boots", 8999).await?;
        let sale = ctx.create_product("100% Cotton Tee", 1299).await?;

        let found = ctx.products.search_products("denim").await?;

        assert_eq!(found.iter().map(|p| p.uuid).collect::<Vec<_>>(), vec![jacket.uuid]);

        let found = ctx.products.search_products("0%").await?;

        assert_eq!(found.iter().map(|p| p.uuid).collect::<Vec<_>>(), vec![sale.uuid]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn update_product_replaces_details() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx.create_product("Denim Jacket", 4999).await?;

        let mut update = product_details("Denim Jacket (washed)", 3999);
        update.available = false;

        let updated = ctx.products.update_product(product.uuid, update).await?;

        assert_eq!(updated.name, "Denim Jacket (washed)");
        assert_eq!(updated.price, 3999);
        assert!(!updated.available);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn delete_product_in_a_cart_is_refused() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx.create_product("Denim Jacket", 4999).await?;
        let cart = ctx.create_cart_for_new_user("buyer@example.com").await?;

        ctx.add_item(cart.uuid, product.uuid, 1).await?;

        let result = ctx.products.delete_product(product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InUse)),
            "expected InUse, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn delete_product_then_count() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx.create_product("Denim Jacket", 4999).await?;
        ctx.create_product("Leather Boots", 8999).await?;

        assert_eq!(ctx.products.count_products().await?, 2);

        ctx.products.delete_product(product.uuid).await?;

        assert_eq!(ctx.products.count_products().await?, 1);

        let result = ctx.products.delete_product(product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
