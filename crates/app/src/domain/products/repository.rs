//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::products::{
        data::ProductDetails,
        records::{ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_AVAILABLE_PRODUCTS_SQL: &str = include_str!("sql/list_available_products.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const SET_PRODUCT_AVAILABILITY_SQL: &str = include_str!("sql/set_product_availability.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_available_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_AVAILABLE_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn search_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SEARCH_PRODUCTS_SQL)
            .bind(contains_pattern(name))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Like [`Self::get_product`], but an absent product is `None` rather than an error.
    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.name)
            .bind(&details.brand)
            .bind(&details.color)
            .bind(details.category.as_str())
            .bind(details.size.as_str())
            .bind(amount_to_i64("price", details.price)?)
            .bind(details.available)
            .bind(&details.image)
            .bind(&details.description)
            .bind(details.rating)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.name)
            .bind(&details.brand)
            .bind(&details.color)
            .bind(details.category.as_str())
            .bind(details.size.as_str())
            .bind(amount_to_i64("price", details.price)?)
            .bind(details.available)
            .bind(&details.image)
            .bind(&details.description)
            .bind(details.rating)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_availability(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        available: bool,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_PRODUCT_AVAILABILITY_SQL)
            .bind(product.into_uuid())
            .bind(available)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

/// Build an `ILIKE` pattern matching `name` anywhere, with its wildcards taken literally.
fn contains_pattern(name: &str) -> String {
    let mut pattern = String::with_capacity(name.len() + 2);

    pattern.push('%');

    for c in name.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category: String = row.try_get("category")?;
        let size: String = row.try_get("size")?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            brand: row.try_get("brand")?,
            color: row.try_get("color")?,
            category: category.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?,
            size: size.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "size".to_string(),
                source: Box::new(e),
            })?,
            price: try_get_amount(row, "price")?,
            available: row.try_get("available")?,
            image: row.try_get("image")?,
            description: row.try_get("description")?,
            rating: row.try_get("rating")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
