//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        carts::records::{CartRecord, CartUuid},
        users::records::UserUuid,
    },
};

const LIST_CARTS_SQL: &str = include_str!("../sql/list_carts.sql");
const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const GET_CART_FOR_USER_SQL: &str = include_str!("../sql/get_cart_for_user.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const UPDATE_CART_SQL: &str = include_str!("../sql/update_cart.sql");
const DELETE_CART_SQL: &str = include_str!("../sql/delete_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LIST_CARTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        user: UserUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Write a new subtotal if the cart is still at `expected_version`, bumping the version.
    ///
    /// Returns `None` when another writer got there first.
    pub(crate) async fn update_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        expected_version: i64,
        subtotal: u64,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(UPDATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(expected_version)
            .bind(amount_to_i64("subtotal", subtotal)?)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            items: Vec::new(),
            subtotal: try_get_amount(row, "subtotal")?,
            version: row.try_get("version")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
