//! Cart Items Repository

use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        carts::records::{CartItemRecord, CartUuid},
        products::records::ProductUuid,
    },
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("../sql/delete_cart_items.sql");
const CREATE_CART_ITEMS_SQL: &str = include_str!("../sql/create_cart_items.sql");

/// A cart item row, tagged with the cart it belongs to.
struct CartItemRow {
    cart_uuid: Uuid,
    item: CartItemRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Items of one cart, in the order they were first added.
    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        let mut items = self.get_items_for_carts(tx, &[cart]).await?;

        Ok(items.remove(&cart.into_uuid()).unwrap_or_default())
    }

    /// Items of several carts at once, keyed by cart.
    pub(crate) async fn get_items_for_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        carts: &[CartUuid],
    ) -> Result<FxHashMap<Uuid, Vec<CartItemRecord>>, sqlx::Error> {
        let uuids: Vec<Uuid> = carts.iter().map(|cart| cart.into_uuid()).collect();

        let rows = query_as::<Postgres, CartItemRow>(GET_CART_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut by_cart: FxHashMap<Uuid, Vec<CartItemRecord>> = FxHashMap::default();

        for row in rows {
            by_cart.entry(row.cart_uuid).or_default().push(row.item);
        }

        Ok(by_cart)
    }

    /// Replace every item of a cart, keeping the given order.
    pub(crate) async fn replace_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        items: &[CartItemRecord],
    ) -> Result<(), sqlx::Error> {
        query(DELETE_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        if items.is_empty() {
            return Ok(());
        }

        let mut products = Vec::with_capacity(items.len());
        let mut quantities = Vec::with_capacity(items.len());

        for item in items {
            products.push(item.product_uuid.into_uuid());
            quantities.push(amount_to_i64("quantity", item.quantity)?);
        }

        query(CREATE_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .bind(products)
            .bind(quantities)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            cart_uuid: row.try_get("cart_uuid")?,
            item: CartItemRecord {
                product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                quantity: try_get_amount(row, "quantity")?,
                price: try_get_amount(row, "price")?,
            },
        })
    }
}
