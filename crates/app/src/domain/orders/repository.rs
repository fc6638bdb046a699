//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        orders::{
            data::NewOrder,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
        },
        products::records::ProductUuid,
        users::records::UserUuid,
    },
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const LIST_ORDERS_FOR_USER_SQL: &str = include_str!("sql/list_orders_for_user.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEMS_SQL: &str = include_str!("sql/create_order_items.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");
const TOTAL_SALES_SQL: &str = include_str!("sql/total_sales.sql");
const COUNT_ORDERS_SQL: &str = include_str!("sql/count_orders.sql");

/// An order row before its items are attached.
struct OrderRow(OrderRecord);

/// An order item row, tagged with the order it belongs to.
struct OrderItemRow {
    order_uuid: Uuid,
    item: OrderItemRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let rows = query_as::<Postgres, OrderRow>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        self.attach_items(tx, rows).await
    }

    pub(crate) async fn list_orders_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let rows = query_as::<Postgres, OrderRow>(LIST_ORDERS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        self.attach_items(tx, rows).await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        let row = query_as::<Postgres, OrderRow>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        let mut orders = self.attach_items(tx, vec![row]).await?;

        orders.pop().ok_or(sqlx::Error::RowNotFound)
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        let OrderRow(mut created) = query_as::<Postgres, OrderRow>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(amount_to_i64("subtotal", order.subtotal)?)
            .bind(amount_to_i64("total", order.total)?)
            .fetch_one(&mut **tx)
            .await?;

        let mut products = Vec::with_capacity(order.items.len());
        let mut quantities = Vec::with_capacity(order.items.len());
        let mut unit_prices = Vec::with_capacity(order.items.len());

        for item in &order.items {
            products.push(item.product_uuid.into_uuid());
            quantities.push(amount_to_i64("quantity", item.quantity)?);
            unit_prices.push(amount_to_i64("unit_price", item.unit_price)?);
        }

        query(CREATE_ORDER_ITEMS_SQL)
            .bind(order.uuid.into_uuid())
            .bind(products)
            .bind(quantities)
            .bind(unit_prices)
            .execute(&mut **tx)
            .await?;

        created.items.clone_from(&order.items);

        Ok(created)
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn total_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(TOTAL_SALES_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_ORDERS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    async fn attach_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rows: Vec<OrderRow>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = rows.iter().map(|row| row.0.uuid.into_uuid()).collect();

        let items = query_as::<Postgres, OrderItemRow>(GET_ORDER_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut by_order: FxHashMap<Uuid, Vec<OrderItemRecord>> = FxHashMap::default();

        for row in items {
            by_order.entry(row.order_uuid).or_default().push(row.item);
        }

        Ok(rows
            .into_iter()
            .map(|OrderRow(mut order)| {
                order.items = by_order
                    .remove(&order.uuid.into_uuid())
                    .unwrap_or_default();
                order
            })
            .collect())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(OrderRecord {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            items: Vec::new(),
            subtotal: try_get_amount(row, "subtotal")?,
            total: try_get_amount(row, "total")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: row.try_get("order_uuid")?,
            item: OrderItemRecord {
                product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                quantity: try_get_amount(row, "quantity")?,
                unit_price: try_get_amount(row, "unit_price")?,
            },
        })
    }
}
