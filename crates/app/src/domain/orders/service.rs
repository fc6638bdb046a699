//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        orders::{
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders_for_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%order, "deleted order");

        Ok(())
    }

    async fn total_sales(&self) -> Result<u64, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.total_sales(&mut tx).await?;

        tx.commit().await?;

        u64::try_from(total).map_err(|_negative| OrdersServiceError::InvalidData)
    }

    async fn count_orders(&self) -> Result<u64, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves every order.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves the orders placed by one user.
    async fn list_orders_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Deletes an order with the given UUID.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;

    /// Sum of every order total, zero when there are no orders.
    async fn total_sales(&self) -> Result<u64, OrdersServiceError>;

    /// Number of orders placed.
    async fn count_orders(&self) -> Result<u64, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::carts::CartsService, test::TestContext};

    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn total_sales_is_zero_without_orders() -> TestResult {
        let ctx = TestContext::new().await;

        assert_eq!(ctx.orders.total_sales().await?, 0);
        assert_eq!(ctx.orders.count_orders().await?, 0);
        assert!(ctx.orders.list_orders().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn orders_are_listed_per_user_and_summed() -> TestResult {
        let ctx = TestContext::new().await;
        let shirt = ctx.create_product("Linen Shirt", 2500).await?;
        let ada = ctx.create_cart_for_new_user("ada@example.com").await?;
        let grace = ctx.create_cart_for_new_user("grace@example.com").await?;

        ctx.add_item(ada.uuid, shirt.uuid, 1).await?;
        let first = ctx.carts.checkout(ada.uuid).await?;

        ctx.add_item(grace.uuid, shirt.uuid, 2).await?;
        let second = ctx.carts.checkout(grace.uuid).await?;

        let for_ada = ctx.orders.list_orders_for_user(ada.user_uuid).await?;

        assert_eq!(for_ada.len(), 1);
        assert_eq!(for_ada.first().map(|o| o.uuid), Some(first.uuid));
        assert_eq!(ctx.orders.count_orders().await?, 2);
        assert_eq!(ctx.orders.total_sales().await?, first.total + second.total);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for a PostgreSQL testcontainer"]
    async fn delete_order_then_get_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let shirt = ctx.create_product("Linen Shirt", 2500).await?;
        let cart = ctx.create_cart_for_new_user("ada@example.com").await?;

        ctx.add_item(cart.uuid, shirt.uuid, 1).await?;
        let order = ctx.carts.checkout(cart.uuid).await?;

        ctx.orders.delete_order(order.uuid).await?;

        let result = ctx.orders.get_order(order.uuid).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let again = ctx.orders.delete_order(order.uuid).await;

        assert!(matches!(again, Err(OrdersServiceError::NotFound)));

        Ok(())
    }
}
