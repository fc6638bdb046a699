//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{NewCart, NewCartItem},
            errors::CartsServiceError,
            ledger::CartLedger,
            records::{CartItemRecord, CartRecord, CartUuid},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
    orders_repository: PgOrdersRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
        }
    }

    async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut record = self.carts_repository.get_cart(tx, cart).await?;

        record.items = self.items_repository.get_cart_items(tx, cart).await?;

        Ok(record)
    }

    async fn load_cart_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut record = self.carts_repository.get_cart_for_user(tx, user).await?;

        record.items = self
            .items_repository
            .get_cart_items(tx, record.uuid)
            .await?;

        Ok(record)
    }

    /// Persist a mutated ledger, provided nobody wrote the cart since `cart` was read.
    async fn save(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &CartRecord,
        ledger: CartLedger,
    ) -> Result<CartRecord, CartsServiceError> {
        let (items, subtotal) = ledger.into_parts();

        let Some(mut saved) = self
            .carts_repository
            .update_cart(tx, cart.uuid, cart.version, subtotal)
            .await?
        else {
            warn!(cart = %cart.uuid, version = cart.version, "cart write lost a race");

            return Err(CartsServiceError::Conflict);
        };

        self.items_repository
            .replace_cart_items(tx, cart.uuid, &items)
            .await?;

        saved.items = items;

        Ok(saved)
    }

    /// Turn a cart into an order and empty it, committing both together.
    async fn place_order(
        &self,
        mut tx: Transaction<'_, Postgres>,
        cart: CartRecord,
    ) -> Result<OrderRecord, CartsServiceError> {
        let mut ledger = CartLedger::from_record(&cart);

        let checkout = ledger.checkout()?;

        self.save(&mut tx, &cart, ledger).await?;

        let order = self
            .orders_repository
            .create_order(
                &mut tx,
                &NewOrder {
                    uuid: OrderUuid::new(),
                    user_uuid: cart.user_uuid,
                    items: checkout.items,
                    subtotal: checkout.subtotal,
                    total: checkout.total,
                },
            )
            .await?;

        tx.commit().await?;

        info!(
            cart = %cart.uuid,
            order = %order.uuid,
            total = order.total,
            "checked out cart"
        );

        Ok(order)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_carts(&self) -> Result<Vec<CartRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut carts = self.carts_repository.list_carts(&mut tx).await?;

        let uuids: Vec<CartUuid> = carts.iter().map(|cart| cart.uuid).collect();

        let mut items = self
            .items_repository
            .get_items_for_carts(&mut tx, &uuids)
            .await?;

        tx.commit().await?;

        for cart in &mut carts {
            cart.items = items.remove(&cart.uuid.into_uuid()).unwrap_or_default();
        }

        Ok(carts)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_cart_for_user(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.load_cart_for_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .carts_repository
            .create_cart(&mut tx, cart.uuid, cart.user_uuid)
            .await?;

        tx.commit().await?;

        info!(cart = %created.uuid, user = %created.user_uuid, "created cart");

        Ok(created)
    }

    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.carts_repository.delete_cart(&mut tx, cart).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.load_cart(&mut tx, cart).await?;

        let product = self
            .products_repository
            .find_product(&mut tx, item.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut ledger = CartLedger::from_record(&record);

        ledger.add(&product, item.quantity)?;

        let saved = self.save(&mut tx, &record, ledger).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn set_item_quantity(
        &self,
        cart: CartUuid,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Vec<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.load_cart(&mut tx, cart).await?;

        let mut ledger = CartLedger::from_record(&record);

        ledger.set_quantity(product, quantity)?;

        let saved = self.save(&mut tx, &record, ledger).await?;

        tx.commit().await?;

        Ok(saved.items)
    }

    async fn remove_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.load_cart(&mut tx, cart).await?;

        let mut ledger = CartLedger::from_record(&record);

        ledger.remove(product)?;

        let saved = self.save(&mut tx, &record, ledger).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn recalculate_subtotal(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.load_cart(&mut tx, cart).await?;

        let mut ledger = CartLedger::from_record(&record);

        let subtotal = ledger.recalculate()?;

        if subtotal != record.subtotal {
            info!(
                cart = %record.uuid,
                cached = record.subtotal,
                subtotal,
                "repaired drifted cart subtotal"
            );
        }

        let saved = self.save(&mut tx, &record, ledger).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn checkout(&self, cart: CartUuid) -> Result<OrderRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.load_cart(&mut tx, cart).await?;

        self.place_order(tx, record).await
    }

    async fn checkout_for_user(&self, user: UserUuid) -> Result<OrderRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.load_cart_for_user(&mut tx, user).await?;

        self.place_order(tx, record).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves every cart.
    async fn list_carts(&self) -> Result<Vec<CartRecord>, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve the cart owned by a user.
    async fn get_cart_for_user(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Creates an empty cart. Each user may own one cart.
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError>;

    /// Deletes a cart with the given UUID.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;

    /// Add an item to the given cart, merging with an existing line for the same product.
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Overwrite the quantity of a line. The cached subtotal is left as it was.
    async fn set_item_quantity(
        &self,
        cart: CartUuid,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Vec<CartItemRecord>, CartsServiceError>;

    /// Remove a product's line from the cart.
    async fn remove_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Recompute the cached subtotal from current prices.
    async fn recalculate_subtotal(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;

    /// Place an order for the cart's contents and empty it.
    async fn checkout(&self, cart: CartUuid) -> Result<OrderRecord, CartsServiceError>;

    /// Place an order for the contents of a user's cart and empty it.
    async fn checkout_for_user(&self, user: UserUuid) -> Result<OrderRecord, CartsServiceError>;
}
