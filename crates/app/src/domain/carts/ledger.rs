//! Cart ledger
//!
//! The in-memory state of a cart (its line items and cached subtotal) and the
//! bookkeeping rules applied to it. The ledger never touches storage: the carts
//! service loads one from a [`CartRecord`], applies a single operation and
//! writes the result back under the cart's version check.
//!
//! The subtotal is maintained incrementally. Adding a line adds `price × quantity`
//! and removing one subtracts it, but overwriting a quantity leaves the subtotal
//! alone, so the cached value may drift from `Σ quantity × price` until
//! [`CartLedger::recalculate`] is applied.
//!
//! Every quantity and subtotal the ledger produces stays within [`MAX_AMOUNT`].

use thiserror::Error;

use crate::{
    database::MAX_AMOUNT,
    domain::{
        carts::records::{CartItemRecord, CartRecord},
        orders::{pricing::order_total, records::OrderItemRecord},
        products::records::{ProductRecord, ProductUuid},
    },
};

/// Raised when an operation cannot be applied to a ledger. The ledger is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("product is not available")]
    Unavailable,

    #[error("item not found in cart")]
    ItemNotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("amount out of range")]
    Overflow,
}

/// Everything an order needs from a cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub items: Vec<OrderItemRecord>,
    pub subtotal: u64,
    pub total: u64,
}

fn bounded(amount: Option<u64>) -> Result<u64, LedgerError> {
    amount
        .filter(|amount| *amount <= MAX_AMOUNT)
        .ok_or(LedgerError::Overflow)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    items: Vec<CartItemRecord>,
    subtotal: u64,
}

impl CartLedger {
    #[must_use]
    pub fn new(items: Vec<CartItemRecord>, subtotal: u64) -> Self {
        Self { items, subtotal }
    }

    #[must_use]
    pub fn from_record(cart: &CartRecord) -> Self {
        Self::new(cart.items.clone(), cart.subtotal)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItemRecord] {
        &self.items
    }

    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<CartItemRecord>, u64) {
        (self.items, self.subtotal)
    }

    fn position(&self, product: ProductUuid) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_uuid == product)
    }

    /// Add `quantity` of a product, merging into an existing line for the same product.
    ///
    /// # Errors
    ///
    /// Fails on a zero quantity, an unavailable product, or an amount above [`MAX_AMOUNT`].
    pub fn add(&mut self, product: &ProductRecord, quantity: u64) -> Result<(), LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }

        if !product.available {
            return Err(LedgerError::Unavailable);
        }

        let subtotal = bounded(
            product
                .price
                .checked_mul(quantity)
                .and_then(|amount| self.subtotal.checked_add(amount)),
        )?;

        match self
            .position(product.uuid)
            .and_then(|index| self.items.get_mut(index))
        {
            Some(item) => {
                item.quantity = bounded(item.quantity.checked_add(quantity))?;
                item.price = product.price;
            }
            None => self.items.push(CartItemRecord {
                product_uuid: product.uuid,
                quantity: bounded(Some(quantity))?,
                price: product.price,
            }),
        }

        self.subtotal = subtotal;

        Ok(())
    }

    /// Overwrite the quantity of an existing line. The cached subtotal is not adjusted.
    ///
    /// # Errors
    ///
    /// Fails on a zero or oversized quantity, or when the product has no line in the cart.
    pub fn set_quantity(&mut self, product: ProductUuid, quantity: u64) -> Result<(), LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }

        let quantity = bounded(Some(quantity))?;

        let item = self
            .position(product)
            .and_then(|index| self.items.get_mut(index))
            .ok_or(LedgerError::ItemNotFound)?;

        item.quantity = quantity;

        Ok(())
    }

    /// Remove a product's line, subtracting its current value from the subtotal.
    ///
    /// The subtotal saturates at zero when earlier drift left it too small.
    ///
    /// # Errors
    ///
    /// Fails when the product has no line in the cart.
    pub fn remove(&mut self, product: ProductUuid) -> Result<CartItemRecord, LedgerError> {
        let index = self.position(product).ok_or(LedgerError::ItemNotFound)?;

        let item = self.items.remove(index);

        self.subtotal = self
            .subtotal
            .saturating_sub(item.price.saturating_mul(item.quantity));

        Ok(item)
    }

    /// Recompute the subtotal from the lines and their current prices.
    ///
    /// # Errors
    ///
    /// Fails on arithmetic overflow, leaving the old subtotal in place.
    pub fn recalculate(&mut self) -> Result<u64, LedgerError> {
        let subtotal = self.items.iter().try_fold(0_u64, |sum, item| {
            bounded(
                item.price
                    .checked_mul(item.quantity)
                    .and_then(|amount| sum.checked_add(amount)),
            )
        })?;

        self.subtotal = subtotal;

        Ok(subtotal)
    }

    /// Snapshot the lines and subtotal for an order and empty the cart.
    ///
    /// # Errors
    ///
    /// Fails on an empty cart or when the order total overflows.
    pub fn checkout(&mut self) -> Result<Checkout, LedgerError> {
        if self.items.is_empty() {
            return Err(LedgerError::EmptyCart);
        }

        let total = bounded(order_total(self.subtotal))?;

        let items = self
            .items
            .drain(..)
            .map(|item| OrderItemRecord {
                product_uuid: item.product_uuid,
                quantity: item.quantity,
                unit_price: item.price,
            })
            .collect();

        let subtotal = std::mem::take(&mut self.subtotal);

        Ok(Checkout {
            items,
            subtotal,
            total,
        })
    }
}
