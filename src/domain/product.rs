use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::{ProductId, ProductPrice};

/// A product tracked by the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: ProductPrice,
    /// On-hand quantity. Only [`Product::remove_stock`] keeps it non-negative.
    pub stock: i32,
}

/// Information required to create a new [`Product`] or to replace every
/// mutable field of an existing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: ProductPrice,
    pub stock: i32,
}

/// Raised when a stock change cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The reduction would take the on-hand quantity below zero.
    #[error("insufficient stock: {available} available, {requested} requested")]
    Insufficient { available: i32, requested: i32 },
    /// The resulting quantity does not fit in the stock column.
    #[error("stock out of range: {available} available, {requested} requested")]
    OutOfRange { available: i32, requested: i32 },
}

impl Product {
    /// Value of the on-hand stock at the current unit price.
    pub fn inventory_value(&self) -> f64 {
        self.price.get() * f64::from(self.stock)
    }

    /// Subtract `quantity` from the on-hand stock.
    ///
    /// Only the upper bound is checked: a negative `quantity` passes the guard
    /// and increases the stock.
    ///
    /// A negative quantity whose result would not fit in an `i32` is
    /// rejected with [`StockError::OutOfRange`].
    pub fn remove_stock(&mut self, quantity: i32) -> Result<(), StockError> {
        if self.stock < quantity {
            return Err(StockError::Insufficient {
                available: self.stock,
                requested: quantity,
            });
        }
        self.stock = self
            .stock
            .checked_sub(quantity)
            .ok_or(StockError::OutOfRange {
                available: self.stock,
                requested: quantity,
            })?;
        Ok(())
    }
}
