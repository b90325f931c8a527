use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::types::ProductId;

/// Products with fewer units than this on hand are reported as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Reduced view of a product that is running low.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockItem {
    pub id: ProductId,
    pub name: String,
    pub stock: i32,
}

/// Aggregate figures computed over the whole inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryAnalytics {
    pub total_inventory_value: f64,
    pub low_stock_items: Vec<LowStockItem>,
}

impl InventoryAnalytics {
    pub fn from_products(products: &[Product]) -> Self {
        let total_inventory_value = products.iter().map(Product::inventory_value).sum();
        let low_stock_items = products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .map(|p| LowStockItem {
                id: p.id,
                name: p.name.clone(),
                stock: p.stock,
            })
            .collect();

        Self {
            total_inventory_value,
            low_stock_items,
        }
    }
}
