use crate::domain::analytics::InventoryAnalytics;
use crate::repository::{ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Compute inventory value and the low-stock list over every product.
pub fn inventory_analytics<R>(repo: &R) -> ServiceResult<InventoryAnalytics>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default()) {
        Ok(products) => Ok(InventoryAnalytics::from_products(&products)),
        Err(e) => {
            log::error!("Failed to load products for analytics: {e}");
            Err(ServiceError::Internal)
        }
    }
}
