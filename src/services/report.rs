use crate::repository::{ProductListQuery, ProductReader};
use crate::report::render_inventory_report;

use super::errors::NO_PRODUCTS_FOUND;
use super::{ServiceError, ServiceResult};

/// Suggested file name for the downloaded report.
pub const REPORT_FILE_NAME: &str = "inventory_report.pdf";

/// Render every product into a PDF table.
///
/// Fails with `NotFound` when there is nothing to report on.
pub fn inventory_report<R>(repo: &R) -> ServiceResult<Vec<u8>>
where
    R: ProductReader,
{
    let products = match repo.list_products(ProductListQuery::default()) {
        Ok(products) if products.is_empty() => {
            return Err(ServiceError::NotFound(NO_PRODUCTS_FOUND));
        }
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to load products for report: {e}");
            return Err(ServiceError::Internal);
        }
    };

    render_inventory_report(&products).map_err(|e| {
        log::error!("Failed to render inventory report: {e}");
        ServiceError::Internal
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::domain::types::{ProductId, ProductPrice};
    use crate::repository::test::TestRepository;

    #[test]
    fn empty_inventory_has_no_report() {
        let repo = TestRepository::default();
        assert_eq!(
            inventory_report(&repo).unwrap_err(),
            ServiceError::NotFound(NO_PRODUCTS_FOUND)
        );
    }

    #[test]
    fn renders_pdf_for_stored_products() {
        let repo = TestRepository::new(vec![Product {
            id: ProductId::new(1).unwrap(),
            name: "T-Shirt".into(),
            description: "Cotton".into(),
            price: ProductPrice::new(19.99).unwrap(),
            stock: 100,
        }]);

        let bytes = inventory_report(&repo).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
