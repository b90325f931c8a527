use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::forms::products::{ProductForm, ProductSearchParams, StockUpdateForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductReader, ProductWriter};

use super::errors::PRODUCT_NOT_FOUND;
use super::{ServiceError, ServiceResult};

/// Path identifiers that can never exist are reported the same way as
/// identifiers that do not exist.
fn parse_product_id(product_id: i32) -> ServiceResult<ProductId> {
    ProductId::new(product_id).map_err(|_| ServiceError::NotFound(PRODUCT_NOT_FOUND))
}

/// Persist a new product built from the submitted form.
pub fn create_product<R>(form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let new_product = form.into_new_product();

    match repo.create_product(&new_product) {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.name);
            Ok(product)
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single product.
pub fn get_product<R>(product_id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound(PRODUCT_NOT_FOUND)),
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List products matching every supplied filter. An empty match is not an
/// error.
pub fn search_products<R>(params: ProductSearchParams, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    repo.list_products(params.into()).map_err(|e| {
        log::error!("Failed to list products: {e}");
        ServiceError::Internal
    })
}

/// Replace name, description, price and stock of an existing product.
pub fn update_product<R>(product_id: i32, form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let product_id = parse_product_id(product_id)?;
    let new_values = form.into_new_product();

    match repo.update_product(product_id, &new_values) {
        Ok(product) => Ok(product),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(PRODUCT_NOT_FOUND)),
        Err(e) => {
            log::error!("Failed to update product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Permanently remove a product.
pub fn delete_product<R>(product_id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.delete_product(product_id) {
        Ok(()) => {
            log::info!("Deleted product {product_id}");
            Ok(())
        }
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(PRODUCT_NOT_FOUND)),
        Err(e) => {
            log::error!("Failed to delete product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Take `form.quantity` units out of a product's stock.
///
/// The quantity's sign is not checked, so a negative value restocks.
pub fn remove_stock<R>(product_id: i32, form: StockUpdateForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.remove_stock(product_id, form.quantity) {
        Ok(product) => {
            log::info!(
                "Removed {} units from product {product_id}, {} left",
                form.quantity,
                product.stock
            );
            Ok(product)
        }
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(PRODUCT_NOT_FOUND)),
        Err(RepositoryError::Stock(e)) => {
            log::info!("Rejected stock removal for product {product_id}: {e}");
            Err(e.into())
        }
        Err(e) => {
            log::error!("Failed to update stock of product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
