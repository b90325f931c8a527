use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching products.
///
/// Every filter is optional; the ones that are set must all match.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    /// Inclusive lower bound on stock.
    pub min_stock: Option<i32>,
    /// Inclusive upper bound on stock.
    pub max_stock: Option<i32>,
}

impl ProductListQuery {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn min_stock(mut self, min_stock: i32) -> Self {
        self.min_stock = Some(min_stock);
        self
    }
    pub fn max_stock(mut self, max_stock: i32) -> Self {
        self.max_stock = Some(max_stock);
        self
    }

    /// Name filter with blank input treated as absent.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// In-memory equivalent of the SQL filter, used by non-SQL repositories.
    pub fn matches(&self, product: &Product) -> bool {
        let name_matches = self.name_filter().is_none_or(|name| {
            product
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
        });
        let above_min = self.min_stock.is_none_or(|min| product.stock >= min);
        let below_max = self.max_stock.is_none_or(|max| product.stock <= max);

        name_matches && above_min && below_max
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query, in ascending id order.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities. Each call commits on its own.
pub trait ProductWriter {
    /// Persist a new product and return it with its assigned id.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite every mutable field of an existing product.
    ///
    /// Returns [`errors::RepositoryError::NotFound`] if the id is unknown.
    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product>;
    /// Permanently remove a product.
    ///
    /// Returns [`errors::RepositoryError::NotFound`] if the id is unknown.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    /// Subtract `quantity` from a product's stock after checking it is
    /// available.
    ///
    /// The read, the check and the write share one transaction but no row
    /// lock, so concurrent callers can both pass the check against the same
    /// snapshot.
    fn remove_stock(&self, id: ProductId, quantity: i32) -> RepositoryResult<Product>;
}
