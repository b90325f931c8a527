use serde::Deserialize;

use crate::domain::product::NewProduct;
use crate::domain::types::ProductPrice;
use crate::repository::ProductListQuery;

/// Body of `POST /products/` and `PUT /products/{id}`.
///
/// All four fields are required; values are not range-checked.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: ProductPrice,
    pub stock: i32,
}

impl ProductForm {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Query parameters accepted by `GET /products/`.
#[derive(Deserialize, Debug, Default)]
pub struct ProductSearchParams {
    pub name: Option<String>,
    pub min_stock: Option<i32>,
    pub max_stock: Option<i32>,
}

impl From<ProductSearchParams> for ProductListQuery {
    fn from(params: ProductSearchParams) -> Self {
        Self {
            name: params.name,
            min_stock: params.min_stock,
            max_stock: params.max_stock,
        }
    }
}

/// Body of `PATCH /products/{id}/stock`.
#[derive(Debug, Clone, Deserialize)]
pub struct StockUpdateForm {
    /// Number of units to take out of stock.
    pub quantity: i32,
}
