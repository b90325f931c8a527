use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ProductPrice, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub stock: i32,
}

/// Full-replace changeset. Every mutable column is named so an update never
/// leaves a stale value behind.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChanges<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub stock: i32,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: product.name,
            description: product.description,
            price: ProductPrice::new(product.price)?,
            stock: product.stock,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: &product.name,
            description: &product.description,
            price: product.price.get(),
            stock: product.stock,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for ProductChanges<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: &product.name,
            description: &product.description,
            price: product.price.get(),
            stock: product.stock,
        }
    }
}
