use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChanges as DbProductChanges,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        // SQLite's LIKE already ignores ASCII case.
        if let Some(name) = query.name_filter() {
            items = items.filter(products::name.like(format!("%{name}%")));
        }

        if let Some(min_stock) = query.min_stock {
            items = items.filter(products::stock.ge(min_stock));
        }

        if let Some(max_stock) = query.max_stock {
            items = items.filter(products::stock.le(max_stock));
        }

        let items = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.into();

        let created = diesel::insert_into(products::table)
            .values(&db_product)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes: DbProductChanges = product.into();

        let updated = diesel::update(products::table.find(id.get()))
            .set(&changes)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.try_into()?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn remove_stock(&self, id: ProductId, quantity: i32) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // Take the write lock before reading; a deferred transaction would
        // fail its lock upgrade with SQLITE_BUSY instead of waiting.
        conn.immediate_transaction::<Product, RepositoryError, _>(|conn| {
            let current = products::table
                .find(id.get())
                .first::<DbProduct>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let mut product: Product = current.try_into()?;
            product.remove_stock(quantity)?;

            let updated = diesel::update(products::table.find(id.get()))
                .set(products::stock.eq(product.stock))
                .returning(DbProduct::as_returning())
                .get_result::<DbProduct>(conn)?;

            Ok(updated.try_into()?)
        })
    }
}
