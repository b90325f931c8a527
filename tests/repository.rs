use std::thread;

use diesel::prelude::*;
use stockroom::domain::product::{NewProduct, StockError};
use stockroom::domain::types::{ProductId, ProductPrice};
use stockroom::repository::errors::RepositoryError;
use stockroom::repository::{ProductListQuery, ProductReader, ProductWriter};
use stockroom::schema::products;

mod common;

fn new_product(name: &str, price: f64, stock: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{name} description"),
        price: ProductPrice::new(price).expect("valid price"),
        stock,
    }
}

#[test]
fn create_assigns_increasing_ids_and_echoes_fields() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let first = repo
        .create_product(&new_product("T-Shirt", 19.99, 100))
        .expect("should create product");
    let second = repo
        .create_product(&new_product("Mug", 5.0, 3))
        .expect("should create product");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.name, "T-Shirt");
    assert_eq!(first.description, "T-Shirt description");
    assert_eq!(first.price, 19.99);
    assert_eq!(first.stock, 100);

    let fetched = repo
        .get_product_by_id(first.id)
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(fetched, first);
}

#[test]
fn list_filters_by_name_and_stock_bounds() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    repo.create_product(&new_product("T-Shirt", 19.99, 100))
        .expect("should create product");
    repo.create_product(&new_product("Sweatshirt", 39.0, 8))
        .expect("should create product");
    repo.create_product(&new_product("Mug", 5.0, 50))
        .expect("should create product");

    let all = repo
        .list_products(ProductListQuery::default())
        .expect("should list");
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["T-Shirt", "Sweatshirt", "Mug"]);

    let shirts = repo
        .list_products(ProductListQuery::default().name("SHIRT"))
        .expect("should list");
    assert_eq!(shirts.len(), 2);

    let blank_name = repo
        .list_products(ProductListQuery::default().name(""))
        .expect("should list");
    assert_eq!(blank_name.len(), 3);

    let above = repo
        .list_products(ProductListQuery::default().min_stock(101))
        .expect("should list");
    assert!(above.is_empty());

    let bounded = repo
        .list_products(
            ProductListQuery::default()
                .name("shirt")
                .min_stock(8)
                .max_stock(99),
        )
        .expect("should list");
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].name, "Sweatshirt");
}

#[test]
fn update_overwrites_every_field() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let created = repo
        .create_product(&new_product("T-Shirt", 19.99, 100))
        .expect("should create product");

    let updated = repo
        .update_product(created.id, &new_product("Hoodie", 45.0, 12))
        .expect("should update product");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Hoodie");
    assert_eq!(updated.description, "Hoodie description");
    assert_eq!(updated.price, 45.0);
    assert_eq!(updated.stock, 12);

    let missing = ProductId::new(999).expect("valid id");
    assert!(matches!(
        repo.update_product(missing, &new_product("Ghost", 1.0, 1)),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn delete_removes_row_and_second_delete_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let created = repo
        .create_product(&new_product("T-Shirt", 19.99, 100))
        .expect("should create product");

    repo.delete_product(created.id).expect("should delete");

    assert!(
        repo.get_product_by_id(created.id)
            .expect("lookup should succeed")
            .is_none()
    );
    assert!(matches!(
        repo.delete_product(created.id),
        Err(RepositoryError::NotFound)
    ));

    let next = repo
        .create_product(&new_product("Mug", 5.0, 3))
        .expect("should create product");
    assert_ne!(next.id, created.id);
}

#[test]
fn remove_stock_decrements_and_guards_overdraw() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let created = repo
        .create_product(&new_product("T-Shirt", 19.99, 100))
        .expect("should create product");

    let updated = repo
        .remove_stock(created.id, 10)
        .expect("should remove stock");
    assert_eq!(updated.stock, 90);

    let err = repo
        .remove_stock(created.id, 150)
        .expect_err("overdraw must fail");
    assert!(matches!(
        err,
        RepositoryError::Stock(StockError::Insufficient {
            available: 90,
            requested: 150
        })
    ));

    let mut conn = test_db
        .pool()
        .get()
        .expect("should acquire DB connection");
    let stored: i32 = products::table
        .filter(products::id.eq(created.id.get()))
        .select(products::stock)
        .first(&mut conn)
        .expect("product should still exist");
    assert_eq!(stored, 90);

    let missing = ProductId::new(42).expect("valid id");
    assert!(matches!(
        repo.remove_stock(missing, 1),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn remove_stock_with_negative_quantity_restocks_within_range() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let created = repo
        .create_product(&new_product("T-Shirt", 19.99, 100))
        .expect("should create product");

    let restocked = repo
        .remove_stock(created.id, -5)
        .expect("negative quantity should restock");
    assert_eq!(restocked.stock, 105);

    let full = repo
        .create_product(&new_product("Crate", 1.0, 2_147_483_000))
        .expect("should create product");
    assert!(matches!(
        repo.remove_stock(full.id, -1000),
        Err(RepositoryError::Stock(StockError::OutOfRange { .. }))
    ));
    let stored = repo
        .get_product_by_id(full.id)
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(stored.stock, 2_147_483_000);
}

#[test]
fn concurrent_writers_do_not_fail_on_locks() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let tracked = repo
        .create_product(&new_product("T-Shirt", 19.99, 1000))
        .expect("should create product")
        .id;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let repo = &repo;
                scope.spawn(move || {
                    for n in 0..25 {
                        let name = format!("Item {worker}-{n}");
                        repo.create_product(&new_product(&name, 1.0, 1))
                            .expect("concurrent create should succeed");
                        repo.remove_stock(tracked, 1)
                            .expect("concurrent decrement should succeed");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker should not panic");
        }
    });

    let all = repo
        .list_products(ProductListQuery::default())
        .expect("should list");
    assert_eq!(all.len(), 1 + 8 * 25);

    let stored = repo
        .get_product_by_id(tracked)
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(stored.stock, 1000 - 8 * 25);
}
