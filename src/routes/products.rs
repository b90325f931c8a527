use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::forms::products::{ProductForm, ProductSearchParams, StockUpdateForm};
use crate::repository::DieselRepository;
use crate::routes::{MessageBody, error_response};
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, remove_stock as remove_stock_service,
    search_products as search_products_service, update_product as update_product_service,
};

#[post("/products/")]
pub async fn create_product(
    form: web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_product_service(form.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[get("/products/")]
pub async fn search_products(
    params: web::Query<ProductSearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_products_service(params.into_inner(), repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(&err),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    form: web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_product_service(product_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageBody {
            message: "Product deleted",
        }),
        Err(err) => error_response(&err),
    }
}

#[patch("/products/{product_id}/stock")]
pub async fn remove_stock(
    product_id: web::Path<i32>,
    form: web::Json<StockUpdateForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_stock_service(product_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}
