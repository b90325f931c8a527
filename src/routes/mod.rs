use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod analytics;
pub mod products;
pub mod report;

/// JSON body of every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// JSON body of responses that carry only a confirmation.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Map a service failure onto its status code and `{"detail": ...}` body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ErrorBody {
        detail: err.to_string(),
    };
    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::InsufficientStock => HttpResponse::BadRequest().json(body),
        ServiceError::StockOutOfRange => HttpResponse::BadRequest().json(body),
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}

fn unprocessable<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::UnprocessableEntity().json(ErrorBody {
        detail: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

/// Register every route together with extractor configs that reject
/// malformed bodies, query strings and path segments with 422.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| unprocessable(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| unprocessable(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _req| unprocessable(err)))
        .service(products::create_product)
        .service(products::search_products)
        .service(products::get_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(products::remove_stock)
        .service(analytics::show_analytics)
        .service(report::inventory_report);
}
