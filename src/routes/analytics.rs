use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::analytics::inventory_analytics;

#[get("/analytics/")]
pub async fn show_analytics(repo: web::Data<DieselRepository>) -> impl Responder {
    match inventory_analytics(repo.get_ref()) {
        Ok(analytics) => HttpResponse::Ok().json(analytics),
        Err(err) => error_response(&err),
    }
}
