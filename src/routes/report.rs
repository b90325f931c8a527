use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::report::{
    REPORT_FILE_NAME, inventory_report as inventory_report_service,
};

#[get("/inventory-report/")]
pub async fn inventory_report(repo: web::Data<DieselRepository>) -> impl Responder {
    match inventory_report_service(repo.get_ref()) {
        Ok(pdf) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={REPORT_FILE_NAME}"),
            ))
            .body(pdf),
        Err(err) => error_response(&err),
    }
}
