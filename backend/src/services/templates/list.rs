use actix_web::{web, HttpResponse, Responder};

use crate::config::AppConfig;
use crate::services::templates::store;

/// Actix handler for `GET /api/templates`.
///
/// Returns the catalog entries as a JSON array, or `503` when the
/// registry cannot be read.
pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match store::list_templates(&config.database_path) {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error listing templates: {}", e)),
    }
}
