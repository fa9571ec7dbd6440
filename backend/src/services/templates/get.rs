//! # Raw Markup Retrieval Service
//!
//! Serves the unrendered markup of one side of a template, placeholder
//! tokens included. This is the resource the preview surface fetches when
//! it wants to run the substitution engine locally.
//!
//! ## Workflow
//!
//! 1. The `process` handler receives `GET /api/templates/{template_id}/{side}`.
//! 2. The `side` path segment is parsed into a `CardSide`; anything other
//!    than `front` or `back` is a `400`.
//! 3. The template row is fetched from the registry. A missing id is
//!    logged and answered with `404` — the client synthesizes its fallback
//!    card in that case. Storage faults are `503`.
//! 4. On success the side's markup is returned verbatim as
//!    `text/html; charset=utf-8`.

use actix_web::{web, HttpResponse, Responder};
use common::model::template::CardSide;
use log::warn;

use crate::config::AppConfig;
use crate::services::templates::store;

/// Actix handler for `GET /api/templates/{template_id}/{side}`.
pub async fn process(
    path: web::Path<(i64, String)>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let (template_id, side) = path.into_inner();
    let Some(side) = CardSide::parse(&side) else {
        return HttpResponse::BadRequest().body("Side must be 'front' or 'back'");
    };

    match store::fetch_template(&config.database_path, template_id) {
        Ok(Some(template)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(template.markup_for(side).to_string()),
        Ok(None) => {
            warn!("Template {} not found in registry", template_id);
            HttpResponse::NotFound().body("Template not found")
        }
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving template: {}", e)),
    }
}
