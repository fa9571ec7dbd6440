use actix_web::{web, HttpResponse, Responder};
use common::model::profile::ProfileData;
use common::model::qr::QrStyle;
use common::model::template::CardSide;
use log::warn;

use crate::config::AppConfig;
use crate::services::templates::customize::customize_markup;

/// Actix handler for `GET /api/templates/{template_id}/{side}/preview`.
///
/// Renders the side entirely from the documented fallback values (empty
/// profile), so every placeholder shows its placeholder text and the QR
/// slot shows its affordance. The client falls back to this endpoint when
/// a customize request fails.
pub async fn process(
    path: web::Path<(i64, String)>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let (template_id, side) = path.into_inner();
    let Some(side) = CardSide::parse(&side) else {
        return HttpResponse::BadRequest().body("Side must be 'front' or 'back'");
    };

    let empty = ProfileData::default();
    match customize_markup(&config, template_id, side, &empty, QrStyle::Standard) {
        Ok(Some(markup)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(markup),
        Ok(None) => {
            warn!("Template {} not found in registry", template_id);
            HttpResponse::NotFound().body("Template not found")
        }
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error rendering preview: {}", e)),
    }
}
