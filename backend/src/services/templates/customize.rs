//! # Template Customization Service
//!
//! The server-side half of the preview pipeline: takes a template side and
//! a caller-supplied profile record, substitutes every placeholder token,
//! sanitizes the result, and returns the rendered markup.
//!
//! ## Workflow
//!
//! 1. `process` receives `POST /api/templates/{template_id}/{side}/customize`
//!    with a JSON `ProfileData` body. An optional `style` query parameter
//!    selects the QR style variant carried in the embedded QR image URL.
//! 2. The template's markup for the requested side is fetched from the
//!    registry (`404` on a miss, logged; `503` on a storage fault).
//! 3. A `ProfileLinks` bundle is derived from the profile under the
//!    configured public base URL. When the profile has no name yet there
//!    is nothing meaningful to encode, so the `{{qrCode}}` token renders
//!    its placeholder text instead of an image.
//! 4. The substitution engine and the sanitizer run in that order; the
//!    rendered markup is returned as `text/html; charset=utf-8`.
//!
//! Concurrent customize calls for the same template/side are allowed to
//! race; the client applies a response only when its generation token is
//! still current.

use actix_web::{web, HttpResponse, Responder};
use common::model::links::ProfileLinks;
use common::model::profile::ProfileData;
use common::model::qr::QrStyle;
use common::model::template::CardSide;
use common::render::{sanitize_markup, substitute};
use log::warn;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::services::templates::store;

#[derive(Deserialize)]
pub struct CustomizeParams {
    /// QR style variant to embed in the markup's QR image URL.
    pub style: Option<String>,
}

/// Actix handler for `POST /api/templates/{template_id}/{side}/customize`.
pub async fn process(
    path: web::Path<(i64, String)>,
    params: web::Query<CustomizeParams>,
    config: web::Data<AppConfig>,
    payload: web::Json<ProfileData>,
) -> impl Responder {
    let (template_id, side) = path.into_inner();
    let Some(side) = CardSide::parse(&side) else {
        return HttpResponse::BadRequest().body("Side must be 'front' or 'back'");
    };
    let style = QrStyle::parse(params.style.as_deref().unwrap_or(""));

    match customize_markup(&config, template_id, side, &payload, style) {
        Ok(Some(markup)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(markup),
        Ok(None) => {
            warn!("Template {} not found in registry", template_id);
            HttpResponse::NotFound().body("Template not found")
        }
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error customizing template: {}", e)),
    }
}

/// Renders one side of a template against `profile`. `Ok(None)` marks a
/// registry miss.
pub fn customize_markup(
    config: &AppConfig,
    template_id: i64,
    side: CardSide,
    profile: &ProfileData,
    style: QrStyle,
) -> Result<Option<String>, String> {
    let Some(template) = store::fetch_template(&config.database_path, template_id)? else {
        return Ok(None);
    };

    let links = ProfileLinks::derive(profile, &config.public_base_url, style);
    let qr_image_url = if profile.full_name.trim().is_empty() {
        None
    } else {
        Some(links.qr_image_url.as_str())
    };

    let rendered = substitute(template.markup_for(side), profile, qr_image_url);
    Ok(Some(sanitize_markup(&rendered)))
}
