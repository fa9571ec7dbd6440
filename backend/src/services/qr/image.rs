use actix_web::{web, HttpResponse, Responder};
use common::model::qr::{QrBorder, QrBorderShape, QrStyle, QrStyleOptions};
use serde::Deserialize;

use crate::services::qr::render::{encode_png, render_qr};

/// Query parameters of the QR image endpoint. Everything but the payload
/// is optional; unrecognized style names degrade to the standard variant
/// rather than failing the request.
#[derive(Deserialize)]
pub struct QrImageQuery {
    pub data: String,
    pub size: Option<u32>,
    pub style: Option<String>,
    pub dark: Option<String>,
    pub light: Option<String>,
    /// Border shape; its presence enables the border.
    pub border: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
}

/// Actix handler for `GET /api/qr`.
///
/// Capacity failures must reach the caller — an over-long payload cannot
/// be represented by any visual fallback — so they are answered with
/// `422` instead of a degraded image. No retry is attempted.
pub async fn process(query: web::Query<QrImageQuery>) -> impl Responder {
    let query = query.into_inner();

    if query.data.is_empty() {
        return HttpResponse::BadRequest().body("QR payload must not be empty");
    }
    let size = query.size.unwrap_or(256);
    if size == 0 {
        return HttpResponse::BadRequest().body("QR size must be greater than zero");
    }

    let options = QrStyleOptions {
        style: QrStyle::parse(query.style.as_deref().unwrap_or("")),
        size,
        dark: query.dark.unwrap_or_else(|| "#000000".to_string()),
        light: query.light.unwrap_or_else(|| "#FFFFFF".to_string()),
        border: query.border.as_deref().map(|shape| QrBorder {
            shape: QrBorderShape::parse(shape),
            color: query
                .border_color
                .clone()
                .unwrap_or_else(|| "#000000".to_string()),
            width: query.border_width.unwrap_or_else(|| (size / 32).max(2)),
        }),
    };

    let canvas = match render_qr(&query.data, &options) {
        Ok(canvas) => canvas,
        Err(e) => return HttpResponse::UnprocessableEntity().body(format!("QR encoding failed: {}", e)),
    };

    match encode_png(&canvas) {
        Ok(bytes) => HttpResponse::Ok().content_type("image/png").body(bytes),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("PNG encoding failed: {}", e)),
    }
}
