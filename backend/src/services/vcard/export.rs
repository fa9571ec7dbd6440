use actix_web::{web, HttpResponse, Responder};
use common::requests::ExportVCardRequest;
use common::vcard::{build_vcard, vcard_filename};

/// Actix handler for `POST /api/vcard`.
///
/// # Returns
/// - `200 OK` with the vCard text and a `Content-Disposition` attachment
///   header on success.
/// - `400 Bad Request` when the profile cannot be exported (empty name).
pub async fn process(payload: web::Json<ExportVCardRequest>) -> impl Responder {
    match build_vcard(&payload.profile, &payload.links) {
        Ok(card) => HttpResponse::Ok()
            .content_type("text/vcard; charset=utf-8")
            .append_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"{}\"",
                    vcard_filename(&payload.profile.full_name)
                ),
            ))
            .body(card),
        Err(e) => HttpResponse::BadRequest().body(format!("Error exporting vCard: {}", e)),
    }
}
