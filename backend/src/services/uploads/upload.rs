use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use uuid::Uuid;

use crate::config::AppConfig;

const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const MAX_EDGE_PX: u32 = 1024;

/// HTTP handler wrapper that converts the internal result to an
/// `HttpResponse`.
///
/// - On success: `200 OK` with `{ "url": ... }` as JSON.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(config: web::Data<AppConfig>, payload: Multipart) -> impl Responder {
    match save_asset(&config, payload).await {
        Ok(url) => HttpResponse::Ok().json(serde_json::json!({ "url": url })),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Drains the `file` field of the multipart stream, validates and
/// normalizes the image, and persists it under an MD5-derived name.
async fn save_asset(config: &AppConfig, mut payload: Multipart) -> Result<String, String> {
    let mut bytes: Vec<u8> = Vec::new();
    let mut file_seen = false;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| e.to_string())?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if field_name.as_deref() != Some("file") {
            continue;
        }
        file_seen = true;

        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| e.to_string())?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err("Image exceeds the 5 MB upload limit".to_string());
            }
            bytes.extend_from_slice(&chunk);
        }
    }

    if !file_seen || bytes.is_empty() {
        return Err("Missing file".to_string());
    }

    let img = image::load_from_memory(&bytes)
        .map_err(|_| "File is not a supported image".to_string())?;
    let (w, h) = img.dimensions();
    let img = if w.max(h) > MAX_EDGE_PX {
        img.resize(MAX_EDGE_PX, MAX_EDGE_PX, FilterType::Lanczos3)
    } else {
        img
    };

    let mut encoded: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| e.to_string())?;

    let digest = format!("{:x}", md5::compute(&encoded));
    let filename = format!("{}.png", digest);
    let final_path = Path::new(&config.assets_dir).join(&filename);

    // Same digest means the asset is already on disk.
    if !final_path.exists() {
        let tmp_path =
            Path::new(&config.assets_dir).join(format!("{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp_path, &encoded)
            .await
            .map_err(|e| e.to_string())?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(format!(
        "{}/assets/{}",
        config.public_base_url.trim_end_matches('/'),
        filename
    ))
}
