//! # Asset Upload Service
//!
//! Accepts profile photos and company logos for embedding in cards. The
//! upload is a `multipart/form-data` POST with a single `file` field.
//!
//! ## Workflow
//!
//! 1. The multipart stream is drained chunk by chunk into memory, capped
//!    at 5 MB.
//! 2. The bytes must decode as an image; anything else is rejected with
//!    `400`. Images larger than 1024px on the long edge are scaled down
//!    preserving aspect ratio.
//! 3. The normalized PNG is stored under the configured assets directory
//!    with a name derived from its MD5 digest, so re-uploading the same
//!    image is a no-op. The write goes through a uniquely named temp file
//!    followed by a rename.
//! 4. The response carries the public URL under which `actix-files`
//!    serves the asset; the caller places it into `ProfileData`.

mod upload;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/uploads";

/// Configures and returns the Actix `Scope` for asset uploads.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(upload::process))
}
