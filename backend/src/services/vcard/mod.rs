//! # VCard Export Service
//!
//! Serves contact-card files for digital profiles. The profile store is an
//! external collaborator, so the record to export always arrives in the
//! request body; the serialization itself lives in `common::vcard` and is
//! shared with the client-side download path.

mod export;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/vcard";

/// Configures and returns the Actix `Scope` for vCard export.
///
/// # Registered Routes:
///
/// *   **`POST /`**:
///     - **Handler**: `export::process`
///     - **Description**: Accepts an `ExportVCardRequest` (profile plus
///       derived links) and answers with the vCard text as a `text/vcard`
///       attachment under a sanitized filename. A missing full name is a
///       `400` — it is the one required field of the format.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(export::process))
}
