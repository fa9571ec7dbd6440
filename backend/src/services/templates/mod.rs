//! # Template Service Module
//!
//! Aggregates the API endpoints for the template registry and the
//! server-side half of the customization pipeline, routing requests under
//! `/api/templates` to the handler logic in its sub-modules.
//!
//! ## Sub-modules:
//! - `store`: registry schema, seeding, and row access.
//! - `list`: catalog listing for the template picker.
//! - `get`: raw markup retrieval for one side of a template.
//! - `customize`: placeholder substitution against a caller-supplied profile.
//! - `preview`: substitution with the documented fallback values.

pub mod store;

mod customize;
mod get;
mod list;
mod preview;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the catalog as JSON (`id`, `name`,
///       `active`) for the storefront's template picker.
///
/// *   **`GET /{template_id}/{side}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the raw markup of one side
///       (`front` | `back`) of a template as text. Unknown ids are logged
///       and answered with `404`.
///
/// *   **`POST /{template_id}/{side}/customize`**:
///     - **Handler**: `customize::process`
///     - **Description**: Accepts a JSON profile-data body, substitutes
///       the template's placeholder tokens with the profile values (or
///       their fallbacks), sanitizes the result, and returns the rendered
///       markup as text. An optional `style` query parameter selects the
///       QR style embedded in the markup's QR image URL.
///
/// *   **`GET /{template_id}/{side}/preview`**:
///     - **Handler**: `preview::process`
///     - **Description**: Like customize, but rendered entirely from the
///       documented fallback values. Serves as the degraded path when a
///       customization request fails.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{template_id}/{side}/customize", post().to(customize::process))
        .route("/{template_id}/{side}/preview", get().to(preview::process))
        .route("/{template_id}/{side}", get().to(get::process))
}
