//! # QR Image Service
//!
//! Renders styled QR codes for digital-profile URLs. The module is split
//! into the HTTP surface (`image`) and the pure painter (`render`), which
//! turns a payload plus `QrStyleOptions` into an RGBA canvas.
//!
//! Styling never touches the encoded data: every variant paints the same
//! module matrix, produced at error-correction level H, so a scanner
//! decodes the identical payload regardless of presentation.

mod image;
pub mod render;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/qr";

/// Configures and returns the Actix `Scope` for the QR image service.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `image::process`
///     - **Description**: Renders the `data` query parameter as a QR code
///       PNG. Optional parameters: `size` (edge length in pixels,
///       default 256), `style` (`standard` | `rounded` | `dot` |
///       `circular` | `square`), `dark`/`light` (hex colors), `border`
///       (`rect` | `rounded` | `circle`), `border_color`, `border_width`.
///       Empty payloads and zero sizes are `400`; payloads beyond
///       level-H capacity are `422`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(image::process))
}
