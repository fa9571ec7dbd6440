//! # Checkout Redirection Service
//!
//! The storefront delegates ordering to the external commerce platform;
//! this service only turns a product variant selection into the
//! provider's cart permalink and redirects the shopper there. Payment,
//! cart state, and order management all live on the provider's side.

use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use serde::Deserialize;

use crate::commerce::CommerceClient;

const API_PATH: &str = "/api/checkout";

#[derive(Deserialize)]
pub struct CheckoutQuery {
    /// Product variant identifier on the commerce platform.
    pub variant: String,
    pub quantity: Option<u32>,
}

/// Configures and returns the Actix `Scope` for checkout redirection.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `process`
///     - **Description**: Validates the `variant` query parameter and
///       answers with a `303 See Other` pointing at the commerce
///       platform's cart permalink for `variant` × `quantity`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

/// Actix handler for `GET /api/checkout`.
pub async fn process(
    query: web::Query<CheckoutQuery>,
    commerce: web::Data<CommerceClient>,
) -> impl Responder {
    let variant = query.variant.trim();
    if variant.is_empty() || !variant.chars().all(|c| c.is_ascii_digit()) {
        return HttpResponse::BadRequest().body("Variant must be a numeric identifier");
    }

    let url = commerce.cart_permalink(variant, query.quantity.unwrap_or(1));
    HttpResponse::SeeOther()
        .append_header(("Location", url))
        .finish()
}
