//! The pure half of the card rendering pipeline: placeholder substitution
//! and markup sanitization. Everything here is synchronous, deterministic,
//! and free of I/O, so it runs unchanged in the backend customization
//! endpoints and in the wasm preview surface.

pub mod sanitize;
pub mod substitution;

pub use sanitize::{escape_html, sanitize_markup};
pub use substitution::substitute;

use crate::model::template::CardSide;

/// Minimal synthesized card markup used when a template cannot be
/// retrieved: a solid background plus plain-text fields. The preview
/// surface runs it through the substitution engine like any other markup.
const FALLBACK_FRONT_MARKUP: &str = r#"<div class="card card-fallback" style="background:#1c1c1e;color:#f5f5f7;">
  <div class="card-name">{{fullName}}</div>
  <div class="card-title">{{jobTitle}}</div>
  <div class="card-qr">{{qrCode}}</div>
</div>"#;

const FALLBACK_BACK_MARKUP: &str = r#"<div class="card card-fallback" style="background:#1c1c1e;color:#f5f5f7;">
  <div class="card-line">{{email}}</div>
  <div class="card-line">{{phoneNumber}}</div>
  <div class="card-line">{{address}}</div>
</div>"#;

/// Returns the fallback markup for one side.
pub fn fallback_markup(side: CardSide) -> &'static str {
    match side {
        CardSide::Front => FALLBACK_FRONT_MARKUP,
        CardSide::Back => FALLBACK_BACK_MARKUP,
    }
}
