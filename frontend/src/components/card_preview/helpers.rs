//! Utility functions for the card preview surface.
//!
//! - **Render digests**: a digest of (template id, QR style, profile)
//!   keys the per-side markup cache, so flipping front -> back -> front
//!   without a data change reuses byte-identical markup instead of
//!   re-fetching.
//! - **QR URLs**: the locally synthesized fallback card still gets a
//!   working QR image, derived from the window origin.

use common::model::links::ProfileLinks;
use common::model::profile::ProfileData;
use common::model::qr::QrStyle;

/// Digest identifying one render configuration. Computed over the JSON
/// form of the inputs so field-level changes always invalidate the cache.
pub fn render_digest(profile: &ProfileData, template_id: i64, style: QrStyle) -> String {
    let payload = serde_json::to_string(&(template_id, style.as_str(), profile))
        .unwrap_or_default();
    format!("{:x}", md5::compute(payload))
}

/// QR image URL for the profile under the current window origin, or
/// `None` when there is no name to derive a profile URL from (the card
/// then shows the QR placeholder affordance instead).
pub fn local_qr_url(profile: &ProfileData, style: QrStyle) -> Option<String> {
    if profile.full_name.trim().is_empty() {
        return None;
    }
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(ProfileLinks::derive(profile, &origin, style).qr_image_url)
}
