//! Placeholder substitution engine.
//!
//! Takes raw template markup containing `{{fieldName}}` tokens and a
//! `ProfileData` record, and produces markup with every recognized token
//! replaced by the field's value or a human-readable fallback when the
//! field is absent or empty. Unknown tokens are left unmodified so a
//! template author's typo degrades visibly instead of erroring.
//!
//! The transform is pure and idempotent: fallback strings contain no token
//! syntax, so applying it twice is a no-op beyond the first pass.

use regex::{Captures, Regex};

use crate::model::profile::ProfileData;
use crate::render::sanitize::escape_html;

/// Fallback shown for an empty `fullName`.
pub const FALLBACK_FULL_NAME: &str = "Your Name";
/// Fallback shown for an empty `jobTitle`.
pub const FALLBACK_JOB_TITLE: &str = "Your Title";
/// Fallback shown for an empty `email`.
pub const FALLBACK_EMAIL: &str = "your@email.com";
/// Fallback shown for an empty `phoneNumber`.
pub const FALLBACK_PHONE: &str = "+1 (555) 000-0000";
/// Fallback shown for an empty `address`.
pub const FALLBACK_ADDRESS: &str = "Your Address";
/// Fallback shown for an empty `organization`.
pub const FALLBACK_ORGANIZATION: &str = "Your Company";
/// Fallback shown for an empty `website`.
pub const FALLBACK_WEBSITE: &str = "yourwebsite.com";
/// Literal shown for the `{{qrCode}}` token when no QR image URL exists.
pub const FALLBACK_QR_TEXT: &str = "QR CODE";

/// Matches `{{ fieldName }}` tokens, whitespace-tolerant.
const TOKEN_PATTERN: &str = r"\{\{\s*([A-Za-z][A-Za-z0-9_]*)\s*\}\}";

/// Replaces every recognized `{{field}}` token in `markup` with the
/// matching profile value or its documented fallback. The special
/// `{{qrCode}}` token becomes an `<img>` element referencing
/// `qr_image_url` when one is supplied, else the literal `QR CODE`.
/// Substituted values are HTML-escaped; unknown tokens pass through.
pub fn substitute(markup: &str, profile: &ProfileData, qr_image_url: Option<&str>) -> String {
    let re = Regex::new(TOKEN_PATTERN).unwrap();
    re.replace_all(markup, |caps: &Captures| {
        let field = &caps[1];
        match field {
            "fullName" => value_or(&profile.full_name, FALLBACK_FULL_NAME),
            "jobTitle" => value_or(&profile.job_title, FALLBACK_JOB_TITLE),
            "email" => value_or(&profile.email, FALLBACK_EMAIL),
            "phoneNumber" => value_or(&profile.phone_number, FALLBACK_PHONE),
            "address" => value_or(&profile.address, FALLBACK_ADDRESS),
            "organization" => value_or(
                profile.organization.as_deref().unwrap_or(""),
                FALLBACK_ORGANIZATION,
            ),
            "website" => value_or(
                profile.website.as_deref().unwrap_or(""),
                FALLBACK_WEBSITE,
            ),
            "profileImage" => optional_url(profile.profile_image.as_deref()),
            "bannerImage" => optional_url(profile.banner_image.as_deref()),
            "qrCode" => match qr_image_url {
                Some(url) => format!(
                    r#"<img src="{}" alt="QR code" class="qr-code"/>"#,
                    escape_html(url)
                ),
                None => FALLBACK_QR_TEXT.to_string(),
            },
            // Unknown token: leave the original text in place.
            _ => caps[0].to_string(),
        }
    })
    .into_owned()
}

fn value_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        escape_html(fallback)
    } else {
        escape_html(trimmed)
    }
}

/// Image tokens substitute to an empty string when no URL is available;
/// the surrounding markup is expected to tolerate a missing `src`.
fn optional_url(url: Option<&str>) -> String {
    match url {
        Some(u) if !u.trim().is_empty() => escape_html(u.trim()),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ProfileData {
        ProfileData {
            full_name: "Jane Doe".to_string(),
            job_title: "CEO".to_string(),
            email: String::new(),
            ..ProfileData::default()
        }
    }

    #[test]
    fn substitutes_values_and_fallbacks() {
        let markup = "{{fullName}} | {{email}} | {{jobTitle}}";
        let out = substitute(markup, &jane(), None);
        assert!(out.contains("Jane Doe"));
        assert!(out.contains(FALLBACK_EMAIL));
        assert!(out.contains("CEO"));
    }

    #[test]
    fn unknown_tokens_are_left_unmodified() {
        let out = substitute("{{fullName}} {{frobnicator}}", &jane(), None);
        assert!(out.contains("{{frobnicator}}"));
    }

    #[test]
    fn qr_token_uses_image_when_url_supplied() {
        let out = substitute("{{qrCode}}", &jane(), Some("https://x/api/qr?data=y"));
        assert!(out.starts_with("<img src=\"https://x/api/qr?data=y\""));

        let out = substitute("{{qrCode}}", &jane(), None);
        assert_eq!(out, FALLBACK_QR_TEXT);
    }

    #[test]
    fn substitution_is_idempotent() {
        let markup = "<p>{{fullName}} — {{email}} — {{unknownToken}}</p>";
        let once = substitute(markup, &jane(), None);
        let twice = substitute(&once, &jane(), None);
        assert_eq!(once, twice);
    }

    #[test]
    fn values_are_html_escaped() {
        let profile = ProfileData {
            full_name: "<b>Jane</b> & Co".to_string(),
            ..ProfileData::default()
        };
        let out = substitute("{{fullName}}", &profile, None);
        assert_eq!(out, "&lt;b&gt;Jane&lt;/b&gt; &amp; Co");
    }

    #[test]
    fn missing_images_substitute_to_empty() {
        let out = substitute(r#"<img src="{{profileImage}}"/>"#, &jane(), None);
        assert_eq!(out, r#"<img src=""/>"#);
    }

    #[test]
    fn whitespace_inside_token_is_tolerated() {
        let out = substitute("{{ fullName }}", &jane(), None);
        assert_eq!(out, "Jane Doe");
    }
}
