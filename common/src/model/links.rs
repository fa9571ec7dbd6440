use serde::{Deserialize, Serialize};

use crate::model::profile::ProfileData;
use crate::model::qr::QrStyle;

/// The link bundle derived for a profile: the generated digital-profile URL,
/// the owner's explicit website (if any), and the URL of a rendered QR image
/// of the profile URL. Built fresh per request; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLinks {
    pub profile_url: String,
    #[serde(default)]
    pub website: Option<String>,
    pub qr_image_url: String,
}

impl ProfileLinks {
    /// Derives the link bundle for `profile` under the given base URL.
    ///
    /// The profile URL is `<base>/p/<slug>` where the slug comes from the
    /// full name. The QR image URL points at the local QR image service and
    /// carries the style so previews match the selected variant. The `data`
    /// parameter is appended last; profile URLs contain no `&` so the query
    /// string stays well-formed without percent-encoding.
    pub fn derive(profile: &ProfileData, base_url: &str, style: QrStyle) -> ProfileLinks {
        let base = base_url.trim_end_matches('/');
        let profile_url = format!("{}/p/{}", base, profile_slug(&profile.full_name));
        let qr_image_url = format!(
            "{}/api/qr?size=160&style={}&data={}",
            base,
            style.as_str(),
            profile_url
        );
        ProfileLinks {
            profile_url,
            website: profile
                .website
                .as_ref()
                .filter(|w| !w.trim().is_empty())
                .cloned(),
            qr_image_url,
        }
    }
}

/// Lowercase URL slug for a profile name: alphanumerics kept, runs of
/// anything else collapsed to a single `-`. Empty names yield `"profile"`.
pub fn profile_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "profile".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(profile_slug("Jane  Doe"), "jane-doe");
        assert_eq!(profile_slug("  Ana María O'Neil "), "ana-mar-a-o-neil");
        assert_eq!(profile_slug("---"), "profile");
        assert_eq!(profile_slug(""), "profile");
    }

    #[test]
    fn derive_builds_profile_and_qr_urls() {
        let profile = ProfileData {
            full_name: "Jane Doe".to_string(),
            website: Some("https://janedoe.dev".to_string()),
            ..ProfileData::default()
        };
        let links = ProfileLinks::derive(&profile, "https://cards.example/", QrStyle::Dot);
        assert_eq!(links.profile_url, "https://cards.example/p/jane-doe");
        assert_eq!(
            links.qr_image_url,
            "https://cards.example/api/qr?size=160&style=dot&data=https://cards.example/p/jane-doe"
        );
        assert_eq!(links.website.as_deref(), Some("https://janedoe.dev"));
    }

    #[test]
    fn blank_website_is_dropped() {
        let profile = ProfileData {
            full_name: "Jane Doe".to_string(),
            website: Some("   ".to_string()),
            ..ProfileData::default()
        };
        let links = ProfileLinks::derive(&profile, "https://cards.example", QrStyle::Standard);
        assert!(links.website.is_none());
    }
}
