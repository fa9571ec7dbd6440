use serde::{Deserialize, Serialize};

/// The contact record rendered onto a card and exported as a vCard.
///
/// A `ProfileData` is supplied by the caller on every render request; the
/// rendering pipeline never persists it. The plain-text fields may be empty,
/// in which case the substitution engine inserts the documented fallback
/// strings instead (see `render::substitution`). The image fields carry
/// absolute URLs, typically produced by the asset upload endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    /// Company or organization name, shown on the card back and in the
    /// vCard `ORG` line.
    #[serde(default)]
    pub organization: Option<String>,
    /// Explicit website link. When present it takes precedence over the
    /// generated profile URL in vCard export.
    #[serde(default)]
    pub website: Option<String>,
    /// URL of the uploaded profile photo.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// URL of the uploaded banner or company logo.
    #[serde(default)]
    pub banner_image: Option<String>,
}

impl ProfileData {
    /// True when no field carries user-entered content.
    pub fn is_empty(&self) -> bool {
        self.full_name.trim().is_empty()
            && self.job_title.trim().is_empty()
            && self.email.trim().is_empty()
            && self.phone_number.trim().is_empty()
            && self.address.trim().is_empty()
            && self.organization.as_deref().unwrap_or("").trim().is_empty()
            && self.website.as_deref().unwrap_or("").trim().is_empty()
    }
}
