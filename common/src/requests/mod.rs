use serde::{Deserialize, Serialize};

use crate::model::links::ProfileLinks;
use crate::model::profile::ProfileData;

#[derive(Serialize, Deserialize)]
/// Request payload for the vCard export endpoint.
/// Carries the profile record together with its derived link bundle; the
/// profile store itself is an external collaborator, so the record always
/// arrives in the request body.
pub struct ExportVCardRequest {
    pub profile: ProfileData,
    pub links: ProfileLinks,
}
