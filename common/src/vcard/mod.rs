//! vCard 3.0 export.
//!
//! Serializes a `ProfileData` record and its derived links into the
//! standard contact-card text format. The output always opens with
//! `BEGIN:VCARD`/`VERSION:3.0` and closes with `END:VCARD`, uses CRLF line
//! endings, and appends optional lines only when their source value is
//! non-empty. The only hard requirement is a full name; its absence is a
//! caller error.

use crate::model::links::ProfileLinks;
use crate::model::profile::ProfileData;

/// Fixed attribution appended to every exported card.
const ATTRIBUTION_NOTE: &str = "Digital business card by Cardsmith";

/// Builds the vCard text block for `profile`.
///
/// The single `URL` line prefers an explicit website over the generated
/// profile URL. The profile URL itself always travels in the
/// `X-CARDSMITH-PROFILE` extension line, and the rendered QR image of the
/// profile URL is referenced via `ATTACH`.
pub fn build_vcard(profile: &ProfileData, links: &ProfileLinks) -> Result<String, String> {
    let full_name = profile.full_name.trim();
    if full_name.is_empty() {
        return Err("full name is required for vCard export".to_string());
    }

    let mut lines: Vec<String> = Vec::with_capacity(16);
    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:3.0".to_string());

    let (given, family) = split_name(full_name);
    lines.push(format!(
        "N:{};{};;;",
        escape_text(&family),
        escape_text(&given)
    ));
    lines.push(format!("FN:{}", escape_text(full_name)));

    push_if_present(&mut lines, "TITLE", &profile.job_title);
    push_if_present(
        &mut lines,
        "ORG",
        profile.organization.as_deref().unwrap_or(""),
    );
    push_if_present(&mut lines, "EMAIL", &profile.email);
    push_if_present(&mut lines, "TEL", &profile.phone_number);
    if !profile.address.trim().is_empty() {
        lines.push(format!(
            "ADR;TYPE=WORK:;;{};;;;",
            escape_text(profile.address.trim())
        ));
    }

    // One URL line, explicit website first.
    let url = links
        .website
        .as_deref()
        .filter(|w| !w.trim().is_empty())
        .unwrap_or(&links.profile_url);
    if !url.trim().is_empty() {
        lines.push(format!("URL:{}", url.trim()));
    }

    if let Some(photo) = non_empty(profile.profile_image.as_deref()) {
        lines.push(format!("PHOTO;VALUE=URI:{}", photo));
    }
    if let Some(logo) = non_empty(profile.banner_image.as_deref()) {
        lines.push(format!("LOGO;VALUE=URI:{}", logo));
    }
    if !links.qr_image_url.trim().is_empty() {
        lines.push(format!("ATTACH;VALUE=URI:{}", links.qr_image_url.trim()));
    }
    if !links.profile_url.trim().is_empty() {
        lines.push(format!("X-CARDSMITH-PROFILE:{}", links.profile_url.trim()));
    }
    lines.push(format!("NOTE:{}", escape_text(ATTRIBUTION_NOTE)));
    lines.push("END:VCARD".to_string());

    Ok(lines.join("\r\n"))
}

/// Download filename for a contact card: every non-alphanumeric character
/// of the name is replaced by `_`, with a `.vcf` extension.
pub fn vcard_filename(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if sanitized.is_empty() {
        "contact.vcf".to_string()
    } else {
        format!("{}.vcf", sanitized)
    }
}

/// Splits a display name into (given, family). Everything after the first
/// word is treated as the family name; single-word names have no family
/// component.
fn split_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((given, family)) => (given.trim().to_string(), family.trim().to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

/// Escapes text values per RFC 6350: backslash, comma, semicolon, newline.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

fn push_if_present(lines: &mut Vec<String>, property: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        lines.push(format!("{}:{}", property, escape_text(trimmed)));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ProfileLinks {
        ProfileLinks {
            profile_url: "https://cards.example/p/jane-doe".to_string(),
            website: None,
            qr_image_url: "https://cards.example/api/qr?size=160&style=standard&data=https://cards.example/p/jane-doe".to_string(),
        }
    }

    #[test]
    fn starts_and_ends_with_envelope_lines() {
        let profile = ProfileData {
            full_name: "Jane Doe".to_string(),
            ..ProfileData::default()
        };
        let card = build_vcard(&profile, &links()).unwrap();
        assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0"));
        assert!(card.ends_with("END:VCARD"));
        assert!(card.contains("FN:Jane Doe"));
        assert!(card.contains("N:Doe;Jane;;;"));
    }

    #[test]
    fn empty_full_name_is_a_caller_error() {
        let profile = ProfileData {
            full_name: "   ".to_string(),
            ..ProfileData::default()
        };
        assert!(build_vcard(&profile, &links()).is_err());
    }

    #[test]
    fn optional_lines_appear_only_when_non_empty() {
        let profile = ProfileData {
            full_name: "Jane Doe".to_string(),
            job_title: "CEO".to_string(),
            email: String::new(),
            ..ProfileData::default()
        };
        let card = build_vcard(&profile, &links()).unwrap();
        assert!(card.contains("TITLE:CEO"));
        assert!(!card.contains("EMAIL:"));
        assert!(!card.contains("ORG:"));
        assert!(!card.contains("PHOTO"));
    }

    #[test]
    fn website_wins_over_profile_url() {
        let profile = ProfileData {
            full_name: "Jane Doe".to_string(),
            ..ProfileData::default()
        };
        let mut l = links();
        l.website = Some("https://janedoe.dev".to_string());
        let card = build_vcard(&profile, &l).unwrap();
        assert!(card.contains("URL:https://janedoe.dev"));
        assert!(!card.contains("URL:https://cards.example/p/jane-doe"));
        // The profile URL still travels in the extension line.
        assert!(card.contains("X-CARDSMITH-PROFILE:https://cards.example/p/jane-doe"));
    }

    #[test]
    fn qr_attachment_and_note_are_present() {
        let profile = ProfileData {
            full_name: "Jane Doe".to_string(),
            ..ProfileData::default()
        };
        let card = build_vcard(&profile, &links()).unwrap();
        assert!(card.contains("ATTACH;VALUE=URI:https://cards.example/api/qr"));
        assert!(card.contains("NOTE:Digital business card by Cardsmith"));
    }

    #[test]
    fn text_values_are_escaped() {
        let profile = ProfileData {
            full_name: "Doe; Jane".to_string(),
            address: "1 Main St, Springfield".to_string(),
            ..ProfileData::default()
        };
        let card = build_vcard(&profile, &links()).unwrap();
        assert!(card.contains("FN:Doe\\; Jane"));
        assert!(card.contains("ADR;TYPE=WORK:;;1 Main St\\, Springfield;;;;"));
    }

    #[test]
    fn filenames_replace_non_alphanumerics() {
        assert_eq!(vcard_filename("Jane Doe"), "Jane_Doe.vcf");
        assert_eq!(vcard_filename("a/b:c"), "a_b_c.vcf");
        assert_eq!(vcard_filename("  "), "contact.vcf");
    }
}
