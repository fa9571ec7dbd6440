//! Markup sanitization.
//!
//! Template markup partly originates from network responses, so every
//! retrieved document passes through `sanitize_markup` before it reaches a
//! render surface. The pass removes script-bearing elements wholesale,
//! strips inline event-handler attributes, and neutralizes `javascript:`
//! URLs. Everything else is preserved byte-for-byte.

use regex::Regex;

/// Elements removed together with their content.
const BLOCKED_ELEMENTS: [&str; 4] = ["script", "iframe", "object", "embed"];

/// Strips active content from retrieved markup. Idempotent.
pub fn sanitize_markup(markup: &str) -> String {
    let mut out = markup.to_string();

    for tag in BLOCKED_ELEMENTS {
        // Paired form first so the content goes with it, then any
        // self-closing or unclosed opening tag left behind.
        let paired = Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).unwrap();
        out = paired.replace_all(&out, "").into_owned();
        let open = Regex::new(&format!(r"(?i)<{tag}\b[^>]*/?>")).unwrap();
        out = open.replace_all(&out, "").into_owned();
    }

    // Inline handlers: onclick, onload, onmouseover, ...
    let handlers = Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).unwrap();
    out = handlers.replace_all(&out, "").into_owned();

    // javascript: URLs in link/source attributes.
    let js_urls =
        Regex::new(r#"(?i)\b(href|src|xlink:href)\s*=\s*(["']?)\s*javascript:[^"'\s>]*"#).unwrap();
    out = js_urls.replace_all(&out, "${1}=${2}#").into_owned();

    out
}

/// Escapes special HTML characters so substituted values cannot be
/// misinterpreted as markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_blocks_and_content() {
        let markup = r#"<div>ok</div><script>alert("x")</script><p>kept</p>"#;
        let out = sanitize_markup(markup);
        assert_eq!(out, "<div>ok</div><p>kept</p>");
    }

    #[test]
    fn removes_unclosed_and_mixed_case_tags() {
        let out = sanitize_markup("<ScRiPt src=\"evil.js\"><div>x</div>");
        assert_eq!(out, "<div>x</div>");
        let out = sanitize_markup("<iframe src=\"https://evil\"/><span>y</span>");
        assert_eq!(out, "<span>y</span>");
    }

    #[test]
    fn strips_inline_event_handlers() {
        let out = sanitize_markup(r#"<div onclick="steal()" class="card">x</div>"#);
        assert_eq!(out, r#"<div class="card">x</div>"#);
        let out = sanitize_markup("<img src=a.png onerror=evil()>");
        assert_eq!(out, "<img src=a.png>");
    }

    #[test]
    fn neutralizes_javascript_urls() {
        let out = sanitize_markup(r#"<a href="javascript:alert(1)">x</a>"#);
        assert_eq!(out, r##"<a href="#">x</a>"##);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let markup = r#"<div onclick="x()"><script>y</script><a href="javascript:z">l</a></div>"#;
        let once = sanitize_markup(markup);
        assert_eq!(once, sanitize_markup(&once));
    }

    #[test]
    fn escape_html_covers_all_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
