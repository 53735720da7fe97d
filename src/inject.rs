// src/inject.rs
//
// Pure text transforms. File I/O stays in the commands so these are
// directly testable on strings.

use anyhow::{bail, Result};
use regex::Regex;

/// Replace every occurrence of `token`. `None` means the token does not
/// appear and nothing should be written.
pub fn replace_placeholder(content: &str, token: &str, value: &str) -> Option<String> {
    if !content.contains(token) {
        return None;
    }
    Some(content.replace(token, value))
}

const MAPS_SCRIPT_MARKER: &str = "maps.googleapis.com/maps/api/js";
const HEAD_CLOSE: &str = "</head>";

#[derive(Debug, PartialEq, Eq)]
pub enum MapsScript {
    Updated,
    Inserted,
}

/// Ensure the document carries exactly one Google Maps script reference
/// with `api_key` as its key parameter.
///
/// An existing reference is updated in place, including one whose key
/// parameter is present but empty. Otherwise a fresh tag is inserted
/// before the first `</head>`; no `</head>` at all means the document is
/// malformed and nothing can be done.
pub fn upsert_maps_script(content: &str, api_key: &str) -> Result<(String, MapsScript)> {
    if content.contains(MAPS_SCRIPT_MARKER) {
        let key_param = Regex::new(r#"(maps\.googleapis\.com/maps/api/js\?key=)[^&"']*"#)?;
        let updated = key_param.replace_all(content, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], api_key)
        });
        return Ok((updated.into_owned(), MapsScript::Updated));
    }

    if !content.contains(HEAD_CLOSE) {
        bail!("no {HEAD_CLOSE} tag found, cannot insert the Google Maps script");
    }
    let tag = format!(
        "  <!-- Google Maps JavaScript API -->\n  <script src=\"https://{MAPS_SCRIPT_MARKER}?key={api_key}&libraries=places\"></script>\n"
    );
    let inserted = content.replacen(HEAD_CLOSE, &format!("{tag}{HEAD_CLOSE}"), 1);
    Ok((inserted, MapsScript::Inserted))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_HTML: &str = "<html>\n<head>\n  <title>app</title>\n</head>\n<body></body>\n</html>\n";

    #[test]
    fn replaces_every_occurrence_of_the_token() {
        let out = replace_placeholder("a TOKEN b TOKEN", "TOKEN", "v").unwrap();
        assert_eq!(out, "a v b v");
        assert!(!out.contains("TOKEN"));
    }

    #[test]
    fn absent_token_yields_none() {
        assert!(replace_placeholder("nothing here", "TOKEN", "v").is_none());
    }

    #[test]
    fn inserts_fresh_tag_before_head_close() {
        let (out, action) = upsert_maps_script(BARE_HTML, "AIzaXXXX").unwrap();
        assert_eq!(action, MapsScript::Inserted);
        assert!(out.contains("js?key=AIzaXXXX&libraries=places"));

        // Tag sits immediately before </head>; the rest is untouched.
        let tag_pos = out.find("<!-- Google Maps JavaScript API -->").unwrap();
        let head_pos = out.find("</head>").unwrap();
        assert!(tag_pos < head_pos);
        assert!(out.starts_with("<html>\n<head>\n  <title>app</title>\n"));
        assert!(out.ends_with("</head>\n<body></body>\n</html>\n"));
    }

    #[test]
    fn rerun_with_same_key_is_byte_identical() {
        let (once, _) = upsert_maps_script(BARE_HTML, "AIzaXXXX").unwrap();
        let (twice, action) = upsert_maps_script(&once, "AIzaXXXX").unwrap();
        assert_eq!(action, MapsScript::Updated);
        assert_eq!(once, twice);
    }

    #[test]
    fn rerun_with_new_key_converges_to_a_single_reference() {
        let (v1, _) = upsert_maps_script(BARE_HTML, "OLDKEY").unwrap();
        let (v2, _) = upsert_maps_script(&v1, "NEWKEY").unwrap();
        assert_eq!(v2.matches(super::MAPS_SCRIPT_MARKER).count(), 1);
        assert!(v2.contains("js?key=NEWKEY&"));
        assert!(!v2.contains("OLDKEY"));
    }

    #[test]
    fn updates_an_empty_key_parameter() {
        let html = "<head><script src=\"https://maps.googleapis.com/maps/api/js?key=&libraries=places\"></script></head>";
        let (out, action) = upsert_maps_script(html, "K123").unwrap();
        assert_eq!(action, MapsScript::Updated);
        assert!(out.contains("js?key=K123&libraries=places"));
    }

    #[test]
    fn reference_without_key_parameter_is_left_alone() {
        let html = "<head><script src=\"https://maps.googleapis.com/maps/api/js\"></script></head>";
        let (out, action) = upsert_maps_script(html, "K123").unwrap();
        assert_eq!(action, MapsScript::Updated);
        assert_eq!(out, html);
    }

    #[test]
    fn missing_anchor_is_an_error() {
        let err = upsert_maps_script("<html><body></body></html>", "K").unwrap_err();
        assert!(format!("{err:#}").contains("</head>"));
    }
}
