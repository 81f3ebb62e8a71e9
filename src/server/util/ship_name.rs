//! Ship name normalization.
//!
//! ESI occasionally returns ship names serialized as a Python unicode literal, e.g.
//! `u'Café Ship'`, instead of the plain name. This module unwraps that representation
//! and decodes its escape sequences so the stored name matches what the player typed.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a whole-string `u'...'` literal; content may span lines.
static UNICODE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^u'(.*)'$").expect("ship name pattern is valid"));

/// Normalizes a raw ESI ship name.
///
/// If the name is wrapped as `u'<content>'`, the content has every `"` escaped, is wrapped
/// in double quotes and decoded as a JSON string, resolving `\uXXXX` and backslash escapes.
/// When the name is not wrapped, or the content is not a valid JSON string body, the raw name
/// is returned unchanged. This function never fails.
///
/// # Arguments
/// - `raw` - Ship name exactly as returned by ESI
///
/// # Returns
/// - `String` - Decoded ship name, or `raw` when no decoding applies
///
/// # Example
/// ```
/// use wayfinder::server::util::ship_name::normalize_ship_name;
///
/// assert_eq!(normalize_ship_name(r"u'Caf\u00e9 Ship'"), "Café Ship");
/// assert_eq!(normalize_ship_name("Rifter"), "Rifter");
/// ```
pub fn normalize_ship_name(raw: &str) -> String {
    if let Some(captures) = UNICODE_LITERAL.captures(raw) {
        let inner = captures.get(1).map_or("", |m| m.as_str());
        let escaped = inner.replace('"', "\\\"");

        if let Ok(serde_json::Value::String(decoded)) =
            serde_json::from_str::<serde_json::Value>(&format!("\"{}\"", escaped))
        {
            return decoded;
        }
    }

    raw.to_string()
}
