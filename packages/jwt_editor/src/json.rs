//! JSON text helpers for the header and payload editors

use crate::{
    algorithm::Algorithm,
    error::{JwtError, JwtResult},
};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

/// Whether the text is acceptable editor content (empty or valid JSON)
#[must_use]
pub fn can_parse(text: &str) -> bool {
    text.is_empty() || serde_json::from_str::<Value>(text).is_ok()
}

/// Pretty-print JSON text, or hand it back unchanged if it does not parse
#[must_use]
pub fn format(text: &str, indent: usize) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => to_pretty(&value, indent).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Replace typographic quotes with their ASCII counterparts
#[must_use]
pub fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Parse text that must hold a JSON object
///
/// # Errors
/// Returns [`JwtError::Decode`] for invalid JSON and [`JwtError::Serialization`]
/// for any JSON value other than an object.
pub fn parse_object(text: &str, what: &str) -> JwtResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(JwtError::serialization(&format!("{what} must be a JSON object"))),
    }
}

/// The `alg` a header declares, if it names a supported algorithm
#[must_use]
pub fn declared_algorithm(header: &Map<String, Value>) -> Option<Algorithm> {
    header.get("alg")?.as_str()?.parse().ok()
}

/// Set the header's `alg` member, keeping every other member in place
///
/// # Errors
/// Fails when the header text is not a JSON object.
pub fn patch_algorithm(header: &str, algorithm: Algorithm, indent: usize) -> JwtResult<String> {
    let mut map = parse_object(header, "header")?;
    map.insert("alg".to_string(), Value::String(algorithm.as_str().to_string()));
    to_pretty(&Value::Object(map), indent)
}

/// Serialize with a configurable indent width
pub(crate) fn to_pretty(value: &impl Serialize, indent: usize) -> JwtResult<String> {
    let indent = " ".repeat(indent);
    let mut out = Vec::with_capacity(128);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut ser)
        .map_err(|e| JwtError::serialization(&e.to_string()))?;
    String::from_utf8(out).map_err(|e| JwtError::serialization(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_counts_as_parseable() {
        assert!(can_parse(""));
        assert!(can_parse("{\"a\":1}"));
        assert!(!can_parse("{\"a\":"));
    }

    #[test]
    fn format_pretty_prints_or_passes_through() {
        assert_eq!(format("{\"a\":1}", 2), "{\n  \"a\": 1\n}");
        assert_eq!(format("{\"a\":1}", 4), "{\n    \"a\": 1\n}");
        assert_eq!(format("not json", 2), "not json");
    }

    #[test]
    fn smart_quotes_are_normalized() {
        assert_eq!(normalize_quotes("{\u{201C}a\u{201D}: \u{2018}b\u{2019}}"), "{\"a\": 'b'}");
    }

    #[test]
    fn patch_keeps_member_order() {
        let patched = patch_algorithm("{\"typ\":\"JWT\",\"alg\":\"HS256\",\"kid\":\"k1\"}", Algorithm::Rs256, 2);
        assert_eq!(
            patched.ok().as_deref(),
            Some("{\n  \"typ\": \"JWT\",\n  \"alg\": \"RS256\",\n  \"kid\": \"k1\"\n}")
        );
        assert!(patch_algorithm("[1]", Algorithm::Rs256, 2).is_err());
        assert!(patch_algorithm("{", Algorithm::Rs256, 2).is_err());
    }

    #[test]
    fn declared_algorithm_ignores_unknown_values() {
        let header = parse_object("{\"alg\":\"none\"}", "header").unwrap_or_default();
        assert_eq!(declared_algorithm(&header), None);
        let header = parse_object("{\"alg\":\"ES256\"}", "header").unwrap_or_default();
        assert_eq!(declared_algorithm(&header), Some(Algorithm::Es256));
    }
}
