use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use super::NULL;
use crate::escape::EscapeMap;

pub(super) fn write_quoted(out: &mut String, text: &str, escapes: &EscapeMap) {
    out.push_str(&escapes.quote(text));
}

/// `X'<lowercase hex>'`
pub(super) fn write_hex(out: &mut String, bytes: &[u8]) {
    out.reserve(bytes.len() * 2 + 3);
    out.push_str("X'");
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out.push('\'');
}

/// Six fractional digits. Exact ties round half to even, as `core::fmt` does.
pub(super) fn write_float(out: &mut String, value: f64) {
    if value.is_finite() {
        let _ = write!(out, "{value:.6}");
    } else {
        out.push_str(NULL);
    }
}

/// Compact JSON (object keys sorted), escaped and quoted like text.
pub(super) fn write_json(out: &mut String, json: &JsonValue, escapes: &EscapeMap) {
    match serde_json::to_string(&SortedKeys(json)) {
        Ok(text) => write_quoted(out, &text, escapes),
        Err(err) => {
            tracing::debug!(error = %err, "structured value not serializable; using NULL");
            out.push_str(NULL);
        }
    }
}

/// Serializes a JSON value with every object's keys in lexicographic order, whatever
/// order `serde_json::Map` keeps them in.
struct SortedKeys<'a>(&'a JsonValue);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            JsonValue::Object(map) => {
                let sorted: BTreeMap<&str, SortedKeys<'_>> = map
                    .iter()
                    .map(|(key, value)| (key.as_str(), SortedKeys(value)))
                    .collect();
                sorted.serialize(serializer)
            }
            JsonValue::Array(items) => serializer.collect_seq(items.iter().map(SortedKeys)),
            scalar => scalar.serialize(serializer),
        }
    }
}
