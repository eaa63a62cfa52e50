//! The literal encoder: one [`SqlValue`] in, SQL literal text out.
//!
//! Encoding never fails. Anything that cannot be rendered faithfully (a nil reference,
//! an over-long reference chain, a structured value that will not serialize, a
//! non-finite float) becomes `NULL`.

use std::fmt::Write as _;

mod temporal;
mod text;

use crate::escape::{EscapeMap, with_escape_map};
use crate::types::SqlValue;
use crate::zone::Zone;

/// The unquoted NULL literal.
pub const NULL: &str = "NULL";

/// Longest chain of [`SqlValue::Ref`] that is followed before giving up with `NULL`.
pub const MAX_INDIRECTION: usize = 64;

/// Render `value` as a SQL literal, converting timestamps into the local timezone.
///
/// # Examples
/// ```rust
/// use sql_literal::prelude::*;
///
/// assert_eq!(encode(&SqlValue::from("it's")), r"'it\'s'");
/// assert_eq!(encode(&SqlValue::from(vec![1, 2, 3])), "1,2,3");
/// assert_eq!(encode(&SqlValue::from(None::<i32>)), "NULL");
/// ```
#[must_use]
pub fn encode(value: &SqlValue) -> String {
    encode_in_zone(value, Some(Zone::Local))
}

/// Render `value` as a SQL literal using the process-wide escape map.
///
/// With `zone` set, timestamps are converted into it first; with `None` they keep the
/// offset they carry.
#[must_use]
pub fn encode_in_zone(value: &SqlValue, zone: Option<Zone>) -> String {
    with_escape_map(|escapes| encode_with(value, zone, escapes))
}

/// Render `value` with an explicit zone and escape map.
#[must_use]
pub fn encode_with(value: &SqlValue, zone: Option<Zone>, escapes: &EscapeMap) -> String {
    let mut out = String::new();
    write_literal(&mut out, value, zone, escapes);
    out
}

/// Append the literal for `value` to `out`.
///
/// Recurses once per nested list; depth is not bounded.
pub(crate) fn write_literal(
    out: &mut String,
    value: &SqlValue,
    zone: Option<Zone>,
    escapes: &EscapeMap,
) {
    let Some(value) = resolve(value) else {
        out.push_str(NULL);
        return;
    };

    match value {
        SqlValue::Null | SqlValue::Ref(_) => out.push_str(NULL),
        SqlValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        SqlValue::Int(i) => {
            let _ = write!(out, "{i}");
        }
        SqlValue::UInt(u) => {
            let _ = write!(out, "{u}");
        }
        SqlValue::Float(f) => text::write_float(out, *f),
        SqlValue::Text(s) => text::write_quoted(out, s, escapes),
        SqlValue::Bytes(bytes) => text::write_hex(out, bytes),
        SqlValue::Timestamp(ts) => temporal::write_timestamp(out, ts, zone),
        SqlValue::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_literal(out, item, zone, escapes);
            }
        }
        SqlValue::Json(json) => text::write_json(out, json, escapes),
    }
}

/// Follow references down to a concrete value. `None` means the result is NULL.
fn resolve(value: &SqlValue) -> Option<&SqlValue> {
    let mut current = value;
    let mut depth = 0;
    loop {
        match current {
            SqlValue::Null | SqlValue::Ref(None) => return None,
            SqlValue::Ref(Some(inner)) => {
                depth += 1;
                if depth > MAX_INDIRECTION {
                    tracing::warn!(
                        limit = MAX_INDIRECTION,
                        "reference chain too deep; encoding NULL"
                    );
                    return None;
                }
                current = &**inner;
            }
            concrete => return Some(concrete),
        }
    }
}
