//! Positional `?` substitution.
//!
//! Every `?` in the template is a placeholder, including one that sits inside a quoted
//! string in the template: the formatter does not parse SQL. Markers beyond the supplied
//! values are left as `?`; values beyond the markers are ignored.

use std::borrow::Cow;

use crate::escape::{EscapeMap, with_escape_map};
use crate::literal::write_literal;
use crate::types::SqlValue;
use crate::zone::Zone;

/// The placeholder marker.
pub const PLACEHOLDER: u8 = b'?';

/// Substitute `values` into `template`, converting timestamps into the local timezone.
///
/// Returns a borrowed `Cow` when no values are supplied or nothing was substituted.
///
/// # Examples
/// ```rust
/// use sql_literal::prelude::*;
///
/// let sql = format(
///     "select * from t where name=? and age=?",
///     &[SqlValue::from("t'est"), SqlValue::from(10)],
/// );
/// assert_eq!(sql, r"select * from t where name='t\'est' and age=10");
/// ```
#[must_use]
pub fn format<'a>(template: &'a str, values: &[SqlValue]) -> Cow<'a, str> {
    format_in_zone(template, Some(Zone::Local), values)
}

/// Substitute `values` into `template`, converting timestamps into `zone` when given.
///
/// The process-wide escape map is read once for the whole call.
#[must_use]
pub fn format_in_zone<'a>(
    template: &'a str,
    zone: Option<Zone>,
    values: &[SqlValue],
) -> Cow<'a, str> {
    if values.is_empty() {
        return Cow::Borrowed(template);
    }
    with_escape_map(|escapes| format_with(template, values, zone, escapes))
}

/// Substitute `values` into `template` with an explicit zone and escape map.
#[must_use]
pub fn format_with<'a>(
    template: &'a str,
    values: &[SqlValue],
    zone: Option<Zone>,
    escapes: &EscapeMap,
) -> Cow<'a, str> {
    if values.is_empty() {
        return Cow::Borrowed(template);
    }

    let capacity = template.len() + 8 * values.len();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut markers = 0;

    // `?` is ASCII, so byte positions are always char boundaries here
    for (idx, b) in template.bytes().enumerate() {
        if b != PLACEHOLDER {
            continue;
        }
        let Some(value) = values.get(markers) else {
            markers += 1;
            continue;
        };
        markers += 1;

        let buf = out.get_or_insert_with(|| String::with_capacity(capacity));
        buf.push_str(&template[copied..idx]);
        write_literal(buf, value, zone, escapes);
        copied = idx + 1;
    }

    if markers != values.len() {
        tracing::trace!(
            placeholders = markers,
            values = values.len(),
            "placeholder and value counts differ"
        );
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&template[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(template),
    }
}

/// Number of `?` markers in `template`.
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    template.bytes().filter(|b| *b == PLACEHOLDER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt<'a>(template: &'a str, values: &[SqlValue]) -> Cow<'a, str> {
        format_with(template, values, None, &EscapeMap::default())
    }

    #[test]
    fn substitutes_in_order() {
        let res = fmt(
            "select * from users where name=? and age=? limit ?,?",
            &[
                SqlValue::from("t'est"),
                SqlValue::from(10),
                SqlValue::from(10),
                SqlValue::from(10),
            ],
        );
        assert_eq!(
            res,
            "select * from users where name='t\\'est' and age=10 limit 10,10"
        );
    }

    #[test]
    fn no_values_skips_scanning() {
        let res = fmt("select ? from t", &[]);
        assert!(matches!(res, Cow::Borrowed(_)));
        assert_eq!(res, "select ? from t");
    }

    #[test]
    fn no_markers_returns_template() {
        let res = fmt("a", &[SqlValue::from("unused")]);
        assert!(matches!(res, Cow::Borrowed(_)));
        assert_eq!(res, "a");
    }

    #[test]
    fn surplus_markers_pass_through() {
        assert_eq!(fmt("? and ?", &[SqlValue::from("a")]), "'a' and ?");
        assert_eq!(fmt("?", &[SqlValue::from(1), SqlValue::from(2)]), "1");
    }

    #[test]
    fn markers_inside_quotes_are_still_placeholders() {
        assert_eq!(fmt("'?'", &[SqlValue::from(1)]), "'1'");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            fmt("select '日本' where x=? -- ü", &[SqlValue::from("é")]),
            "select '日本' where x='é' -- ü"
        );
    }

    #[test]
    fn in_clause_lists() {
        let ints = SqlValue::from(vec![1, 2, 3]);
        assert_eq!(fmt("in (?)", &[ints]), "in (1,2,3)");
        let mixed = SqlValue::list([SqlValue::from(1), SqlValue::from(2), SqlValue::from("3")]);
        assert_eq!(fmt("in (?)", &[mixed]), "in (1,2,'3')");
    }

    #[test]
    fn counts_placeholders() {
        assert_eq!(placeholder_count("select 1"), 0);
        assert_eq!(placeholder_count("? and ? or '?'"), 3);
    }
}
