//! Character escaping for quoted text literals.
//!
//! An [`EscapeMap`] pairs each character that must not appear raw inside a quoted literal
//! with its replacement text. One map is shared process-wide and read by every
//! [`crate::encode`] and [`crate::format`] call; it can be reconfigured at runtime with
//! [`set_single_quote_escaper`].
//!
//! Reconfiguration should happen before encoding starts on other threads. A call that is
//! already encoding keeps the map it started with.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::{PoisonError, RwLock};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::SqlLiteralError;

/// Quote character that opens and closes text literals.
pub const QUOTE: char = '\'';

// see https://dev.mysql.com/doc/refman/8.0/en/string-literals.html#character-escape-sequences
const DEFAULT_RULES: [(char, &str); 9] = [
    ('\0', "\\0"),
    ('\u{8}', "\\b"),
    ('\t', "\\t"),
    ('\u{1a}', "\\Z"),
    ('\n', "\\n"),
    ('\r', "\\r"),
    ('"', "\\\""),
    ('\'', "\\'"),
    ('\\', "\\\\"),
];

lazy_static! {
    static ref DEFAULT_PATTERN: Regex =
        Regex::new(&char_class(DEFAULT_RULES.iter().map(|(c, _)| *c)))
            .expect("default escape pattern is a valid character class");
    static ref ESCAPE_MAP: RwLock<EscapeMap> = RwLock::new(EscapeMap::default());
}

/// Table of characters to replacement text applied when quoting text.
///
/// # Examples
/// ```rust
/// use sql_literal::prelude::*;
///
/// let map = EscapeMap::default().with_single_quote("''");
/// assert_eq!(map.quote("it's"), "'it''s'");
/// ```
#[derive(Debug, Clone)]
pub struct EscapeMap {
    rules: BTreeMap<char, String>,
    pattern: Regex,
}

impl Default for EscapeMap {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(c, replacement)| (*c, (*replacement).to_string()))
                .collect(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl PartialEq for EscapeMap {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl EscapeMap {
    /// Replacement text for `c`, if `c` is escaped.
    #[must_use]
    pub fn get(&self, c: char) -> Option<&str> {
        self.rules.get(&c).map(String::as_str)
    }

    /// Replacement text currently used for a single quote.
    #[must_use]
    pub fn single_quote(&self) -> &str {
        self.get(QUOTE).unwrap_or("\\'")
    }

    /// Replace the single-quote rule. The text is not validated.
    #[must_use]
    pub fn with_single_quote(mut self, replacement: impl Into<String>) -> Self {
        self.set_single_quote(replacement);
        self
    }

    pub fn set_single_quote(&mut self, replacement: impl Into<String>) {
        // the quote always has a rule, so the pattern does not change
        self.rules.insert(QUOTE, replacement.into());
    }

    /// Add or replace the rule for any character.
    ///
    /// # Errors
    ///
    /// Returns `SqlLiteralError::EscapePattern` if the matching pattern cannot be rebuilt.
    pub fn with_rule(
        mut self,
        c: char,
        replacement: impl Into<String>,
    ) -> Result<Self, SqlLiteralError> {
        let is_new = self.rules.insert(c, replacement.into()).is_none();
        if is_new {
            self.pattern = Regex::new(&char_class(self.rules.keys().copied()))?;
        }
        Ok(self)
    }

    /// Also escape the `LIKE` wildcards `%` and `_`.
    ///
    /// # Errors
    ///
    /// Returns `SqlLiteralError::EscapePattern` if the matching pattern cannot be rebuilt.
    pub fn with_like_wildcards(self) -> Result<Self, SqlLiteralError> {
        self.with_rule('%', "\\%")?.with_rule('_', "\\_")
    }

    /// Escape `text` without surrounding quotes. Borrows when nothing needs escaping.
    #[must_use]
    pub fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            matched
                .chars()
                .next()
                .and_then(|c| self.get(c))
                .unwrap_or(matched)
                .to_string()
        })
    }

    /// Escape `text` and wrap it in single quotes.
    #[must_use]
    pub fn quote(&self, text: &str) -> String {
        let escaped = self.escape(text);
        let mut out = String::with_capacity(escaped.len() + 2);
        out.push(QUOTE);
        out.push_str(&escaped);
        out.push(QUOTE);
        out
    }
}

fn char_class(chars: impl Iterator<Item = char>) -> String {
    let mut class = String::from("[");
    for c in chars {
        let _ = write!(class, "\\x{{{:X}}}", u32::from(c));
    }
    class.push(']');
    class
}

/// Run `f` against the process-wide escape map.
///
/// The read lock is held until `f` returns, so one encode or format call sees a single
/// consistent map.
pub(crate) fn with_escape_map<R>(f: impl FnOnce(&EscapeMap) -> R) -> R {
    let guard = ESCAPE_MAP.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Replace the single-quote rule of the process-wide escape map.
///
/// Affects every later encode call; finished calls and calls already in progress are
/// unaffected. The replacement is not validated: `''` and `\'` are the usual choices.
pub fn set_single_quote_escaper(replacement: impl Into<String>) {
    let replacement = replacement.into();
    tracing::debug!(replacement = %replacement, "single-quote escaper reconfigured");
    let mut map = ESCAPE_MAP.write().unwrap_or_else(PoisonError::into_inner);
    map.set_single_quote(replacement);
}

/// Replace the whole process-wide escape map.
pub fn set_escape_map(map: EscapeMap) {
    tracing::debug!(rules = map.rules.len(), "escape map replaced");
    *ESCAPE_MAP.write().unwrap_or_else(PoisonError::into_inner) = map;
}

/// Snapshot of the process-wide escape map.
#[must_use]
pub fn current_escape_map() -> EscapeMap {
    with_escape_map(EscapeMap::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_cover_mysql_sequences() {
        let map = EscapeMap::default();
        assert_eq!(
            map.escape("a\0b\u{8}c\td\u{1a}e\nf\rg\"h'i\\j"),
            "a\\0b\\bc\\td\\Ze\\nf\\rg\\\"h\\'i\\\\j"
        );
    }

    #[test]
    fn untouched_text_is_borrowed() {
        let map = EscapeMap::default();
        assert!(matches!(map.escape("plain text"), Cow::Borrowed(_)));
        assert!(matches!(map.escape("it's"), Cow::Owned(_)));
    }

    #[test]
    fn quote_wraps_and_escapes() {
        let map = EscapeMap::default();
        assert_eq!(map.quote(""), "''");
        assert_eq!(map.quote("it's"), "'it\\'s'");
    }

    #[test]
    fn single_quote_rule_is_replaceable() {
        let map = EscapeMap::default().with_single_quote("''");
        assert_eq!(map.single_quote(), "''");
        assert_eq!(map.quote("it's \\"), "'it''s \\\\'");
        assert_ne!(map, EscapeMap::default());
    }

    #[test]
    fn like_wildcards_are_opt_in() {
        assert_eq!(EscapeMap::default().escape("100%_done"), "100%_done");
        let map = EscapeMap::default().with_like_wildcards().unwrap();
        assert_eq!(map.escape("100%_done"), "100\\%\\_done");
        assert_eq!(map.get('%'), Some("\\%"));
    }

    #[test]
    fn custom_rules_handle_multibyte_characters() {
        let map = EscapeMap::default().with_rule('é', "e").unwrap();
        assert_eq!(map.escape("café's"), "cafe\\'s");
    }
}
