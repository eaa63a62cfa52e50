use std::borrow::Cow;

use crate::escape::{EscapeMap, with_escape_map};
use crate::format::format_with;
use crate::literal::encode_with;
use crate::types::SqlValue;
use crate::zone::Zone;

/// Encoding settings carried explicitly instead of read from process-wide state.
///
/// `Encoder::default()` behaves like the crate-level [`crate::encode`] and
/// [`crate::format`]: local timezone, process-wide escape map. Giving the encoder its own
/// [`EscapeMap`] isolates it from [`crate::set_single_quote_escaper`].
///
/// # Examples
/// ```rust
/// use sql_literal::prelude::*;
///
/// let encoder = Encoder::new()
///     .with_zone(Zone::Utc)
///     .with_escape_map(EscapeMap::default().with_single_quote("''"));
/// assert_eq!(encoder.format("name=?", &[SqlValue::from("it's")]), "name='it''s'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Encoder {
    zone: Option<Zone>,
    escapes: Option<EscapeMap>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            zone: Some(Zone::Local),
            escapes: None,
        }
    }
}

impl Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert timestamps into `zone` before rendering.
    #[must_use]
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Render timestamps in the offset they carry.
    #[must_use]
    pub fn without_zone(mut self) -> Self {
        self.zone = None;
        self
    }

    /// Use a private escape map instead of the process-wide one.
    #[must_use]
    pub fn with_escape_map(mut self, escapes: EscapeMap) -> Self {
        self.escapes = Some(escapes);
        self
    }

    #[must_use]
    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    #[must_use]
    pub fn escape_map(&self) -> Option<&EscapeMap> {
        self.escapes.as_ref()
    }

    #[must_use]
    pub fn encode(&self, value: &SqlValue) -> String {
        match &self.escapes {
            Some(escapes) => encode_with(value, self.zone, escapes),
            None => with_escape_map(|escapes| encode_with(value, self.zone, escapes)),
        }
    }

    #[must_use]
    pub fn format<'a>(&self, template: &'a str, values: &[SqlValue]) -> Cow<'a, str> {
        if values.is_empty() {
            return Cow::Borrowed(template);
        }
        match &self.escapes {
            Some(escapes) => format_with(template, values, self.zone, escapes),
            None => with_escape_map(|escapes| format_with(template, values, self.zone, escapes)),
        }
    }
}
