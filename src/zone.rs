use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

use crate::error::SqlLiteralError;

/// The timezone a timestamp is converted into before it is rendered.
///
/// Encoding functions take an `Option<Zone>`; `None` keeps the offset stored in the
/// timestamp itself.
///
/// # Examples
/// ```rust
/// use sql_literal::prelude::*;
///
/// let zone: Zone = "+08:00".parse()?;
/// assert_eq!(zone.to_string(), "+08:00");
/// # Ok::<(), SqlLiteralError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The process's local timezone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl Zone {
    /// Wall-clock time of `at` as observed in this zone.
    #[must_use]
    pub fn wall_clock(&self, at: &DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            Zone::Local => at.with_timezone(&Local).naive_local(),
            Zone::Utc => at.with_timezone(&Utc).naive_utc(),
            Zone::Fixed(offset) => at.with_timezone(offset).naive_local(),
        }
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for Zone {
    type Err = SqlLiteralError;

    /// Accepts `local`, `utc`/`z` (any case) or a signed offset such as `+08:00`,
    /// `-0530` or `+02`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Zone::Local),
            "utc" | "z" => return Ok(Zone::Utc),
            _ => {}
        }
        parse_offset(trimmed)
            .map(Zone::Fixed)
            .ok_or_else(|| SqlLiteralError::InvalidZone(s.to_string()))
    }
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }
    let digits = match rest.len() {
        5 if rest.as_bytes()[2] == b':' => format!("{}{}", &rest[..2], &rest[3..]),
        2 | 4 => rest.to_string(),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
