use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// A value that can be rendered as a SQL literal.
///
/// Every Rust type the encoder understands converts into one of these variants, so the
/// encoder branches on a closed set of shapes instead of inspecting types at runtime:
/// ```rust
/// use sql_literal::prelude::*;
///
/// let args = vec![
///     SqlValue::from(1),
///     SqlValue::from("alice"),
///     SqlValue::from(vec![1, 2, 3]),
///     SqlValue::from(None::<i64>),
/// ];
/// # let _ = args;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value (64-bit)
    Int(i64),
    /// Unsigned integer value (64-bit)
    UInt(u64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// Timestamp value, possibly the unset sentinel
    Timestamp(Timestamp),
    /// Ordered sequence, rendered comma-separated without brackets
    List(Vec<SqlValue>),
    /// Pointer-like indirection; `None` is a nil reference
    Ref(Option<Box<SqlValue>>),
    /// Any other structured value, rendered as quoted JSON
    Json(JsonValue),
}

/// A point in time, or the "no date/time set" sentinel.
///
/// The sentinel is distinct from NULL: it renders as `'0000-00-00 00:00:00'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Unset timestamp
    Zero,
    /// A concrete instant together with the offset it was recorded in
    At(DateTime<FixedOffset>),
}

impl Timestamp {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

impl SqlValue {
    /// Build an ordered sequence from anything iterable.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SqlValue>,
    {
        SqlValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Capture any serializable value as a structured literal.
    ///
    /// Serialization failures (for example a map with non-string keys) produce
    /// `SqlValue::Null`, so the value still renders as a valid literal.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => SqlValue::Json(json),
            Err(err) => {
                tracing::debug!(error = %err, "structured value not serializable; using NULL");
                SqlValue::Null
            }
        }
    }

    /// Wrap a value in one level of indirection.
    pub fn reference(value: impl Into<SqlValue>) -> Self {
        SqlValue::Ref(Some(Box::new(value.into())))
    }

    /// Check if this value is NULL, including a nil reference
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null | Self::Ref(None))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let SqlValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        if let SqlValue::Timestamp(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    SqlValue::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    SqlValue::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for SqlValue {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        SqlValue::Int(value as i64)
    }
}

impl From<usize> for SqlValue {
    fn from(value: usize) -> Self {
        SqlValue::UInt(value as u64)
    }
}

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        SqlValue::Float(f64::from(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

// `Vec<u8>` is a byte sequence, so sequences are implemented per element type.
macro_rules! impl_from_vec {
    ($($ty:ty),*) => {
        $(
            impl From<Vec<$ty>> for SqlValue {
                fn from(values: Vec<$ty>) -> Self {
                    SqlValue::list(values)
                }
            }
        )*
    };
}

impl_from_vec!(
    bool, i8, i16, i32, i64, isize, u16, u32, u64, usize, f32, f64, String, &str, SqlValue,
    Timestamp
);

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for SqlValue {
    fn from(values: [T; N]) -> Self {
        SqlValue::list(values)
    }
}

impl From<Timestamp> for SqlValue {
    fn from(value: Timestamp) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl From<DateTime<FixedOffset>> for SqlValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        SqlValue::Timestamp(Timestamp::At(value))
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(Timestamp::At(value.fixed_offset()))
    }
}

impl From<DateTime<Local>> for SqlValue {
    fn from(value: DateTime<Local>) -> Self {
        SqlValue::Timestamp(Timestamp::At(value.fixed_offset()))
    }
}

/// Naive timestamps carry no offset and are taken to be UTC.
impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(Timestamp::At(value.and_utc().fixed_offset()))
    }
}

impl From<JsonValue> for SqlValue {
    fn from(value: JsonValue) -> Self {
        SqlValue::Json(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        SqlValue::Ref(value.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<SqlValue>> From<Box<T>> for SqlValue {
    fn from(value: Box<T>) -> Self {
        SqlValue::reference(*value)
    }
}
