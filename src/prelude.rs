//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::encoder::Encoder;
pub use crate::error::SqlLiteralError;
pub use crate::escape::{EscapeMap, current_escape_map, set_escape_map, set_single_quote_escaper};
pub use crate::format::{format, format_in_zone, placeholder_count};
pub use crate::literal::{encode, encode_in_zone};
pub use crate::types::{SqlValue, Timestamp};
pub use crate::zone::Zone;
