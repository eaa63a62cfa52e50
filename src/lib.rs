//! Render typed values as SQL literals and splice them into `?` templates.
//!
//! The literal syntax is MySQL's: text is single-quoted with backslash escapes, bytes are
//! `X'..'` hex, sequences are comma-joined for use inside `IN (...)`, and anything that
//! cannot be rendered becomes `NULL`. Nothing here returns an error while encoding.
//!
//! ```rust
//! use sql_literal::prelude::*;
//!
//! let sql = format(
//!     "select * from users where name=? and id in (?)",
//!     &[SqlValue::from("o'brien"), SqlValue::from(vec![1, 2, 3])],
//! );
//! assert_eq!(sql, r"select * from users where name='o\'brien' and id in (1,2,3)");
//! ```
//!
//! Text escaping is driven by a process-wide [`EscapeMap`]. Change it with
//! [`set_single_quote_escaper`] before other threads start encoding, or carry settings
//! explicitly with an [`Encoder`].

mod encoder;
mod error;
mod escape;
mod format;
mod literal;
mod macros;
mod types;
mod zone;

pub mod prelude;

pub use encoder::Encoder;
pub use error::SqlLiteralError;
pub use escape::{EscapeMap, QUOTE, current_escape_map, set_escape_map, set_single_quote_escaper};
pub use format::{PLACEHOLDER, format, format_in_zone, format_with, placeholder_count};
pub use literal::{MAX_INDIRECTION, NULL, encode, encode_in_zone, encode_with};
pub use types::{SqlValue, Timestamp};
pub use zone::Zone;
