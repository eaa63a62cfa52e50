use thiserror::Error;

/// Errors raised while configuring the encoder.
///
/// Encoding and formatting themselves never fail; only building a [`crate::Zone`] or an
/// [`crate::EscapeMap`] from caller input can.
#[derive(Debug, Error)]
pub enum SqlLiteralError {
    #[error("Invalid timezone: {0}")]
    InvalidZone(String),

    #[error(transparent)]
    EscapePattern(#[from] regex::Error),
}
