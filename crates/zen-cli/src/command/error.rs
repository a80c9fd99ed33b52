use thiserror::Error;

/// The one and only parse failure.
///
/// Every grammar mismatch maps to this value; it deliberately carries no
/// detail about which token was wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the supplied arguments could not be parsed. Run `zen help` for usage information")]
pub struct ParseError;

pub type Result<T> = std::result::Result<T, ParseError>;
