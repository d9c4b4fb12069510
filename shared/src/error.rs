use thiserror::Error;

/// Errors surfaced by time formatting.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    /// The instant could not be parsed as a date/time
    #[error("Invalid instant: {0:?}")]
    InvalidInput(String),

    /// The time zone identifier is not in the time zone database
    #[error("Unknown time zone: {0:?}")]
    UnknownTimezone(String),
}
