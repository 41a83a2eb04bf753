use thiserror::Error;

/// Errors raised by time parsing and pace calculation.
///
/// Both kinds are recoverable: the caller reports them and asks for new input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaceError {
    /// The time string could not be split into 1-3 numeric parts
    #[error("invalid time '{input}': expected SS, MM:SS or H:MM:SS")]
    InvalidTime { input: String },

    /// A distance, time or split value was missing, non-finite or not positive
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
