use thiserror::Error;

/// Errors raised by strand operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrandError {
    /// A caller supplied an argument the operation cannot work with,
    /// e.g. an empty enzyme passed to `cut_and_splice`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The cursor was advanced past the last chunk.
    #[error("end of sequence: no chunk left to advance over")]
    EndOfSequence,
}

pub type Result<T> = std::result::Result<T, StrandError>;
