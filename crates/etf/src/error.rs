use etf_buffers::BufferError;
use thiserror::Error;

/// Error type for term decoding.
///
/// Every variant is terminal for the parse that produced it: the decoder
/// never returns a partial result alongside an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EtfError {
    /// The leading version marker is not the supported value.
    #[error("unsupported version {0}")]
    UnsupportedVersion(u8),
    /// A term carried a tag byte outside the supported set.
    #[error("unsupported term tag {0}")]
    UnsupportedTag(u8),
    /// The buffer ended before the current term was complete.
    #[error("truncated input at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        /// Cursor position at the failing read.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
    /// An atom, string, or binary payload is not valid UTF-8.
    #[error("invalid utf-8 in term payload")]
    InvalidUtf8,
    /// Composite terms nest deeper than the decoder supports.
    #[error("term nesting exceeds the supported depth")]
    NestingTooDeep,
}

impl From<BufferError> for EtfError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer {
                offset,
                needed,
                available,
            } => EtfError::Truncated {
                offset,
                needed,
                available,
            },
            BufferError::InvalidUtf8 => EtfError::InvalidUtf8,
        }
    }
}
