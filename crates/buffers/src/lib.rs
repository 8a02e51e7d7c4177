//! Bounds-checked binary buffer reading.
//!
//! This crate provides [`Reader`], a cursor over a borrowed byte slice whose
//! read methods never step past the end of the buffer: every read is checked
//! and returns a [`Result`], so truncated input surfaces as an error value
//! instead of a panic.
//!
//! # Example
//!
//! ```
//! use etf_buffers::Reader;
//!
//! let data = [0x01, 0x02, 0x03, 0x04];
//! let mut reader = Reader::new(&data);
//!
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.u16(), Ok(0x0203));
//! assert!(reader.u16().is_err());
//! ```

mod reader;

pub use reader::Reader;

use thiserror::Error;

/// Error type for buffer reads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read would run past the end of the buffer.
    #[error("unexpected end of buffer at offset {offset}: need {needed} bytes, {available} available")]
    EndOfBuffer {
        /// Cursor position at the time of the read.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
    /// The requested byte range is not valid UTF-8.
    #[error("invalid utf-8 in buffer")]
    InvalidUtf8,
}
