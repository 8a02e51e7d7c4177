//! Decoder for the Erlang external term format.
//!
//! The format is a tag-prefixed, self-describing binary encoding of nested
//! terms: a one-byte version marker (131) followed by exactly one term, where
//! each term is a tag byte plus a tag-specific payload. This crate decodes
//! such a buffer into a dynamically-typed [`Term`] tree in a single linear
//! scan.
//!
//! Only the term kinds this consumer actually receives are supported —
//! integers, floats, atoms, strings, binaries, lists, tuples, and maps. Any
//! other tag fails the parse with [`EtfError::UnsupportedTag`], and there is
//! no encoder.
//!
//! # Example
//!
//! ```
//! use etf_term::{decode, Term};
//!
//! // 131 = version, 104 = small tuple, arity 2, two small integers
//! let term = decode(&[131, 104, 2, 97, 1, 97, 2]).unwrap();
//! assert_eq!(term, Term::List(vec![Term::SmallInt(1), Term::SmallInt(2)]));
//! ```

pub mod constants;
mod decoder;
mod error;
mod term;

pub use decoder::TermDecoder;
pub use error::EtfError;
pub use term::Term;

/// Decodes one version-prefixed term from `input`.
pub fn decode(input: &[u8]) -> Result<Term, EtfError> {
    TermDecoder::new(input).parse()
}

/// Decodes one version-prefixed term and reports how many bytes it consumed.
pub fn decode_with_consumed(input: &[u8]) -> Result<(Term, usize), EtfError> {
    TermDecoder::new(input).parse_with_consumed()
}
