//! [`TermDecoder`] — recursive tag-dispatched decoder for the external term
//! format.

use etf_buffers::Reader;

use crate::constants::{
    ATOM_EXT, BINARY_EXT, INTEGER_EXT, LARGE_TUPLE_EXT, LIST_EXT, MAP_EXT, NEW_FLOAT_EXT, NIL_EXT,
    SMALL_INTEGER_EXT, SMALL_TUPLE_EXT, STRING_EXT, VERSION,
};
use crate::error::EtfError;
use crate::term::Term;

/// Composite terms nesting deeper than this abort the parse, since input
/// nesting translates directly into call-stack depth.
const MAX_DEPTH: usize = 1024;

/// Decoder over a borrowed, version-prefixed term buffer.
///
/// A decoder instance performs exactly one parse: [`TermDecoder::parse`]
/// takes the decoder by value.
pub struct TermDecoder<'a> {
    reader: Reader<'a>,
    depth: usize,
}

impl<'a> TermDecoder<'a> {
    /// Creates a decoder positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
            depth: 0,
        }
    }

    /// Decodes the version marker and the single top-level term.
    pub fn parse(self) -> Result<Term, EtfError> {
        self.parse_with_consumed().map(|(term, _)| term)
    }

    /// Like [`TermDecoder::parse`], additionally reporting how many input
    /// bytes the term occupied (version marker included). Bytes past the
    /// top-level term are left unread and are not an error.
    pub fn parse_with_consumed(mut self) -> Result<(Term, usize), EtfError> {
        let version = self.reader.u8()?;
        if version != VERSION {
            return Err(EtfError::UnsupportedVersion(version));
        }
        let term = self.read_any()?;
        Ok((term, self.reader.pos()))
    }

    fn read_any(&mut self) -> Result<Term, EtfError> {
        let tag = self.reader.u8()?;
        match tag {
            SMALL_INTEGER_EXT => Ok(Term::SmallInt(self.reader.u8()?)),
            INTEGER_EXT => Ok(Term::Int(self.reader.i32()?)),
            NEW_FLOAT_EXT => Ok(Term::Float(self.reader.f64()?)),
            ATOM_EXT | STRING_EXT => {
                let len = self.reader.u16()? as usize;
                Ok(Term::Str(self.reader.utf8(len)?.to_owned()))
            }
            BINARY_EXT => {
                let len = self.reader.u32()? as usize;
                Ok(Term::Str(self.reader.utf8(len)?.to_owned()))
            }
            SMALL_TUPLE_EXT => {
                let arity = self.reader.u8()? as usize;
                self.read_seq(arity)
            }
            LARGE_TUPLE_EXT => {
                let arity = self.reader.u32()? as usize;
                self.read_seq(arity)
            }
            LIST_EXT => {
                let len = self.reader.u32()? as usize;
                let list = self.read_seq(len)?;
                // Every list carries a tail byte; its value is not inspected.
                self.reader.skip(1)?;
                Ok(list)
            }
            // nil decodes as an empty map, not an empty list
            NIL_EXT => Ok(Term::Map(Vec::new())),
            MAP_EXT => {
                let len = self.reader.u32()? as usize;
                self.read_map(len)
            }
            other => Err(EtfError::UnsupportedTag(other)),
        }
    }

    fn read_seq(&mut self, len: usize) -> Result<Term, EtfError> {
        self.enter()?;
        // Each element occupies at least one input byte, so `remaining`
        // bounds the allocation for hostile length prefixes.
        let mut items = Vec::with_capacity(len.min(self.reader.remaining()));
        for _ in 0..len {
            items.push(self.read_any()?);
        }
        self.depth -= 1;
        Ok(Term::List(items))
    }

    fn read_map(&mut self, len: usize) -> Result<Term, EtfError> {
        self.enter()?;
        let mut entries: Vec<(Term, Term)> = Vec::with_capacity(len.min(self.reader.remaining()));
        for _ in 0..len {
            let key = self.read_any()?;
            let val = self.read_any()?;
            // Last write wins; the entry keeps its first position.
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = val,
                None => entries.push((key, val)),
            }
        }
        self.depth -= 1;
        Ok(Term::Map(entries))
    }

    #[inline]
    fn enter(&mut self) -> Result<(), EtfError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EtfError::NestingTooDeep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_small_integer() {
        let decoder = TermDecoder::new(&[131, 97, 42]);
        assert_eq!(decoder.parse(), Ok(Term::SmallInt(42)));
    }

    #[test]
    fn parse_rejects_wrong_version() {
        let decoder = TermDecoder::new(&[130, 97, 42]);
        assert_eq!(decoder.parse(), Err(EtfError::UnsupportedVersion(130)));
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let decoder = TermDecoder::new(&[131, 200]);
        assert_eq!(decoder.parse(), Err(EtfError::UnsupportedTag(200)));
    }

    #[test]
    fn parse_reports_consumed_bytes() {
        // Small tuple of two small integers, then trailing garbage.
        let decoder = TermDecoder::new(&[131, 104, 2, 97, 1, 97, 2, 0xaa, 0xbb]);
        let (term, consumed) = decoder.parse_with_consumed().unwrap();
        assert_eq!(term, Term::List(vec![Term::SmallInt(1), Term::SmallInt(2)]));
        assert_eq!(consumed, 7);
    }

    #[test]
    fn parse_empty_input_is_truncated() {
        let decoder = TermDecoder::new(&[]);
        assert!(matches!(
            decoder.parse(),
            Err(EtfError::Truncated {
                offset: 0,
                needed: 1,
                available: 0,
            })
        ));
    }
}
