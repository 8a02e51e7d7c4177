//! External term format tag bytes.

/// Format-version marker that precedes every encoded term.
pub const VERSION: u8 = 131;

/// One-byte unsigned integer.
pub const SMALL_INTEGER_EXT: u8 = 97;
/// 32-bit big-endian integer.
pub const INTEGER_EXT: u8 = 98;
/// Atom with a 16-bit length prefix.
pub const ATOM_EXT: u8 = 100;
/// Tuple with a one-byte arity.
pub const SMALL_TUPLE_EXT: u8 = 104;
/// Tuple with a 32-bit arity.
pub const LARGE_TUPLE_EXT: u8 = 105;
/// Empty list.
pub const NIL_EXT: u8 = 106;
/// Char-list string with a 16-bit length prefix.
pub const STRING_EXT: u8 = 107;
/// List with a 32-bit element count and a trailing tail byte.
pub const LIST_EXT: u8 = 108;
/// Binary with a 32-bit length prefix.
pub const BINARY_EXT: u8 = 109;
/// Map with a 32-bit entry count.
pub const MAP_EXT: u8 = 116;
/// 64-bit big-endian IEEE-754 float.
pub const NEW_FLOAT_EXT: u8 = 70;
