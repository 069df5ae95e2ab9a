//! ABI codec errors.

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;

/// Codec result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while encoding, decoding or parsing ABI types.
///
/// Decode errors carry the canonical type being decoded and the absolute byte
/// offset into the input buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// A numeric value does not fit the declared bit width.
    #[cfg_attr(feature = "std", error("value {value} does not fit in {ty}"))]
    ValueOutOfRange {
        /// Declared type.
        ty: String,
        /// Offending value, in decimal.
        value: String,
    },
    /// There is no codec rule for the requested shape.
    #[cfg_attr(feature = "std", error("unsupported type: {0}"))]
    UnsupportedType(String),
    /// A value does not have the type it is declared with.
    #[cfg_attr(feature = "std", error("type mismatch: expected {expected}, found {found}"))]
    TypeMismatch {
        /// Declared type.
        expected: String,
        /// Type of the supplied value.
        found: String,
    },
    /// A read ran past the end of the input.
    #[cfg_attr(
        feature = "std",
        error("truncated input decoding {ty}: {needed} bytes needed at offset {offset}, input is {len} bytes")
    )]
    TruncatedInput {
        /// Type being decoded.
        ty: String,
        /// Absolute offset of the read.
        offset: usize,
        /// Bytes the read needed.
        needed: usize,
        /// Length of the input.
        len: usize,
    },
    /// An offset word points outside the input.
    #[cfg_attr(
        feature = "std",
        error("invalid offset decoding {ty}: word at offset {offset} points to {pointer}, input is {len} bytes")
    )]
    InvalidOffset {
        /// Type being decoded.
        ty: String,
        /// Absolute offset of the offset word.
        offset: usize,
        /// Absolute position the word points to, saturated at `usize::MAX`.
        pointer: usize,
        /// Length of the input.
        len: usize,
    },
    /// The input is well-sized but not a canonical encoding of the type.
    #[cfg_attr(feature = "std", error("invalid data decoding {ty} at offset {offset}: {reason}"))]
    InvalidData {
        /// Type being decoded.
        ty: String,
        /// Absolute offset of the offending word.
        offset: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Input text is not valid hex.
    #[cfg_attr(feature = "std", error("malformed hex: {0}"))]
    MalformedHex(hex::FromHexError),
    /// A type string could not be parsed.
    #[cfg_attr(feature = "std", error("invalid type string: {0}"))]
    InvalidType(String),
    /// Call data does not start with the function's selector.
    #[cfg_attr(feature = "std", error("selector mismatch: expected {expected}, found {found}"))]
    InvalidSelector {
        /// Selector of the function, hex.
        expected: String,
        /// Leading bytes of the call data, hex.
        found: String,
    },
    /// Log topics do not match the event.
    #[cfg_attr(feature = "std", error("invalid topics: {0}"))]
    InvalidTopics(String),
    /// Nesting exceeded the decoder's depth limit.
    #[cfg_attr(feature = "std", error("nesting deeper than {0} levels"))]
    DepthLimit(usize),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::MalformedHex(err)
    }
}
