//! Type descriptors.

mod reader;
mod writer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Error, Result};

/// Shape of an ABI parameter.
///
/// This is what the decoder is given in place of values: enough structure to
/// rebuild a [`Value`](crate::Value) tree from raw bytes. Tuple fields carry
/// their names so that decoded structs keep them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Address.
    Address,
    /// Bytes.
    Bytes,
    /// Signed integer.
    Int(usize),
    /// Unsigned integer.
    Uint(usize),
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Array of unknown size.
    Array(Box<ParamType>),
    /// Vector of bytes with fixed size.
    FixedBytes(usize),
    /// Array with fixed size.
    FixedArray(Box<ParamType>, usize),
    /// Tuple containing named, ordered fields.
    Tuple(Vec<(String, ParamType)>),
}

impl ParamType {
    /// Parses a canonical or aliased type string such as `uint`,
    /// `(address,bytes32)[]` or `string[2]`.
    pub fn parse(s: &str) -> Result<Self> {
        reader::read(s)
    }

    /// Builds a type from a JSON `type` string whose base is `tuple`, using
    /// `components` for the tuple fields. Array suffixes such as `tuple[2][]`
    /// are applied around the tuple. Non-tuple type strings ignore
    /// `components`.
    pub fn from_components(s: &str, components: Vec<(String, ParamType)>) -> Result<Self> {
        reader::read_with_components(s, components)
    }

    /// Returns `true` if the type's encoding has a variable length.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(elem, _) => elem.is_dynamic(),
            ParamType::Tuple(fields) => fields.iter().any(|(_, ty)| ty.is_dynamic()),
            _ => false,
        }
    }

    /// Number of words the type occupies in the head of its enclosing
    /// encoding. Dynamic types only take their offset slot, static arrays and
    /// tuples are inlined. `None` if the count overflows `usize`.
    pub fn head_words(&self) -> Option<usize> {
        if self.is_dynamic() {
            return Some(1);
        }
        match self {
            ParamType::FixedArray(elem, len) => elem.head_words()?.checked_mul(*len),
            ParamType::Tuple(fields) => fields
                .iter()
                .try_fold(0usize, |acc, (_, ty)| acc.checked_add(ty.head_words()?)),
            _ => Some(1),
        }
    }

    /// Checks integer widths and fixed bytes lengths throughout the type.
    pub fn validate(&self) -> Result<()> {
        match self {
            ParamType::Int(bits) | ParamType::Uint(bits) => {
                if *bits == 0 || *bits > 256 || bits % 8 != 0 {
                    return Err(Error::UnsupportedType(self.to_string()));
                }
                Ok(())
            }
            ParamType::FixedBytes(len) => {
                if *len == 0 || *len > 32 {
                    return Err(Error::UnsupportedType(self.to_string()));
                }
                Ok(())
            }
            ParamType::Array(elem) => elem.validate(),
            ParamType::FixedArray(elem, _) => {
                elem.validate()?;
                // the inline size in bytes must be addressable
                if self.head_words().and_then(|words| words.checked_mul(32)).is_none() {
                    return Err(Error::UnsupportedType(self.to_string()));
                }
                Ok(())
            }
            ParamType::Tuple(fields) => fields.iter().try_for_each(|(_, ty)| ty.validate()),
            ParamType::Address | ParamType::Bytes | ParamType::Bool | ParamType::String => Ok(()),
        }
    }

    /// Shorthand for an unnamed tuple.
    pub fn tuple(fields: impl IntoIterator<Item = ParamType>) -> Self {
        ParamType::Tuple(fields.into_iter().map(|ty| (String::new(), ty)).collect())
    }
}

impl core::str::FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
