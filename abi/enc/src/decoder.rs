// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ABI decoder.

use core::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    util::{round_up_to_word, word_to_usize},
    Address, Error, ParamType, Result, Value, Word, I256, U256,
};

/// Decoder settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Reject trailing bytes and non-zero padding after bytes and strings.
    pub validate: bool,
    /// Deepest nesting of arrays and tuples accepted.
    pub max_depth: usize,
    /// Largest dynamic array length accepted.
    pub max_elements: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            validate: false,
            max_depth: 64,
            max_elements: 1 << 20,
        }
    }
}

impl DecoderConfig {
    /// Sets strict validation.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Sets the nesting limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the dynamic array length limit.
    pub fn max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }
}

/// Decodes ABI compliant vector of bytes into vector of values described by types param.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Value>> {
    Decoder::new(data).decode(types)
}

/// Decodes ABI compliant vector of bytes into vector of values described by types param.
/// Checks, that decoded data is exact as input provided
pub fn decode_validate(types: &[ParamType], data: &[u8]) -> Result<Vec<Value>> {
    Decoder::with_config(data, DecoderConfig::default().validate(true)).decode(types)
}

/// Single use decoder over one input buffer.
///
/// Offsets inside a dynamic value are relative to the start of that value's
/// own region, so the decoder walks regions with a base position and a
/// cursor, and reports errors at absolute buffer offsets.
#[derive(Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    config: DecoderConfig,
    /// Furthest byte any read has touched.
    end: usize,
}

impl<'a> Decoder<'a> {
    /// Decoder with the default configuration.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecoderConfig::default())
    }

    /// Decoder with an explicit configuration.
    pub fn with_config(data: &'a [u8], config: DecoderConfig) -> Self {
        Self { data, config, end: 0 }
    }

    /// Decodes a parameter list laid out as an implicit tuple.
    pub fn decode(mut self, types: &[ParamType]) -> Result<Vec<Value>> {
        types.iter().try_for_each(ParamType::validate)?;

        let values = self.decode_sequence(types.iter(), 0, 0)?;

        if self.config.validate && self.end != self.data.len() {
            return Err(Error::InvalidData {
                ty: ParamType::tuple(types.iter().cloned()).to_string(),
                offset: self.end,
                reason: "trailing bytes after the encoding",
            });
        }
        Ok(values)
    }

    /// Decodes consecutive values whose heads start at `base`.
    fn decode_sequence<'t>(
        &mut self,
        types: impl Iterator<Item = &'t ParamType>,
        base: usize,
        depth: usize,
    ) -> Result<Vec<Value>> {
        if depth > self.config.max_depth {
            return Err(Error::DepthLimit(self.config.max_depth));
        }

        let mut values = Vec::with_capacity(types.size_hint().0.min(self.config.max_elements));
        let mut cursor = 0;
        for ty in types {
            let at = base + cursor;
            trace!(%ty, base, cursor, "decoding parameter");

            let value = if ty.is_dynamic() {
                let start = self.read_offset(ty, base, at)?;
                cursor += 32;
                self.decode_dynamic(ty, start, depth)?
            } else {
                let size = ty
                    .head_words()
                    .and_then(|words| words.checked_mul(32))
                    .ok_or_else(|| Error::UnsupportedType(ty.to_string()))?;
                self.peek(ty, at, size)?;
                let value = self.decode_static(ty, at, depth)?;
                cursor += size;
                value
            };
            values.push(value);
        }
        Ok(values)
    }

    /// Decodes a dynamic value whose region starts at `start`.
    fn decode_dynamic(&mut self, ty: &ParamType, start: usize, depth: usize) -> Result<Value> {
        Ok(match ty {
            ParamType::Bytes => Value::Bytes(self.read_packed(ty, start)?.to_vec()),
            ParamType::String => {
                let bytes = self.read_packed(ty, start)?;
                let s = core::str::from_utf8(bytes).map_err(|_| Error::InvalidData {
                    ty: ty.to_string(),
                    offset: start,
                    reason: "string is not valid UTF-8",
                })?;
                Value::String(s.to_owned())
            }
            ParamType::Array(elem) => {
                let len = self.read_length(ty, elem, start)?;
                let values =
                    self.decode_sequence(iter::repeat(elem.as_ref()).take(len), start + 32, depth + 1)?;
                Value::Array(elem.as_ref().clone(), values)
            }
            ParamType::FixedArray(elem, len) => {
                self.check_fixed_len(ty, *len, start)?;
                let values =
                    self.decode_sequence(iter::repeat(elem.as_ref()).take(*len), start, depth + 1)?;
                Value::FixedArray(elem.as_ref().clone(), values)
            }
            ParamType::Tuple(fields) => self.decode_tuple(fields, start, depth)?,
            _ => return Err(Error::UnsupportedType(ty.to_string())),
        })
    }

    /// Decodes a static value inline at `at`.
    fn decode_static(&mut self, ty: &ParamType, at: usize, depth: usize) -> Result<Value> {
        match ty {
            ParamType::FixedArray(elem, len) => {
                self.check_fixed_len(ty, *len, at)?;
                let values =
                    self.decode_sequence(iter::repeat(elem.as_ref()).take(*len), at, depth + 1)?;
                Ok(Value::FixedArray(elem.as_ref().clone(), values))
            }
            ParamType::Tuple(fields) => self.decode_tuple(fields, at, depth),
            _ => {
                let word = self.read_word(ty, at)?;
                decode_word(ty, &word, at)
            }
        }
    }

    fn decode_tuple(
        &mut self,
        fields: &[(String, ParamType)],
        base: usize,
        depth: usize,
    ) -> Result<Value> {
        let values = self.decode_sequence(fields.iter().map(|(_, ty)| ty), base, depth + 1)?;
        Ok(Value::Tuple(
            fields
                .iter()
                .map(|(name, _)| name.clone())
                .zip(values)
                .collect(),
        ))
    }

    fn peek(&mut self, ty: &ParamType, offset: usize, len: usize) -> Result<&'a [u8]> {
        let data = self.data;
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= data.len())
            .ok_or_else(|| Error::TruncatedInput {
                ty: ty.to_string(),
                offset,
                needed: len,
                len: data.len(),
            })?;
        self.end = self.end.max(end);
        Ok(&data[offset..end])
    }

    fn read_word(&mut self, ty: &ParamType, at: usize) -> Result<Word> {
        self.peek(ty, at, 32).map(Word::from_slice)
    }

    /// Reads the offset word at `at` and resolves it against `base`.
    fn read_offset(&mut self, ty: &ParamType, base: usize, at: usize) -> Result<usize> {
        let word = self.read_word(ty, at)?;
        let start = word_to_usize(&word).and_then(|pointer| base.checked_add(pointer));
        match start {
            Some(start) if start <= self.data.len() => Ok(start),
            _ => Err(Error::InvalidOffset {
                ty: ty.to_string(),
                offset: at,
                pointer: start.unwrap_or(usize::MAX),
                len: self.data.len(),
            }),
        }
    }

    /// Reads an array's element count and checks the elements can fit.
    fn read_length(&mut self, ty: &ParamType, elem: &ParamType, start: usize) -> Result<usize> {
        let word = self.read_word(ty, start)?;
        let available = self.data.len() - (start + 32);
        let len = word_to_usize(&word);
        let needed = len.and_then(|len| elem.head_words()?.checked_mul(32)?.checked_mul(len));

        match (len, needed) {
            (Some(len), Some(bytes)) if bytes <= available => {
                if len > self.config.max_elements {
                    return Err(Error::InvalidData {
                        ty: ty.to_string(),
                        offset: start,
                        reason: "array length exceeds the decoder limit",
                    });
                }
                Ok(len)
            }
            _ => Err(Error::TruncatedInput {
                ty: ty.to_string(),
                offset: start + 32,
                needed: needed.unwrap_or(usize::MAX),
                len: self.data.len(),
            }),
        }
    }

    /// Zero sized elements never run out of input, so fixed lengths are
    /// bounded like dynamic ones.
    fn check_fixed_len(&self, ty: &ParamType, len: usize, at: usize) -> Result<()> {
        if len > self.config.max_elements {
            return Err(Error::InvalidData {
                ty: ty.to_string(),
                offset: at,
                reason: "fixed array length exceeds the decoder limit",
            });
        }
        Ok(())
    }

    /// Reads `word(len) ++ bytes` at `start`, checking padding when validating.
    fn read_packed(&mut self, ty: &ParamType, start: usize) -> Result<&'a [u8]> {
        let word = self.read_word(ty, start)?;
        let len = word_to_usize(&word).ok_or_else(|| Error::TruncatedInput {
            ty: ty.to_string(),
            offset: start + 32,
            needed: usize::MAX,
            len: self.data.len(),
        })?;

        if !self.config.validate {
            return self.peek(ty, start + 32, len);
        }

        let padded = self.peek(ty, start + 32, round_up_to_word(len))?;
        if padded[len..].iter().any(|b| *b != 0) {
            return Err(Error::InvalidData {
                ty: ty.to_string(),
                offset: start + 32 + len,
                reason: "non-zero padding after bytes",
            });
        }
        Ok(&padded[..len])
    }
}

/// Decodes a single word value of type `ty`, rejecting non-canonical words.
pub(crate) fn decode_word(ty: &ParamType, word: &Word, at: usize) -> Result<Value> {
    let invalid = |reason| Error::InvalidData { ty: ty.to_string(), offset: at, reason };

    match ty {
        ParamType::Address => {
            if !is_zero(&word[..12]) {
                return Err(invalid("address has non-zero high bytes"));
            }
            Ok(Value::Address(Address::from_slice(&word[12..])))
        }
        ParamType::Bool => match (is_zero(&word[..31]), word[31]) {
            (true, 0) => Ok(Value::Bool(false)),
            (true, 1) => Ok(Value::Bool(true)),
            _ => Err(invalid("bool is neither 0 nor 1")),
        },
        ParamType::Uint(bits) => {
            let uint = U256::from_be_bytes(word.0);
            if uint.bit_len() > *bits {
                return Err(invalid("value exceeds the declared bit width"));
            }
            Ok(Value::Uint(*bits, uint))
        }
        ParamType::Int(bits) => {
            let int = I256::from_be_bytes(word.0);
            if !int.fits(*bits) {
                return Err(invalid("value is not sign extended from the declared bit width"));
            }
            Ok(Value::Int(*bits, int))
        }
        ParamType::FixedBytes(len) if (1..=32).contains(len) => {
            if !is_zero(&word[*len..]) {
                return Err(invalid("fixed bytes have non-zero padding"));
            }
            Ok(Value::FixedBytes(word[..*len].to_vec()))
        }
        _ => Err(Error::UnsupportedType(ty.to_string())),
    }
}

fn is_zero(data: &[u8]) -> bool {
    data.iter().all(|b| *b == 0)
}
