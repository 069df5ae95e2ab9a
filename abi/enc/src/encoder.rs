// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ABI encoder.

use tracing::trace;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    util::{pad_bool, pad_usize},
    Bytes, Error, ParamType, Result, Value, Word,
};

fn pad_bytes_len(bytes: &[u8]) -> usize {
    // "+ 1" because len is also appended
    (bytes.len() + 31) / 32 + 1
}

fn pad_bytes_append(data: &mut Vec<Word>, bytes: &[u8]) {
    data.push(pad_usize(bytes.len()));
    fixed_bytes_append(data, bytes);
}

fn fixed_bytes_append(result: &mut Vec<Word>, bytes: &[u8]) {
    for chunk in bytes.chunks(32) {
        let mut padded = Word::zero();
        padded[..chunk.len()].copy_from_slice(chunk);
        result.push(padded);
    }
}

/// Intermediate layout of a value: what goes into the head of the enclosing
/// encoding and what, if anything, is appended to its tail.
#[derive(Debug)]
enum Mediate<'a> {
    // head
    Raw(Word),
    RawArray(Vec<Mediate<'a>>),

    // head + tail
    Prefixed(usize, &'a [u8]),
    PrefixedArray(Vec<Mediate<'a>>),
    PrefixedArrayWithLength(Vec<Mediate<'a>>),
}

impl Mediate<'_> {
    fn head_len(&self) -> usize {
        match self {
            Mediate::Raw(_) => 32,
            Mediate::RawArray(ref mediates) => mediates.iter().map(Mediate::head_len).sum(),
            Mediate::Prefixed(..)
            | Mediate::PrefixedArray(_)
            | Mediate::PrefixedArrayWithLength(_) => 32,
        }
    }

    fn tail_len(&self) -> usize {
        match self {
            Mediate::Raw(_) | Mediate::RawArray(_) => 0,
            Mediate::Prefixed(len, _) => 32 * len,
            Mediate::PrefixedArray(ref mediates) => mediates
                .iter()
                .fold(0, |acc, m| acc + m.head_len() + m.tail_len()),
            Mediate::PrefixedArrayWithLength(ref mediates) => mediates
                .iter()
                .fold(32, |acc, m| acc + m.head_len() + m.tail_len()),
        }
    }

    fn head_append(&self, acc: &mut Vec<Word>, suffix_offset: usize) {
        match *self {
            Mediate::Raw(word) => acc.push(word),
            Mediate::RawArray(ref raw) => {
                raw.iter().for_each(|mediate| mediate.head_append(acc, 0))
            }
            Mediate::Prefixed(..)
            | Mediate::PrefixedArray(_)
            | Mediate::PrefixedArrayWithLength(_) => acc.push(pad_usize(suffix_offset)),
        }
    }

    fn tail_append(&self, acc: &mut Vec<Word>) {
        match *self {
            Mediate::Raw(_) | Mediate::RawArray(_) => {}
            Mediate::Prefixed(_, bytes) => pad_bytes_append(acc, bytes),
            Mediate::PrefixedArray(ref mediates) => encode_head_tail_append(acc, mediates),
            Mediate::PrefixedArrayWithLength(ref mediates) => {
                // + 32 added to offset represents len of the array prepended to tail
                acc.push(pad_usize(mediates.len()));
                encode_head_tail_append(acc, mediates);
            }
        };
    }

    fn is_prefixed(&self) -> bool {
        !matches!(self, Mediate::Raw(_) | Mediate::RawArray(_))
    }
}

/// Encodes a parameter list into ABI compliant bytes.
///
/// The list is laid out as an implicit tuple: static values inline in the
/// head, dynamic values behind an offset word pointing into the tail.
pub fn encode(values: &[Value]) -> Result<Bytes> {
    let mediates = values.iter().map(mediate_value).collect::<Result<Vec<_>>>()?;

    Ok(encode_head_tail(&mediates)
        .into_iter()
        .flat_map(Into::<[u8; 32]>::into)
        .collect())
}

/// Encodes a single value on its own, without an enclosing offset word.
///
/// Static values yield their inline words, dynamic values the content an
/// offset would point to, e.g. `word(len) ++ padded(bytes)` for a string.
pub fn encode_value(value: &Value) -> Result<Bytes> {
    let mediate = mediate_value(value)?;

    let mut words = Vec::new();
    if mediate.is_prefixed() {
        mediate.tail_append(&mut words);
    } else {
        mediate.head_append(&mut words, 0);
    }
    Ok(words.into_iter().flat_map(Into::<[u8; 32]>::into).collect())
}

fn encode_head_tail(mediates: &[Mediate]) -> Vec<Word> {
    let (heads_len, tails_len) = mediates.iter().fold((0, 0), |(head_acc, tail_acc), m| {
        (head_acc + m.head_len(), tail_acc + m.tail_len())
    });
    trace!(heads_len, tails_len, "encoding head/tail");

    let mut result = Vec::with_capacity((heads_len + tails_len) / 32);
    encode_head_tail_append(&mut result, mediates);

    result
}

fn encode_head_tail_append(acc: &mut Vec<Word>, mediates: &[Mediate]) {
    let heads_len = mediates
        .iter()
        .fold(0, |head_acc, m| head_acc + m.head_len());

    let mut offset = heads_len;
    for mediate in mediates {
        mediate.head_append(acc, offset);
        offset += mediate.tail_len();
    }

    mediates.iter().for_each(|m| m.tail_append(acc));
}

fn mediate_value(value: &Value) -> Result<Mediate> {
    Ok(match value {
        Value::Address(address) => Mediate::Raw((*address).into()),
        Value::Bool(b) => Mediate::Raw(pad_bool(*b)),
        Value::Uint(bits, uint) => {
            value.param_type().validate()?;
            if uint.bit_len() > *bits {
                return Err(Error::ValueOutOfRange {
                    ty: value.param_type().to_string(),
                    value: uint.to_string(),
                });
            }
            Mediate::Raw((*uint).into())
        }
        Value::Int(bits, int) => {
            value.param_type().validate()?;
            if !int.fits(*bits) {
                return Err(Error::ValueOutOfRange {
                    ty: value.param_type().to_string(),
                    value: int.to_string(),
                });
            }
            // two's complement words are already sign extended with 0xff
            Mediate::Raw(Word::from(int.to_be_bytes()))
        }
        Value::FixedBytes(bytes) => {
            value.param_type().validate()?;
            let mut word = Word::zero();
            word[..bytes.len()].copy_from_slice(bytes);
            Mediate::Raw(word)
        }
        Value::Bytes(bytes) => Mediate::Prefixed(pad_bytes_len(bytes), bytes),
        Value::String(s) => Mediate::Prefixed(pad_bytes_len(s.as_bytes()), s.as_bytes()),
        Value::FixedArray(elem, values) => {
            let mediates = mediate_elements(elem, values)?;

            if elem.is_dynamic() {
                Mediate::PrefixedArray(mediates)
            } else {
                Mediate::RawArray(mediates)
            }
        }
        Value::Array(elem, values) => {
            Mediate::PrefixedArrayWithLength(mediate_elements(elem, values)?)
        }
        Value::Tuple(fields) => {
            let mediates = fields
                .iter()
                .map(|(_, field)| mediate_value(field))
                .collect::<Result<Vec<_>>>()?;

            if value.is_dynamic() {
                Mediate::PrefixedArray(mediates)
            } else {
                Mediate::RawArray(mediates)
            }
        }
    })
}

fn mediate_elements<'a>(elem: &ParamType, values: &'a [Value]) -> Result<Vec<Mediate<'a>>> {
    elem.validate()?;
    values
        .iter()
        .map(|value| {
            if !value.type_check(elem) {
                return Err(Error::TypeMismatch {
                    expected: elem.to_string(),
                    found: value.param_type().to_string(),
                });
            }
            mediate_value(value)
        })
        .collect()
}
