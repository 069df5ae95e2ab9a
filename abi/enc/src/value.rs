// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ethereum ABI values.

use core::fmt;

use chainabi_primitives::UintTryFrom;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Address, ParamType, I256, U256};

/// Ethereum ABI value.
///
/// Arrays carry their element type so that empty arrays still have a
/// descriptor, and a `FixedArray`'s length is the number of its elements.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    /// Address, encoded like `uint160`.
    Address(Address),
    /// `bytesN`, between 1 and 32 bytes, right padded.
    FixedBytes(Vec<u8>),
    /// Dynamic `bytes`.
    Bytes(Vec<u8>),
    /// `intN`, with its bit width.
    Int(usize, I256),
    /// `uintN`, with its bit width.
    Uint(usize, U256),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    String(String),
    /// `T[N]`.
    FixedArray(ParamType, Vec<Value>),
    /// `T[]`.
    Array(ParamType, Vec<Value>),
    /// Struct, ordered named fields.
    Tuple(Vec<(String, Value)>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Address(address) => write!(f, "{address:#x}"),
            Value::FixedBytes(bytes) | Value::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            Value::Int(_, int) => write!(f, "{int}"),
            Value::Uint(_, uint) => write!(f, "{uint}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::FixedArray(_, values) | Value::Array(_, values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Value::Tuple(fields) => {
                f.write_str("(")?;
                for (i, (_, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Value {
    /// `uint256` from any primitive integer or `U256`.
    pub fn uint256<T>(value: T) -> Self
    where
        U256: UintTryFrom<T>,
    {
        Value::Uint(256, U256::from(value))
    }

    /// `int256` from anything convertible to `I256`.
    pub fn int256(value: impl Into<I256>) -> Self {
        Value::Int(256, value.into())
    }

    /// Tuple with unnamed fields.
    pub fn tuple(values: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(values.into_iter().map(|v| (String::new(), v)).collect())
    }

    /// Returns the descriptor this value encodes as.
    pub fn param_type(&self) -> ParamType {
        match self {
            Value::Address(_) => ParamType::Address,
            Value::FixedBytes(bytes) => ParamType::FixedBytes(bytes.len()),
            Value::Bytes(_) => ParamType::Bytes,
            Value::Int(bits, _) => ParamType::Int(*bits),
            Value::Uint(bits, _) => ParamType::Uint(*bits),
            Value::Bool(_) => ParamType::Bool,
            Value::String(_) => ParamType::String,
            Value::FixedArray(elem, values) => {
                ParamType::FixedArray(Box::new(elem.clone()), values.len())
            }
            Value::Array(elem, _) => ParamType::Array(Box::new(elem.clone())),
            Value::Tuple(fields) => ParamType::Tuple(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.param_type()))
                    .collect(),
            ),
        }
    }

    /// Check whether the value matches the given parameter type.
    ///
    /// Tuple field names are not compared, and numeric values type check if
    /// their bit width equals the declared one.
    pub fn type_check(&self, param_type: &ParamType) -> bool {
        match (self, param_type) {
            (Value::Address(_), ParamType::Address)
            | (Value::Bytes(_), ParamType::Bytes)
            | (Value::Bool(_), ParamType::Bool)
            | (Value::String(_), ParamType::String) => true,
            (Value::Int(bits, _), ParamType::Int(expected))
            | (Value::Uint(bits, _), ParamType::Uint(expected)) => bits == expected,
            (Value::FixedBytes(bytes), ParamType::FixedBytes(len)) => bytes.len() == *len,
            (Value::Array(elem, values), ParamType::Array(expected)) => {
                types_match(elem, expected) && values.iter().all(|v| v.type_check(expected))
            }
            (Value::FixedArray(elem, values), ParamType::FixedArray(expected, len)) => {
                values.len() == *len
                    && types_match(elem, expected)
                    && values.iter().all(|v| v.type_check(expected))
            }
            (Value::Tuple(fields), ParamType::Tuple(expected)) => {
                fields.len() == expected.len()
                    && fields
                        .iter()
                        .zip(expected)
                        .all(|((_, v), (_, ty))| v.type_check(ty))
            }
            _ => false,
        }
    }

    /// Check if all the values match the given parameter types.
    pub fn types_check(values: &[Value], param_types: &[ParamType]) -> bool {
        param_types.len() == values.len()
            && param_types
                .iter()
                .zip(values)
                .all(|(param_type, value)| value.type_check(param_type))
    }

    /// Check if the value is a dynamic type resulting in prefixed encoding.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Value::Bytes(_) | Value::String(_) | Value::Array(..) => true,
            Value::FixedArray(elem, _) => elem.is_dynamic(),
            Value::Tuple(fields) => fields.iter().any(|(_, v)| v.is_dynamic()),
            _ => false,
        }
    }

    /// Returns the address, if this is one.
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Value::Address(address) => Some(address),
            _ => None,
        }
    }

    /// Returns the unsigned integer, if this is one.
    pub fn as_uint(&self) -> Option<&U256> {
        match self {
            Value::Uint(_, uint) => Some(uint),
            _ => None,
        }
    }

    /// Returns the signed integer, if this is one.
    pub fn as_int(&self) -> Option<&I256> {
        match self {
            Value::Int(_, int) => Some(int),
            _ => None,
        }
    }

    /// Returns the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Return a reference to the underlying buffer of fixed or dynamic bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::FixedBytes(bytes) | Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Return the elements of a fixed or dynamic array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::FixedArray(_, values) | Value::Array(_, values) => Some(values),
            _ => None,
        }
    }

    /// Return the fields of a tuple.
    pub fn as_tuple(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Tuple(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Structural type equality, ignoring tuple field names.
fn types_match(a: &ParamType, b: &ParamType) -> bool {
    match (a, b) {
        (ParamType::Array(a), ParamType::Array(b)) => types_match(a, b),
        (ParamType::FixedArray(a, n), ParamType::FixedArray(b, m)) => n == m && types_match(a, b),
        (ParamType::Tuple(a), ParamType::Tuple(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|((_, a), (_, b))| types_match(a, b))
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use crate::no_std_prelude::*;
    use crate::{Address, ParamType, Value, U256};

    macro_rules! assert_type_check {
        ($left:expr, $right:expr,) => {
            assert!(Value::types_check($left.as_slice(), &$right.as_slice()))
        };
        ($left:expr, $right:expr) => {
            assert_type_check!($left, $right,)
        };
    }

    macro_rules! assert_not_type_check {
        ($left:expr, $right:expr,) => {
            assert!(!Value::types_check($left.as_slice(), &$right.as_slice()))
        };
        ($left:expr, $right:expr) => {
            assert_not_type_check!($left, $right,)
        };
    }

    #[test]
    fn test_type_check() {
        assert_type_check!(
            vec![Value::uint256(0u64), Value::Bool(false)],
            vec![ParamType::Uint(256), ParamType::Bool],
        );
        assert_not_type_check!(
            vec![Value::Uint(32, U256::ZERO), Value::Bool(false)],
            vec![ParamType::Uint(256), ParamType::Bool],
        );
        assert_not_type_check!(
            vec![Value::uint256(0u64)],
            vec![ParamType::Uint(256), ParamType::Bool],
        );
        assert_not_type_check!(
            vec![Value::uint256(0u64), Value::Bool(false)],
            vec![ParamType::Uint(256)],
        );

        assert_type_check!(
            vec![Value::Array(
                ParamType::Bool,
                vec![Value::Bool(false), Value::Bool(true)]
            )],
            vec![ParamType::Array(Box::new(ParamType::Bool))],
        );
        assert_not_type_check!(
            vec![Value::Array(
                ParamType::Bool,
                vec![Value::Bool(false), Value::Address(Address::zero())]
            )],
            vec![ParamType::Array(Box::new(ParamType::Bool))],
        );
        assert_not_type_check!(
            vec![Value::Array(ParamType::Address, vec![])],
            vec![ParamType::Array(Box::new(ParamType::Bool))],
        );

        assert_type_check!(
            vec![Value::FixedArray(
                ParamType::Bool,
                vec![Value::Bool(false), Value::Bool(true)]
            )],
            vec![ParamType::FixedArray(Box::new(ParamType::Bool), 2)],
        );
        assert_not_type_check!(
            vec![Value::FixedArray(
                ParamType::Bool,
                vec![Value::Bool(false), Value::Bool(true)]
            )],
            vec![ParamType::FixedArray(Box::new(ParamType::Bool), 3)],
        );

        assert_type_check!(
            vec![Value::Tuple(vec![
                ("to".into(), Value::Address(Address::zero())),
                ("memo".into(), Value::String("hi".into())),
            ])],
            vec![ParamType::tuple([ParamType::Address, ParamType::String])],
        );
        assert_not_type_check!(
            vec![Value::tuple([Value::Address(Address::zero())])],
            vec![ParamType::tuple([ParamType::Address, ParamType::String])],
        );
    }

    #[test]
    fn test_is_dynamic() {
        assert!(!Value::Address(Address::zero()).is_dynamic());
        assert!(Value::Bytes(vec![0, 0, 0, 0]).is_dynamic());
        assert!(!Value::FixedBytes(vec![0, 0, 0, 0]).is_dynamic());
        assert!(!Value::uint256(0u64).is_dynamic());
        assert!(!Value::Bool(false).is_dynamic());
        assert!(Value::String("".into()).is_dynamic());
        assert!(Value::Array(ParamType::Bool, vec![Value::Bool(false)]).is_dynamic());
        assert!(Value::Array(ParamType::Bool, vec![]).is_dynamic());
        assert!(!Value::FixedArray(ParamType::Uint(256), vec![Value::uint256(0u64)]).is_dynamic());
        assert!(Value::FixedArray(ParamType::String, vec![Value::String("".into())]).is_dynamic());
        assert!(Value::FixedArray(ParamType::String, vec![]).is_dynamic());
        assert!(!Value::tuple([Value::Bool(true)]).is_dynamic());
        assert!(Value::tuple([Value::Bool(true), Value::Bytes(vec![])]).is_dynamic());
    }

    #[test]
    fn descriptor_of_value() {
        let value = Value::Tuple(vec![
            ("id".into(), Value::Uint(64, U256::from(7u64))),
            (
                "tags".into(),
                Value::Array(ParamType::FixedBytes(4), vec![Value::FixedBytes(vec![1, 2, 3, 4])]),
            ),
        ]);
        assert_eq!(
            value.param_type(),
            ParamType::Tuple(vec![
                ("id".into(), ParamType::Uint(64)),
                ("tags".into(), ParamType::Array(Box::new(ParamType::FixedBytes(4)))),
            ])
        );
        assert_eq!(value.param_type().to_string(), "(uint64,bytes4[])");
    }

    #[test]
    fn display() {
        let value = Value::tuple([
            Value::Bool(true),
            Value::int256(-3i64),
            Value::Array(ParamType::Uint(8), vec![Value::Uint(8, U256::from(1u64))]),
            Value::Bytes(vec![0xab]),
        ]);
        assert_eq!(value.to_string(), "(true,-3,[1],0xab)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let value = Value::Tuple(vec![
            ("id".into(), Value::Uint(64, U256::from(7u64))),
            ("owner".into(), Value::Address(Address::repeat_byte(0x11))),
            ("tags".into(), Value::Array(ParamType::FixedBytes(1), vec![Value::FixedBytes(vec![0xab])])),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);

        let ty = value.param_type();
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(serde_json::from_str::<ParamType>(&json).unwrap(), ty);
    }
}
