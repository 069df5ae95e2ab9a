//! Conversions between Rust types and ABI values.

use chainabi_primitives::{B160, B256};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{decode, encode, util::hex_encode, Bytes, Error, ParamType, Result, Selector, Value, I256, U256};

/// Tokenize a Rust value
pub trait Tokenize {
    /// ABI type the value encodes as.
    fn param_type() -> ParamType
    where
        Self: Sized;

    /// Convert to a value
    fn to_value(&self) -> Value;

    /// Types of the parameter list [`Tokenize::to_values`] produces. Tuples
    /// spread into their fields.
    fn param_types() -> Vec<ParamType>
    where
        Self: Sized,
    {
        vec![Self::param_type()]
    }

    /// Convert to a parameter list
    fn to_values(&self) -> Vec<Value> {
        vec![self.to_value()]
    }

    /// ABI encode
    fn encode(&self) -> Result<Bytes> {
        encode(&self.to_values())
    }

    /// Hex encode
    fn encode_hex(&self) -> Result<String> {
        self.encode().map(hex_encode)
    }

    /// ABI encode with a selector
    fn encode_with_selector(&self, selector: Selector) -> Result<Bytes> {
        let mut v = Vec::from(selector);
        v.extend(self.encode()?);
        Ok(v)
    }
}

/// Rebuild a Rust value from decoded values
pub trait Detokenize: Tokenize + Sized {
    /// Converts a single value.
    fn from_value(value: Value) -> Result<Self>;

    /// Converts a parameter list, the inverse of [`Tokenize::to_values`].
    fn from_values(values: Vec<Value>) -> Result<Self> {
        let mut iter = values.into_iter();
        match (iter.next(), iter.next()) {
            (Some(value), None) => Self::from_value(value),
            (first, second) => {
                let found: Vec<_> = first.into_iter().chain(second).chain(iter).collect();
                Err(list_mismatch::<Self>(&found))
            }
        }
    }

    /// ABI decode
    fn decode(data: &[u8]) -> Result<Self> {
        Self::from_values(decode(&Self::param_types(), data)?)
    }
}

fn mismatch<T: Tokenize>(found: &Value) -> Error {
    Error::TypeMismatch {
        expected: T::param_type().to_string(),
        found: found.param_type().to_string(),
    }
}

fn list_mismatch<T: Tokenize>(found: &[Value]) -> Error {
    Error::TypeMismatch {
        expected: ParamType::tuple(T::param_types()).to_string(),
        found: ParamType::tuple(found.iter().map(Value::param_type)).to_string(),
    }
}

fn out_of_range<T: Tokenize>(value: &Value) -> Error {
    Error::ValueOutOfRange { ty: T::param_type().to_string(), value: value.to_string() }
}

impl Tokenize for bool {
    fn param_type() -> ParamType {
        ParamType::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Detokenize for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! impl_tokenize_ints {
    ($($int:ty, $uint:ty, $bits:literal;)+) => {$(
        impl Tokenize for $uint {
            fn param_type() -> ParamType {
                ParamType::Uint($bits)
            }

            fn to_value(&self) -> Value {
                Value::Uint($bits, U256::from(*self))
            }
        }

        impl Detokenize for $uint {
            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Uint($bits, uint) => {
                        <$uint>::try_from(uint).map_err(|_| out_of_range::<Self>(&Value::Uint($bits, uint)))
                    }
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }

        impl Tokenize for $int {
            fn param_type() -> ParamType {
                ParamType::Int($bits)
            }

            fn to_value(&self) -> Value {
                Value::Int($bits, I256::from(*self as i128))
            }
        }

        impl Detokenize for $int {
            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Int($bits, int) => int
                        .to_i128()
                        .and_then(|int| <$int>::try_from(int).ok())
                        .ok_or_else(|| out_of_range::<Self>(&Value::Int($bits, int))),
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    )+};
}

impl_tokenize_ints! {
    i8, u8, 8;
    i16, u16, 16;
    i32, u32, 32;
    i64, u64, 64;
    i128, u128, 128;
}

impl Tokenize for U256 {
    fn param_type() -> ParamType {
        ParamType::Uint(256)
    }

    fn to_value(&self) -> Value {
        Value::Uint(256, *self)
    }
}

impl Detokenize for U256 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uint(256, uint) => Ok(uint),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Tokenize for I256 {
    fn param_type() -> ParamType {
        ParamType::Int(256)
    }

    fn to_value(&self) -> Value {
        Value::Int(256, *self)
    }
}

impl Detokenize for I256 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(256, int) => Ok(int),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Tokenize for B160 {
    fn param_type() -> ParamType {
        ParamType::Address
    }

    fn to_value(&self) -> Value {
        Value::Address(*self)
    }
}

impl Detokenize for B160 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Address(address) => Ok(address),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Tokenize for B256 {
    fn param_type() -> ParamType {
        ParamType::FixedBytes(32)
    }

    fn to_value(&self) -> Value {
        Value::FixedBytes(self.as_bytes().to_vec())
    }
}

impl Detokenize for B256 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::FixedBytes(bytes) if bytes.len() == 32 => Ok(B256::from_slice(&bytes)),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Tokenize for &str {
    fn param_type() -> ParamType {
        ParamType::String
    }

    fn to_value(&self) -> Value {
        Value::String((*self).to_owned())
    }
}

impl Tokenize for String {
    fn param_type() -> ParamType {
        ParamType::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Detokenize for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: Tokenize> Tokenize for Vec<T> {
    fn param_type() -> ParamType {
        ParamType::Array(Box::new(T::param_type()))
    }

    fn to_value(&self) -> Value {
        Value::Array(T::param_type(), self.iter().map(Tokenize::to_value).collect())
    }
}

impl<T: Detokenize> Detokenize for Vec<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(_, values) => values.into_iter().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T, const N: usize> Tokenize for [T; N]
where
    T: Tokenize,
{
    fn param_type() -> ParamType {
        ParamType::FixedArray(Box::new(T::param_type()), N)
    }

    fn to_value(&self) -> Value {
        Value::FixedArray(T::param_type(), self.iter().map(Tokenize::to_value).collect())
    }
}

impl<T, const N: usize> Detokenize for [T; N]
where
    T: Detokenize,
{
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::FixedArray(elem, values) if values.len() == N => {
                let items = values.into_iter().map(T::from_value).collect::<Result<Vec<_>>>()?;
                items.try_into().map_err(|_| Error::TypeMismatch {
                    expected: Self::param_type().to_string(),
                    found: ParamType::FixedArray(Box::new(elem), N).to_string(),
                })
            }
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! impl_tuples {
    ($($ty:ident: $idx:tt),+) => {
        impl<$($ty: Tokenize),+> Tokenize for ($($ty,)+) {
            fn param_type() -> ParamType {
                ParamType::tuple(Self::param_types())
            }

            fn to_value(&self) -> Value {
                Value::tuple(self.to_values())
            }

            fn param_types() -> Vec<ParamType> {
                vec![$($ty::param_type()),+]
            }

            fn to_values(&self) -> Vec<Value> {
                vec![$(self.$idx.to_value()),+]
            }
        }

        impl<$($ty: Detokenize),+> Detokenize for ($($ty,)+) {
            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Tuple(fields) => {
                        Self::from_values(fields.into_iter().map(|(_, value)| value).collect())
                    }
                    other => Err(mismatch::<Self>(&other)),
                }
            }

            fn from_values(values: Vec<Value>) -> Result<Self> {
                if values.len() != Self::param_types().len() {
                    return Err(list_mismatch::<Self>(&values));
                }
                let mut iter = values.into_iter();
                Ok(($(
                    $ty::from_value(iter.next().ok_or_else(|| list_mismatch::<Self>(&[]))?)?,
                )+))
            }
        }
    };
}

impl_tuples!(A: 0);
impl_tuples!(A: 0, B: 1);
impl_tuples!(A: 0, B: 1, C: 2);
impl_tuples!(A: 0, B: 1, C: 2, D: 3);
impl_tuples!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuples!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
