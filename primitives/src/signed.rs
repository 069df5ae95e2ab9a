use core::fmt;

use derive_more::Not;

use crate::U256;

/// A 256 bit signed integer stored in two's complement form.
///
/// Only the operations the ABI codec needs are provided: conversion from
/// native integers, sign inspection and range checks against narrower
/// `intN` types.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Not)]
pub struct I256(U256);

impl I256 {
    /// Zero.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Reinterprets a raw two's complement word.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw two's complement representation.
    pub const fn into_raw(self) -> U256 {
        self.0
    }

    /// Returns the value as 32 big-endian bytes, sign extended.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    /// Reads 32 big-endian two's complement bytes.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes::<32>(bytes))
    }

    /// Returns `true` if the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.bit(255)
    }

    /// Returns the absolute value as an unsigned integer.
    ///
    /// `-2^255` maps to `2^255`, which still fits the unsigned range.
    pub fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            self.0.wrapping_neg()
        } else {
            self.0
        }
    }

    /// Returns `true` if the value is representable as a two's complement
    /// integer of `bits` bits.
    pub fn fits(&self, bits: usize) -> bool {
        if bits == 0 {
            return false;
        }
        if bits >= 256 {
            return true;
        }
        let magnitude = if self.is_negative() { (!*self).0 } else { self.0 };
        magnitude.bit_len() < bits
    }

    /// Converts to an `i128` if the value fits.
    pub fn to_i128(&self) -> Option<i128> {
        if !self.fits(128) {
            return None;
        }
        let bytes = self.to_be_bytes();
        let mut low = [0u8; 16];
        low.copy_from_slice(&bytes[16..]);
        Some(i128::from_be_bytes(low))
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        let magnitude = U256::from(value.unsigned_abs());
        if value < 0 {
            Self(magnitude.wrapping_neg())
        } else {
            Self(magnitude)
        }
    }
}

macro_rules! impl_from_signed {
    ($($int:ty),+) => {
        $(
            impl From<$int> for I256 {
                fn from(value: $int) -> Self {
                    Self::from(i128::from(value))
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
