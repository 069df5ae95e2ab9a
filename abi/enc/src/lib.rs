#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::module_inception)]
#![warn(missing_docs)]

//! Solidity ABI codec.
//!
//! Values are described by the closed [`Value`] tree and shapes by
//! [`ParamType`]. [`encode`] lays values out with the head/tail discipline,
//! [`decode`] reverses it given the expected types, and [`Function`] /
//! [`Event`] tie both to selectors and log topics.

#[cfg_attr(not(feature = "std"), macro_use)]
extern crate alloc;
#[cfg(not(feature = "std"))]
mod no_std_prelude {
    pub use alloc::{
        borrow::ToOwned,
        boxed::Box,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

#[cfg(feature = "std")]
mod no_std_prelude {}

use chainabi_primitives::{B160, B256};
#[cfg(not(feature = "std"))]
use no_std_prelude::*;

mod decoder;
pub use decoder::{decode, decode_validate, Decoder, DecoderConfig};

mod encoder;
pub use encoder::{encode, encode_value};

mod value;
pub use value::Value;

mod errors;
pub use errors::{Error, Result};

mod param_type;
pub use param_type::ParamType;

mod param;
pub use param::{EventParam, Param};

mod signature;
pub use signature::{event_topic, long_signature, selector, short_signature, signature};

mod function;
pub use function::{Constructor, Function, StateMutability};

mod event;
pub use event::{Event, Log, LogParam, RawLog};

mod tokenize;
pub use tokenize::{Detokenize, Tokenize};

pub mod util;

pub use chainabi_primitives::{I256, U256};

/// EVM Word
pub type Word = B256;
/// EVM Address
pub type Address = B160;
/// Dynamic Byte array
pub type Bytes = Vec<u8>;
/// Hash
pub type Hash = B256;
/// Function selector
pub type Selector = [u8; 4];
