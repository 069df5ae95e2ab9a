//! Named parameters of functions and events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::ParamType;

/// Function or constructor parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Param name, may be empty.
    pub name: String,
    /// Param type.
    pub kind: ParamType,
    /// Solidity type the compiler reported, e.g. `struct Pool.Key`.
    pub internal_type: Option<String>,
}

impl Param {
    /// New parameter without an internal type.
    pub fn new(name: impl Into<String>, kind: ParamType) -> Self {
        Self { name: name.into(), kind, internal_type: None }
    }
}

/// Event parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParam {
    /// Param name, may be empty.
    pub name: String,
    /// Param type.
    pub kind: ParamType,
    /// Whether the value lives in a topic rather than in the log data.
    pub indexed: bool,
}

impl EventParam {
    /// New event parameter.
    pub fn new(name: impl Into<String>, kind: ParamType, indexed: bool) -> Self {
        Self { name: name.into(), kind, indexed }
    }
}
