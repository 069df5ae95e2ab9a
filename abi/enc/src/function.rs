//! Contract functions and constructors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    decode, encode,
    signature::{short_signature, signature},
    util::hex_encode,
    Bytes, Error, Param, ParamType, Result, Selector, Value,
};

/// Whether a function reads or writes chain state and accepts ether.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StateMutability {
    /// Reads no state.
    Pure,
    /// Reads state but does not modify it.
    View,
    /// Modifies state and rejects ether.
    #[default]
    NonPayable,
    /// Modifies state and accepts ether.
    Payable,
}

/// Contract function.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Function name.
    pub name: String,
    /// Function input.
    pub inputs: Vec<Param>,
    /// Function output.
    pub outputs: Vec<Param>,
    /// State mutability.
    pub state_mutability: StateMutability,
}

impl Function {
    fn input_types(&self) -> Vec<ParamType> {
        self.inputs.iter().map(|p| p.kind.clone()).collect()
    }

    fn output_types(&self) -> Vec<ParamType> {
        self.outputs.iter().map(|p| p.kind.clone()).collect()
    }

    /// Canonical signature, `name(t1,t2,...)`.
    pub fn signature(&self) -> String {
        signature(&self.name, &self.input_types())
    }

    /// Returns the 4 byte selector of the function.
    pub fn selector(&self) -> Selector {
        short_signature(&self.name, &self.input_types())
    }

    /// Prepares ABI function call with given input params.
    pub fn encode_input(&self, values: &[Value]) -> Result<Bytes> {
        check_types(&self.input_types(), values)?;

        let mut call = self.selector().to_vec();
        call.extend(encode(values)?);
        Ok(call)
    }

    /// Parses the ABI function input to a list of values, checking and
    /// stripping the selector.
    pub fn decode_input(&self, data: &[u8]) -> Result<Vec<Value>> {
        let selector = self.selector();
        match data.get(..4) {
            Some(found) if found == selector => decode(&self.input_types(), &data[4..]),
            found => {
                let found = hex_encode(found.unwrap_or(data));
                debug!(function = %self.name, %found, "call data selector mismatch");
                Err(Error::InvalidSelector { expected: hex_encode(selector), found })
            }
        }
    }

    /// Parses the ABI function output to a list of values.
    pub fn decode_output(&self, data: &[u8]) -> Result<Vec<Value>> {
        decode(&self.output_types(), data)
    }
}

/// Contract constructor.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constructor {
    /// Constructor input.
    pub inputs: Vec<Param>,
}

impl Constructor {
    /// Prepares the deployment payload: `code` followed by the encoded
    /// arguments.
    pub fn encode_input(&self, code: Bytes, values: &[Value]) -> Result<Bytes> {
        let types: Vec<_> = self.inputs.iter().map(|p| p.kind.clone()).collect();
        check_types(&types, values)?;

        let mut payload = code;
        payload.extend(encode(values)?);
        Ok(payload)
    }
}

fn check_types(types: &[ParamType], values: &[Value]) -> Result<()> {
    if Value::types_check(values, types) {
        return Ok(());
    }
    let found: Vec<_> = values.iter().map(Value::param_type).collect();
    Err(Error::TypeMismatch {
        expected: ParamType::tuple(types.iter().cloned()).to_string(),
        found: ParamType::tuple(found).to_string(),
    })
}
