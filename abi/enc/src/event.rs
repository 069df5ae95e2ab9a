//! Contract events and logs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    decode,
    decoder::decode_word,
    signature::{long_signature, signature},
    util::{hex_decode, hex_encode},
    Bytes, Error, EventParam, Hash, ParamType, Result, Value,
};

/// Contract event.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name.
    pub name: String,
    /// Event input.
    pub inputs: Vec<EventParam>,
    /// If anonymous, the signature hash is not emitted as the first topic.
    pub anonymous: bool,
}

/// Undecoded log as it appears in a receipt.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLog {
    /// Indexed topics.
    pub topics: Vec<Hash>,
    /// ABI encoded non-indexed parameters.
    pub data: Bytes,
}

impl RawLog {
    /// Builds a log from hex topics and hex data, each optionally `0x`
    /// prefixed.
    pub fn from_hex<'a>(topics: impl IntoIterator<Item = &'a str>, data: &str) -> Result<Self> {
        let topics = topics
            .into_iter()
            .map(|topic| {
                let bytes = hex_decode(topic)?;
                if bytes.len() != 32 {
                    return Err(Error::InvalidTopics(format!(
                        "topic {topic} is {} bytes, expected 32",
                        bytes.len()
                    )));
                }
                Ok(Hash::from_slice(&bytes))
            })
            .collect::<Result<_>>()?;
        Ok(Self { topics, data: hex_decode(data)? })
    }
}

/// Decoded log parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LogParam {
    /// Parameter name.
    pub name: String,
    /// Decoded value. Indexed strings, bytes, arrays and tuples are only
    /// present as their 32 byte topic hash.
    pub value: Value,
    /// Whether the value came from a topic.
    pub indexed: bool,
}

/// Decoded log, parameters in declaration order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    /// Log params.
    pub params: Vec<LogParam>,
}

impl Log {
    /// Value of the first parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

impl Event {
    fn param_types(&self) -> Vec<ParamType> {
        self.inputs.iter().map(|p| p.kind.clone()).collect()
    }

    /// Canonical signature, `Name(t1,t2,...)`.
    pub fn signature(&self) -> String {
        signature(&self.name, &self.param_types())
    }

    /// Event signature hash, the first topic of non-anonymous logs.
    pub fn topic(&self) -> Hash {
        long_signature(&self.name, &self.param_types())
    }

    /// Parses a raw log into named, typed parameters.
    pub fn decode_log(&self, log: &RawLog) -> Result<Log> {
        self.inputs.iter().try_for_each(|p| p.kind.validate())?;

        let skip = usize::from(!self.anonymous);
        let indexed = self.inputs.iter().filter(|p| p.indexed).count();
        if log.topics.len() != indexed + skip {
            debug!(event = %self.name, found = log.topics.len(), "log topic count mismatch");
            return Err(Error::InvalidTopics(format!(
                "{} expects {} topics, found {}",
                self.name,
                indexed + skip,
                log.topics.len()
            )));
        }

        if !self.anonymous {
            let expected = self.topic();
            if log.topics[0] != expected {
                debug!(event = %self.name, found = %hex_encode(log.topics[0]), "log signature mismatch");
                return Err(Error::InvalidTopics(format!(
                    "topic 0 is {}, {} hashes to {}",
                    hex_encode(log.topics[0]),
                    self.signature(),
                    hex_encode(expected)
                )));
            }
        }

        let data_types: Vec<_> =
            self.inputs.iter().filter(|p| !p.indexed).map(|p| p.kind.clone()).collect();
        let mut data_values = decode(&data_types, &log.data)?.into_iter();
        let mut topics = log.topics[skip..].iter();

        let params = self
            .inputs
            .iter()
            .map(|param| {
                let value = if param.indexed {
                    topics.next().map(|topic| decode_topic(&param.kind, topic)).transpose()?
                } else {
                    data_values.next()
                };
                let value = value.ok_or_else(|| {
                    Error::InvalidTopics(format!("{} is missing parameter {}", self.name, param.name))
                })?;
                Ok(LogParam { name: param.name.clone(), value, indexed: param.indexed })
            })
            .collect::<Result<_>>()?;

        Ok(Log { params })
    }
}

/// Reference types are hashed into their topic, the rest are one word.
fn decode_topic(kind: &ParamType, topic: &Hash) -> Result<Value> {
    match kind {
        ParamType::Bytes
        | ParamType::String
        | ParamType::Array(_)
        | ParamType::FixedArray(..)
        | ParamType::Tuple(_) => Ok(Value::FixedBytes(topic.as_bytes().to_vec())),
        _ => decode_word(kind, topic, 0),
    }
}
