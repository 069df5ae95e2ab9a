//! Serde shapes of ABI JSON entries.

use chainabi_enc::{
    Constructor, Event, EventParam, Function, Param, ParamType, StateMutability,
};
use serde::Deserialize;

use crate::Result;

/// Input or output parameter as written in ABI JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub components: Vec<JsonParam>,
    #[serde(default)]
    pub indexed: bool,
    pub internal_type: Option<String>,
}

impl JsonParam {
    fn param_type(&self) -> Result<ParamType> {
        let components = self
            .components
            .iter()
            .map(|c| Ok((c.name.clone(), c.param_type()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(ParamType::from_components(&self.kind, components)?)
    }

    fn into_param(self) -> Result<Param> {
        Ok(Param { kind: self.param_type()?, name: self.name, internal_type: self.internal_type })
    }

    fn into_event_param(self) -> Result<EventParam> {
        Ok(EventParam { kind: self.param_type()?, name: self.name, indexed: self.indexed })
    }
}

/// One entry of an ABI array.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum JsonItem {
    #[serde(rename_all = "camelCase")]
    Function {
        name: String,
        #[serde(default)]
        inputs: Vec<JsonParam>,
        #[serde(default)]
        outputs: Vec<JsonParam>,
        state_mutability: Option<StateMutability>,
        // pre 0.4.16 compilers
        constant: Option<bool>,
        payable: Option<bool>,
    },
    Constructor {
        #[serde(default)]
        inputs: Vec<JsonParam>,
    },
    Event {
        name: String,
        #[serde(default)]
        inputs: Vec<JsonParam>,
        #[serde(default)]
        anonymous: bool,
    },
    Fallback,
    Receive,
    Error,
    #[serde(other)]
    Unknown,
}

/// Item converted to codec types.
pub(crate) enum Item {
    Function(Function),
    Constructor(Constructor),
    Event(Event),
    Fallback,
    Receive,
    Ignored,
}

impl JsonItem {
    pub(crate) fn into_item(self) -> Result<Item> {
        Ok(match self {
            JsonItem::Function { name, inputs, outputs, state_mutability, constant, payable } => {
                let state_mutability = state_mutability.unwrap_or(match (payable, constant) {
                    (Some(true), _) => StateMutability::Payable,
                    (_, Some(true)) => StateMutability::View,
                    _ => StateMutability::NonPayable,
                });
                Item::Function(Function {
                    name,
                    inputs: inputs.into_iter().map(JsonParam::into_param).collect::<Result<_>>()?,
                    outputs: outputs.into_iter().map(JsonParam::into_param).collect::<Result<_>>()?,
                    state_mutability,
                })
            }
            JsonItem::Constructor { inputs } => Item::Constructor(Constructor {
                inputs: inputs.into_iter().map(JsonParam::into_param).collect::<Result<_>>()?,
            }),
            JsonItem::Event { name, inputs, anonymous } => Item::Event(Event {
                name,
                inputs: inputs
                    .into_iter()
                    .map(JsonParam::into_event_param)
                    .collect::<Result<_>>()?,
                anonymous,
            }),
            JsonItem::Fallback => Item::Fallback,
            JsonItem::Receive => Item::Receive,
            JsonItem::Error | JsonItem::Unknown => Item::Ignored,
        })
    }
}
