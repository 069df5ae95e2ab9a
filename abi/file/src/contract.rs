use std::{collections::BTreeMap, io};

use chainabi_enc::{Constructor, Event, Function, Hash, Selector};
use tracing::debug;

use crate::{
    item::{Item, JsonItem},
    Error, Result,
};

/// API building calls to contracts ABI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    /// Contract constructor.
    pub constructor: Option<Constructor>,
    /// Contract functions, overloads in declaration order.
    pub functions: BTreeMap<String, Vec<Function>>,
    /// Contract events, overloads in declaration order.
    pub events: BTreeMap<String, Vec<Event>>,
    /// Contract has a receive function.
    pub receive: bool,
    /// Contract has a fallback function.
    pub fallback: bool,
}

impl Contract {
    /// Loads contract from json.
    pub fn load<T: io::Read>(reader: T) -> Result<Self> {
        Self::from_items(serde_json::from_reader(reader)?)
    }

    /// Parses contract from a json string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_items(serde_json::from_str(json)?)
    }

    fn from_items(items: Vec<JsonItem>) -> Result<Self> {
        let mut contract = Contract::default();
        let mut ignored = 0usize;

        for item in items {
            match item.into_item()? {
                Item::Function(function) => {
                    contract.functions.entry(function.name.clone()).or_default().push(function)
                }
                Item::Event(event) => {
                    contract.events.entry(event.name.clone()).or_default().push(event)
                }
                Item::Constructor(constructor) => contract.constructor = Some(constructor),
                Item::Fallback => contract.fallback = true,
                Item::Receive => contract.receive = true,
                Item::Ignored => ignored += 1,
            }
        }

        debug!(
            functions = contract.functions.len(),
            events = contract.events.len(),
            ignored,
            "loaded contract abi"
        );
        Ok(contract)
    }

    /// Creates constructor call builder.
    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    /// Get the function named `name`, the first if there are overloaded
    /// versions of the same function.
    pub fn function(&self, name: &str) -> Result<&Function> {
        self.functions_by_name(name).map(|functions| &functions[0])
    }

    /// Get all functions named `name`.
    pub fn functions_by_name(&self, name: &str) -> Result<&[Function]> {
        self.functions
            .get(name)
            .filter(|functions| !functions.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| Error::InvalidName(name.to_owned()))
    }

    /// Iterate over all functions of the contract in arbitrary order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values().flatten()
    }

    /// Function whose selector is `selector`.
    pub fn function_by_selector(&self, selector: Selector) -> Option<&Function> {
        self.functions().find(|function| function.selector() == selector)
    }

    /// Get the event named `name`, the first if there are overloaded
    /// versions of the same event.
    pub fn event(&self, name: &str) -> Result<&Event> {
        self.events
            .get(name)
            .and_then(|events| events.first())
            .ok_or_else(|| Error::InvalidName(name.to_owned()))
    }

    /// Iterate over all events of the contract in arbitrary order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values().flatten()
    }

    /// Non-anonymous event whose signature hash is `topic`.
    pub fn event_by_topic(&self, topic: &Hash) -> Option<&Event> {
        self.events().find(|event| !event.anonymous && event.topic() == *topic)
    }
}
