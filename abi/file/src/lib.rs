//! Loads Solidity ABI JSON into [`chainabi_enc`] functions and events.

mod contract;
pub use contract::Contract;

mod errors;
pub use errors::{Error, Result};

mod item;
