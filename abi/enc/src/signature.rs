//! Function selectors and event topics.

use chainabi_primitives::keccak256;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Hash, ParamType, Selector};

/// Builds the canonical signature `name(t1,t2,...)`.
pub fn signature(name: &str, params: &[ParamType]) -> String {
    let types = params.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
    format!("{name}({types})")
}

/// First 4 bytes of the keccak256 hash of `signature`.
pub fn selector(signature: &str) -> Selector {
    let mut result = [0u8; 4];
    result.copy_from_slice(&keccak256(signature.as_bytes())[..4]);
    result
}

/// Full keccak256 hash of `signature`, the first topic of a non-anonymous
/// event.
pub fn event_topic(signature: &str) -> Hash {
    keccak256(signature.as_bytes())
}

/// Selector of `name` over `params`.
pub fn short_signature(name: &str, params: &[ParamType]) -> Selector {
    selector(&signature(name, params))
}

/// Topic of `name` over `params`.
pub fn long_signature(name: &str, params: &[ParamType]) -> Hash {
    event_topic(&signature(name, params))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_signature() {
        assert_eq!(hex!("cdcd77c0"), short_signature("baz", &[ParamType::Uint(32), ParamType::Bool]));
        assert_eq!(
            selector("transfer(address,uint256)"),
            hex!("a9059cbb"),
        );
    }

    #[test]
    fn canonical_signature_text() {
        let params = [
            ParamType::Address,
            ParamType::Array(Box::new(ParamType::tuple([ParamType::Uint(256), ParamType::String]))),
            ParamType::FixedArray(Box::new(ParamType::FixedBytes(32)), 2),
        ];
        assert_eq!(signature("f", &params), "f(address,(uint256,string)[],bytes32[2])");
        assert_eq!(signature("g", &[]), "g()");
    }

    #[test]
    fn transfer_topic() {
        assert_eq!(
            long_signature("Transfer", &[ParamType::Address, ParamType::Address, ParamType::Uint(256)]).0,
            hex!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
        assert_eq!(
            event_topic("Transfer(address,address,uint256)"),
            long_signature("Transfer", &[ParamType::Address, ParamType::Address, ParamType::Uint(256)])
        );
    }
}
