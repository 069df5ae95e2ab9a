//! Solidity ABI encoding, decoding and ABI JSON loading.

pub use chainabi_enc::*;
pub use chainabi_json::Contract;
pub use chainabi_primitives::{keccak256, B160, B256};

/// ABI JSON loading.
pub mod json {
    pub use chainabi_json::{Contract, Error, Result};
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn tokenize_through_the_facade() {
        let call = (B160([0x11; 20]), U256::from(1000u64))
            .encode_with_selector(selector("transfer(address,uint256)"))
            .unwrap();
        assert_eq!(call[..4], hex!("a9059cbb"));
        assert_eq!(<(B160, U256)>::decode(&call[4..]).unwrap(), (B160([0x11; 20]), U256::from(1000u64)));
    }
}
