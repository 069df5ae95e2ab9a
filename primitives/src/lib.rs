#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Fundamental word, address and integer types.
//!
//! Fixed-size byte strings are built with `fixed-hash`, unsigned integers are
//! `ruint` aliases and signed integers are the two's complement [`I256`].

#[cfg(feature = "serde")]
extern crate alloc;

mod bits;
pub use bits::{B160, B256};

mod signed;
pub use signed::I256;

pub use ruint::{
    aliases::{U128, U256, U64},
    Uint, UintTryFrom,
};

use tiny_keccak::{Hasher, Keccak};

/// Computes the Keccak-256 hash of `bytes`.
pub fn keccak256(bytes: impl AsRef<[u8]>) -> B256 {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(bytes.as_ref());
    hasher.finalize(&mut output);
    B256(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            format!("{:x}", keccak256([])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak_of_transfer_signature() {
        let hash = keccak256("transfer(address,uint256)");
        assert_eq!(hash[..4], [0xa9, 0x05, 0x9c, 0xbb]);
    }
}
