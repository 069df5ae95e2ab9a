use fixed_hash::construct_fixed_hash;

use crate::U256;

construct_fixed_hash! {
    /// 256 bits fixed hash, the size of an EVM word.
    pub struct B256(32);
}

construct_fixed_hash! {
    /// 160 bits fixed hash, the size of an account address.
    pub struct B160(20);
}

impl From<B160> for B256 {
    /// Left pads the address to a full word.
    fn from(address: B160) -> Self {
        let mut word = B256::zero();
        word[12..].copy_from_slice(address.as_bytes());
        word
    }
}

impl From<U256> for B256 {
    fn from(value: U256) -> Self {
        B256(value.to_be_bytes::<32>())
    }
}

impl From<B256> for U256 {
    fn from(word: B256) -> Self {
        U256::from_be_bytes::<32>(word.0)
    }
}

#[cfg(feature = "serde")]
macro_rules! impl_hex_serde {
    ($name:ident) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&format_args!("{:#x}", self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
                let s = s.strip_prefix("0x").unwrap_or(&s);
                if s.len() != 2 * $name::len_bytes() {
                    return Err(serde::de::Error::invalid_length(
                        s.len() / 2,
                        &stringify!($name),
                    ));
                }
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

#[cfg(feature = "serde")]
impl_hex_serde!(B160);
#[cfg(feature = "serde")]
impl_hex_serde!(B256);
