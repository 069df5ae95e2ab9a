//! Word padding and hex helpers.

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Error, Word};

/// Converts a u32 to a right aligned word.
pub fn pad_u32(value: u32) -> Word {
    let mut padded = Word::zero();
    padded[28..].copy_from_slice(&value.to_be_bytes());
    padded
}

/// Converts a usize to a right aligned word.
pub fn pad_usize(value: usize) -> Word {
    let mut padded = Word::zero();
    padded[24..].copy_from_slice(&(value as u64).to_be_bytes());
    padded
}

/// Converts a bool to a word, `1` for true.
pub fn pad_bool(value: bool) -> Word {
    pad_u32(value as u32)
}

/// Reads a word as a usize, `None` if it does not fit.
pub fn word_to_usize(word: &Word) -> Option<usize> {
    if word[..24].iter().any(|b| *b != 0) {
        return None;
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(low)).ok()
}

/// Rounds `len` up to the next multiple of 32.
pub fn round_up_to_word(len: usize) -> usize {
    (len + 31) / 32 * 32
}

/// Decodes hex text, with or without a `0x` prefix.
pub fn hex_decode(data: &str) -> Result<Vec<u8>, Error> {
    let payload = data.strip_prefix("0x").unwrap_or(data);
    Ok(hex::decode(payload)?)
}

/// Encodes bytes as lowercase, `0x` prefixed hex.
pub fn hex_encode(data: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(data))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_pad_u32() {
        // this will fail if endianness is not supported
        assert_eq!(
            pad_u32(0).as_bytes(),
            hex!("0000000000000000000000000000000000000000000000000000000000000000")
        );
        assert_eq!(
            pad_u32(1).as_bytes(),
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );
        assert_eq!(
            pad_u32(0x100).as_bytes(),
            hex!("0000000000000000000000000000000000000000000000000000000000000100")
        );
        assert_eq!(
            pad_u32(0xffffffff).as_bytes(),
            hex!("00000000000000000000000000000000000000000000000000000000ffffffff")
        );
    }

    #[test]
    fn usize_words() {
        assert_eq!(word_to_usize(&pad_usize(0x40)), Some(0x40));
        assert_eq!(word_to_usize(&Word::repeat_byte(0xff)), None);
    }

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(hex_decode("0x0a0B").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(hex_decode("0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(hex_encode([0xde, 0xad]), "0xdead");
    }

    #[test]
    fn malformed_hex() {
        assert!(matches!(hex_decode("0xabc"), Err(Error::MalformedHex(_))));
        assert!(matches!(hex_decode("zz"), Err(Error::MalformedHex(_))));
    }
}
