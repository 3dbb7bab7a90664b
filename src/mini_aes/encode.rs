//! Conversions between external representations and the 16-bit block
//! sequences the engine consumes. The engine only ever sees `u16` values;
//! these adapters own the splitting and the length validation, and they
//! reject malformed input rather than padding or truncating it.

use crate::mini_aes::error::{Error, Result};

/// Packs a byte stream into big-endian 16-bit blocks, two bytes per block.
/// Returns [`Error::InvalidBlockLength`] for odd-length input.
///
/// ## Examples
/// ```
/// # fn main() -> miniaes::Result<()> {
/// let blocks = miniaes::bytes_to_blocks("hi".as_bytes())?;
/// assert_eq!(blocks, vec![0x6869]);
/// assert!(miniaes::bytes_to_blocks(&[0x01]).is_err());
/// # Ok(())
/// # }
/// ```
pub fn bytes_to_blocks(bytes: &[u8]) -> Result<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidBlockLength {
            len: bytes.len(),
            context: "byte stream must split into 2-byte blocks",
        });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect())
}

/// Unpacks blocks back into a byte stream. Exact inverse of
/// [`bytes_to_blocks`].
pub fn blocks_to_bytes(blocks: &[u16]) -> Vec<u8> {
    blocks.iter().flat_map(|block| block.to_be_bytes()).collect()
}

/// Parses an ASCII bit string ("0100...") into 16-bit blocks, most
/// significant bit first. The string length must be a multiple of 16 and
/// every character must be '0' or '1'.
pub fn bits_to_blocks(bits: &str) -> Result<Vec<u16>> {
    if bits.len() % 16 != 0 {
        return Err(Error::InvalidBlockLength {
            len: bits.len(),
            context: "bit string must split into 16-bit blocks",
        });
    }

    bits.as_bytes()
        .chunks_exact(16)
        .map(|chunk| {
            chunk.iter().try_fold(0u16, |block, &c| match c {
                b'0' => Ok(block << 1),
                b'1' => Ok((block << 1) | 1),
                other => Err(Error::InvalidBit { c: other as char }),
            })
        })
        .collect()
}

/// Formats blocks as an ASCII bit string, 16 characters per block. Exact
/// inverse of [`bits_to_blocks`].
pub fn blocks_to_bits(blocks: &[u16]) -> String {
    blocks.iter().map(|block| format!("{block:016b}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_round_trip() {
        let bytes = [0x9C, 0x63, 0x00, 0x0F, 0xFF, 0xFF];
        let blocks = bytes_to_blocks(&bytes).expect("even-length input");
        assert_eq!(blocks, vec![0x9C63, 0x000F, 0xFFFF]);
        assert_eq!(blocks_to_bytes(&blocks), bytes);
    }

    #[test]
    fn odd_byte_length_is_rejected() {
        let err = bytes_to_blocks(&[0x01, 0x02, 0x03]).unwrap_err();
        assert!(
            matches!(err, Error::InvalidBlockLength { len: 3, .. }),
            "odd-length byte input should be rejected, got {err:?}"
        );
    }

    #[test]
    fn bits_round_trip() {
        let bits = "10011100011000111100001111110000";
        let blocks = bits_to_blocks(bits).expect("valid bit string");
        assert_eq!(blocks, vec![0b1001_1100_0110_0011, 0b1100_0011_1111_0000]);
        assert_eq!(blocks_to_bits(&blocks), bits);
    }

    #[test]
    fn ragged_bit_string_is_rejected() {
        let err = bits_to_blocks("10101").unwrap_err();
        assert!(matches!(err, Error::InvalidBlockLength { len: 5, .. }));
    }

    #[test]
    fn non_bit_character_is_rejected() {
        let err = bits_to_blocks("1001110001100a11").unwrap_err();
        assert!(
            matches!(err, Error::InvalidBit { c: 'a' }),
            "expected InvalidBit for 'a', got {err:?}"
        );
    }

    #[test]
    fn empty_input_is_zero_blocks() {
        assert_eq!(bytes_to_blocks(&[]).unwrap(), Vec::<u16>::new());
        assert_eq!(bits_to_blocks("").unwrap(), Vec::<u16>::new());
    }
}
