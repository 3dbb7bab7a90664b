use rayon::prelude::*;

use crate::mini_aes::core::{RCON, SBOX, State, block_to_state, decrypt_block, encrypt_block};

// batches at least this many blocks are worth farming out to rayon
const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// The Mini-AES engine. Instantiated with a 16-bit key, which is expanded
/// into three round keys and stored in the instance; blocks are plain `u16`
/// values and every bit pattern of key and block is valid.
///
/// ## Examples
/// ```
/// use miniaes::Cipher;
///
/// let cipher = Cipher::new(0b1100_0011_1111_0000);
/// let ciphertext = cipher.encrypt(&[0b1001_1100_0110_0011]);
/// assert_eq!(cipher.decrypt(&ciphertext), vec![0b1001_1100_0110_0011]);
/// ```
pub struct Cipher {
    round_keys: [State; 3],
}

impl Cipher {
    /// Expands `key` into round keys and stores them in the returned
    /// instance. Never fails: all 2^16 key values are valid.
    pub fn new(key: u16) -> Self {
        Self {
            round_keys: Self::expand_key(key),
        }
    }

    /// Replaces the current key, recomputing the full schedule in place.
    pub fn set_key(&mut self, key: u16) {
        self.round_keys = Self::expand_key(key);
    }

    /// Encrypts a sequence of 16-bit blocks, returning one output block per
    /// input block in order. Blocks are independent (no chaining), so large
    /// batches are encrypted in parallel.
    pub fn encrypt(&self, blocks: &[u16]) -> Vec<u16> {
        if blocks.len() >= PARALLEL_THRESHOLD {
            blocks
                .par_iter()
                .map(|&block| encrypt_block(block, &self.round_keys))
                .collect()
        } else {
            blocks
                .iter()
                .map(|&block| encrypt_block(block, &self.round_keys))
                .collect()
        }
    }

    /// Decrypts a sequence of 16-bit blocks. Same contract as
    /// [`encrypt`](Cipher::encrypt), inverse operation.
    pub fn decrypt(&self, blocks: &[u16]) -> Vec<u16> {
        if blocks.len() >= PARALLEL_THRESHOLD {
            blocks
                .par_iter()
                .map(|&block| decrypt_block(block, &self.round_keys))
                .collect()
        } else {
            blocks
                .iter()
                .map(|&block| decrypt_block(block, &self.round_keys))
                .collect()
        }
    }

    pub(crate) fn round_keys(&self) -> &[State; 3] {
        &self.round_keys
    }

    /// Mini-AES key schedule. Round key 0 is the raw key matrix; each later
    /// round key is derived from the previous one, the S-box, and a round
    /// constant, mirroring the AES schedule at nibble size:
    ///
    /// ```text
    /// rk[r][0][0] = rk[r-1][0][0] ^ SBOX[rk[r-1][1][1]] ^ RCON[r]
    /// rk[r][1][0] = rk[r-1][1][0] ^ rk[r][0][0]
    /// rk[r][0][1] = rk[r-1][0][1] ^ rk[r][1][0]
    /// rk[r][1][1] = rk[r-1][1][1] ^ rk[r][0][1]
    /// ```
    fn expand_key(key: u16) -> [State; 3] {
        let mut round_keys = [[[0u8; 2]; 2]; 3];
        round_keys[0] = block_to_state(key);

        for r in 1..3 {
            let prev = round_keys[r - 1];
            let mut rk = [[0u8; 2]; 2];
            rk[0][0] = prev[0][0] ^ SBOX[prev[1][1] as usize] ^ RCON[r];
            rk[1][0] = prev[1][0] ^ rk[0][0];
            rk[0][1] = prev[0][1] ^ rk[1][0];
            rk[1][1] = prev[1][1] ^ rk[0][1];
            round_keys[r] = rk;
        }

        round_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_schedule_matches_hand_expansion() {
        // key 0xC3F0 -> rk0 is the raw key matrix, rk1/rk2 derived via the
        // S-box and round constants
        let round_keys = Cipher::expand_key(0xC3F0);
        assert_eq!(round_keys[0], [[0xC, 0xF], [0x3, 0x0]]);
        assert_eq!(round_keys[1], [[0x3, 0xF], [0x0, 0xF]]);
        assert_eq!(round_keys[2], [[0x6, 0x9], [0x6, 0x6]]);
    }

    #[test]
    fn key_schedule_is_deterministic() {
        let mut cipher = Cipher::new(0xC3F0);
        let first = *cipher.round_keys();
        cipher.set_key(0xC3F0);
        assert_eq!(
            *cipher.round_keys(),
            first,
            "setting the same key twice should produce an identical schedule"
        );
    }

    #[test]
    fn set_key_replaces_the_schedule() {
        let mut cipher = Cipher::new(0x0000);
        let ct_old = cipher.encrypt(&[0x9C63]);

        cipher.set_key(0xC3F0);
        assert_eq!(cipher.encrypt(&[0x9C63]), vec![0x72C6]);
        assert_eq!(cipher.decrypt(&[0x72C6]), vec![0x9C63]);
        assert_ne!(cipher.encrypt(&[0x9C63]), ct_old);
    }

    #[test]
    fn parallel_and_serial_paths_agree() {
        let cipher = Cipher::new(0xC3F0);
        let blocks: Vec<u16> = (0..PARALLEL_THRESHOLD as u32 + 37)
            .map(|i| (i * 31) as u16)
            .collect();

        let parallel = cipher.encrypt(&blocks);
        let serial: Vec<u16> = blocks
            .iter()
            .map(|&b| encrypt_block(b, cipher.round_keys()))
            .collect();

        assert_eq!(parallel, serial, "rayon path diverges from serial path");
        assert_eq!(cipher.decrypt(&parallel), blocks);
    }

    #[test]
    fn preserves_sequence_length() {
        let cipher = Cipher::new(0x1234);
        for len in [0usize, 1, 2, 100] {
            let blocks = vec![0xABCDu16; len];
            assert_eq!(cipher.encrypt(&blocks).len(), len);
            assert_eq!(cipher.decrypt(&blocks).len(), len);
        }
    }
}
