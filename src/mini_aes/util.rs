use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::mini_aes::error::Result;

/// Generates a random 16-bit key from the OS RNG. Returns Error if OsRng
/// fails.
pub fn random_key() -> Result<u16> {
    let mut bytes = [0u8; 2];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(u16::from_be_bytes(bytes))
}
