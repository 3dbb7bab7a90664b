use rand::rand_core;
use thiserror::Error;

/// Mini-AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Mini-AES Error type.
///
/// The cipher engine itself is total -- every 16-bit key and block value is
/// valid -- so errors only arise in the conversion layer and in random key
/// generation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Provided an input that cannot be split into whole 16-bit blocks.
    /// Malformed input is rejected, never silently truncated or padded.
    #[error("invalid input length: {len} ({context})")]
    InvalidBlockLength { len: usize, context: &'static str },

    /// Encountered a character other than '0' or '1' in a bit string.
    #[error("invalid character {c:?} in bit string (expected '0' or '1')")]
    InvalidBit { c: char },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
