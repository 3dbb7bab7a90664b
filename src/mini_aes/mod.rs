mod cipher;
mod core;
mod encode;
mod error;
mod util;

pub use cipher::Cipher;
pub use encode::{bits_to_blocks, blocks_to_bits, blocks_to_bytes, bytes_to_blocks};
pub use error::{Error, Result};
pub use util::random_key;
