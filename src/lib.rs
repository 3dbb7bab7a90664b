mod mini_aes;

pub use mini_aes::{
    Cipher, Error, Result, bits_to_blocks, blocks_to_bits, blocks_to_bytes, bytes_to_blocks,
    random_key,
};
