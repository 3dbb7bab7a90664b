mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::path::Path;
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid key file: {len} bytes (expected exactly 2)")]
    InvalidKeyFile { len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    MiniAes(#[from] miniaes::Error),
}

fn main() {
    if let Err(e) = miniaes_cli() {
        eprintln!("error: {e}");
    }
}

fn miniaes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            // read plaintext; odd-length input is rejected by the block
            // conversion rather than padded
            let plaintext = fs::read(&enc.common.input)?;
            let blocks = miniaes::bytes_to_blocks(&plaintext)?;

            // read or generate key
            let key = if enc.gen_key {
                let key = miniaes::random_key()?;
                fs::write(&enc.common.key, key.to_be_bytes())?;
                key
            } else {
                read_key(&enc.common.key)?
            };

            let start = Instant::now();

            let cipher = miniaes::Cipher::new(key);
            let encrypted = cipher.encrypt(&blocks);

            let duration = start.elapsed();

            fs::write(&enc.common.output, miniaes::blocks_to_bytes(&encrypted))?;
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let ciphertext = fs::read(&common.input)?;
            let blocks = miniaes::bytes_to_blocks(&ciphertext)?;
            let key = read_key(&common.key)?;

            let start = Instant::now();

            let cipher = miniaes::Cipher::new(key);
            let decrypted = cipher.decrypt(&blocks);

            let duration = start.elapsed();

            fs::write(&common.output, miniaes::blocks_to_bytes(&decrypted))?;
            println!(
                "Decrypted {} bytes in {} ms",
                ciphertext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

fn read_key(path: &Path) -> Result<u16, CliError> {
    let bytes = fs::read(path)?;
    let key: [u8; 2] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CliError::InvalidKeyFile { len: bytes.len() })?;
    Ok(u16::from_be_bytes(key))
}
