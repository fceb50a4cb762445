//! File-level adapter: read a file into a padded block buffer, run it
//! through the cipher, and write the result back out.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::block::{Block, BLOCK_SIZE};
use crate::bulk::{transform_buffer, Direction};
use crate::core::Kuznyechik;
use crate::error::KuznyechikError;
use crate::padding::{self, Padding};

/// Parse a 64-character lowercase hex string into a 256-bit master key.
///
/// Rejects any byte outside `[0-9a-f]` (via the crate's hex-codec
/// dependency) and any length other than 64 characters, rather than
/// silently snapping out-of-alphabet characters to the nearest valid
/// nibble.
pub fn parse_hex_key(hex_str: &str) -> Result<[u8; 32], KuznyechikError> {
    let bytes = hex::decode(hex_str).map_err(|e| KuznyechikError::WrongKey {
        detail: format!("invalid hex master key: {e}"),
    })?;
    if bytes.len() != 32 {
        return Err(KuznyechikError::WrongKey {
            detail: format!("master key must be 32 bytes (64 hex chars), got {}", bytes.len()),
        });
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes);
    Ok(key)
}

impl Kuznyechik {
    /// Build a cipher instance from a 64-character hex master key.
    pub fn from_hex(hex_str: &str) -> Result<Kuznyechik, KuznyechikError> {
        let key = parse_hex_key(hex_str)?;
        Ok(Kuznyechik::new(&key))
    }
}

fn read_into_blocks(path: &Path, policy: Padding) -> Result<Vec<Block>, KuznyechikError> {
    let mut data = fs::read(path)?;
    if data.len() % BLOCK_SIZE != 0 {
        if policy == Padding::Space {
            log::warn!(
                "input {} is not block-aligned ({} bytes); applying lossy space padding",
                path.display(),
                data.len()
            );
        }
        padding::pad(&mut data, policy);
    }
    data.chunks_exact(BLOCK_SIZE)
        .map(Block::from_slice)
        .collect()
}

fn write_blocks(path: &Path, blocks: &[Block]) -> Result<(), KuznyechikError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut data = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for block in blocks {
        data.extend_from_slice(block.as_bytes());
    }
    fs::write(path, &data)?;
    Ok(())
}

fn transform_file(
    input: &Path,
    output: &Path,
    cipher: &Kuznyechik,
    direction: Direction,
    padding: Padding,
    threads: usize,
) -> Result<(), KuznyechikError> {
    let start = Instant::now();
    let mut blocks = read_into_blocks(input, padding)?;

    transform_buffer(&mut blocks, cipher, direction, threads);

    if direction == Direction::Decrypt && padding != Padding::Space {
        let mut flat = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
        for block in &blocks {
            flat.extend_from_slice(block.as_bytes());
        }
        padding::unpad(&mut flat, padding)?;
        fs::write(output, &flat)?;
    } else {
        write_blocks(output, &blocks)?;
    }

    log::info!(
        "{:?} {} -> {} ({} blocks) in {:?}",
        direction,
        input.display(),
        output.display(),
        blocks.len(),
        start.elapsed()
    );
    Ok(())
}

/// Encrypt `input` into `output` under the 256-bit key formed by `k1`/`k2`,
/// padding any trailing partial block per `padding`.
pub fn encrypt_file(
    input: &Path,
    output: &Path,
    k1: Block,
    k2: Block,
    padding: Padding,
    threads: usize,
) -> Result<(), KuznyechikError> {
    let cipher = Kuznyechik::from_halves(k1, k2);
    transform_file(input, output, &cipher, Direction::Encrypt, padding, threads)
}

/// Encrypt `input` into `output` under a 64-character hex master key.
pub fn encrypt_file_hex_key(
    input: &Path,
    output: &Path,
    hex_key: &str,
    padding: Padding,
    threads: usize,
) -> Result<(), KuznyechikError> {
    let cipher = Kuznyechik::from_hex(hex_key)?;
    transform_file(input, output, &cipher, Direction::Encrypt, padding, threads)
}

/// Decrypt `input` into `output` under the 256-bit key formed by `k1`/`k2`,
/// stripping padding per `padding` (a no-op for `Padding::Space`, since that
/// policy is intentionally lossy).
pub fn decrypt_file(
    input: &Path,
    output: &Path,
    k1: Block,
    k2: Block,
    padding: Padding,
    threads: usize,
) -> Result<(), KuznyechikError> {
    let cipher = Kuznyechik::from_halves(k1, k2);
    transform_file(input, output, &cipher, Direction::Decrypt, padding, threads)
}

/// Decrypt `input` into `output` under a 64-character hex master key.
pub fn decrypt_file_hex_key(
    input: &Path,
    output: &Path,
    hex_key: &str,
    padding: Padding,
    threads: usize,
) -> Result<(), KuznyechikError> {
    let cipher = Kuznyechik::from_hex(hex_key)?;
    transform_file(input, output, &cipher, Direction::Decrypt, padding, threads)
}

#[cfg(test)]
mod tests;
