//! Padding policies for data that is not a multiple of the 16-byte block
//! size.
//!
//! The cipher core (`transform_buffer`) never sees unpadded data; it only
//! operates on whole blocks. This module is the boundary that turns an
//! arbitrary-length byte stream into a block-aligned one and back, offering
//! a choice of policies: the reference space-padding policy, and the two
//! standard reversible schemes, PKCS#7 and ISO/IEC 7816-4.

use crate::block::BLOCK_SIZE;
use crate::error::KuznyechikError;

/// How to extend a payload to a multiple of [`BLOCK_SIZE`] bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Padding {
    /// Right-pad the final partial block with ASCII space (0x20).
    ///
    /// This is the reference policy from the original file-encryption
    /// tool this crate reimplements. It is lossy: decrypting does not
    /// strip the padding, so round-tripping only recovers the original
    /// bytes exactly when the input was already block-aligned.
    #[default]
    Space,
    /// PKCS#7 padding (RFC 2315 §10.3): pad bytes all equal to the number
    /// of bytes added; a full block of padding is added when the input is
    /// already aligned.
    Pkcs7,
    /// ISO/IEC 7816-4 padding: a single `0x80` byte followed by `0x00`
    /// bytes to the block boundary.
    Iso7816_4,
}

/// Pad `data` in place according to `policy`.
pub fn pad(data: &mut Vec<u8>, policy: Padding) {
    match policy {
        Padding::Space => pad_space(data),
        Padding::Pkcs7 => pad_pkcs7(data),
        Padding::Iso7816_4 => pad_iso7816_4(data),
    }
}

/// Remove padding from `data` in place according to `policy`.
///
/// `Padding::Space` is a no-op here: the policy is intentionally lossy and
/// has nothing to validate or strip.
pub fn unpad(data: &mut Vec<u8>, policy: Padding) -> Result<(), KuznyechikError> {
    match policy {
        Padding::Space => Ok(()),
        Padding::Pkcs7 => unpad_pkcs7(data),
        Padding::Iso7816_4 => unpad_iso7816_4(data),
    }
}

fn pad_space(data: &mut Vec<u8>) {
    if data.len() % BLOCK_SIZE == 0 {
        return;
    }
    while data.len() % BLOCK_SIZE != 0 {
        data.push(b' ');
    }
}

fn pad_pkcs7(data: &mut Vec<u8>) {
    let padding_size = BLOCK_SIZE - (data.len() % BLOCK_SIZE);
    let padding_byte = padding_size as u8;
    data.resize(data.len() + padding_size, padding_byte);
}

fn unpad_pkcs7(data: &mut Vec<u8>) -> Result<(), KuznyechikError> {
    let padding_byte = *data.last().ok_or_else(|| KuznyechikError::WrongLength {
        expected: BLOCK_SIZE,
        actual: 0,
    })? as usize;

    if padding_byte == 0 || padding_byte > data.len() || padding_byte > BLOCK_SIZE {
        return Err(KuznyechikError::WrongLength {
            expected: BLOCK_SIZE,
            actual: data.len(),
        });
    }
    if data.iter().rev().take(padding_byte).any(|&b| b as usize != padding_byte) {
        return Err(KuznyechikError::WrongLength {
            expected: BLOCK_SIZE,
            actual: data.len(),
        });
    }
    data.truncate(data.len() - padding_byte);
    Ok(())
}

fn pad_iso7816_4(data: &mut Vec<u8>) {
    data.push(0x80);
    while data.len() % BLOCK_SIZE != 0 {
        data.push(0x00);
    }
}

fn unpad_iso7816_4(data: &mut Vec<u8>) -> Result<(), KuznyechikError> {
    match data.iter().rposition(|&b| b == 0x80) {
        Some(pos) if data[pos + 1..].iter().all(|&b| b == 0x00) => {
            data.truncate(pos);
            Ok(())
        }
        _ => Err(KuznyechikError::WrongLength {
            expected: BLOCK_SIZE,
            actual: data.len(),
        }),
    }
}

#[cfg(test)]
mod tests;
