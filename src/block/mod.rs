//! The 128-bit `Block` value type shared by every layer of the cipher.
//!
//! Both the substitution step and the linear step operate byte-by-byte over
//! the full 16-byte register, so a flat byte array is the natural
//! representation for a block: there is no row/column structure to track.

use crate::error::KuznyechikError;
use std::ops::BitXor;

/// Size of a Kuznyechik block in bytes (128 bits).
pub const BLOCK_SIZE: usize = 16;

/// A 128-bit block: the unit the cipher, the key schedule, and the round
/// constants all operate on.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Block(pub [u8; BLOCK_SIZE]);

impl Block {
    /// The all-zero block.
    pub const ZERO: Block = Block([0u8; BLOCK_SIZE]);

    /// Build a block from a byte slice, failing if it is not exactly
    /// [`BLOCK_SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Block, KuznyechikError> {
        if bytes.len() != BLOCK_SIZE {
            return Err(KuznyechikError::WrongLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut data = [0u8; BLOCK_SIZE];
        data.copy_from_slice(bytes);
        Ok(Block(data))
    }

    /// Build a block with a single byte set at `index` and the rest zero.
    pub fn with_byte_at(index: usize, value: u8) -> Block {
        let mut data = [0u8; BLOCK_SIZE];
        data[index] = value;
        Block(data)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; BLOCK_SIZE] {
        self.0
    }
}

impl From<[u8; BLOCK_SIZE]> for Block {
    fn from(data: [u8; BLOCK_SIZE]) -> Self {
        Block(data)
    }
}

impl BitXor for Block {
    type Output = Block;

    fn bitxor(self, rhs: Block) -> Block {
        let mut out = [0u8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            out[i] = self.0[i] ^ rhs.0[i];
        }
        Block(out)
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block({})", hex::encode(self.0))
    }
}

/// An ordered pair of blocks threaded through the Feistel key schedule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeyPair {
    pub left: Block,
    pub right: Block,
}

impl KeyPair {
    pub fn new(left: Block, right: Block) -> KeyPair {
        KeyPair { left, right }
    }
}

#[cfg(test)]
mod tests;
