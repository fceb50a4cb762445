//! GOST R 34.12-2015 "Kuznyechik" block cipher core.
//!
//! This module provides the GF(2⁸) byte arithmetic, the substitution and
//! linear transforms and their inverses, the round-constant and round-key
//! derivation, and the nine-round SP-network encrypt/decrypt routines for a
//! single 128-bit block. Round keys are stored as a fixed `[Block; 10]`
//! array, since Kuznyechik always needs exactly ten 128-bit keys regardless
//! of key size (there is only one key size: 256 bits).
//!
//! # Disclaimer
//!
//! This implementation is provided "as is", without warranty of any kind,
//! express or implied. It targets electronic-codebook-equivalent,
//! independent block transformation; it does not implement authenticated
//! encryption or any chaining mode, and has not been hardened against
//! timing or other side-channel attacks beyond using a branch-free GF(2⁸)
//! multiplication.
//!
//! # Example
//!
//! ```
//! use kuznyechik::core::Kuznyechik;
//! use kuznyechik::block::Block;
//!
//! let key: [u8; 32] = [
//!     0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
//!     0x77, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
//!     0xcd, 0xef,
//! ];
//! let plaintext = Block::from_slice(&[
//!     0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x00, 0xff, 0xee, 0xdd, 0xcc, 0xbb, 0xaa, 0x99,
//!     0x88,
//! ])
//! .unwrap();
//!
//! let cipher = Kuznyechik::new(&key);
//! let ciphertext = cipher.encrypt_block(plaintext);
//! assert_eq!(cipher.decrypt_block(ciphertext), plaintext);
//! ```

use crate::block::{Block, KeyPair, BLOCK_SIZE};
use crate::tables::{MASK, PI, PI_INV};

const ROUNDS: usize = 9;
const ROUND_KEY_COUNT: usize = 10;
const ROUND_CONSTANT_COUNT: usize = 32;

/// Multiply two elements of GF(2⁸) with reduction polynomial x⁸+x⁷+x⁶+x+1
/// (0x1C3).
///
/// This is the field Kuznyechik's linear transform is defined over. The
/// multiplication is computed bit-by-bit, with no lookup indexed by either
/// operand, since both `a` and `b` may be secret (key material or
/// plaintext) during the key schedule and per-block transform.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut result = 0u8;
    for _ in 0..8 {
        if b & 1 == 1 {
            result ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0xC3;
        }
        b >>= 1;
    }
    result
}

/// The `S` transform: substitute every byte of `block` through `PI`.
pub fn sub_bytes(block: Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    let bytes = block.as_bytes();
    for i in 0..BLOCK_SIZE {
        out[i] = PI[bytes[i] as usize];
    }
    Block(out)
}

/// The `S⁻¹` transform: substitute every byte of `block` through `PI_INV`.
pub fn inv_sub_bytes(block: Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    let bytes = block.as_bytes();
    for i in 0..BLOCK_SIZE {
        out[i] = PI_INV[bytes[i] as usize];
    }
    Block(out)
}

/// One step of the 16-stage linear-feedback shift register that underlies
/// `L` (the `R` transform in the standard).
///
/// The byte shifted out of the register, `block[15]`, is paired with
/// `MASK[0]` (which is 1, the multiplicative identity). That is what makes
/// [`lfsr_step_inv`] a plain XOR-accumulation instead of a GF(2⁸) division:
/// the dropped byte can be recovered by re-deriving the same XOR sum and
/// canceling it against the stored feedback byte, with no inverse-element
/// lookup needed. Every other byte `block[i]` (i in 0..15) is paired with
/// `MASK[i + 1]`.
pub fn lfsr_step(block: Block) -> Block {
    let x = block.as_bytes();
    let mut feedback = gf_mul(x[15], MASK[0]);
    for i in (0..15).rev() {
        feedback ^= gf_mul(x[i], MASK[i + 1]);
    }
    let mut out = [0u8; BLOCK_SIZE];
    out[0] = feedback;
    out[1..].copy_from_slice(&x[..15]);
    Block(out)
}

/// The inverse of [`lfsr_step`].
pub fn lfsr_step_inv(block: Block) -> Block {
    let y = block.as_bytes();
    let mut out = [0u8; BLOCK_SIZE];
    out[..15].copy_from_slice(&y[1..]);
    let mut feedback = y[0];
    for i in (0..15).rev() {
        feedback ^= gf_mul(out[i], MASK[i + 1]);
    }
    out[15] = feedback;
    Block(out)
}

/// The `L` transform: sixteen applications of [`lfsr_step`].
pub fn linear_transform(block: Block) -> Block {
    let mut b = block;
    for _ in 0..BLOCK_SIZE {
        b = lfsr_step(b);
    }
    b
}

/// The `L⁻¹` transform: sixteen applications of [`lfsr_step_inv`].
pub fn linear_transform_inv(block: Block) -> Block {
    let mut b = block;
    for _ in 0..BLOCK_SIZE {
        b = lfsr_step_inv(b);
    }
    b
}

/// Derive the 32 round constants C₁..C₃₂ used by the key schedule.
///
/// Each constant is `L` applied to a block that is zero everywhere except
/// for a counter byte `i + 1` at index 15 (the *last* byte of the block,
/// not the first, per the derivation recorded in `DESIGN.md`).
pub fn round_constants() -> [Block; ROUND_CONSTANT_COUNT] {
    let mut constants = [Block::ZERO; ROUND_CONSTANT_COUNT];
    for (i, c) in constants.iter_mut().enumerate() {
        let counter = Block::with_byte_at(BLOCK_SIZE - 1, (i + 1) as u8);
        *c = linear_transform(counter);
    }
    constants
}

/// One Feistel step of the key schedule: `(a, b), C ↦ (L(S(a ⊕ C)) ⊕ b, a)`.
fn feistel_step(pair: KeyPair, constant: Block) -> KeyPair {
    let f = linear_transform(sub_bytes(pair.left ^ constant));
    KeyPair::new(f ^ pair.right, pair.left)
}

/// Expand a 256-bit master key (as two 128-bit halves) into the ten round
/// keys, via four rounds of eight Feistel steps each.
pub fn key_schedule(k1: Block, k2: Block, constants: &[Block; ROUND_CONSTANT_COUNT]) -> [Block; ROUND_KEY_COUNT] {
    let mut round_keys = [Block::ZERO; ROUND_KEY_COUNT];
    round_keys[0] = k1;
    round_keys[1] = k2;

    let mut pair = KeyPair::new(k1, k2);
    for j in 0..4 {
        for step in 0..8 {
            pair = feistel_step(pair, constants[8 * j + step]);
        }
        round_keys[2 * j + 2] = pair.left;
        round_keys[2 * j + 3] = pair.right;
    }
    round_keys
}

/// A Kuznyechik cipher instance with its round keys already derived.
///
/// Construction computes [`round_constants`] and [`key_schedule`] once.
/// Every live `Kuznyechik` value has its round keys ready; there is no
/// separate "fresh" state to construct and no way to observe a cipher
/// instance before its keys exist.
#[derive(Clone)]
pub struct Kuznyechik {
    round_keys: [Block; ROUND_KEY_COUNT],
}

impl Kuznyechik {
    /// Build a cipher instance from a 256-bit master key.
    pub fn new(master_key: &[u8; 32]) -> Kuznyechik {
        let mut k1_bytes = [0u8; BLOCK_SIZE];
        let mut k2_bytes = [0u8; BLOCK_SIZE];
        k1_bytes.copy_from_slice(&master_key[0..16]);
        k2_bytes.copy_from_slice(&master_key[16..32]);
        Kuznyechik::from_halves(Block(k1_bytes), Block(k2_bytes))
    }

    /// Build a cipher instance from the two 128-bit key halves directly.
    pub fn from_halves(k1: Block, k2: Block) -> Kuznyechik {
        let constants = round_constants();
        let round_keys = key_schedule(k1, k2, &constants);
        log::debug!("derived {} round keys from master key", round_keys.len());
        Kuznyechik { round_keys }
    }

    /// The ten derived round keys, in canonical order.
    pub fn round_keys(&self) -> &[Block; ROUND_KEY_COUNT] {
        &self.round_keys
    }

    /// Encrypt a single 128-bit block.
    pub fn encrypt_block(&self, block: Block) -> Block {
        let mut y = block;
        for i in 0..ROUNDS {
            y = linear_transform(sub_bytes(y ^ self.round_keys[i]));
        }
        y ^ self.round_keys[ROUNDS]
    }

    /// Decrypt a single 128-bit block.
    pub fn decrypt_block(&self, block: Block) -> Block {
        let mut y = block ^ self.round_keys[ROUNDS];
        for i in (0..ROUNDS).rev() {
            y = linear_transform_inv(y);
            y = inv_sub_bytes(y);
            y = y ^ self.round_keys[i];
        }
        y
    }
}

#[cfg(test)]
mod tests;
