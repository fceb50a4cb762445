//! A Rust implementation of the GOST R 34.12-2015 "Kuznyechik" block cipher.
//!
//! The crate is organized into fixed tables, a core module with the
//! single-block transform and key schedule, a bulk driver for parallel
//! multi-block buffers, a padding module for the I/O boundary, and a
//! file-level adapter tying padding, the core, and the bulk driver
//! together.
//!
//! ```
//! use kuznyechik::core::Kuznyechik;
//! use kuznyechik::block::Block;
//!
//! let cipher = Kuznyechik::from_hex(
//!     "8899aabbccddeeff0011223344556677fedcba98765432100123456789abcdef",
//! )
//! .unwrap();
//! let plaintext = Block::from_slice(&[0u8; 16]).unwrap();
//! let ciphertext = cipher.encrypt_block(plaintext);
//! assert_eq!(cipher.decrypt_block(ciphertext), plaintext);
//! ```

pub mod block;
pub mod bulk;
pub mod core;
pub mod error;
pub mod io;
pub mod padding;
pub mod tables;

pub use block::Block;
pub use bulk::{transform_buffer, Direction};
pub use core::Kuznyechik;
pub use error::{KuznyechikError, Result};
pub use padding::Padding;
