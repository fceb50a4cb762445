//! Bulk block-buffer driver.
//!
//! This module applies the Kuznyechik block cipher to an ordered sequence
//! of 128-bit blocks, independently of one another (electronic-codebook
//! equivalent semantics), and spreads the per-block loop across worker
//! threads, since there is no chaining between blocks to serialize.

use crate::block::Block;
use crate::core::Kuznyechik;

/// Which direction [`transform_buffer`] should run the cipher in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Buffers at or above this many blocks are worth splitting across worker
/// threads; smaller buffers run on the calling thread, since thread
/// spawn/join overhead would dominate the actual cipher work.
const PARALLEL_THRESHOLD: usize = 256;

/// Transform every block in `buffer` in place, in the given `direction`,
/// using `cipher`'s round keys.
///
/// `threads` requests a worker count: `0` lets the driver pick
/// `std::thread::available_parallelism()`, `1` forces strictly sequential
/// execution (useful for [property testing](crate) that the result does
/// not depend on the worker count), and any other value is used as an
/// upper bound on the number of scoped threads spawned.
///
/// Blocks are independent and touched by exactly one worker each; the
/// buffer is partitioned into contiguous, disjoint mutable chunks via
/// [`<[T]>::chunks_mut`], so the borrow checker (not a runtime check)
/// guarantees no two workers can ever write the same block.
pub fn transform_buffer(buffer: &mut [Block], cipher: &Kuznyechik, direction: Direction, threads: usize) {
    if buffer.is_empty() {
        return;
    }

    let worker_count = if threads == 0 {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    } else {
        threads
    };

    if worker_count <= 1 || buffer.len() < PARALLEL_THRESHOLD {
        log::debug!("transforming {} blocks on the calling thread", buffer.len());
        transform_chunk(buffer, cipher, direction);
        return;
    }

    let chunk_size = buffer.len().div_ceil(worker_count).max(1);
    log::debug!(
        "transforming {} blocks across up to {} worker threads (chunk size {})",
        buffer.len(),
        worker_count,
        chunk_size
    );

    std::thread::scope(|scope| {
        for chunk in buffer.chunks_mut(chunk_size) {
            scope.spawn(move || transform_chunk(chunk, cipher, direction));
        }
    });
}

fn transform_chunk(chunk: &mut [Block], cipher: &Kuznyechik, direction: Direction) {
    for block in chunk.iter_mut() {
        *block = match direction {
            Direction::Encrypt => cipher.encrypt_block(*block),
            Direction::Decrypt => cipher.decrypt_block(*block),
        };
    }
}

#[cfg(test)]
mod tests;
