use super::super::*;
use super::{sample_buffer, test_cipher};

#[test]
fn empty_buffer_is_a_no_op() {
    let cipher = test_cipher();
    let mut buffer: Vec<Block> = Vec::new();
    transform_buffer(&mut buffer, &cipher, Direction::Encrypt, 0);
    assert!(buffer.is_empty());
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let cipher = test_cipher();
    let original = sample_buffer(37);
    let mut buffer = original.clone();

    transform_buffer(&mut buffer, &cipher, Direction::Encrypt, 0);
    assert_ne!(buffer, original);
    transform_buffer(&mut buffer, &cipher, Direction::Decrypt, 0);
    assert_eq!(buffer, original);
}

#[test]
fn output_is_independent_of_worker_count() {
    let cipher = test_cipher();
    let original = sample_buffer(1024);

    let mut sequential = original.clone();
    transform_buffer(&mut sequential, &cipher, Direction::Encrypt, 1);

    for threads in [2, 3, 8, 0] {
        let mut parallel = original.clone();
        transform_buffer(&mut parallel, &cipher, Direction::Encrypt, threads);
        assert_eq!(parallel, sequential, "mismatch at threads={threads}");
    }
}

#[test]
fn identical_plaintext_blocks_yield_identical_ciphertext_blocks() {
    let cipher = test_cipher();
    let mut buffer = vec![Block([0x42; 16]), Block([0x42; 16])];
    transform_buffer(&mut buffer, &cipher, Direction::Encrypt, 0);
    assert_eq!(buffer[0], buffer[1]);
}
