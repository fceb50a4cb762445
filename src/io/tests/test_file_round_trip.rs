use super::super::*;
use super::{scratch_path, MASTER_KEY};
use std::fs;

#[test]
fn encrypt_then_decrypt_file_round_trips_with_pkcs7() {
    let input = scratch_path("plain.bin");
    let encrypted = scratch_path("enc.bin");
    let decrypted = scratch_path("dec.bin");

    let payload = b"a message that is not block aligned at all, really";
    fs::write(&input, payload).unwrap();

    encrypt_file_hex_key(&input, &encrypted, MASTER_KEY, Padding::Pkcs7, 0).unwrap();
    decrypt_file_hex_key(&encrypted, &decrypted, MASTER_KEY, Padding::Pkcs7, 0).unwrap();

    let recovered = fs::read(&decrypted).unwrap();
    assert_eq!(recovered, payload);

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&encrypted);
    let _ = fs::remove_file(&decrypted);
}

#[test]
fn space_padding_round_trips_only_when_block_aligned() {
    let input = scratch_path("aligned.bin");
    let encrypted = scratch_path("aligned-enc.bin");
    let decrypted = scratch_path("aligned-dec.bin");

    let payload = vec![0x42u8; 32];
    fs::write(&input, &payload).unwrap();

    encrypt_file_hex_key(&input, &encrypted, MASTER_KEY, Padding::Space, 0).unwrap();
    decrypt_file_hex_key(&encrypted, &decrypted, MASTER_KEY, Padding::Space, 0).unwrap();

    let recovered = fs::read(&decrypted).unwrap();
    assert_eq!(recovered, payload);

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&encrypted);
    let _ = fs::remove_file(&decrypted);
}
