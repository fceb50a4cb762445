use super::super::*;
use super::{block_from_hex, master_key_bytes};

// GOST R 34.12-2015 published test vector.

#[test]
fn encrypt_block_matches_standard_test_vector() {
    let cipher = Kuznyechik::new(&master_key_bytes());

    let plaintext = block_from_hex("1122334455667700ffeeddccbbaa9988");
    let expected = block_from_hex("7f679d90bebc24305a468d42b9d4edcd");

    assert_eq!(cipher.encrypt_block(plaintext), expected);
}

#[test]
fn decrypt_block_is_inverse_of_encrypt_block() {
    let cipher = Kuznyechik::new(&master_key_bytes());

    let plaintext = block_from_hex("1122334455667700ffeeddccbbaa9988");
    let ciphertext = cipher.encrypt_block(plaintext);
    assert_eq!(cipher.decrypt_block(ciphertext), plaintext);
}
