mod test_block_cipher;

pub(super) fn block_from_hex(hex_str: &str) -> super::Block {
    super::Block::from_slice(&hex::decode(hex_str).unwrap()).unwrap()
}

pub(super) const MASTER_KEY: &str = "8899aabbccddeeff0011223344556677fedcba98765432100123456789abcdef";

pub(super) fn master_key_bytes() -> [u8; 32] {
    let key = hex::decode(MASTER_KEY).unwrap();
    let mut key_arr = [0u8; 32];
    key_arr.copy_from_slice(&key);
    key_arr
}
