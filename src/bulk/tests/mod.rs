mod test_transform_buffer;

pub(super) fn test_cipher() -> super::Kuznyechik {
    let key = hex::decode("8899aabbccddeeff0011223344556677fedcba98765432100123456789abcdef").unwrap();
    let mut key_arr = [0u8; 32];
    key_arr.copy_from_slice(&key);
    super::Kuznyechik::new(&key_arr)
}

pub(super) fn sample_buffer(n: usize) -> Vec<super::Block> {
    (0..n)
        .map(|i| {
            let mut bytes = [0u8; 16];
            bytes[0] = (i % 256) as u8;
            bytes[1] = ((i / 256) % 256) as u8;
            super::Block(bytes)
        })
        .collect()
}
