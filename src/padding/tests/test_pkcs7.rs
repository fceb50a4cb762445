use super::super::*;

#[test]
fn pkcs7_round_trips_for_various_lengths() {
    for len in 0..40 {
        let original: Vec<u8> = (0..len as u8).collect();
        let mut data = original.clone();
        pad(&mut data, Padding::Pkcs7);
        assert_eq!(data.len() % BLOCK_SIZE, 0);
        unpad(&mut data, Padding::Pkcs7).unwrap();
        assert_eq!(data, original);
    }
}

#[test]
fn pkcs7_adds_a_full_block_when_already_aligned() {
    let mut data = vec![1u8; 16];
    pad(&mut data, Padding::Pkcs7);
    assert_eq!(data.len(), 32);
    assert!(data[16..].iter().all(|&b| b == 16));
}

#[test]
fn pkcs7_rejects_inconsistent_padding() {
    let mut data = vec![1, 2, 3, 4, 4, 4, 1];
    assert!(unpad(&mut data, Padding::Pkcs7).is_err());
}
