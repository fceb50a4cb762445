mod test_file_round_trip;

pub(super) const MASTER_KEY: &str = "8899aabbccddeeff0011223344556677fedcba98765432100123456789abcdef";

pub(super) fn scratch_path(name: &str) -> std::path::PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("kuznyechik-io-test-{}-{}", std::process::id(), name));
    p
}
