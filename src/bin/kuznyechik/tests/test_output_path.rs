use super::super::*;

#[test]
fn output_path_adds_prefix_and_directory() {
    let path = output_path(Path::new("/tmp/notes.txt"), Mode::Encrypt);
    assert_eq!(path, PathBuf::from("output/encrypted_notes.txt"));

    let path = output_path(Path::new("notes.txt"), Mode::Decrypt);
    assert_eq!(path, PathBuf::from("output/decrypted_notes.txt"));
}
