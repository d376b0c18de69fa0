use super::*;

#[test]
fn fingerprint_should_follow_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sumpwatch.toml");
    let source = FileConfigSource::new(&path);

    std::fs::write(&path, "[sump]\ndepth = 760\n").unwrap();
    let first = source.fingerprint().unwrap();
    assert_eq!(first, source.fingerprint().unwrap());

    std::fs::write(&path, "[sump]\ndepth = 761\n").unwrap();
    assert_ne!(first, source.fingerprint().unwrap());
}

#[test]
fn fingerprint_should_fail_when_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileConfigSource::new(dir.path().join("absent.toml"));

    assert!(matches!(source.fingerprint(), Err(crate::Error::Io(_))));
}

#[test]
fn fingerprint_should_render_as_hex() {
    let fingerprint = Fingerprint::of(b"");

    assert_eq!(
        fingerprint.to_string(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}
