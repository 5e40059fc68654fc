// ABOUTME: Integration tests for file fingerprinting against real files on disk.
// ABOUTME: Covers determinism, content sensitivity, empty files, and failure paths.

use std::fs;

use imprint_core::{fingerprint_file, FingerprintError, HashAlgorithm};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn same_file_same_digest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, b"stable content").unwrap();

    let first = fingerprint_file(&path, HashAlgorithm::Sha256).unwrap();
    let second = fingerprint_file(&path, HashAlgorithm::Sha256).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_byte_change_flips_digest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");

    fs::write(&path, b"abcdef").unwrap();
    let before = fingerprint_file(&path, HashAlgorithm::Sha512).unwrap();

    fs::write(&path, b"abcdeg").unwrap();
    let after = fingerprint_file(&path, HashAlgorithm::Sha512).unwrap();

    assert_ne!(before, after);
}

#[test]
fn empty_file_matches_empty_input_constant() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty");
    fs::write(&path, b"").unwrap();

    let digest = fingerprint_file(&path, HashAlgorithm::Sha256).unwrap();
    assert_eq!(
        digest,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn file_content_matches_known_vector_for_all_algorithms() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, b"hello world").unwrap();

    let cases = [
        (
            HashAlgorithm::Sha1,
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed",
        ),
        (HashAlgorithm::Md5, "5eb63bbbe01eeed093cb22bb8f5acdc3"),
        (
            HashAlgorithm::Sha256,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
        ),
        (
            HashAlgorithm::Sha512,
            "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f\
             989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f",
        ),
    ];

    for (algorithm, expected) in cases {
        let digest = fingerprint_file(&path, algorithm).unwrap();
        assert_eq!(digest, expected, "{}", algorithm);
    }
}

#[test]
fn large_file_streams_without_full_buffering() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.bin");

    // Several read-buffer lengths plus an uneven tail.
    let data: Vec<u8> = (0..300_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &data).unwrap();

    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(&data);
    let expected = hex::encode(hasher.finalize());

    let digest = fingerprint_file(&path, HashAlgorithm::Sha256).unwrap();
    assert_eq!(digest, expected);
}

#[cfg(unix)]
#[test]
fn directory_read_fails_with_read_error() {
    // Opening a directory succeeds on unix; the first read fails, which
    // exercises the mid-stream failure path rather than the open path.
    let dir = TempDir::new().unwrap();

    let err = fingerprint_file(dir.path(), HashAlgorithm::Sha256).unwrap_err();
    assert!(matches!(err, FingerprintError::Read { .. }));
}

#[test]
fn nonexistent_path_fails_with_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let err = fingerprint_file(&path, HashAlgorithm::Md5).unwrap_err();
    assert!(matches!(err, FingerprintError::Open { .. }));
    assert!(err.to_string().contains("missing.txt"));
}
