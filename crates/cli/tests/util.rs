use std::fs;

use dbgsym::{parse_address, sha256_file};
use sha2::{Digest, Sha256};
use tempfile::tempdir;

#[test]
fn parse_address_accepts_hex_and_decimal() {
    assert_eq!(parse_address("0x1020").expect("hex"), 0x1020);
    assert_eq!(parse_address("0X1f").expect("upper hex"), 0x1F);
    assert_eq!(parse_address(" 4128 ").expect("decimal"), 4128);
}

#[test]
fn parse_address_rejects_garbage() {
    let err = parse_address("zz").unwrap_err();
    assert!(err.to_string().contains("Invalid address 'zz'"));
}

#[test]
fn sha256_file_matches_direct_digest() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("file.dbg");
    fs::write(&path, b"debug-bytes").expect("write");

    let mut hasher = Sha256::new();
    hasher.update(b"debug-bytes");
    let expected = format!("{:x}", hasher.finalize());
    assert_eq!(sha256_file(&path).expect("hash"), expected);
}
