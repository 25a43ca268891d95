//! Compare mode: decoding against an expected buffer without materializing
//! output, and its equivalence with produce mode.

use brotlidec::{decompress, verify, DecodeError, Decompressor};


const V_HELLO_Q5: &[u8] = &[
    0x1b, 0x28, 0x00, 0x00, 0xa4, 0x41, 0x42, 0x58, 0x90, 0xa4, 0x22, 0x93,
    0x50, 0x93, 0xcf, 0xf4, 0x79, 0xd6, 0x22, 0xaf, 0x00,
];

const V_TEXT_Q11: &[u8] = &[
    0x1b, 0x09, 0x02, 0xa0, 0x04, 0xaa, 0x76, 0xa4, 0x0b, 0xf4, 0x46, 0x01,
    0x76, 0x57, 0xd1, 0xcd, 0xf4, 0x50, 0x3a, 0x39, 0x60, 0xef, 0xab, 0x00,
    0x93, 0xa8, 0xc0, 0x02, 0x6a, 0x09, 0x05, 0x98, 0x10, 0xa4, 0x37, 0xbc,
    0xbe, 0x4d, 0x28, 0xad, 0x8c, 0x1c, 0x5b, 0xc0, 0x61, 0x22, 0x0a, 0xe7,
    0x13, 0x82, 0x35, 0x00, 0xf2, 0xab, 0xea, 0x65, 0x66, 0xd5, 0x06, 0xf6,
    0x3e, 0xcd, 0x37, 0xae, 0x4e, 0xac, 0xfa, 0x68, 0x55, 0xc3, 0x96, 0xa1,
    0x58, 0x4f, 0x17, 0x0e, 0xdc, 0x4d, 0x5d, 0xd0, 0xed, 0x99, 0xa0, 0xd3,
    0x24, 0x83, 0x9b, 0x3d, 0xce, 0x9b, 0xbf, 0x05, 0x59,
];

const V_DICT_WORD: &[u8] = &[
    0x62, 0x00, 0x00, 0x00, 0x44, 0x58, 0x08, 0x12, 0x00,
];

const V_STORED: &[u8] = &[
    0x30, 0x00, 0x10, 0x48, 0x65, 0x6c, 0x6f, 0x03,
];

const V_RUNS_Q11: &[u8] = &[
    0x1b, 0x3f, 0x00, 0xf8, 0x25, 0x82, 0xe2, 0x8c, 0x00, 0xc0, 0x00,
];

const V_WINDOW10: &[u8] = &[
    0xa1, 0xf8, 0xae, 0x00, 0x20, 0x0e, 0x38, 0x06, 0xc4, 0xf5, 0xf1, 0x5b,
    0x38, 0x24, 0x1b, 0x00, 0x40, 0x39, 0xdd, 0x01,
];


fn reference(compressed: &[u8]) -> Vec<u8> {
    let decoded = decompress(compressed);
    decoded.result.unwrap();
    decoded.output
}

#[test]
fn verify_agrees_with_decompress() {
    for vector in [V_HELLO_Q5, V_TEXT_Q11, V_DICT_WORD, V_STORED, V_RUNS_Q11, V_WINDOW10] {
        let expected = reference(vector);
        let decoded = verify(vector, &expected);
        decoded.result.unwrap();
        assert_eq!(decoded.got, expected.len());
        assert!(decoded.output.is_empty(), "compare mode materialized output");
        assert_eq!(decoded.consumed, vector.len());
    }
}

#[test]
fn any_flipped_byte_is_a_mismatch() {
    for vector in [V_HELLO_Q5, V_STORED, V_DICT_WORD, V_RUNS_Q11] {
        let expected = reference(vector);
        for at in 0..expected.len() {
            let mut wrong = expected.clone();
            wrong[at] ^= 0x20;
            let decoded = verify(vector, &wrong);
            assert_eq!(decoded.result, Err(DecodeError::Mismatch), "flip at {at}");
            assert_eq!(decoded.got, at, "mismatch position for flip at {at}");
        }
    }
}

#[test]
fn short_expected_buffer_is_a_mismatch() {
    let expected = reference(V_TEXT_Q11);
    let decoded = verify(V_TEXT_Q11, &expected[..expected.len() - 1]);
    assert_eq!(decoded.result, Err(DecodeError::Mismatch));
}

#[test]
fn long_expected_buffer_is_caught_by_the_wrapper() {
    // the core reports how much matched; the wrapper requires exact length
    let mut expected = reference(V_HELLO_Q5);
    let exact = Decompressor::new().verify(V_HELLO_Q5, &expected);
    assert!(exact.is_ok());
    expected.push(b'!');
    assert!(Decompressor::new().verify(V_HELLO_Q5, &expected).is_err());
}

quickcheck::quickcheck! {
    fn arbitrary_input_never_panics(data: Vec<u8>) -> bool {
        let decoded = decompress(&data);
        let consistent = decoded.consumed <= data.len()
            && decoded.got == decoded.output.len();
        match decoded.result {
            // anything that decodes must verify against its own output
            Ok(()) => consistent && verify(&data, &decoded.output).result.is_ok(),
            Err(_) => consistent,
        }
    }
}
