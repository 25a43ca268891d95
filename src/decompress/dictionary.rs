//! The static dictionary and its word transforms.
//!
//! The dictionary is 122,784 bytes of fixed words: for each length in 4..=24
//! there are `1 << SIZE_BITS[len]` words of that length, stored contiguously.
//! A back reference past the sliding window selects a word by length and
//! index and one of 121 transforms, each a prefix string, an elementary
//! operation, and a suffix string.

use super::DecodeError;
use crate::common::{
    BROTLI_MAX_DICT_WORD_LEN, BROTLI_MIN_DICT_WORD_LEN, BROTLI_NUM_TRANSFORMS,
};

static DICTIONARY: &[u8; crate::common::BROTLI_DICT_SIZE] =
    include_bytes!("dictionary.bin");

/// Log2 of the number of words of each length (lengths 0..=3 unused).
const SIZE_BITS: [u32; 25] = [
    0, 0, 0, 0, 10, 10, 11, 11, 10, 10, 10, 10, 10, 9, 9, 8, 7, 7, 8, 7, 7, 6,
    6, 5, 5,
];

/// Byte offset of the first word of each length.
const OFFSET: [usize; 25] = [
    0, 0, 0, 0, 0, 4096, 9216, 21504, 35840, 44032, 53248, 63488, 74752,
    87040, 93696, 100864, 104704, 106752, 108928, 113536, 115968, 118528,
    119872, 121280, 122016,
];

/// Elementary word operation of a transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Identity,
    UppercaseFirst,
    UppercaseAll,
    OmitFirst(usize),
    OmitLast(usize),
}

/// The 121 transforms: prefix, operation, suffix.
const TRANSFORMS: [(&[u8], Op, &[u8]); BROTLI_NUM_TRANSFORMS] = [
    (b"", Op::Identity, b""),
    (b"", Op::Identity, b" "),
    (b" ", Op::Identity, b" "),
    (b"", Op::OmitFirst(1), b""),
    (b"", Op::UppercaseFirst, b" "),
    (b"", Op::Identity, b" the "),
    (b" ", Op::Identity, b""),
    (b"s ", Op::Identity, b" "),
    (b"", Op::Identity, b" of "),
    (b"", Op::UppercaseFirst, b""),
    (b"", Op::Identity, b" and "),
    (b"", Op::OmitFirst(2), b""),
    (b"", Op::OmitLast(1), b""),
    (b", ", Op::Identity, b" "),
    (b"", Op::Identity, b", "),
    (b" ", Op::UppercaseFirst, b" "),
    (b"", Op::Identity, b" in "),
    (b"", Op::Identity, b" to "),
    (b"e ", Op::Identity, b" "),
    (b"", Op::Identity, b"\""),
    (b"", Op::Identity, b"."),
    (b"", Op::Identity, b"\">"),
    (b"", Op::Identity, b"\n"),
    (b"", Op::OmitLast(3), b""),
    (b"", Op::Identity, b"]"),
    (b"", Op::Identity, b" for "),
    (b"", Op::OmitFirst(3), b""),
    (b"", Op::OmitLast(2), b""),
    (b"", Op::Identity, b" a "),
    (b"", Op::Identity, b" that "),
    (b" ", Op::UppercaseFirst, b""),
    (b"", Op::Identity, b". "),
    (b".", Op::Identity, b""),
    (b" ", Op::Identity, b", "),
    (b"", Op::OmitFirst(4), b""),
    (b"", Op::Identity, b" with "),
    (b"", Op::Identity, b"'"),
    (b"", Op::Identity, b" from "),
    (b"", Op::Identity, b" by "),
    (b"", Op::OmitFirst(5), b""),
    (b"", Op::OmitFirst(6), b""),
    (b" the ", Op::Identity, b""),
    (b"", Op::OmitLast(4), b""),
    (b"", Op::Identity, b". The "),
    (b"", Op::UppercaseAll, b""),
    (b"", Op::Identity, b" on "),
    (b"", Op::Identity, b" as "),
    (b"", Op::Identity, b" is "),
    (b"", Op::OmitLast(7), b""),
    (b"", Op::OmitLast(1), b"ing "),
    (b"", Op::Identity, b"\n\t"),
    (b"", Op::Identity, b":"),
    (b" ", Op::Identity, b". "),
    (b"", Op::Identity, b"ed "),
    (b"", Op::OmitFirst(9), b""),
    (b"", Op::OmitFirst(7), b""),
    (b"", Op::OmitLast(6), b""),
    (b"", Op::Identity, b"("),
    (b"", Op::UppercaseFirst, b", "),
    (b"", Op::OmitLast(8), b""),
    (b"", Op::Identity, b" at "),
    (b"", Op::Identity, b"ly "),
    (b" the ", Op::Identity, b" of "),
    (b"", Op::OmitLast(5), b""),
    (b"", Op::OmitLast(9), b""),
    (b" ", Op::UppercaseFirst, b", "),
    (b"", Op::UppercaseFirst, b"\""),
    (b".", Op::Identity, b"("),
    (b"", Op::UppercaseAll, b" "),
    (b"", Op::UppercaseFirst, b"\">"),
    (b"", Op::Identity, b"=\""),
    (b" ", Op::Identity, b"."),
    (b".com/", Op::Identity, b""),
    (b" the ", Op::Identity, b" of the "),
    (b"", Op::UppercaseFirst, b"'"),
    (b"", Op::Identity, b". This "),
    (b"", Op::Identity, b","),
    (b".", Op::Identity, b" "),
    (b"", Op::UppercaseFirst, b"("),
    (b"", Op::UppercaseFirst, b"."),
    (b"", Op::Identity, b" not "),
    (b" ", Op::Identity, b"=\""),
    (b"", Op::Identity, b"er "),
    (b" ", Op::UppercaseAll, b" "),
    (b"", Op::Identity, b"al "),
    (b" ", Op::UppercaseAll, b""),
    (b"", Op::Identity, b"='"),
    (b"", Op::UppercaseAll, b"\""),
    (b"", Op::UppercaseFirst, b". "),
    (b" ", Op::Identity, b"("),
    (b"", Op::Identity, b"ful "),
    (b" ", Op::UppercaseFirst, b". "),
    (b"", Op::Identity, b"ive "),
    (b"", Op::Identity, b"less "),
    (b"", Op::UppercaseAll, b"'"),
    (b"", Op::Identity, b"est "),
    (b" ", Op::UppercaseFirst, b"."),
    (b"", Op::UppercaseAll, b"\">"),
    (b" ", Op::Identity, b"='"),
    (b"", Op::UppercaseFirst, b","),
    (b"", Op::Identity, b"ize "),
    (b"", Op::UppercaseAll, b"."),
    (b"\xc2\xa0", Op::Identity, b""),
    (b" ", Op::Identity, b","),
    (b"", Op::UppercaseFirst, b"=\""),
    (b"", Op::UppercaseAll, b"=\""),
    (b"", Op::Identity, b"ous "),
    (b"", Op::UppercaseAll, b", "),
    (b"", Op::UppercaseFirst, b"='"),
    (b" ", Op::UppercaseFirst, b","),
    (b" ", Op::UppercaseAll, b"=\""),
    (b" ", Op::UppercaseAll, b", "),
    (b"", Op::UppercaseAll, b","),
    (b"", Op::UppercaseAll, b"("),
    (b"", Op::UppercaseAll, b". "),
    (b" ", Op::UppercaseAll, b"."),
    (b"", Op::UppercaseAll, b"='"),
    (b" ", Op::UppercaseAll, b". "),
    (b" ", Op::UppercaseFirst, b"=\""),
    (b" ", Op::UppercaseAll, b"='"),
    (b" ", Op::UppercaseFirst, b"='"),
];

/// Longest possible transform output: 5-byte prefix, 24-byte word,
/// 8-byte suffix.
pub(crate) const MAX_EXPANDED: usize = 40;

/// Expand the dictionary reference selected by a too-far distance.
///
/// `copy` is the requested copy length (the word length) and `id` is the
/// distance excess `dist - max - 1`. Writes the transformed word into `out`
/// and returns its length.
pub(crate) fn expand(
    copy: usize,
    id: usize,
    out: &mut [u8; MAX_EXPANDED],
) -> Result<usize, DecodeError> {
    if !(BROTLI_MIN_DICT_WORD_LEN..=BROTLI_MAX_DICT_WORD_LEN).contains(&copy) {
        return Err(DecodeError::BadData("dictionary word length out of range"));
    }
    let index = id & ((1 << SIZE_BITS[copy]) - 1);
    let xform = id >> SIZE_BITS[copy];
    if xform >= BROTLI_NUM_TRANSFORMS {
        return Err(DecodeError::BadData("dictionary transform out of range"));
    }
    let base = OFFSET[copy] + index * copy;
    let word = &DICTIONARY[base..base + copy];
    let (prefix, op, suffix) = TRANSFORMS[xform];

    let mut n = 0;
    out[..prefix.len()].copy_from_slice(prefix);
    n += prefix.len();
    let body = match op {
        Op::OmitFirst(k) => &word[copy.min(k)..],
        Op::OmitLast(k) => &word[..copy - copy.min(k)],
        _ => word,
    };
    out[n..n + body.len()].copy_from_slice(body);
    match op {
        Op::UppercaseFirst => uppercase(&mut out[n..n + body.len()], false),
        Op::UppercaseAll => uppercase(&mut out[n..n + body.len()], true),
        _ => {}
    }
    n += body.len();
    out[n..n + suffix.len()].copy_from_slice(suffix);
    n += suffix.len();
    Ok(n)
}

/// The format's simplified UTF-8 uppercasing: single bytes below 0xC0 map
/// a..z to A..Z, two-byte characters flip bit 5 of the second byte, and
/// longer characters flip bits 0 and 2 of the third byte.
fn uppercase(word: &mut [u8], all: bool) {
    let mut i = 0;
    while i < word.len() {
        if word[i] < 0xc0 {
            if word[i].is_ascii_lowercase() {
                word[i] ^= 32;
            }
            i += 1;
        } else if word[i] < 0xe0 {
            if i + 1 < word.len() {
                word[i + 1] ^= 32;
            }
            i += 2;
        } else {
            if i + 2 < word.len() {
                word[i + 2] ^= 5;
            }
            i += 3;
        }
        if !all {
            break;
        }
    }
}
