//! Literal and distance context modeling.
//!
//! A literal is decoded with a prefix code chosen by the current literal
//! block type and a 6-bit context ID computed from the last two output
//! bytes. The three lookup tables below are fixed by the format: LUT0 and
//! LUT1 combine into the UTF8 mode ID, LUT2 feeds the signed mode.

use super::{BitReader, DecodeError};
use crate::decompress::prefix::PrefixCode;

/// How the last two output bytes map to a literal context ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContextMode {
    Lsb6,
    Msb6,
    Utf8,
    Signed,
}

impl ContextMode {
    pub(crate) fn from_bits(bits: u32) -> Self {
        match bits & 3 {
            0 => Self::Lsb6,
            1 => Self::Msb6,
            2 => Self::Utf8,
            _ => Self::Signed,
        }
    }
}

/// Context ID in 0..64 for a literal, from the previous two output bytes.
pub(crate) fn context_id(p1: u8, p2: u8, mode: ContextMode) -> usize {
    match mode {
        ContextMode::Lsb6 => (p1 & 0x3f) as usize,
        ContextMode::Msb6 => (p1 >> 2) as usize,
        ContextMode::Utf8 => (LUT0[p1 as usize] | LUT1[p2 as usize]) as usize,
        ContextMode::Signed => ((LUT2[p1 as usize] << 3) | LUT2[p2 as usize]) as usize,
    }
}

const LUT0: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 0, 0, 4, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    8, 12, 16, 12, 12, 20, 12, 16, 24, 28, 12, 12, 32, 12, 36, 12,
    44, 44, 44, 44, 44, 44, 44, 44, 44, 44, 32, 32, 24, 40, 28, 12,
    12, 48, 52, 52, 52, 48, 52, 52, 52, 48, 52, 52, 52, 52, 52, 48,
    52, 52, 52, 52, 52, 48, 52, 52, 52, 52, 52, 24, 12, 28, 12, 12,
    12, 56, 60, 60, 60, 56, 60, 60, 60, 56, 60, 60, 60, 60, 60, 56,
    60, 60, 60, 60, 60, 56, 60, 60, 60, 60, 60, 24, 12, 28, 12, 0,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
];

const LUT1: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1,
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1,
    1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
];

const LUT2: [u8; 256] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7,
];

/// Read a context map of `map.len()` entries with values in `0..trees`.
///
/// Zero entries may be run-length coded: symbol 0 writes a single zero,
/// symbols 1..=rlemax write a run of `(1 << sym) + extra` zeros, and larger
/// symbols write the value `sym - rlemax`. A final bit requests an inverse
/// move-to-front pass over the entry values.
pub(crate) fn read_context_map(
    br: &mut BitReader<'_>,
    map: &mut [u8],
    trees: u32,
) -> Result<(), DecodeError> {
    let rlemax = if br.bits(1)? != 0 { 1 + br.bits(4)? } else { 0 };
    if (1u64 << rlemax) > map.len() as u64 {
        return Err(DecodeError::BadData("rlemax unnecessarily large for map length"));
    }
    let code = PrefixCode::read(br, (rlemax + trees) as usize)?;

    let mut n = 0;
    while n < map.len() {
        let sym = code.decode(br)?;
        if sym == 0 {
            map[n] = 0;
            n += 1;
        } else if sym <= rlemax {
            let zeros = (1usize << sym) + br.bits(sym)? as usize;
            if n + zeros > map.len() {
                return Err(DecodeError::BadData("context map run too long"));
            }
            // the entries are already zero
            n += zeros;
        } else {
            map[n] = (sym - rlemax) as u8;
            n += 1;
        }
    }

    if br.bits(1)? != 0 {
        inverse_mtf(map, trees);
    }
    Ok(())
}

/// Undo a move-to-front transform in place over the alphabet `0..trees`.
fn inverse_mtf(map: &mut [u8], trees: u32) {
    let mut table = [0u8; 256];
    for (i, t) in table.iter_mut().enumerate().take(trees as usize) {
        *t = i as u8;
    }
    for entry in map.iter_mut() {
        let mut i = *entry as usize;
        debug_assert!(i < trees as usize);
        *entry = table[i];
        while i > 0 {
            table[i] = table[i - 1];
            i -= 1;
        }
        table[0] = *entry;
    }
}
