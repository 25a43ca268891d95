//! Fixed tables of the brotli format: block lengths, the insert-and-copy
//! split, and the short-distance ring codes.

/// Base values for the 26 block-length symbols.
pub(crate) const BLOCK_LENGTH_BASE: [u32; 26] = [
    1, 5, 9, 13, 17, 25, 33, 41, 49, 65, 81, 97, 113, 145, 177, 209, 241, 305,
    369, 497, 753, 1265, 2289, 4337, 8433, 16625,
];

/// Extra bits added to the block-length base.
pub(crate) const BLOCK_LENGTH_EXTRA: [u32; 26] = [
    2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 7, 8, 9, 10, 11, 12,
    13, 24,
];

/// Map from insert-and-copy symbol row (sym >> 6) to insert symbol base.
pub(crate) const INSERT_MAP: [u32; 11] = [0, 0, 0, 0, 8, 8, 0, 16, 8, 16, 16];

/// Map from insert-and-copy symbol row (sym >> 6) to copy symbol base.
pub(crate) const COPY_MAP: [u32; 11] = [0, 8, 0, 8, 0, 8, 16, 0, 16, 8, 16];

pub(crate) const INSERT_LENGTH_BASE: [u32; 24] = [
    0, 1, 2, 3, 4, 5, 6, 8, 10, 14, 18, 26, 34, 50, 66, 98, 130, 194, 322, 578,
    1090, 2114, 6210, 22594,
];

pub(crate) const INSERT_LENGTH_EXTRA: [u32; 24] = [
    0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10, 12, 14, 24,
];

pub(crate) const COPY_LENGTH_BASE: [u32; 24] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 18, 22, 30, 38, 54, 70, 102, 134, 198,
    326, 582, 1094, 2118,
];

pub(crate) const COPY_LENGTH_EXTRA: [u32; 24] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10, 24,
];

/// For distance symbols 0..15, how far back in the ring buffer to look.
pub(crate) const DIST_SHORT_BACK: [usize; 16] =
    [0, 1, 2, 3, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1];

/// Signed offset applied to the selected ring entry.
pub(crate) const DIST_SHORT_DELTA: [i32; 16] =
    [0, 0, 0, 0, -1, 1, -2, 2, -3, 3, -1, 1, -2, 2, -3, 3];

/// Order in which code-length-code lengths appear in a complex descriptor.
pub(crate) const CODE_LENGTH_ORDER: [usize; 18] =
    [1, 2, 3, 4, 0, 5, 17, 6, 16, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// Lengths of the fixed code that encodes code-length-code lengths.
pub(crate) const CODE_LENGTH_CODE_LENGTHS: [u8; 6] = [2, 4, 3, 2, 2, 4];
