pub const BROTLIDEC_VERSION_MAJOR: u32 = 0;
pub const BROTLIDEC_VERSION_MINOR: u32 = 1;
pub const BROTLIDEC_VERSION_STRING: &str = "0.1";


pub const BROTLI_MIN_WBITS: u32 = 10;
pub const BROTLI_MAX_WBITS: u32 = 24;

pub const BROTLI_MAX_CODE_LEN: usize = 15;
pub const BROTLI_MAX_SYMS: usize = 704;

pub const BROTLI_NUM_LITERAL_SYMS: usize = 256;
pub const BROTLI_NUM_INSERT_COPY_SYMS: usize = 704;
pub const BROTLI_NUM_BLOCK_LEN_SYMS: usize = 26;
pub const BROTLI_NUM_CODE_LEN_SYMS: usize = 18;

pub const BROTLI_MAX_BLOCK_TYPES: usize = 256;

pub const BROTLI_NUM_DIST_SHORT_SYMS: usize = 16;
pub const BROTLI_MAX_NPOSTFIX: u32 = 3;
pub const BROTLI_MAX_NDIRECT: u32 = 120;

pub const BROTLI_LITERAL_CONTEXT_BITS: usize = 6;
pub const BROTLI_DISTANCE_CONTEXT_BITS: usize = 2;
pub const BROTLI_NUM_CONTEXT_MODES: usize = 4;

pub const BROTLI_MIN_DICT_WORD_LEN: usize = 4;
pub const BROTLI_MAX_DICT_WORD_LEN: usize = 24;
pub const BROTLI_NUM_TRANSFORMS: usize = 121;
pub const BROTLI_DICT_SIZE: usize = 122_784;
