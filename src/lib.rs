pub mod api;
pub mod batch;
pub mod common;
pub mod decompress;

pub use api::Decompressor;
pub use decompress::{decompress, verify, DecodeError, Decoded};
