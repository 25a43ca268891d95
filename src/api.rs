use crate::decompress::{self, DecodeError};
use std::io;

/// Convenience wrapper around [`decompress`](crate::decompress::decompress)
/// with a guard against decompression bombs: the output is capped at a
/// multiple of the input size plus slack, and optionally at a hard limit.
pub struct Decompressor {
    max_memory_limit: usize,
    limit_ratio: usize,
}

impl Decompressor {
    pub fn new() -> Self {
        Self {
            max_memory_limit: usize::MAX,
            // Brotli expands far more aggressively than deflate: a single
            // meta-block can produce 16 MiB from a handful of bytes.
            limit_ratio: 16384,
        }
    }

    /// Hard cap on the decompressed size, independent of the input size.
    pub fn set_max_memory_limit(&mut self, limit: usize) {
        self.max_memory_limit = limit;
    }

    /// Cap the decompressed size at `ratio` times the compressed size
    /// (plus a small fixed slack).
    pub fn set_limit_ratio(&mut self, ratio: usize) {
        self.limit_ratio = ratio;
    }

    pub fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let limit = data
            .len()
            .saturating_mul(self.limit_ratio)
            .saturating_add(65536)
            .min(self.max_memory_limit);
        let decoded = decompress::decompress_limited(data, limit);
        match decoded.result {
            Ok(()) => Ok(decoded.output),
            Err(err) => Err(io_error(err)),
        }
    }

    /// Decode `data` and compare the produced bytes against `expected`.
    /// Returns the number of compressed bytes consumed.
    pub fn verify(&self, data: &[u8], expected: &[u8]) -> io::Result<usize> {
        let decoded = decompress::verify(data, expected);
        match decoded.result {
            Ok(()) if decoded.got == expected.len() => Ok(decoded.consumed),
            Ok(()) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "expected data longer than decoded output",
            )),
            Err(err) => Err(io_error(err)),
        }
    }
}

impl Default for Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

fn io_error(err: DecodeError) -> io::Error {
    let kind = match err {
        DecodeError::OutOfMemory => io::ErrorKind::OutOfMemory,
        DecodeError::ShortInput => io::ErrorKind::UnexpectedEof,
        DecodeError::BadData(_) | DecodeError::Mismatch => io::ErrorKind::InvalidData,
    };
    io::Error::new(kind, err)
}
