use crate::decompress::{decompress, Decoded};
use rayon::prelude::*;

/// Decode independent compressed buffers in parallel. The core decoder is
/// strictly single-threaded; parallelism comes from one decoder state per
/// input.
pub struct BatchDecompressor;

impl BatchDecompressor {
    pub fn new() -> Self {
        Self
    }

    /// Decode every input, yielding `None` for the ones that fail.
    pub fn decompress_batch(&self, inputs: &[&[u8]]) -> Vec<Option<Vec<u8>>> {
        inputs
            .par_iter()
            .map(|&input| {
                let decoded = decompress(input);
                decoded.result.ok().map(|()| decoded.output)
            })
            .collect()
    }

    /// Decode every input, keeping the full outcome records.
    pub fn decompress_batch_outcomes(&self, inputs: &[&[u8]]) -> Vec<Decoded> {
        inputs.par_iter().map(|&input| decompress(input)).collect()
    }
}

impl Default for BatchDecompressor {
    fn default() -> Self {
        Self::new()
    }
}
