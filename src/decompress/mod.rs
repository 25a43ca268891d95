//! Reference decoder for the brotli compressed stream format.
//!
//! The decoder favors being simple and readable over being fast: one mutable
//! state record, one pass over an in-memory compressed buffer, errors
//! propagated from the point of detection straight to the caller. A stream is
//! a sequence of meta-blocks; each carries its own prefix codes, context
//! maps, and block-switching state, while the distance ring buffer and the
//! sliding-window parameters persist for the whole stream.

mod context;
mod dictionary;
mod prefix;
mod tables;

use self::context::{context_id, read_context_map, ContextMode};
use self::prefix::PrefixCode;
use self::tables::*;
use crate::common::*;
use thiserror::Error;

/// Failure kinds surfaced by [`decompress`] and [`verify`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Allocation of the output buffer or a prefix-code bank failed, or the
    /// configured output limit was exceeded.
    #[error("out of memory")]
    OutOfMemory,
    /// The input ended in the middle of a header, a code, or stored bytes.
    #[error("premature end of input")]
    ShortInput,
    /// The stream violates the format; the message names the first violation.
    #[error("invalid compressed data: {0}")]
    BadData(&'static str),
    /// Compare mode found a byte that differs from the expected output.
    #[error("output does not match the expected data")]
    Mismatch,
}

/// Outcome of a decode call. `consumed` and `got` are valid on the error
/// paths as well and reflect the state at the point of failure.
#[derive(Debug)]
#[must_use = "the decode result must be checked for errors"]
pub struct Decoded {
    /// `Ok(())` or the first error encountered.
    pub result: Result<(), DecodeError>,
    /// Compressed bytes consumed; lets callers detect trailing input.
    pub consumed: usize,
    /// The decompressed data. Stays empty in compare mode.
    pub output: Vec<u8>,
    /// Bytes produced, or matched against the expected buffer.
    pub got: usize,
}

/// Decompress a complete brotli stream held in memory.
pub fn decompress(input: &[u8]) -> Decoded {
    run(input, None, usize::MAX)
}

/// Decode `input` while comparing every produced byte against `expected`,
/// without materializing the output. The first divergence stops the decode
/// with [`DecodeError::Mismatch`]; `got` reports how many bytes matched.
pub fn verify(input: &[u8], expected: &[u8]) -> Decoded {
    run(input, Some(expected), usize::MAX)
}

/// Like [`decompress`], refusing to produce more than `max_output` bytes.
pub(crate) fn decompress_limited(input: &[u8], max_output: usize) -> Decoded {
    run(input, None, max_output)
}

fn run(input: &[u8], expect: Option<&[u8]>, max_output: usize) -> Decoded {
    let mut d = Decoder::new(input, expect, max_output);
    let result = d.run();
    if let Err(err) = result {
        log::debug!("decode failed after {} bytes in, {} out: {err}", d.br.pos, d.got);
    }
    Decoded {
        result,
        consumed: d.br.pos,
        output: d.dest,
        got: d.got,
    }
}

/// Little-endian bit source over the compressed buffer. Bytes are consumed in
/// order and bits within a byte from least to most significant; at most seven
/// residual bits are buffered between reads.
pub(crate) struct BitReader<'a> {
    input: &'a [u8],
    pos: usize,
    bits: u8,
    left: u32,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0, bits: 0, left: 0 }
    }

    /// Return the next `need` bits as an integer, `need` in 0..=25.
    pub(crate) fn bits(&mut self, need: u32) -> Result<u32, DecodeError> {
        debug_assert!(need <= 25);
        let mut reg = u32::from(self.bits);
        while self.left < need {
            let byte = *self.input.get(self.pos).ok_or(DecodeError::ShortInput)?;
            reg |= u32::from(byte) << self.left;
            self.pos += 1;
            self.left += 8;
        }
        self.bits = (reg >> need) as u8;
        self.left -= need;
        Ok(reg & ((1u32 << need) - 1))
    }

    /// Discard the residual bits to reach a byte boundary; they must be zero.
    fn byte_align(&mut self) -> Result<(), DecodeError> {
        if self.left > 0 && self.bits != 0 {
            return Err(DecodeError::BadData("discarded padding bits not zero"));
        }
        self.bits = 0;
        self.left = 0;
        Ok(())
    }

    /// Take `n` whole bytes; only valid on a byte boundary.
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        debug_assert_eq!(self.left, 0);
        if n > self.input.len() - self.pos {
            return Err(DecodeError::ShortInput);
        }
        let bytes = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }
}

/// Block-switching state for one symbol category: the number of block types,
/// the current and previous type, the count of symbols left in the current
/// block, and the two codes that drive type changes.
struct BlockState {
    num: u32,
    typ: u32,
    prev: u32,
    left: usize,
    types: PrefixCode,
    count: PrefixCode,
}

impl Default for BlockState {
    fn default() -> Self {
        Self {
            num: 1,
            typ: 0,
            prev: 1,
            left: usize::MAX,
            types: PrefixCode::default(),
            count: PrefixCode::default(),
        }
    }
}

impl BlockState {
    /// Read the per-meta-block descriptor: the type count and, when there is
    /// more than one type, the type-change and block-length codes plus the
    /// first block length.
    fn read(br: &mut BitReader<'_>) -> Result<Self, DecodeError> {
        let mut s = Self {
            num: block_type_count(br)?,
            ..Self::default()
        };
        if s.num > 1 {
            s.types = PrefixCode::read(br, s.num as usize + 2)?;
            s.count = PrefixCode::read(br, BROTLI_NUM_BLOCK_LEN_SYMS)?;
            s.left = block_length(br, &s.count)?;
        }
        Ok(s)
    }

    /// Consume one symbol of this category, switching block types first if
    /// the current block is exhausted.
    fn take(&mut self, br: &mut BitReader<'_>) -> Result<(), DecodeError> {
        if self.left == 0 {
            let sym = self.types.decode(br)?;
            let next = match sym {
                0 => self.prev,
                1 => (self.typ + 1) % self.num,
                _ => sym - 2,
            };
            self.prev = self.typ;
            self.typ = next;
            self.left = block_length(br, &self.count)?;
        }
        self.left -= 1;
        Ok(())
    }
}

/// Decode the number of block types for one category, in 1..=256.
fn block_type_count(br: &mut BitReader<'_>) -> Result<u32, DecodeError> {
    if br.bits(1)? == 0 {
        return Ok(1);
    }
    let code = br.bits(3)?;
    Ok(1 + (1 << code) + br.bits(code)?)
}

/// Decode a block length.
fn block_length(br: &mut BitReader<'_>, code: &PrefixCode) -> Result<usize, DecodeError> {
    let sym = code.decode(br)? as usize;
    debug_assert!(sym < BROTLI_NUM_BLOCK_LEN_SYMS);
    Ok(BLOCK_LENGTH_BASE[sym] as usize + br.bits(BLOCK_LENGTH_EXTRA[sym])? as usize)
}

/// Split an insert-and-copy symbol into its insert length.
fn insert_length(br: &mut BitReader<'_>, sym: u32) -> Result<usize, DecodeError> {
    let idx = (INSERT_MAP[(sym >> 6) as usize] + ((sym >> 3) & 7)) as usize;
    Ok(INSERT_LENGTH_BASE[idx] as usize + br.bits(INSERT_LENGTH_EXTRA[idx])? as usize)
}

/// Split an insert-and-copy symbol into its copy length.
fn copy_length(br: &mut BitReader<'_>, sym: u32) -> Result<usize, DecodeError> {
    let idx = (COPY_MAP[(sym >> 6) as usize] + (sym & 7)) as usize;
    Ok(COPY_LENGTH_BASE[idx] as usize + br.bits(COPY_LENGTH_EXTRA[idx])? as usize)
}

/// Read the sliding-window size. A leading zero bit selects 16; otherwise
/// three bits select 18..=24, with the zero escape reading three more bits
/// for 17 or the small windows 10..=15. The code point for 9 is unused.
fn window_bits(br: &mut BitReader<'_>) -> Result<u32, DecodeError> {
    if br.bits(1)? == 0 {
        return Ok(16);
    }
    let n = br.bits(3)?;
    if n != 0 {
        return Ok(17 + n);
    }
    let n = br.bits(3)?;
    if n == 1 {
        return Err(DecodeError::BadData("reserved window size"));
    }
    Ok(if n == 0 { 17 } else { 8 + n })
}

/// The decoder state record: input cursor, window parameters, output (or the
/// expected bytes in compare mode), distance ring, per-category block state,
/// context maps and modes, and the three prefix-code banks.
struct Decoder<'a> {
    br: BitReader<'a>,

    wsize: usize,

    dest: Vec<u8>,
    expect: Option<&'a [u8]>,
    got: usize,
    max_output: usize,

    ring: [u32; 4],
    ring_ptr: usize,
    postfix: u32,
    direct: u32,

    lit: BlockState,
    iac: BlockState,
    dist: BlockState,

    modes: [ContextMode; BROTLI_MAX_BLOCK_TYPES],
    lit_map: [u8; BROTLI_MAX_BLOCK_TYPES << BROTLI_LITERAL_CONTEXT_BITS],
    dist_map: [u8; BROTLI_MAX_BLOCK_TYPES << BROTLI_DISTANCE_CONTEXT_BITS],

    lit_codes: Vec<PrefixCode>,
    iac_codes: Vec<PrefixCode>,
    dist_codes: Vec<PrefixCode>,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a [u8], expect: Option<&'a [u8]>, max_output: usize) -> Self {
        Self {
            br: BitReader::new(input),
            wsize: 0,
            dest: Vec::new(),
            expect,
            got: 0,
            max_output,
            // initialized once per stream, not per meta-block
            ring: [16, 15, 11, 4],
            ring_ptr: 3,
            postfix: 0,
            direct: 0,
            lit: BlockState::default(),
            iac: BlockState::default(),
            dist: BlockState::default(),
            modes: [ContextMode::Lsb6; BROTLI_MAX_BLOCK_TYPES],
            lit_map: [0; BROTLI_MAX_BLOCK_TYPES << BROTLI_LITERAL_CONTEXT_BITS],
            dist_map: [0; BROTLI_MAX_BLOCK_TYPES << BROTLI_DISTANCE_CONTEXT_BITS],
            lit_codes: Vec::new(),
            iac_codes: Vec::new(),
            dist_codes: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), DecodeError> {
        let wbits = window_bits(&mut self.br)?;
        debug_assert!((BROTLI_MIN_WBITS..=BROTLI_MAX_WBITS).contains(&wbits));
        self.wsize = (1usize << wbits) - 16;
        log::trace!("window size {} ({} bits)", self.wsize, wbits);

        while !self.metablock()? {}

        // whatever is left of the final byte must be zero padding
        self.br.byte_align()
    }

    /// Decode one meta-block. Returns true when it was the last one.
    fn metablock(&mut self) -> Result<bool, DecodeError> {
        let last = self.br.bits(1)? != 0;
        if last && self.br.bits(1)? != 0 {
            log::trace!("empty last meta-block");
            return Ok(true);
        }

        let nibbles = self.br.bits(2)?;
        if nibbles == 3 {
            self.metadata()?;
            return Ok(last);
        }

        // MLEN is stored minus one in 4 + nibbles nibbles; using more
        // nibbles than the value needs is forbidden
        let mut stored = self.br.bits(16)? as usize;
        if nibbles > 0 {
            stored |= (self.br.bits(nibbles * 4)? as usize) << 16;
            if stored >> ((nibbles + 3) * 4) == 0 {
                return Err(DecodeError::BadData(
                    "more meta-block length nibbles than needed",
                ));
            }
        }
        let mut mlen = stored + 1;
        log::trace!("meta-block of {mlen} bytes{}", if last { " (last)" } else { "" });

        match self.expect {
            Some(expect) => {
                if self.got + mlen > expect.len() {
                    return Err(DecodeError::Mismatch);
                }
            }
            None => {
                if mlen > self.max_output - self.got {
                    return Err(DecodeError::OutOfMemory);
                }
                self.dest
                    .try_reserve(mlen)
                    .map_err(|_| DecodeError::OutOfMemory)?;
            }
        }

        if !last && self.br.bits(1)? != 0 {
            self.stored_block(mlen)?;
            return Ok(last);
        }

        // block-switching descriptors for the three symbol categories
        self.lit = BlockState::read(&mut self.br)?;
        self.iac = BlockState::read(&mut self.br)?;
        self.dist = BlockState::read(&mut self.br)?;

        // distance parameters
        self.postfix = self.br.bits(2)?;
        self.direct = self.br.bits(4)? << self.postfix;
        let dist_alphabet =
            BROTLI_NUM_DIST_SHORT_SYMS + self.direct as usize + (48 << self.postfix);
        log::trace!(
            "{}/{}/{} block types, postfix {}, {} direct distance codes",
            self.lit.num,
            self.iac.num,
            self.dist.num,
            self.postfix,
            self.direct
        );

        // context modes, then the two context maps
        for mode in self.modes.iter_mut().take(self.lit.num as usize) {
            *mode = ContextMode::from_bits(self.br.bits(2)?);
        }
        let lit_trees = block_type_count(&mut self.br)?;
        if lit_trees > 1 {
            let len = (self.lit.num as usize) << BROTLI_LITERAL_CONTEXT_BITS;
            read_context_map(&mut self.br, &mut self.lit_map[..len], lit_trees)?;
        }
        let dist_trees = block_type_count(&mut self.br)?;
        if dist_trees > 1 {
            let len = (self.dist.num as usize) << BROTLI_DISTANCE_CONTEXT_BITS;
            read_context_map(&mut self.br, &mut self.dist_map[..len], dist_trees)?;
        }

        // the three prefix-code banks
        self.lit_codes = read_bank(&mut self.br, lit_trees as usize, BROTLI_NUM_LITERAL_SYMS)?;
        self.iac_codes =
            read_bank(&mut self.br, self.iac.num as usize, BROTLI_NUM_INSERT_COPY_SYMS)?;
        self.dist_codes = read_bank(&mut self.br, dist_trees as usize, dist_alphabet)?;
        log::trace!(
            "{} literal, {} insert-and-copy, {} distance codes",
            lit_trees,
            self.iac.num,
            dist_trees
        );

        // the command loop: insert literals, then copy from the window or
        // the static dictionary, until exactly mlen bytes are produced
        while mlen > 0 {
            self.iac.take(&mut self.br)?;
            let iac_sym = self.iac_codes[self.iac.typ as usize].decode(&mut self.br)?;
            let insert = insert_length(&mut self.br, iac_sym)?;
            let copy = copy_length(&mut self.br, iac_sym)?;

            if insert > mlen {
                return Err(DecodeError::BadData("mlen exceeded by insert length"));
            }
            mlen -= insert;
            for _ in 0..insert {
                self.lit.take(&mut self.br)?;
                let code = if self.lit_codes.len() > 1 {
                    let p1 = if self.got > 0 { self.out_byte(self.got - 1) } else { 0 };
                    let p2 = if self.got > 1 { self.out_byte(self.got - 2) } else { 0 };
                    let ctx = context_id(p1, p2, self.modes[self.lit.typ as usize]);
                    let slot = ((self.lit.typ as usize) << BROTLI_LITERAL_CONTEXT_BITS) + ctx;
                    self.lit_map[slot] as usize
                } else {
                    0
                };
                let byte = self.lit_codes[code].decode(&mut self.br)? as u8;
                self.push(byte)?;
            }

            // reaching mlen here ends the meta-block; the pending copy
            // length is ignored even though it is never zero
            if mlen == 0 {
                break;
            }

            let max = self.got.min(self.wsize);
            let dist = if iac_sym < 128 {
                // implicit distance: reuse the most recent ring entry
                self.ring[self.ring_ptr] as usize
            } else {
                self.dist.take(&mut self.br)?;
                let code = if self.dist_codes.len() > 1 {
                    let ctx = (copy - 2).min(3);
                    let slot = ((self.dist.typ as usize) << BROTLI_DISTANCE_CONTEXT_BITS) + ctx;
                    self.dist_map[slot] as usize
                } else {
                    0
                };
                let sym = self.dist_codes[code].decode(&mut self.br)?;
                self.distance(sym, max)?
            };

            if dist > max {
                // the excess distance encodes a static-dictionary reference
                let mut buf = [0u8; dictionary::MAX_EXPANDED];
                let n = dictionary::expand(copy, dist - max - 1, &mut buf)?;
                if n > mlen {
                    return Err(DecodeError::BadData("mlen exceeded by dictionary word"));
                }
                mlen -= n;
                for &byte in &buf[..n] {
                    self.push(byte)?;
                }
            } else {
                if copy > mlen {
                    return Err(DecodeError::BadData("mlen exceeded by copy length"));
                }
                mlen -= copy;
                // byte-by-byte so an overlapping source extends the run
                for _ in 0..copy {
                    let byte = self.out_byte(self.got - dist);
                    self.push(byte)?;
                }
            }
        }

        Ok(last)
    }

    /// Skip a metadata block: a reserved bit, a skip length in 0..=3 bytes,
    /// byte alignment, and that many bytes of content.
    fn metadata(&mut self) -> Result<(), DecodeError> {
        if self.br.bits(1)? != 0 {
            return Err(DecodeError::BadData("reserved bit set in meta-data block"));
        }
        let skip_bytes = self.br.bits(2)?;
        let skip = if skip_bytes > 0 {
            let stored = self.br.bits(skip_bytes * 8)? as usize;
            if skip_bytes > 1 && stored >> ((skip_bytes - 1) * 8) == 0 {
                return Err(DecodeError::BadData(
                    "more meta-data skip bytes than needed",
                ));
            }
            stored + 1
        } else {
            0
        };
        self.br.byte_align()?;
        self.br.take(skip)?;
        log::trace!("skipped {skip} bytes of meta-data");
        Ok(())
    }

    /// Copy out an uncompressed meta-block after re-aligning to a byte
    /// boundary.
    fn stored_block(&mut self, mlen: usize) -> Result<(), DecodeError> {
        self.br.byte_align()?;
        let chunk = self.br.take(mlen)?;
        match self.expect {
            Some(expect) => {
                let want = &expect[self.got..self.got + mlen];
                if let Some(i) = chunk.iter().zip(want).position(|(a, b)| a != b) {
                    self.got += i;
                    return Err(DecodeError::Mismatch);
                }
            }
            None => self.dest.extend_from_slice(chunk),
        }
        self.got += mlen;
        log::trace!("stored block of {mlen} bytes");
        Ok(())
    }

    /// Compute a distance from its symbol. Ring-relative symbols pick one of
    /// the last four distances with a small signed adjustment; the next
    /// `direct` symbols code small distances literally; the rest pair extra
    /// bits with the postfix interleaving. The ring advances only for a
    /// non-zero symbol whose distance lands inside the window.
    fn distance(&mut self, sym: u32, max: usize) -> Result<usize, DecodeError> {
        let dist = if (sym as usize) < BROTLI_NUM_DIST_SHORT_SYMS {
            let slot = self.ring_ptr.wrapping_sub(DIST_SHORT_BACK[sym as usize]) & 3;
            let d = i64::from(self.ring[slot]) + i64::from(DIST_SHORT_DELTA[sym as usize]);
            if d <= 0 {
                return Err(DecodeError::BadData("distance of zero"));
            }
            d as usize
        } else if sym < BROTLI_NUM_DIST_SHORT_SYMS as u32 + self.direct {
            (sym - 15) as usize
        } else {
            let n = sym - self.direct - BROTLI_NUM_DIST_SHORT_SYMS as u32;
            let x = 1 + (n >> (self.postfix + 1));
            let off = ((2 + ((n >> self.postfix) & 1)) << x) - 4;
            (((off + self.br.bits(x)?) as usize) << self.postfix)
                + (n & ((1 << self.postfix) - 1)) as usize
                + self.direct as usize
                + 1
        };
        if sym != 0 && dist <= max {
            self.ring_ptr = (self.ring_ptr + 1) & 3;
            self.ring[self.ring_ptr] = dist as u32;
        }
        Ok(dist)
    }

    /// Emit one byte: append in produce mode, compare in compare mode.
    fn push(&mut self, byte: u8) -> Result<(), DecodeError> {
        match self.expect {
            Some(expect) => {
                if self.got >= expect.len() || expect[self.got] != byte {
                    return Err(DecodeError::Mismatch);
                }
            }
            None => self.dest.push(byte),
        }
        self.got += 1;
        Ok(())
    }

    /// Read back an already-produced byte for context or window copies.
    fn out_byte(&self, at: usize) -> u8 {
        match self.expect {
            Some(expect) => expect[at],
            None => self.dest[at],
        }
    }
}

/// Read `n` prefix codes over the given alphabet into a freshly allocated
/// bank.
fn read_bank(
    br: &mut BitReader<'_>,
    n: usize,
    alphabet: usize,
) -> Result<Vec<PrefixCode>, DecodeError> {
    let mut bank = Vec::new();
    bank.try_reserve_exact(n).map_err(|_| DecodeError::OutOfMemory)?;
    for _ in 0..n {
        bank.push(PrefixCode::read(br, alphabet)?);
    }
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_lsb_first() {
        let mut br = BitReader::new(&[0b1010_0110, 0xff]);
        assert_eq!(br.bits(1), Ok(0));
        assert_eq!(br.bits(2), Ok(0b11));
        assert_eq!(br.bits(3), Ok(0b100));
        // crosses into the next byte
        assert_eq!(br.bits(4), Ok(0b1110));
        assert_eq!(br.pos, 2);
    }

    #[test]
    fn zero_width_read_consumes_nothing() {
        let mut br = BitReader::new(&[]);
        assert_eq!(br.bits(0), Ok(0));
        assert_eq!(br.bits(1), Err(DecodeError::ShortInput));
    }

    #[test]
    fn refill_stops_at_end_of_input() {
        let mut br = BitReader::new(&[0xab]);
        assert_eq!(br.bits(8), Ok(0xab));
        assert_eq!(br.bits(1), Err(DecodeError::ShortInput));
    }

    #[test]
    fn byte_align_requires_zero_padding() {
        let mut br = BitReader::new(&[0b0000_0101]);
        assert_eq!(br.bits(1), Ok(1));
        assert!(br.byte_align().is_err());

        let mut br = BitReader::new(&[0b0000_0001]);
        assert_eq!(br.bits(1), Ok(1));
        assert!(br.byte_align().is_ok());
    }

    #[test]
    fn window_bits_code_points() {
        // (stream bits as a little-endian byte, expected wbits)
        let cases: &[(&[u8], u32)] = &[
            (&[0b0], 16),
            (&[0b0011], 18),
            (&[0b1111], 24),
            (&[0b0000001], 17),
            (&[0b0100001], 10),
            (&[0b1110001], 15),
        ];
        for &(bytes, want) in cases {
            let mut br = BitReader::new(bytes);
            assert_eq!(window_bits(&mut br), Ok(want), "wbits {want}");
        }
        // 9 is an unused code point
        let mut br = BitReader::new(&[0b0010001]);
        assert_eq!(
            window_bits(&mut br),
            Err(DecodeError::BadData("reserved window size"))
        );
    }

    #[test]
    fn block_type_counts() {
        // leading zero bit: one type
        let mut br = BitReader::new(&[0b0]);
        assert_eq!(block_type_count(&mut br), Ok(1));
        // code 0: 1 + 1
        let mut br = BitReader::new(&[0b0001]);
        assert_eq!(block_type_count(&mut br), Ok(2));
        // code 7 with all extra bits set: 256
        let mut br = BitReader::new(&[0b1111_1111, 0b111]);
        assert_eq!(block_type_count(&mut br), Ok(256));
    }

    #[test]
    fn ring_updates_follow_the_rule() {
        let mut d = Decoder::new(&[], None, usize::MAX);
        // symbol 0 reuses the latest entry without rotating
        assert_eq!(d.distance(0, 100).unwrap(), 4);
        assert_eq!(d.ring_ptr, 3);
        // symbol 5 is latest + 1; inside the window, so the ring rotates
        assert_eq!(d.distance(5, 100).unwrap(), 5);
        assert_eq!(d.ring_ptr, 0);
        assert_eq!(d.ring[0], 5);
        // out-of-window distances leave the ring alone
        let before = d.ring;
        assert_eq!(d.distance(3, 2).unwrap(), 15);
        assert_eq!(d.ring, before);
    }

    #[test]
    fn short_distance_underflow_is_rejected() {
        let mut d = Decoder::new(&[], None, usize::MAX);
        d.ring[3] = 1;
        // latest - 1 would be zero
        assert_eq!(
            d.distance(4, 100).unwrap_err(),
            DecodeError::BadData("distance of zero")
        );
    }
}
