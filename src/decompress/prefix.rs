//! Prefix-code decoding tables.
//!
//! A table holds the number of codes of each length and the symbols in
//! canonical order (by length, then by symbol value within a length). That is
//! enough to decode one bit at a time: the first code of the shortest
//! non-zero length is all zeros, later codes of the same length are integer
//! increments, and moving up a length appends a zero bit. Codes arrive in the
//! stream bit-reversed, so pulling bits one at a time builds the comparable
//! integer directly.

use super::{BitReader, DecodeError};
use crate::common::{BROTLI_MAX_CODE_LEN, BROTLI_MAX_SYMS, BROTLI_NUM_CODE_LEN_SYMS};
use crate::decompress::tables::{CODE_LENGTH_CODE_LENGTHS, CODE_LENGTH_ORDER};

/// Decoding table for one canonical prefix code over at most 704 symbols.
#[derive(Clone, Debug)]
pub(crate) struct PrefixCode {
    /// Number of symbols of each code length. `count[0] == 1` is the
    /// degenerate single-symbol code decoded without consuming bits.
    count: [u16; BROTLI_MAX_CODE_LEN + 1],
    /// Symbols sorted by code length, then by value within a length.
    symbol: [u16; BROTLI_MAX_SYMS],
}

impl Default for PrefixCode {
    fn default() -> Self {
        Self {
            count: [0; BROTLI_MAX_CODE_LEN + 1],
            symbol: [0; BROTLI_MAX_SYMS],
        }
    }
}

impl PrefixCode {
    /// Build the tables for a complete code given per-symbol lengths.
    /// `lengths[k] == 0` means symbol `k` is not coded. Completeness must be
    /// checked by the caller; the descriptor readers below do so.
    fn construct(lengths: &[u8]) -> Self {
        debug_assert!(lengths.len() <= BROTLI_MAX_SYMS);
        let mut p = Self::default();
        for &len in lengths {
            if len != 0 {
                p.count[len as usize] += 1;
            }
        }

        // first symbol-table slot for each length
        let mut offs = [0usize; BROTLI_MAX_CODE_LEN + 1];
        for len in 1..BROTLI_MAX_CODE_LEN {
            offs[len + 1] = offs[len] + p.count[len] as usize;
        }

        for (sym, &len) in lengths.iter().enumerate() {
            if len != 0 {
                p.symbol[offs[len as usize]] = sym as u16;
                offs[len as usize] += 1;
            }
        }
        p
    }

    /// Build a degenerate code that yields `sym` without consuming bits.
    fn single(sym: u16) -> Self {
        let mut p = Self::default();
        p.count[0] = 1;
        p.symbol[0] = sym;
        p
    }

    /// Build one of the five simple code shapes. `kind` is 1 for one symbol
    /// of zero length, 2 for two symbols of length 1, 3 for lengths 1,2,2,
    /// 4 for lengths 2,2,2,2 and 5 for lengths 1,2,3,3.
    ///
    /// The symbols arrive ordered with respect to the length pattern but not
    /// necessarily within equal lengths; sorting them canonicalizes the code,
    /// and such streams do occur in practice.
    fn simple(syms: &[u16; 4], kind: usize) -> Self {
        debug_assert!((1..=5).contains(&kind));
        let mut p = Self::default();
        let n = if kind > 4 { 4 } else { kind };
        p.symbol[..n].copy_from_slice(&syms[..n]);

        let mut order = |i: usize, j: usize| {
            if p.symbol[i] > p.symbol[j] {
                p.symbol.swap(i, j);
            }
        };
        match kind {
            1 => p.count[0] = 1,
            2 => {
                order(0, 1);
                p.count[1] = 2;
            }
            3 => {
                order(1, 2);
                p.count[1] = 1;
                p.count[2] = 2;
            }
            4 => {
                order(0, 1);
                order(2, 3);
                order(0, 2);
                order(1, 3);
                order(1, 2);
                p.count[2] = 4;
            }
            _ => {
                order(2, 3);
                p.count[1] = 1;
                p.count[2] = 1;
                p.count[3] = 2;
            }
        }
        p
    }

    /// Decode one symbol from the stream.
    pub(crate) fn decode(&self, br: &mut BitReader<'_>) -> Result<u32, DecodeError> {
        let mut len = 0;
        let mut first = 0u32;
        let mut index = 0u32;
        let mut code = 0u32;
        loop {
            let count = u32::from(self.count[len]);
            if code < first + count {
                return Ok(u32::from(self.symbol[(index + code - first) as usize]));
            }
            if len == BROTLI_MAX_CODE_LEN {
                // unreachable for the complete codes the readers produce
                return Err(DecodeError::BadData("incomplete prefix code"));
            }
            index += count;
            first = (first + count) << 1;
            code = (code << 1) | br.bits(1)?;
            len += 1;
        }
    }

    /// Read a prefix-code descriptor for an alphabet of `alphabet` symbols.
    pub(crate) fn read(
        br: &mut BitReader<'_>,
        alphabet: usize,
    ) -> Result<Self, DecodeError> {
        debug_assert!(alphabet > 1 && alphabet <= BROTLI_MAX_SYMS);
        let hskip = br.bits(2)? as usize;
        if hskip == 1 {
            Self::read_simple(br, alphabet)
        } else {
            Self::read_complex(br, alphabet, hskip)
        }
    }

    /// Simple descriptor: 1..4 explicit symbols, each in as many bits as it
    /// takes to represent `alphabet - 1`, plus a tie-break bit for the two
    /// four-symbol shapes.
    fn read_simple(br: &mut BitReader<'_>, alphabet: usize) -> Result<Self, DecodeError> {
        let mut abits = 1;
        let mut n = 2;
        while n < alphabet {
            n <<= 1;
            abits += 1;
        }

        let nsym = br.bits(2)? as usize + 1;
        let mut syms = [0u16; 4];
        for i in 0..nsym {
            let sym = br.bits(abits)?;
            if sym as usize >= alphabet {
                return Err(DecodeError::BadData("simple code symbol out of range"));
            }
            if syms[..i].contains(&(sym as u16)) {
                return Err(DecodeError::BadData("repeated simple code symbol"));
            }
            syms[i] = sym as u16;
        }

        let kind = if nsym == 4 { 4 + br.bits(1)? as usize } else { nsym };
        Ok(Self::simple(&syms, kind))
    }

    /// Complex descriptor: code lengths for the alphabet, themselves coded
    /// by a small code-length code read first.
    fn read_complex(
        br: &mut BitReader<'_>,
        alphabet: usize,
        hskip: usize,
    ) -> Result<Self, DecodeError> {
        // The code-length-code lengths appear in a fixed permutation order,
        // with the first hskip entries forced to zero, and are coded by the
        // fixed lengths {2,4,3,2,2,4} for {0..5}.
        let clc = Self::construct(&CODE_LENGTH_CODE_LENGTHS);
        let mut lens = [0u8; BROTLI_NUM_CODE_LEN_SYMS];
        let mut left = 1i32 << 5;
        let mut nonzero = 0;
        let mut last_sym = 0u16;
        let mut n = hskip;
        while n < BROTLI_NUM_CODE_LEN_SYMS {
            let len = clc.decode(br)? as u8;
            lens[CODE_LENGTH_ORDER[n]] = len;
            n += 1;
            if len != 0 {
                nonzero += 1;
                last_sym = CODE_LENGTH_ORDER[n - 1] as u16;
                left -= (1 << 5) >> len;
                if left <= 0 {
                    break;
                }
            }
        }
        if left < 0 {
            return Err(DecodeError::BadData("oversubscribed code length code"));
        }
        let code = if left > 0 {
            if nonzero != 1 {
                return Err(DecodeError::BadData("incomplete code length code"));
            }
            // a single non-zero entry stands for a zero-bit code
            Self::single(last_sym)
        } else {
            Self::construct(&lens)
        };

        // Read the alphabet code lengths: 0..15 literally, 16 repeats the
        // last non-zero length, 17 inserts a run of zeros. Runs immediately
        // following a run of the same kind continue it.
        let mut lens = [0u8; BROTLI_MAX_SYMS];
        let mut left = 1i32 << BROTLI_MAX_CODE_LEN;
        let mut last = 8u8;
        let mut rep = 0usize;
        let mut zeros = 0usize;
        let mut n = 0usize;
        loop {
            let len = code.decode(br)? as usize;
            if len < 16 {
                if n == alphabet {
                    return Err(DecodeError::BadData("too many symbols"));
                }
                lens[n] = len as u8;
                n += 1;
                if len != 0 {
                    left -= (1i32 << BROTLI_MAX_CODE_LEN) >> len;
                    last = len as u8;
                }
                rep = 0;
                zeros = 0;
            } else if len == 16 {
                let had = rep;
                let carry = if rep > 0 { (rep - 2) << 2 } else { 0 };
                rep = carry + 3 + br.bits(2)? as usize;
                let add = rep - had;
                if n + add > alphabet {
                    return Err(DecodeError::BadData("too many symbols"));
                }
                left -= add as i32 * ((1i32 << BROTLI_MAX_CODE_LEN) >> last);
                if left < 0 {
                    break;
                }
                lens[n..n + add].fill(last);
                n += add;
                zeros = 0;
            } else {
                let had = zeros;
                let carry = if zeros > 0 { (zeros - 2) << 3 } else { 0 };
                zeros = carry + 3 + br.bits(3)? as usize;
                let add = zeros - had;
                if n + add > alphabet {
                    return Err(DecodeError::BadData("too many symbols"));
                }
                // the entries are already zero
                n += add;
                rep = 0;
            }
            if left <= 0 {
                break;
            }
        }
        if left < 0 {
            return Err(DecodeError::BadData("oversubscribed prefix code"));
        }
        Ok(Self::construct(&lens[..n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompress::BitReader;

    /// LSB-first bit writer matching the stream layout.
    pub(crate) struct BitWriter {
        pub bytes: Vec<u8>,
        acc: u32,
        n: u32,
    }

    impl BitWriter {
        pub fn new() -> Self {
            Self { bytes: Vec::new(), acc: 0, n: 0 }
        }

        pub fn put(&mut self, val: u32, nbits: u32) {
            self.acc |= val << self.n;
            self.n += nbits;
            while self.n >= 8 {
                self.bytes.push(self.acc as u8);
                self.acc >>= 8;
                self.n -= 8;
            }
        }

        /// Emit a canonical codeword most-significant bit first, which is the
        /// order the decoder consumes.
        pub fn put_code(&mut self, code: u32, len: u32) {
            for i in (0..len).rev() {
                self.put((code >> i) & 1, 1);
            }
        }

        pub fn finish(mut self) -> Vec<u8> {
            if self.n > 0 {
                self.bytes.push(self.acc as u8);
            }
            self.bytes
        }
    }

    /// Canonical codes for a complete set of lengths, in symbol order.
    fn assign_codes(lengths: &[u8]) -> Vec<(u32, u32)> {
        let mut count = [0u32; 16];
        for &l in lengths {
            count[l as usize] += 1;
        }
        let mut next = [0u32; 16];
        let mut code = 0;
        for len in 1..16 {
            code = (code + count[len - 1]) << 1;
            next[len] = code;
        }
        lengths
            .iter()
            .map(|&l| {
                if l == 0 {
                    (0, 0)
                } else {
                    let c = next[l as usize];
                    next[l as usize] += 1;
                    (c, l as u32)
                }
            })
            .collect()
    }

    fn round_trip(lengths: &[u8], syms: &[u16]) -> bool {
        let codes = assign_codes(lengths);
        let mut w = BitWriter::new();
        for &s in syms {
            let (c, l) = codes[s as usize];
            w.put_code(c, l);
        }
        let bytes = w.finish();
        let mut br = BitReader::new(&bytes);
        let table = PrefixCode::construct(lengths);
        syms.iter()
            .all(|&s| table.decode(&mut br) == Ok(u32::from(s)))
    }

    #[test]
    fn fixed_code_length_code_layout() {
        let p = PrefixCode::construct(&CODE_LENGTH_CODE_LENGTHS);
        assert_eq!(&p.count[..5], &[0, 0, 3, 1, 2]);
        assert_eq!(&p.symbol[..6], &[0, 3, 4, 2, 1, 5]);
    }

    #[test]
    fn single_symbol_consumes_no_bits() {
        let p = PrefixCode::single(42);
        let mut br = BitReader::new(&[]);
        assert_eq!(p.decode(&mut br), Ok(42));
        assert_eq!(p.decode(&mut br), Ok(42));
    }

    #[test]
    fn simple_codes_sort_equal_lengths() {
        // two symbols out of order
        let p = PrefixCode::simple(&[9, 3, 0, 0], 2);
        assert_eq!(&p.symbol[..2], &[3, 9]);
        // four flat symbols shuffled
        let p = PrefixCode::simple(&[7, 2, 9, 1], 4);
        assert_eq!(&p.symbol[..4], &[1, 2, 7, 9]);
        // asymmetric four: lengths 1,2,3,3; only the last two sort
        let p = PrefixCode::simple(&[7, 2, 9, 1], 5);
        assert_eq!(&p.symbol[..4], &[7, 2, 1, 9]);
    }

    #[test]
    fn construct_matches_hand_decoding() {
        // lengths 1,2,3,3 over symbols 0..4
        let lengths = [1u8, 2, 3, 3];
        assert!(round_trip(&lengths, &[0, 1, 2, 3, 3, 2, 1, 0, 0]));
    }

    #[test]
    fn fifteen_bit_code_decodes() {
        // a skewed complete code reaching the maximum length
        let mut lengths = [0u8; 16];
        for (i, l) in lengths.iter_mut().enumerate().take(15) {
            *l = (i + 1) as u8;
        }
        lengths[15] = 15;
        assert!(round_trip(&lengths, &[0, 14, 15, 7, 0]));
    }

    #[test]
    fn simple_descriptor_symbol_out_of_range() {
        // hskip=1, nsym=1, symbol 704 in a 704-symbol alphabet
        let mut w = BitWriter::new();
        w.put(1, 2);
        w.put(0, 2);
        w.put(704, 10);
        let bytes = w.finish();
        let mut br = BitReader::new(&bytes);
        assert_eq!(
            PrefixCode::read(&mut br, 704).unwrap_err(),
            DecodeError::BadData("simple code symbol out of range")
        );
    }

    #[test]
    fn repeated_simple_code_symbol() {
        // hskip=1, two symbols, both 0x41
        let mut w = BitWriter::new();
        w.put(1, 2);
        w.put(1, 2);
        w.put(0x41, 8);
        w.put(0x41, 8);
        let bytes = w.finish();
        let mut br = BitReader::new(&bytes);
        assert_eq!(
            PrefixCode::read(&mut br, 256).unwrap_err(),
            DecodeError::BadData("repeated simple code symbol")
        );
    }

    #[test]
    fn oversubscribed_code_length_code() {
        // hskip=0 then three lengths of 1 (each costs half the code space)
        let mut w = BitWriter::new();
        w.put(0, 2);
        for _ in 0..3 {
            w.put_code(0b1110, 4); // code-length symbol 1
        }
        let bytes = w.finish();
        let mut br = BitReader::new(&bytes);
        assert_eq!(
            PrefixCode::read(&mut br, 256).unwrap_err(),
            DecodeError::BadData("oversubscribed code length code")
        );
    }

    #[test]
    fn degenerate_code_length_code_accepted() {
        // Only entry 17 of the code-length code is non-zero: in permutation
        // order the first six entries (1,2,3,4,0,5) get length 0 (code 00),
        // entry 17 gets length 2 (symbol 2, code 110), and the remaining
        // eleven entries are zero. That leaves the 5-bit code space
        // incomplete, which must be accepted as a zero-bit code for 17.
        // Every decoded symbol is then a zero run, so the 26-symbol alphabet
        // overflows deterministically.
        let mut w = BitWriter::new();
        w.put(0, 2);
        for _ in 0..6 {
            w.put_code(0b00, 2);
        }
        w.put_code(0b110, 3);
        for _ in 0..11 {
            w.put_code(0b00, 2);
        }
        for _ in 0..8 {
            w.put(7, 3); // run requests: 3 + 7 zeros, then a continuation
        }
        let bytes = w.finish();
        let mut br = BitReader::new(&bytes);
        assert_eq!(
            PrefixCode::read(&mut br, 26).unwrap_err(),
            DecodeError::BadData("too many symbols")
        );
    }

    quickcheck::quickcheck! {
        fn random_symbols_round_trip(raw: Vec<u8>) -> bool {
            // a fixed complete code over 8 symbols, lengths 2,2,3,3,3,4,5,5
            let lengths = [2u8, 2, 3, 3, 3, 4, 5, 5];
            let syms: Vec<u16> = raw.iter().map(|&b| u16::from(b % 8)).collect();
            round_trip(&lengths, &syms)
        }
    }
}
