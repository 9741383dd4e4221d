//! Bit-level I/O over in-memory buffers.
//!
//! This module provides `BitReader` for decoding the bit-packed LZSS
//! streams found in replay files, and `BitWriter` for constructing such
//! streams bit by bit (used by tests and benchmarks; the decoders never
//! write bits).
//!
//! # Bit Ordering
//!
//! The replay LZSS format packs fields MSB-first (Most Significant Bit
//! first) within each byte, unlike DEFLATE/LZH. Multi-bit fields are
//! accumulated by repeated shift-and-OR, so the first bit read lands in
//! the most significant position of the result.
//!
//! # End-of-input behavior
//!
//! A field read that runs off the end of the input returns the bits that
//! were available, with the missing low bits decoded as zero, and leaves
//! the cursor parked at the end. This is a format-compatibility
//! invariant: real streams carry no in-band terminator and instead rely
//! on the trailing zero padding of the final byte reading as a
//! zero-offset match. The cursor never advances past the total bit
//! count, so callers can bound their decode loops on [`BitReader::is_exhausted`].
//!
//! # Example
//!
//! ```
//! use threp_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.put(0b101, 3);
//! writer.put(0b1100, 4);
//! let bytes = writer.into_bytes();
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.take(3), 0b101);
//! assert_eq!(reader.take(4), 0b1100);
//! ```

/// A bit-level read cursor over a byte slice, MSB-first.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Underlying bytes.
    data: &'a [u8],
    /// Current bit offset from the start of `data`.
    bit_pos: u64,
    /// Total bit count (8 x byte length).
    total_bits: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new `BitReader` over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_pos: 0,
            total_bits: data.len() as u64 * 8,
        }
    }

    /// Get the number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.bit_pos
    }

    /// Get the total number of bits in the input.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Get the number of bits left before the end of input.
    pub fn remaining_bits(&self) -> u64 {
        self.total_bits - self.bit_pos
    }

    /// Check whether the cursor has reached the end of the input.
    pub fn is_exhausted(&self) -> bool {
        self.bit_pos >= self.total_bits
    }

    /// Read a single bit. Returns `false` past end-of-input.
    #[inline]
    pub fn take_bit(&mut self) -> bool {
        if self.bit_pos >= self.total_bits {
            return false;
        }
        let byte = self.data[(self.bit_pos / 8) as usize];
        let bit = (byte >> (7 - (self.bit_pos % 8))) & 1;
        self.bit_pos += 1;
        bit != 0
    }

    /// Read up to `count` bits as an unsigned integer, MSB-first.
    ///
    /// The first bit read occupies the most significant position of the
    /// `count`-bit result. If fewer than `count` bits remain, the
    /// missing low bits are zero and the cursor stops at the end.
    #[inline]
    pub fn take(&mut self, count: u32) -> u32 {
        debug_assert!(count <= 32, "cannot take more than 32 bits at once");

        let mut result = 0u32;
        for i in 0..count {
            if self.bit_pos >= self.total_bits {
                return result;
            }
            if self.take_bit() {
                result |= 1 << (count - i - 1);
            }
        }
        result
    }
}

/// A bit-level writer accumulating into an owned byte buffer, MSB-first.
///
/// The final byte is zero-padded, matching the padding the replay
/// formats rely on to terminate their LZSS streams.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    bytes: Vec<u8>,
    /// Partial byte being filled from the MSB down.
    current: u8,
    /// Number of bits in `current`.
    filled: u32,
}

impl BitWriter {
    /// Create a new empty `BitWriter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a single bit.
    pub fn put_bit(&mut self, bit: bool) {
        self.current |= (bit as u8) << (7 - self.filled);
        self.filled += 1;
        if self.filled == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Write the low `count` bits of `value`, MSB-first.
    pub fn put(&mut self, value: u32, count: u32) {
        debug_assert!(count <= 32, "cannot put more than 32 bits at once");
        for i in (0..count).rev() {
            self.put_bit((value >> i) & 1 != 0);
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.bytes.len() as u64 * 8 + self.filled as u64
    }

    /// Finish the stream, zero-padding the final partial byte.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.bytes.push(self.current);
        }
        self.bytes
    }
}
