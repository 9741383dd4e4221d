//! Bit-packed LZSS decompression with an absolute-addressed history
//! window.
//!
//! Every replay format compresses the decrypted event stream with the
//! same LZSS variant: a control bit selects between an 8-bit literal and
//! a match, and a match names an *absolute* position in the circular
//! history window rather than a distance back from the cursor. A match
//! offset of zero is the end-of-stream sentinel.
//!
//! Streams are not required to carry the sentinel in full: the zero
//! padding of the final byte may stand in for it, so a control-bit or
//! offset read that runs into the padding must decode as zero. The
//! decoder therefore accepts a short read only where it forms the
//! terminator; a field cut short anywhere else fails immediately instead
//! of being zero-filled, which keeps a corrupt or truncated stream from
//! decoding into silent garbage.

use threp_core::bitstream::BitReader;
use threp_core::error::{Result, ThrepError};
use threp_core::window::HistoryWindow;

/// Configuration of the LZSS stream layout.
///
/// Parameters are supplied per call rather than read from shared state,
/// so decodes for different format generations cannot interfere and
/// tests can inject arbitrary layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzssParams {
    /// Bits used to encode a window offset; the window holds
    /// `2^index_size` bytes.
    pub index_size: u32,
    /// Bits used to encode a match-length field.
    pub length_size: u32,
    /// Constant added to the decoded length field to get the actual
    /// copy length.
    pub min_length: usize,
    /// Starting position of the window's write cursor.
    pub initial_write_index: usize,
}

impl LzssParams {
    /// Size of the history window in bytes.
    pub fn window_size(&self) -> usize {
        1 << self.index_size
    }
}

/// Parameters shared by every mainline replay format: a 13-bit offset
/// (8192-byte window), 4-bit length field, match lengths 3-18, and a
/// write cursor starting at window position 1 so that offset 0 stays
/// free for the terminator.
impl Default for LzssParams {
    fn default() -> Self {
        Self {
            index_size: 13,
            length_size: 4,
            min_length: 3,
            initial_write_index: 1,
        }
    }
}

/// Decompress a replay LZSS stream.
///
/// Produces a new owned buffer; the input is not modified. Decoding
/// stops at the zero-offset terminator (explicit, or formed by the final
/// byte's zero padding) and then requires that every input bit was
/// consumed exactly.
///
/// # Errors
///
/// Returns [`ThrepError::MalformedStream`] if input bits remain after
/// the terminator, or if a literal, offset, or length field is cut short
/// by end-of-input without forming the terminator. Both mean the data is
/// corrupt or `params` belongs to a different format generation.
///
/// # Example
///
/// ```
/// use threp_codec::lzss::{LzssParams, decompress};
///
/// // control 1 + literal 0x41, then a match at offset 1 of length 3
/// // reading back the byte it is writing: "AAAA".
/// let compressed = [0xA0, 0x80, 0x02, 0x00];
/// let output = decompress(&compressed, LzssParams::default()).unwrap();
/// assert_eq!(output, b"AAAA");
/// ```
pub fn decompress(input: &[u8], params: LzssParams) -> Result<Vec<u8>> {
    let mut bits = BitReader::new(input);
    let mut window = HistoryWindow::new(params.window_size(), params.initial_write_index);
    let mut output = Vec::new();

    let truncated = |bits: &BitReader<'_>| {
        ThrepError::malformed_stream(bits.bits_read(), bits.total_bits())
    };

    loop {
        // Consumed-bit ceiling: at the end of input the remaining
        // (empty) stream can only read as the terminator, so stop
        // instead of spinning on synthesized zero bits.
        if bits.is_exhausted() {
            break;
        }

        if bits.take_bit() {
            // Literal: 8 data bits.
            if bits.remaining_bits() < 8 {
                return Err(truncated(&bits));
            }
            let byte = bits.take(8) as u8;
            output.push(byte);
            window.push(byte);
        } else {
            // Match: absolute window offset, zero terminates. The
            // offset field alone may be cut short by the final byte's
            // padding, and only if it still decodes as the terminator.
            let short_offset = bits.remaining_bits() < params.index_size as u64;
            let offset = bits.take(params.index_size) as usize;
            if offset == 0 {
                break;
            }
            if short_offset || bits.remaining_bits() < params.length_size as u64 {
                return Err(truncated(&bits));
            }
            let count = bits.take(params.length_size) as usize + params.min_length;

            // The copied bytes feed back into the window as they are
            // emitted, so a match may read slots it is itself writing;
            // that overlap produces runs longer than the original
            // back-reference and is intentional.
            let mut read_from = offset;
            for _ in 0..count {
                let byte = window.get(read_from);
                output.push(byte);
                window.push(byte);
                read_from += 1;
            }
        }
    }

    if bits.bits_read() != bits.total_bits() {
        return Err(ThrepError::malformed_stream(
            bits.bits_read(),
            bits.total_bits(),
        ));
    }

    Ok(output)
}
