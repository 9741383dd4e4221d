//! Block-wise XOR de-interleave decryption.
//!
//! Later replay formats scramble the body with a block cipher that
//! interleaves bytes inside each block and XORs them against a running
//! key. Decryption reads the ciphertext strictly sequentially and
//! writes each byte back to its original slot: the last block position,
//! then every second position descending, then the second-to-last
//! position and every second position descending from there. The key
//! starts at `base` and steps by `add` per ciphertext byte across the
//! whole buffer, not per block.
//!
//! A trailing remainder shorter than a quarter of the block size is
//! treated as unencrypted padding and passed through unchanged, and one
//! more byte is excluded when the total length is odd. These rules have
//! no rationale beyond matching the historical cipher; altering them
//! changes which trailing bytes are treated as ciphertext.

use threp_core::error::{Result, ThrepError};

/// Decrypt a block-scrambled replay buffer.
///
/// Operates on a read-only snapshot of `buffer` and returns the
/// de-interleaved plaintext; the output length always equals the input
/// length. The final block may be shorter than `block_size` if fewer
/// bytes remain.
///
/// # Errors
///
/// Returns [`ThrepError::InvalidBlockSize`] if `block_size` is zero,
/// and [`ThrepError::IndexOutOfRange`] if an inconsistent `block_size`
/// produces an index outside the buffer.
pub fn decrypt_block(buffer: &[u8], block_size: usize, base: u8, add: u8) -> Result<Vec<u8>> {
    if block_size == 0 {
        return Err(ThrepError::InvalidBlockSize);
    }

    let len = buffer.len();
    // Excluded trailing bytes keep their ciphertext value.
    let mut output = buffer.to_vec();

    let mut left = len;
    if left % block_size < block_size / 4 {
        left -= left % block_size;
    }
    if left > 0 {
        left -= len & 1;
    }

    let mut block_size = block_size;
    let mut base = base;
    let mut p = 0usize;

    while left > 0 {
        if left < block_size {
            block_size = left;
        }

        // p is both the sequential read cursor and, at this point, the
        // first index of the block: the two passes below consume exactly
        // block_size source bytes.
        let block_start = p;
        let first_pass = block_size.div_ceil(2);
        let second_pass = block_size / 2;

        for i in 0..first_pass {
            let dst = block_start + block_size - 1 - 2 * i;
            let src = *buffer
                .get(p)
                .ok_or_else(|| ThrepError::index_out_of_range(p, len))?;
            *output
                .get_mut(dst)
                .ok_or_else(|| ThrepError::index_out_of_range(dst, len))? = src ^ base;
            base = base.wrapping_add(add);
            p += 1;
        }

        for i in 0..second_pass {
            let dst = block_start + block_size - 2 - 2 * i;
            let src = *buffer
                .get(p)
                .ok_or_else(|| ThrepError::index_out_of_range(p, len))?;
            *output
                .get_mut(dst)
                .ok_or_else(|| ThrepError::index_out_of_range(dst, len))? = src ^ base;
            base = base.wrapping_add(add);
            p += 1;
        }

        left -= block_size;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse transform: reads plaintext slots in the decrypt order and
    /// emits ciphertext sequentially. Used for round-trip checks.
    fn encrypt_block(plain: &[u8], block_size: usize, base: u8, add: u8) -> Vec<u8> {
        let len = plain.len();
        let mut output = plain.to_vec();

        let mut left = len;
        if left % block_size < block_size / 4 {
            left -= left % block_size;
        }
        if left > 0 {
            left -= len & 1;
        }

        let mut block_size = block_size;
        let mut base = base;
        let mut p = 0usize;

        while left > 0 {
            if left < block_size {
                block_size = left;
            }
            let block_start = p;
            for i in 0..block_size.div_ceil(2) {
                output[p] = plain[block_start + block_size - 1 - 2 * i] ^ base;
                base = base.wrapping_add(add);
                p += 1;
            }
            for i in 0..block_size / 2 {
                output[p] = plain[block_start + block_size - 2 - 2 * i] ^ base;
                base = base.wrapping_add(add);
                p += 1;
            }
            left -= block_size;
        }

        output
    }

    #[test]
    fn test_pure_permutation() {
        // base = add = 0 exposes the reorder without the XOR layer.
        let input = [1, 2, 3, 4, 5, 6, 7, 8];
        let output = decrypt_block(&input, 4, 0, 0).unwrap();
        assert_eq!(output, vec![4, 2, 3, 1, 8, 6, 7, 5]);
    }

    #[test]
    fn test_xor_key_runs_across_blocks() {
        // With base=1, add=1 the key for sequential byte p is p + 1,
        // continuing into the second block without reset.
        let input = [0u8; 4];
        let output = decrypt_block(&input, 2, 1, 1).unwrap();
        // Block 1: out[1] = 0^1, out[0] = 0^2; block 2: out[3] = 0^3, out[2] = 0^4.
        assert_eq!(output, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_short_final_block() {
        let input = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let output = decrypt_block(&input, 8, 0, 0).unwrap();
        // remainder 2 is not below 8/4, so the full buffer is processed;
        // the final block shrinks to the remaining 2 bytes.
        assert_eq!(output, vec![8, 4, 7, 3, 6, 2, 5, 1, 10, 9]);
    }

    #[test]
    fn test_small_remainder_left_as_padding() {
        // len 9, block 8: remainder 1 < 8/4 drops the remainder, the odd
        // length drops one more byte; only the first 7 are processed.
        let input = [1, 2, 3, 4, 5, 6, 7, 0xAA, 0xBB];
        let output = decrypt_block(&input, 8, 0, 0).unwrap();
        assert_eq!(&output[7..], &[0xAA, 0xBB]);
        assert_eq!(&output[..7], &[4, 7, 3, 6, 2, 5, 1]);
    }

    #[test]
    fn test_tiny_buffer_untouched() {
        // len 1, block 8: remainder 1 < 2, nothing to process.
        let input = [0x5A];
        let output = decrypt_block(&input, 8, 0x33, 0x07).unwrap();
        assert_eq!(output, vec![0x5A]);
    }

    #[test]
    fn test_block_size_larger_than_buffer() {
        // Clamped to the remaining length per the last-block rule.
        let input = [1, 2, 3, 4, 5, 6, 7, 8];
        let clamped = decrypt_block(&input, 64, 0, 0);
        // remainder 8 < 64/4, so the whole buffer counts as padding.
        assert_eq!(clamped.unwrap(), input.to_vec());

        let processed = decrypt_block(&input, 10, 0, 0).unwrap();
        // remainder 8 >= 10/4, clamp to a single 8-byte block.
        assert_eq!(processed, vec![8, 4, 7, 3, 6, 2, 5, 1]);
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let err = decrypt_block(&[1, 2, 3], 0, 0, 0).unwrap_err();
        assert!(matches!(err, ThrepError::InvalidBlockSize));
    }

    #[test]
    fn test_determinism() {
        let input: Vec<u8> = (0..64).collect();
        let a = decrypt_block(&input, 16, 0xE1, 0x25).unwrap();
        let b = decrypt_block(&input, 16, 0xE1, 0x25).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), input.len());
    }

    #[test]
    fn test_roundtrip_against_matching_encoder() {
        let plain: Vec<u8> = (0..=255).chain(0..=100).collect();
        for &(block_size, base, add) in &[(0x400, 0xAA, 0xE1), (0x80, 0x03, 0x19), (7, 0x55, 0x01)]
        {
            let cipher = encrypt_block(&plain, block_size, base, add);
            let decrypted = decrypt_block(&cipher, block_size, base, add).unwrap();
            assert_eq!(decrypted, plain, "block_size={block_size}");
        }
    }
}
