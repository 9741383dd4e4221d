//! Legacy additive stream decryption.
//!
//! The oldest replay format (the sixth mainline game) encrypts the body
//! with a one-byte running key: each ciphertext byte had the key added
//! at encryption time, and the key steps by a fixed increment after
//! every byte. Decryption subtracts the same sequence in place.

/// Fixed per-byte key increment of the legacy cipher.
const KEY_STEP: u8 = 7;

/// Decrypt a legacy replay buffer in place.
///
/// Bytes before `start` are left untouched; from `start` to the end,
/// each byte has the running key subtracted (mod 256), and the key
/// advances by 7 (mod 256) per byte. The key is never reset, so it
/// evolves linearly across the whole remaining buffer.
///
/// Any `start` is valid; a value at or past the buffer length performs
/// zero iterations.
///
/// # Example
///
/// ```
/// use threp_codec::legacy::decrypt_legacy;
///
/// let mut buffer = [0x64, 0x6e]; // "ad" encrypted with key 3
/// decrypt_legacy(&mut buffer, 0x03, 0);
/// assert_eq!(&buffer, b"ad");
/// ```
pub fn decrypt_legacy(buffer: &mut [u8], key: u8, start: usize) {
    let mut key = key;
    for byte in buffer.iter_mut().skip(start) {
        *byte = byte.wrapping_sub(key);
        key = key.wrapping_add(KEY_STEP);
    }
}
