//! # threp Codec
//!
//! Decryption and decompression primitives for Touhou replay files.
//!
//! Replay bodies are encrypted and then LZSS-compressed. This crate
//! provides the three one-shot transforms a caller composes into the
//! decode pipeline (ciphertext → decrypt → decompress → event stream):
//!
//! - [`legacy::decrypt_legacy`]: additive stream cipher of the oldest
//!   format generation
//! - [`block::decrypt_block`]: block-wise XOR/interleave cipher of the
//!   later generations
//! - [`lzss::decompress`]: bit-packed LZSS with an absolute-addressed
//!   circular history window, shared by all generations
//!
//! The three operations are independent: a caller picks one cipher
//! based on the file format version and always applies the LZSS pass
//! afterwards. Each call owns only local working state, so the
//! routines are safe to invoke concurrently on distinct buffers.
//!
//! ## Example
//!
//! ```rust
//! use threp_codec::{LzssParams, decompress, decrypt_legacy};
//!
//! // Legacy pipeline: in-place decrypt, then decompress.
//! let mut body = vec![0xA7u8, 0x8E, 0x17, 0x1C]; // toy ciphertext
//! decrypt_legacy(&mut body, 0x07, 0);
//! let events = decompress(&body, LzssParams::default()).unwrap();
//! assert_eq!(events, b"AAAA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod legacy;
pub mod lzss;

// Re-exports
pub use block::decrypt_block;
pub use legacy::decrypt_legacy;
pub use lzss::{LzssParams, decompress};
