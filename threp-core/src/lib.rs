//! # threp Core
//!
//! Core components for the threp replay-decoding library.
//!
//! This crate provides the building blocks the codec layer is assembled
//! from:
//!
//! - [`bitstream`]: MSB-first bit-level reader/writer for the replay
//!   LZSS stream format
//! - [`window`]: absolute-addressed circular history buffer
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! threp is layered the same way larger archive stacks are:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ CLI                                           │
//! │     threp binary, file plumbing               │
//! ├───────────────────────────────────────────────┤
//! │ Codec                                         │
//! │     stream cipher, block cipher, LZSS decode  │
//! ├───────────────────────────────────────────────┤
//! │ Core (this crate)                             │
//! │     BitReader/BitWriter, HistoryWindow        │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use threp_core::bitstream::BitReader;
//! use threp_core::window::HistoryWindow;
//!
//! let data = [0xAB, 0xCD];
//! let mut reader = BitReader::new(&data);
//! let field = reader.take(12);
//! assert_eq!(field, 0xABC);
//!
//! let mut window = HistoryWindow::new(8192, 1);
//! window.push(0x41);
//! assert_eq!(window.get(1), 0x41);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitstream;
pub mod error;
pub mod window;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{Result, ThrepError};
pub use window::HistoryWindow;
