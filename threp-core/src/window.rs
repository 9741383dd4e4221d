//! Circular history window for replay LZSS decompression.
//!
//! This module provides the absolute-addressed history buffer that the
//! replay LZSS streams reference. Unlike the relative back-references of
//! DEFLATE or LZH, match offsets in this format are absolute positions
//! inside a fixed-size circular window, and the decoder's write cursor
//! starts at a configurable non-zero index. Both quirks are historical;
//! they are carried here as explicit configuration so that other format
//! generations can supply different parameters.

/// A circular byte buffer addressed by absolute window position.
///
/// Every byte the decoder produces is written through the window's write
/// cursor, so the window always mirrors the most recent `capacity` bytes
/// of output. Match offsets read any absolute slot, including slots the
/// same match is in the process of writing (self-referential copies).
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    /// The underlying buffer, zero-initialized.
    buffer: Vec<u8>,
    /// Current write position (next byte will be written here).
    position: usize,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
}

impl HistoryWindow {
    /// Create a new window with the specified capacity and initial write
    /// cursor position.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of 2 or is zero, or if
    /// `initial_position` is not inside the window.
    pub fn new(capacity: usize, initial_position: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        assert!(
            capacity.is_power_of_two(),
            "capacity must be a power of 2, got {}",
            capacity
        );
        assert!(
            initial_position < capacity,
            "initial position {} outside window of {} bytes",
            initial_position,
            capacity
        );

        Self {
            buffer: vec![0; capacity],
            position: initial_position,
            mask: capacity - 1,
        }
    }

    /// Get the capacity of the window.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Get the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Write a byte at the write cursor and advance it, wrapping at the
    /// end of the window.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buffer[self.position] = byte;
        self.position = (self.position + 1) & self.mask;
    }

    /// Read the byte at an absolute window position.
    ///
    /// `index` is reduced modulo the window capacity, matching the
    /// wraparound a match offset performs as it advances.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.buffer[index & self.mask]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_push_and_get() {
        let mut window = HistoryWindow::new(8, 0);

        window.push(b'H');
        window.push(b'i');

        assert_eq!(window.get(0), b'H');
        assert_eq!(window.get(1), b'i');
        assert_eq!(window.position(), 2);
        assert_eq!(window.capacity(), 8);
    }

    #[test]
    fn test_window_initial_position() {
        let mut window = HistoryWindow::new(8, 1);

        window.push(b'A');

        // Slot 0 stays zero; the first byte lands at the initial cursor.
        assert_eq!(window.get(0), 0);
        assert_eq!(window.get(1), b'A');
        assert_eq!(window.position(), 2);
    }

    #[test]
    fn test_window_write_wraps() {
        let mut window = HistoryWindow::new(4, 0);

        for &byte in b"ABCDEF" {
            window.push(byte);
        }

        // E and F wrapped over A and B.
        assert_eq!(window.get(0), b'E');
        assert_eq!(window.get(1), b'F');
        assert_eq!(window.get(2), b'C');
        assert_eq!(window.get(3), b'D');
        assert_eq!(window.position(), 2);
    }

    #[test]
    fn test_window_get_wraps() {
        let window = HistoryWindow::new(4, 0);
        assert_eq!(window.get(5), window.get(1));
    }

    #[test]
    #[should_panic(expected = "power of 2")]
    fn test_non_power_of_two_panics() {
        let _ = HistoryWindow::new(100, 0);
    }

    #[test]
    #[should_panic(expected = "outside window")]
    fn test_initial_position_outside_window_panics() {
        let _ = HistoryWindow::new(8, 8);
    }
}
