//! Frame buffer shared between application code and the scan tick
//!
//! One pattern per unit. Each pattern is a single atomic byte, so the
//! application can rewrite the display at any time without locking and the
//! tick never observes a half-written pattern. There is no ordering between
//! units: a tick may see unit 0 from the old text and unit 1 from the new
//! one, which only lasts until the next rotation.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::segments;

/// Frame buffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameBufferError {
    /// Unit index outside the buffer
    IndexOutOfRange,
}

/// Glyph patterns for `N` units
#[derive(Debug)]
pub struct FrameBuffer<const N: usize> {
    patterns: [AtomicU8; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a blank frame buffer (usable in a `static`)
    pub const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const BLANK: AtomicU8 = AtomicU8::new(segments::OFF);
        Self {
            patterns: [BLANK; N],
        }
    }

    /// Number of units
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-unit buffer
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Read the pattern of `unit` (blank if out of range)
    #[inline]
    pub fn get(&self, unit: usize) -> u8 {
        self.patterns
            .get(unit)
            .map_or(segments::OFF, |p| p.load(Ordering::Relaxed))
    }

    /// Replace the pattern of `unit`
    pub fn set(&self, unit: usize, pattern: u8) -> Result<(), FrameBufferError> {
        let cell = self
            .patterns
            .get(unit)
            .ok_or(FrameBufferError::IndexOutOfRange)?;
        cell.store(pattern, Ordering::Relaxed);
        Ok(())
    }

    /// Write patterns starting at unit 0
    ///
    /// Extra patterns are ignored; units beyond `patterns.len()` keep their
    /// content. Returns the number of units written.
    pub fn write(&self, patterns: &[u8]) -> usize {
        let mut written = 0;
        for (cell, &pattern) in self.patterns.iter().zip(patterns) {
            cell.store(pattern, Ordering::Relaxed);
            written += 1;
        }
        written
    }

    /// Set every unit to `pattern`
    pub fn fill(&self, pattern: u8) {
        for cell in &self.patterns {
            cell.store(pattern, Ordering::Relaxed);
        }
    }

    /// Blank all units
    pub fn clear(&self) {
        self.fill(segments::OFF);
    }

    /// Copy of the current content
    pub fn snapshot(&self) -> [u8; N] {
        core::array::from_fn(|unit| self.get(unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let fb: FrameBuffer<4> = FrameBuffer::new();
        assert_eq!(fb.len(), 4);
        assert_eq!(fb.snapshot(), [0; 4]);
    }

    #[test]
    fn test_set_get() {
        let fb: FrameBuffer<4> = FrameBuffer::new();
        fb.set(2, 0x5B).unwrap();
        assert_eq!(fb.get(2), 0x5B);
        assert_eq!(fb.get(0), 0);
        assert_eq!(fb.set(4, 0xFF), Err(FrameBufferError::IndexOutOfRange));
        assert_eq!(fb.get(4), segments::OFF);
    }

    #[test]
    fn test_write_partial() {
        let fb: FrameBuffer<4> = FrameBuffer::new();
        fb.fill(0xFF);
        assert_eq!(fb.write(&[1, 2]), 2);
        assert_eq!(fb.snapshot(), [1, 2, 0xFF, 0xFF]);

        assert_eq!(fb.write(&[1, 2, 3, 4, 5, 6]), 4);
        assert_eq!(fb.snapshot(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let fb: FrameBuffer<3> = FrameBuffer::new();
        fb.write(&[7, 8, 9]);
        fb.clear();
        assert_eq!(fb.snapshot(), [0; 3]);
    }

    #[test]
    fn test_static_buffer() {
        static FB: FrameBuffer<2> = FrameBuffer::new();
        FB.set(1, 0x06).unwrap();
        assert_eq!(FB.get(1), 0x06);
    }
}
