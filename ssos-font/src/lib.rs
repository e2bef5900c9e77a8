//! ASCII fonts for 7-segment displays
//!
//! Two variants cover the 7-bit ASCII range:
//!
//! - [`Font::LookAlike`]: each character as close as possible to how it is
//!   normally written. Several characters share a pattern.
//! - [`Font::Unique`]: every printable character gets its own pattern, so
//!   text can be read back unambiguously.
//!
//! Bytes with bit 7 set show the glyph of their low 7 bits with the decimal
//! point lit, so `b'1' | 0x80` renders as `1.`.
//!
//! ```
//! use ssos_font::Font;
//!
//! let mut patterns = [0u8; 4];
//! let n = ssos_font::encode(Font::LookAlike, b"12.5", &mut patterns);
//! assert_eq!(n, 4);
//! assert_eq!(patterns[0], 0b0000_0110);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod tables;

use ssos_core::segments;

pub use tables::{LOOKALIKE7S, UNIQUE7S};

/// Glyph table variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Closest look, patterns may repeat
    #[default]
    LookAlike,
    /// One pattern per printable character
    Unique,
}

impl Font {
    /// Glyph table for this variant
    pub const fn table(self) -> &'static [u8; 128] {
        match self {
            Self::LookAlike => &LOOKALIKE7S,
            Self::Unique => &UNIQUE7S,
        }
    }

    /// Row pattern for `byte`
    #[inline]
    pub const fn glyph(self, byte: u8) -> u8 {
        self.table()[(byte & 0x7F) as usize] | (byte & segments::DP)
    }
}

/// Row pattern for `byte` in `font`
#[inline]
pub const fn glyph(font: Font, byte: u8) -> u8 {
    font.glyph(byte)
}

/// Render `text` into `out`, one pattern per byte
///
/// Stops at the shorter of the two and returns the number of patterns
/// written.
pub fn encode(font: Font, text: &[u8], out: &mut [u8]) -> usize {
    let n = text.len().min(out.len());
    for (dst, &byte) in out.iter_mut().zip(text) {
        *dst = font.glyph(byte);
    }
    n
}
