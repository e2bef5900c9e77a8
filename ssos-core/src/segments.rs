//! Row pattern bit layout
//!
//! ```text
//!   bit:   7 6 5 4 3 2 1 0
//!   seg:   p g f e d c b a
//!
//!      aaa
//!     f   b
//!      ggg
//!     e   c
//!      ddd  p
//! ```

/// Segment a (top)
pub const A: u8 = 1 << 0;
/// Segment b (top right)
pub const B: u8 = 1 << 1;
/// Segment c (bottom right)
pub const C: u8 = 1 << 2;
/// Segment d (bottom)
pub const D: u8 = 1 << 3;
/// Segment e (bottom left)
pub const E: u8 = 1 << 4;
/// Segment f (top left)
pub const F: u8 = 1 << 5;
/// Segment g (middle)
pub const G: u8 = 1 << 6;
/// Decimal point
pub const DP: u8 = 1 << 7;

/// All row lines off
pub const OFF: u8 = 0;

/// All seven segments, without the decimal point
pub const ALL: u8 = A | B | C | D | E | F | G;

/// Number of row lines
pub const ROW_COUNT: usize = 8;

/// Check if `segment` is lit in `pattern`
pub const fn is_lit(pattern: u8, segment: u8) -> bool {
    pattern & segment != 0
}

/// Add the decimal point to a pattern
pub const fn with_dp(pattern: u8) -> u8 {
    pattern | DP
}
