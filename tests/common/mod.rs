//! Shared test utilities and fixtures.

#![allow(dead_code)]

use culter::ByteString;

// Re-export canonical test utilities from culter::testing
pub use culter::testing::{bs, quota_slicer, seq};

// ============================================================================
// FIXTURES
// ============================================================================

/// A log line exercising letters, digits, punctuation and repeats.
pub const SAMPLE_LINE: &str = "2024-01-15T09:30:00 error: disk full";

/// CSV-shaped input with an interior empty field and a trailing delimiter.
pub const SAMPLE_CSV: &str = "name,age,,city,";

/// Multi-line fixture with an empty middle line and no trailing newline.
pub const SAMPLE_LOG: &str = "error: disk full\n\nwarn: retrying\nerror: disk full";

/// Every byte value once, in order. Useful for exactness checks on
/// transformations that must only touch specific byte ranges.
pub fn all_bytes() -> ByteString {
    let bytes: Vec<u8> = (0..=255).collect();
    ByteString::from(bytes)
}

/// Repeat a short seed out to `len` bytes, for size-sensitive tests.
/// An empty seed yields an empty result.
pub fn repeated(seed: &str, len: usize) -> ByteString {
    let bytes: Vec<u8> = seed.bytes().cycle().take(len).collect();
    ByteString::from(bytes)
}
