//! Runtime contracts for the length and policy laws.
//!
//! This module provides debug-mode assertions that verify the laws the
//! operations are built around. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the properties the **Kani proofs** check on symbolic inputs
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function in this module verifies a law the public API documents.
//! Removing or weakening these checks silently widens the contract.
//!
//! # Law Correspondence
//!
//! | Contract Function         | Law                                            |
//! |---------------------------|------------------------------------------------|
//! | `check_substring_length`  | `len(sub(s, from, to)) == abs(from - to) + 1`  |
//! | `check_concat_length`     | `len(concat(a, b)) == len(a) + len(b)`         |
//! | `check_repeat_length`     | `len(repeat(s, n)) == len(s) * n`              |
//! | `check_replace_length`    | `len(out) == len(s) - m*len(pat) + m*len(rep)` |
//! | `check_match_indices`     | ascending, in-bounds, full-match starts        |
//! | `check_split_segments`    | delimiter-free segments, byte conservation     |
//! | `check_join_length`       | `len(out) == sum(parts) + seams`               |
//!
//! # Usage
//!
//! ```ignore
//! use culter::contracts::*;
//!
//! // In debug builds, this panics if the law is violated
//! check_concat_length(a.len(), b.len(), out.len());
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::ByteString;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the ASCII case shift is what the letter mapping
/// relies on. This is evaluated at compile time - if it fails, the crate
/// won't build.
const _: () = {
    // INVARIANT: one case shift covers the whole alphabet
    assert!(b'a' - b'A' == 32);
    assert!(b'z' - b'a' == b'Z' - b'A');
    // INVARIANT: the letter ranges are the documented byte ranges
    assert!(b'A' == 65 && b'Z' == 90);
    assert!(b'a' == 97 && b'z' == 122);
};

// ============================================================================
// LENGTH CONTRACTS
// ============================================================================

/// Check the substring length law.
///
/// # Panics (debug builds only)
/// Panics if `result_len != abs(from - to) + 1`.
#[inline]
pub fn check_substring_length(from: usize, to: usize, result_len: usize) {
    debug_assert_eq!(
        result_len,
        from.abs_diff(to) + 1,
        "Contract violation: substring_length - result len {} != abs({} - {}) + 1",
        result_len,
        from,
        to
    );
}

/// Check the concatenation length law (also covers `insert`, which is a
/// concatenation with a seam in the middle).
#[inline]
pub fn check_concat_length(a_len: usize, b_len: usize, result_len: usize) {
    debug_assert_eq!(
        result_len,
        a_len + b_len,
        "Contract violation: concat_length - result len {} != {} + {}",
        result_len,
        a_len,
        b_len
    );
}

/// Check the repetition length law.
#[inline]
pub fn check_repeat_length(unit_len: usize, times: usize, result_len: usize) {
    debug_assert_eq!(
        result_len,
        unit_len * times,
        "Contract violation: repeat_length - result len {} != {} * {}",
        result_len,
        unit_len,
        times
    );
}

/// Check the replacement length law for `consumed` non-overlapping matches.
#[inline]
pub fn check_replace_length(
    hay_len: usize,
    pat_len: usize,
    rep_len: usize,
    consumed: usize,
    result_len: usize,
) {
    debug_assert_eq!(
        result_len,
        hay_len - consumed * pat_len + consumed * rep_len,
        "Contract violation: replace_length - result len {} != {} - {}*{} + {}*{}",
        result_len,
        hay_len,
        consumed,
        pat_len,
        consumed,
        rep_len
    );
}

/// Check the join length law: every part byte plus one seam byte between
/// consecutive parts when a delimiter is in play.
#[inline]
pub fn check_join_length(parts: &[ByteString], delim: Option<u8>, result_len: usize) {
    let seams = if delim.is_some() {
        parts.len().saturating_sub(1)
    } else {
        0
    };
    let expected: usize = parts.iter().map(ByteString::len).sum::<usize>() + seams;
    debug_assert_eq!(
        result_len,
        expected,
        "Contract violation: join_length - result len {} != {} part bytes + {} seams",
        result_len,
        expected - seams,
        seams
    );
}

// ============================================================================
// SCAN CONTRACTS
// ============================================================================

/// Check that reported match indices are ascending, in bounds, and byte-exact.
///
/// This re-verifies every window, so it is O(matches * pattern length);
/// use it on the scan paths only.
#[inline]
pub fn check_match_indices(hay: &ByteString, pat: &ByteString, indices: &[usize]) {
    let mut prev: Option<usize> = None;
    for (n, &i) in indices.iter().enumerate() {
        debug_assert!(
            i + pat.len() <= hay.len(),
            "Contract violation: match_indices - indices[{}] = {} leaves no room for \
             a {}-byte pattern in {} bytes",
            n,
            i,
            pat.len(),
            hay.len()
        );
        debug_assert!(
            &hay.as_bytes()[i..i + pat.len()] == pat.as_bytes(),
            "Contract violation: match_indices - indices[{}] = {} is not a full match",
            n,
            i
        );
        if let Some(p) = prev {
            debug_assert!(
                p < i,
                "Contract violation: match_indices - indices[{}] = {} not above previous {}",
                n,
                i,
                p
            );
        }
        prev = Some(i);
    }
}

// ============================================================================
// SEGMENTATION CONTRACTS
// ============================================================================

/// Check the segmentation laws: no segment contains the delimiter, and the
/// segment bytes account for every non-delimiter byte of the input.
#[inline]
pub fn check_split_segments(input: &ByteString, delim: u8, segments: &[ByteString]) {
    for (n, seg) in segments.iter().enumerate() {
        debug_assert!(
            !seg.as_bytes().contains(&delim),
            "Contract violation: split_segments - segment {} contains the delimiter",
            n
        );
    }

    let delims = input.as_bytes().iter().filter(|&&b| b == delim).count();
    let segment_bytes: usize = segments.iter().map(ByteString::len).sum();
    debug_assert_eq!(
        segment_bytes,
        input.len() - delims,
        "Contract violation: split_segments - {} segment bytes != {} input bytes - {} delimiters",
        segment_bytes,
        input.len(),
        delims
    );
}
