//! Edge behavior of the construction operations: endpoint validation order,
//! splice positions, and zero-size inputs.

use super::common::bs;
use culter::{ByteString, Slicer, StringError};

fn slicer() -> Slicer {
    Slicer::new()
}

// ============================================================================
// SUBSTRING
// ============================================================================

#[test]
fn substring_reports_the_offending_endpoint() {
    let s = bs("abc");
    assert_eq!(
        slicer().substring(&s, 9, 1),
        Err(StringError::IndexOutOfRange { index: 9, len: 3 })
    );
    assert_eq!(
        slicer().substring(&s, 1, 9),
        Err(StringError::IndexOutOfRange { index: 9, len: 3 })
    );
    // Both out of range: the first endpoint is validated first.
    assert_eq!(
        slicer().substring(&s, 9, 12),
        Err(StringError::IndexOutOfRange { index: 9, len: 3 })
    );
}

#[test]
fn substring_has_no_valid_endpoints_on_empty_input() {
    assert_eq!(
        slicer().substring(&ByteString::new(), 0, 0),
        Err(StringError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn substring_single_byte_is_direction_independent() {
    let s = bs("abc");
    assert_eq!(slicer().substring(&s, 1, 1).unwrap(), "b");
    assert_eq!(
        slicer().substring(&s, 1, 1).unwrap(),
        slicer().substring(&s, 1, 1).unwrap()
    );
}

#[test]
fn substring_endpoints_are_inclusive_both_ways() {
    let s = bs("slicing");
    assert_eq!(slicer().substring(&s, 0, 6).unwrap(), "slicing");
    assert_eq!(slicer().substring(&s, 6, 0).unwrap(), "gnicils");
    assert_eq!(slicer().substring(&s, 2, 4).unwrap(), "ici");
    assert_eq!(slicer().substring(&s, 4, 2).unwrap(), "ici");
}

// ============================================================================
// INSERT
// ============================================================================

#[test]
fn insert_covers_every_splice_position() {
    let base = bs("ab");
    let piece = bs("X");
    assert_eq!(slicer().insert(&base, &piece, 0).unwrap(), "Xab");
    assert_eq!(slicer().insert(&base, &piece, 1).unwrap(), "aXb");
    assert_eq!(slicer().insert(&base, &piece, 2).unwrap(), "abX");
    assert_eq!(
        slicer().insert(&base, &piece, 3),
        Err(StringError::IndexOutOfRange { index: 3, len: 2 })
    );
}

#[test]
fn insert_of_nothing_is_a_copy() {
    let base = bs("abc");
    let empty = ByteString::new();
    for index in 0..=base.len() {
        assert_eq!(slicer().insert(&base, &empty, index).unwrap(), base);
    }
}

#[test]
fn insert_into_empty_base() {
    let empty = ByteString::new();
    let piece = bs("xyz");
    assert_eq!(slicer().insert(&empty, &piece, 0).unwrap(), "xyz");
    assert_eq!(
        slicer().insert(&empty, &piece, 1),
        Err(StringError::IndexOutOfRange { index: 1, len: 0 })
    );
}

// ============================================================================
// REPEAT / CONCAT / REVERSE / COPY
// ============================================================================

#[test]
fn repeat_edge_counts() {
    let s = bs("ab");
    assert_eq!(slicer().repeat(&s, 0).unwrap(), ByteString::new());
    assert_eq!(slicer().repeat(&s, 1).unwrap(), "ab");
    assert_eq!(slicer().repeat(&s, 3).unwrap(), "ababab");
}

#[test]
fn repeat_overflow_is_reported_before_charging() {
    let err = slicer().repeat(&bs("abc"), usize::MAX);
    assert_eq!(
        err,
        Err(StringError::AllocationFailure {
            requested: usize::MAX
        })
    );
}

#[test]
fn repeating_nothing_any_number_of_times_is_nothing() {
    // Zero-length times usize::MAX does not overflow: the product is zero.
    let out = slicer().repeat(&ByteString::new(), usize::MAX).unwrap();
    assert!(out.is_empty());
}

#[test]
fn concat_with_empty_is_identity() {
    let s = bs("abc");
    let empty = ByteString::new();
    assert_eq!(slicer().concat(&s, &empty).unwrap(), s);
    assert_eq!(slicer().concat(&empty, &s).unwrap(), s);
    assert_eq!(slicer().concat(&empty, &empty).unwrap(), ByteString::new());
}

#[test]
fn reverse_edges() {
    assert_eq!(slicer().reverse(&ByteString::new()).unwrap(), ByteString::new());
    assert_eq!(slicer().reverse(&bs("x")).unwrap(), "x");
    assert_eq!(slicer().reverse(&bs("racecar")).unwrap(), "racecar");
    assert_eq!(slicer().reverse(&bs("ab")).unwrap(), "ba");
}

#[test]
fn copy_preserves_arbitrary_bytes() {
    let s = ByteString::from(&[0u8, 255, 10, 13, 127][..]);
    assert_eq!(slicer().copy(&s).unwrap(), s);
}
