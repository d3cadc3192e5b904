//! Scan policy edges: qualifying starts at the extremes, the
//! overlapping/non-overlapping asymmetry, and pattern validation.

use super::common::{all_bytes, bs};
use culter::{ByteString, Slicer, StringError};

fn slicer() -> Slicer {
    Slicer::new()
}

// ============================================================================
// COUNT / INDICES
// ============================================================================

#[test]
fn matches_at_both_extremes_of_the_input() {
    let s = slicer();
    let hay = bs("abab");
    let pat = bs("ab");
    // Starts at 0 and at the last qualifying position len - pat.len().
    assert_eq!(s.match_indices(&hay, &pat).unwrap(), vec![0, 2]);
}

#[test]
fn pattern_equal_to_input_matches_once() {
    let s = slicer();
    let hay = bs("whole");
    assert_eq!(s.count_matches(&hay, &hay).unwrap(), 1);
    assert_eq!(s.match_indices(&hay, &hay).unwrap(), vec![0]);
}

#[test]
fn oversized_pattern_never_matches() {
    let s = slicer();
    let hay = bs("ab");
    let pat = bs("abc");
    assert_eq!(s.count_matches(&hay, &pat).unwrap(), 0);
    assert_eq!(s.match_indices(&hay, &pat).unwrap(), Vec::<usize>::new());
}

#[test]
fn single_byte_pattern_counts_byte_frequency() {
    let s = slicer();
    let hay = bs("banana");
    let pat = bs("a");
    assert_eq!(s.count_matches(&hay, &pat).unwrap(), 3);
    assert_eq!(s.match_indices(&hay, &pat).unwrap(), vec![1, 3, 5]);
}

#[test]
fn overlapping_starts_are_all_reported() {
    let s = slicer();
    assert_eq!(s.count_matches(&bs("aaaa"), &bs("aa")).unwrap(), 3);
    assert_eq!(
        s.match_indices(&bs("aaaa"), &bs("aa")).unwrap(),
        vec![0, 1, 2]
    );
}

#[test]
fn every_byte_value_is_matchable() {
    let s = slicer();
    let hay = all_bytes();
    let nul = ByteString::from(&[0u8][..]);
    let high = ByteString::from(&[0xffu8][..]);
    assert_eq!(s.match_indices(&hay, &nul).unwrap(), vec![0]);
    assert_eq!(s.match_indices(&hay, &high).unwrap(), vec![255]);
}

// ============================================================================
// REPLACE
// ============================================================================

#[test]
fn replace_consumes_left_to_right_without_overlap() {
    let s = slicer();
    assert_eq!(s.replace(&bs("aaa"), &bs("aa"), &bs("b")).unwrap(), "ba");
    assert_eq!(s.replace(&bs("aaaa"), &bs("aa"), &bs("b")).unwrap(), "bb");
    assert_eq!(s.replace(&bs("aaaaa"), &bs("aa"), &bs("b")).unwrap(), "bba");
}

#[test]
fn replace_with_empty_replacement_deletes_matches() {
    let s = slicer();
    assert_eq!(s.replace(&bs("banana"), &bs("a"), &ByteString::new()).unwrap(), "bnn");
}

#[test]
fn replace_can_grow_shrink_or_keep_length() {
    let s = slicer();
    assert_eq!(s.replace(&bs("abc"), &bs("b"), &bs("BBB")).unwrap(), "aBBBc");
    assert_eq!(s.replace(&bs("abc"), &bs("ab"), &bs("x")).unwrap(), "xc");
    assert_eq!(s.replace(&bs("abc"), &bs("b"), &bs("B")).unwrap(), "aBc");
}

#[test]
fn replace_without_matches_is_a_copy() {
    let s = slicer();
    let hay = bs("untouched");
    assert_eq!(s.replace(&hay, &bs("zz"), &bs("yy")).unwrap(), hay);
}

#[test]
fn replace_of_the_whole_input() {
    let s = slicer();
    assert_eq!(s.replace(&bs("old"), &bs("old"), &bs("new")).unwrap(), "new");
    assert_eq!(
        s.replace(&bs("old"), &bs("old"), &ByteString::new()).unwrap(),
        ByteString::new()
    );
}

// ============================================================================
// PREDICATES AND VALIDATION
// ============================================================================

#[test]
fn ends_with_byte_needs_a_final_byte() {
    assert_eq!(bs("abc").ends_with_byte(b'c'), Ok(true));
    assert_eq!(bs("abc").ends_with_byte(b'a'), Ok(false));
    assert_eq!(
        ByteString::new().ends_with_byte(b'c'),
        Err(StringError::EmptyInput)
    );
}

#[test]
fn empty_pattern_is_rejected_by_every_scan() {
    let s = slicer();
    let hay = bs("abc");
    let empty = ByteString::new();
    assert_eq!(s.count_matches(&hay, &empty), Err(StringError::EmptyPattern));
    assert_eq!(s.match_indices(&hay, &empty), Err(StringError::EmptyPattern));
    assert_eq!(
        s.replace(&hay, &empty, &bs("x")),
        Err(StringError::EmptyPattern)
    );
    // The empty haystack is fine; the empty pattern is not.
    assert_eq!(s.count_matches(&empty, &bs("a")).unwrap(), 0);
}
