//! ASCII case conversion exactness: only the 26 letters of each case move,
//! every other byte value passes through untouched.

use super::common::{all_bytes, bs};
use culter::{ByteString, Slicer};

fn slicer() -> Slicer {
    Slicer::new()
}

#[test]
fn the_full_alphabet_maps_exactly() {
    let s = slicer();
    let lower = bs("abcdefghijklmnopqrstuvwxyz");
    let upper = bs("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert_eq!(s.to_uppercase(&lower).unwrap(), upper);
    assert_eq!(s.to_lowercase(&upper).unwrap(), lower);
}

#[test]
fn uppercase_touches_only_lowercase_letters() {
    let input = all_bytes();
    let out = slicer().to_uppercase(&input).unwrap();
    for (i, (&before, &after)) in input
        .as_bytes()
        .iter()
        .zip(out.as_bytes().iter())
        .enumerate()
    {
        if before.is_ascii_lowercase() {
            assert_eq!(after, before - 32, "byte {:#04x}", i);
        } else {
            assert_eq!(after, before, "byte {:#04x}", i);
        }
    }
}

#[test]
fn lowercase_touches_only_uppercase_letters() {
    let input = all_bytes();
    let out = slicer().to_lowercase(&input).unwrap();
    for (&before, &after) in input.as_bytes().iter().zip(out.as_bytes().iter()) {
        if before.is_ascii_uppercase() {
            assert_eq!(after, before + 32);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn digits_and_punctuation_pass_through() {
    let s = slicer();
    let input = bs("123-456!? @#");
    assert_eq!(s.to_uppercase(&input).unwrap(), input);
    assert_eq!(s.to_lowercase(&input).unwrap(), input);
}

#[test]
fn capitalize_moves_only_the_first_byte() {
    let s = slicer();
    assert_eq!(s.capitalize(&bs("word")).unwrap(), "Word");
    assert_eq!(s.capitalize(&bs("Word")).unwrap(), "Word");
    assert_eq!(s.capitalize(&bs("two words")).unwrap(), "Two words");
    assert_eq!(s.capitalize(&bs("1abc")).unwrap(), "1abc");
    assert_eq!(s.capitalize(&bs("x")).unwrap(), "X");
    assert_eq!(s.capitalize(&ByteString::new()).unwrap(), ByteString::new());
}

#[test]
fn case_conversion_preserves_length() {
    let s = slicer();
    let input = all_bytes();
    assert_eq!(s.to_uppercase(&input).unwrap().len(), input.len());
    assert_eq!(s.to_lowercase(&input).unwrap().len(), input.len());
    assert_eq!(s.capitalize(&input).unwrap().len(), input.len());
}
