//! Algebraic laws relating the operations to one another.

use super::any_bytes;
use culter::{ByteString, Slicer};
use proptest::prelude::*;

fn nonempty_bytes() -> impl Strategy<Value = ByteString> {
    prop::collection::vec(any::<u8>(), 1..24).prop_map(ByteString::from)
}

fn base_piece_index() -> impl Strategy<Value = (ByteString, ByteString, usize)> {
    (any_bytes(), nonempty_bytes()).prop_flat_map(|(base, piece)| {
        let len = base.len();
        (Just(base), Just(piece), 0..=len)
    })
}

fn indexed_bytes() -> impl Strategy<Value = (ByteString, usize)> {
    nonempty_bytes().prop_flat_map(|s| {
        let len = s.len();
        (Just(s), 0..len)
    })
}

proptest! {
    #[test]
    fn insert_at_zero_prepends((base, piece, _) in base_piece_index()) {
        let slicer = Slicer::new();
        prop_assert_eq!(
            slicer.insert(&base, &piece, 0).unwrap(),
            slicer.concat(&piece, &base).unwrap()
        );
    }

    #[test]
    fn insert_at_the_end_appends((base, piece, _) in base_piece_index()) {
        let slicer = Slicer::new();
        prop_assert_eq!(
            slicer.insert(&base, &piece, base.len()).unwrap(),
            slicer.concat(&base, &piece).unwrap()
        );
    }

    #[test]
    fn insert_then_slice_recovers_the_piece((base, piece, index) in base_piece_index()) {
        let slicer = Slicer::new();
        let spliced = slicer.insert(&base, &piece, index).unwrap();
        prop_assert_eq!(
            slicer.substring(&spliced, index, index + piece.len() - 1).unwrap(),
            piece
        );
    }

    #[test]
    fn char_at_is_the_single_byte_substring((s, i) in indexed_bytes()) {
        let slicer = Slicer::new();
        prop_assert_eq!(
            slicer.char_at(&s, i).unwrap(),
            slicer.substring(&s, i, i).unwrap()
        );
    }

    #[test]
    fn byte_codes_round_trip(s in any_bytes()) {
        let slicer = Slicer::new();
        let codes = slicer.to_byte_array(&s).unwrap();
        prop_assert_eq!(codes.len(), s.len());
        for (&code, &byte) in codes.iter().zip(s.as_bytes()) {
            prop_assert_eq!(code, u32::from(byte));
        }
        prop_assert_eq!(slicer.from_byte_array(&codes).unwrap(), s);
    }

    #[test]
    fn byte_codes_truncate_to_the_low_eight_bits(
        codes in prop::collection::vec(any::<u32>(), 0..32),
    ) {
        let slicer = Slicer::new();
        let out = slicer.from_byte_array(&codes).unwrap();
        prop_assert_eq!(out.len(), codes.len());
        for (&byte, &code) in out.as_bytes().iter().zip(&codes) {
            prop_assert_eq!(byte, code as u8);
        }
    }

    #[test]
    fn capitalize_changes_at_most_the_first_byte(s in nonempty_bytes()) {
        let slicer = Slicer::new();
        let out = slicer.capitalize(&s).unwrap();
        prop_assert_eq!(out.len(), s.len());
        prop_assert_eq!(out.as_bytes()[0], s.as_bytes()[0].to_ascii_uppercase());
        prop_assert_eq!(&out.as_bytes()[1..], &s.as_bytes()[1..]);
    }

    #[test]
    fn repeat_peels_off_one_copy(s in any_bytes(), times in 0usize..4) {
        let slicer = Slicer::new();
        prop_assert_eq!(
            slicer.repeat(&s, times + 1).unwrap(),
            slicer.concat(&slicer.repeat(&s, times).unwrap(), &s).unwrap()
        );
    }

    #[test]
    fn reverse_swaps_concatenation_order(a in any_bytes(), b in any_bytes()) {
        let slicer = Slicer::new();
        let joined = slicer.concat(&a, &b).unwrap();
        prop_assert_eq!(
            slicer.reverse(&joined).unwrap(),
            slicer
                .concat(&slicer.reverse(&b).unwrap(), &slicer.reverse(&a).unwrap())
                .unwrap()
        );
    }
}
