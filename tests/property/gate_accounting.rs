//! Gate accounting laws: an operation charges exactly the bytes its result
//! keeps, and a declined grant leaves the meter where it was.

use super::common::{bs, quota_slicer};
use super::{dense_bytes, dense_pattern};
use culter::ByteString;
use proptest::prelude::*;

/// Large enough that nothing in these tests is ever declined.
const OPEN_BUDGET: usize = 1 << 20;

proptest! {
    #[test]
    fn constructors_charge_their_result_length(s in dense_bytes()) {
        let (slicer, quota) = quota_slicer(OPEN_BUDGET);

        let before = quota.used();
        let copied = slicer.copy(&s).unwrap();
        prop_assert_eq!(quota.used() - before, copied.len());

        let before = quota.used();
        let reversed = slicer.reverse(&s).unwrap();
        prop_assert_eq!(quota.used() - before, reversed.len());

        let before = quota.used();
        let upper = slicer.to_uppercase(&s).unwrap();
        prop_assert_eq!(quota.used() - before, upper.len());
    }

    #[test]
    fn replace_keeps_only_the_output_charged(
        hay in dense_bytes(),
        pat in dense_pattern(),
        rep in dense_bytes(),
    ) {
        let (slicer, quota) = quota_slicer(OPEN_BUDGET);
        let before = quota.used();
        let out = slicer.replace(&hay, &pat, &rep).unwrap();
        // The scratch index storage is refunded before returning.
        prop_assert_eq!(quota.used() - before, out.len());
    }

    #[test]
    fn match_indices_keep_one_slot_per_match(
        hay in dense_bytes(),
        pat in dense_pattern(),
    ) {
        let (slicer, quota) = quota_slicer(OPEN_BUDGET);
        let before = quota.used();
        let indices = slicer.match_indices(&hay, &pat).unwrap();
        prop_assert_eq!(
            quota.used() - before,
            indices.len() * std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn split_charges_the_spine_and_the_surviving_bytes(
        input in dense_bytes(),
        delim in prop::sample::select(vec![b'a', b'b']),
    ) {
        let (slicer, quota) = quota_slicer(OPEN_BUDGET);
        let before = quota.used();
        let parts = slicer.split(&input, delim).unwrap();
        let spine = parts.len() * std::mem::size_of::<ByteString>();
        let content: usize = parts.iter().map(ByteString::len).sum();
        prop_assert_eq!(quota.used() - before, spine + content);
    }

    #[test]
    fn byte_arrays_charge_four_bytes_per_code(s in dense_bytes()) {
        let (slicer, quota) = quota_slicer(OPEN_BUDGET);
        let before = quota.used();
        let codes = slicer.to_byte_array(&s).unwrap();
        prop_assert_eq!(quota.used() - before, codes.len() * 4);
    }

    #[test]
    fn declined_operations_charge_nothing(
        input in dense_bytes(),
        limit in 0usize..4,
    ) {
        let (slicer, quota) = quota_slicer(limit);
        // Burn most of the budget so the attempts below are declined.
        let _held = slicer.copy(&bs(&"x".repeat(limit))).unwrap();
        let before = quota.used();

        let attempts = [
            slicer.copy(&input).map(|_| ()),
            slicer.replace(&input, &bs("a"), &bs("zz")).map(|_| ()),
            slicer.split(&input, b'a').map(|_| ()),
            slicer.to_byte_array(&input).map(|_| ()),
        ];
        for attempt in attempts {
            if attempt.is_err() {
                prop_assert_eq!(quota.used(), before);
            }
        }
        prop_assert!(quota.used() <= limit);
    }
}
