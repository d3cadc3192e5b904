// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for inclusive dual-direction slicing.
//!
//! Endpoint validation is the whole safety story here: every in-range pair
//! must produce exactly `abs(from - to) + 1` bytes, every out-of-range pair
//! must fail cleanly, and nothing may panic either way.

#![no_main]

use arbitrary::Arbitrary;
use culter::{ByteString, Slicer, StringError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RangeInput {
    bytes: Vec<u8>,
    from: usize,
    to: usize,
}

fuzz_target!(|input: RangeInput| {
    let slicer = Slicer::new();
    let s = ByteString::from(input.bytes);

    match slicer.substring(&s, input.from, input.to) {
        Ok(out) => {
            // Only in-range endpoint pairs may succeed.
            assert!(input.from < s.len() && input.to < s.len());
            assert_eq!(out.len(), input.from.abs_diff(input.to) + 1);

            // Direction flip reverses the bytes exactly.
            let flipped = slicer
                .substring(&s, input.to, input.from)
                .expect("in-range endpoints slice both ways");
            let rereversed = slicer.reverse(&flipped).expect("ungated reverse");
            assert_eq!(out, rereversed);

            // Forward slices agree with direct indexing.
            if input.from <= input.to {
                assert_eq!(out.as_bytes(), &s.as_bytes()[input.from..=input.to]);
            }
        }
        Err(StringError::IndexOutOfRange { index, len }) => {
            assert_eq!(len, s.len());
            assert!(index >= s.len());
            assert!(index == input.from || index == input.to);
        }
        Err(other) => panic!("unexpected error from substring: {}", other),
    }
});
