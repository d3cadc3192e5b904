// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for segmentation and joining.
//!
//! The edge rules (interior empties kept, trailing segment dropped) make
//! the round trip conditional: join inverts split exactly when the input
//! does not end with the delimiter. The fuzzer pins that condition and the
//! byte conservation law on arbitrary input.

#![no_main]

use arbitrary::Arbitrary;
use culter::{ByteString, Slicer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SplitInput {
    bytes: Vec<u8>,
    delim: u8,
}

fuzz_target!(|input: SplitInput| {
    let slicer = Slicer::new();
    let s = ByteString::from(input.bytes);
    let delim = input.delim;

    let parts = slicer.split(&s, delim).expect("ungated split");

    // No segment may contain the delimiter.
    for part in &parts {
        assert!(!part.as_bytes().contains(&delim));
    }

    // Every non-delimiter byte survives, in order.
    let delims = s.as_bytes().iter().filter(|&&b| b == delim).count();
    let content: usize = parts.iter().map(ByteString::len).sum();
    assert_eq!(content, s.len() - delims);

    // Segment count follows the trailing-delimiter rule.
    let expected = if s.is_empty() {
        0
    } else if s.as_bytes()[s.len() - 1] == delim {
        delims
    } else {
        delims + 1
    };
    assert_eq!(parts.len(), expected);

    // Join inverts split unless a trailing delimiter was dropped, in which
    // case exactly that one byte is missing.
    let rejoined = slicer.join(&parts, Some(delim)).expect("ungated join");
    if s.last_byte() != Some(delim) {
        assert_eq!(rejoined, s);
    } else {
        assert_eq!(rejoined.len(), s.len() - 1);
        assert_eq!(rejoined.as_bytes(), &s.as_bytes()[..s.len() - 1]);
    }
});
