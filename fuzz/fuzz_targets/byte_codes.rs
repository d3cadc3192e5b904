// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz the byte/code conversions.
//!
//! `to_byte_array` widens each byte to a `u32` and `from_byte_array` narrows
//! codes back down. If the pair silently reorders, drops, or sign-extends a
//! value, callers that stash text as code tables get corrupted bytes back.

#![no_main]

use arbitrary::Arbitrary;
use culter::{ByteString, Slicer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CodeInput {
    bytes: Vec<u8>,
    codes: Vec<u32>,
}

fuzz_target!(|input: CodeInput| {
    let slicer = Slicer::new();
    let s = ByteString::from(input.bytes);

    // Widening is positional and exact.
    let codes = slicer.to_byte_array(&s).expect("ungated widen");
    assert_eq!(codes.len(), s.len());
    for (code, byte) in codes.iter().zip(s.as_bytes()) {
        assert_eq!(*code, u32::from(*byte));
    }

    // Narrowing inverts widening.
    let back = slicer.from_byte_array(&codes).expect("ungated narrow");
    assert_eq!(back, s);

    // Arbitrary codes narrow by truncation to the low eight bits.
    let narrowed = slicer.from_byte_array(&input.codes).expect("ungated narrow");
    assert_eq!(narrowed.len(), input.codes.len());
    for (byte, code) in narrowed.as_bytes().iter().zip(&input.codes) {
        assert_eq!(*byte, *code as u8);
    }
});
