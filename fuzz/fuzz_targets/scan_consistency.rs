// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the pattern scans.
//!
//! Three operations share one definition of a match; if they ever disagree
//! on garbage input, the documented scan policy is broken. The fuzzer
//! checks count/indices agreement, index exactness, and the replace length
//! law on every input it can invent.

#![no_main]

use arbitrary::Arbitrary;
use culter::{ByteString, Slicer, StringError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScanInput {
    hay: Vec<u8>,
    pat: Vec<u8>,
    rep: Vec<u8>,
}

fuzz_target!(|input: ScanInput| {
    let slicer = Slicer::new();
    let hay = ByteString::from(input.hay);
    let pat = ByteString::from(input.pat);
    let rep = ByteString::from(input.rep);

    if pat.is_empty() {
        // Every scan must reject the empty pattern, never guess.
        assert_eq!(
            slicer.count_matches(&hay, &pat),
            Err(StringError::EmptyPattern)
        );
        assert_eq!(
            slicer.match_indices(&hay, &pat),
            Err(StringError::EmptyPattern)
        );
        assert_eq!(slicer.replace(&hay, &pat, &rep), Err(StringError::EmptyPattern));
        return;
    }

    let count = slicer.count_matches(&hay, &pat).expect("ungated count");
    let indices = slicer.match_indices(&hay, &pat).expect("ungated indices");

    // The index list is the count, spelled out.
    assert_eq!(indices.len(), count);
    for pair in indices.windows(2) {
        assert!(pair[0] < pair[1], "indices must ascend");
    }
    for &i in &indices {
        assert_eq!(
            &hay.as_bytes()[i..i + pat.len()],
            pat.as_bytes(),
            "index {} does not start a match",
            i
        );
    }

    // Replace length law, with the consumed count recomputed independently.
    let out = slicer.replace(&hay, &pat, &rep).expect("ungated replace");
    let mut consumed = 0usize;
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if &hay.as_bytes()[i..i + pat.len()] == pat.as_bytes() {
            consumed += 1;
            i += pat.len();
        } else {
            i += 1;
        }
    }
    assert_eq!(
        out.len(),
        hay.len() - consumed * pat.len() + consumed * rep.len()
    );
    // Non-overlapping consumption can never exceed the overlapping count.
    assert!(consumed <= count);
});
