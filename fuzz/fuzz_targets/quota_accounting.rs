// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz the quota gate's bookkeeping under arbitrary operation mixes.
//!
//! Three invariants carry the feature: `used()` never exceeds the limit, a
//! failed operation leaves the ledger exactly where it was, and a successful
//! one keeps exactly its result charged. Drift in any of them means quotas
//! leak or lie under sustained load.

#![no_main]

use std::mem::size_of;
use std::sync::Arc;

use arbitrary::Arbitrary;
use culter::{ByteQuota, ByteString, Slicer, StringError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QuotaInput {
    limit: u16,
    bytes: Vec<u8>,
    pattern: Vec<u8>,
    replacement: Vec<u8>,
    delim: u8,
    times: u8,
}

/// Runs one gated call and audits the ledger around it: success charges
/// exactly what the result keeps, failure charges nothing, and the limit
/// holds either way.
fn check<T>(
    quota: &ByteQuota,
    call: impl FnOnce() -> Result<T, StringError>,
    kept: impl FnOnce(&T) -> usize,
) -> Option<T> {
    let before = quota.used();
    let outcome = call();
    match &outcome {
        Ok(out) => assert_eq!(quota.used(), before + kept(out)),
        Err(_) => assert_eq!(quota.used(), before),
    }
    assert!(quota.used() <= quota.limit());
    outcome.ok()
}

fuzz_target!(|input: QuotaInput| {
    let quota = Arc::new(ByteQuota::new(usize::from(input.limit)));
    let slicer = Slicer::with_gate(Arc::clone(&quota));

    let s = ByteString::from(input.bytes);
    let pat = ByteString::from(input.pattern);
    let rep = ByteString::from(input.replacement);

    check(&quota, || slicer.copy(&s), |out| out.len());
    check(&quota, || slicer.reverse(&s), |out| out.len());
    check(&quota, || slicer.to_uppercase(&s), |out| out.len());
    check(
        &quota,
        || slicer.repeat(&s, usize::from(input.times)),
        |out| out.len(),
    );
    if !s.is_empty() {
        check(&quota, || slicer.substring(&s, 0, s.len() - 1), |out| {
            out.len()
        });
    }

    let parts = check(&quota, || slicer.split(&s, input.delim), |parts| {
        parts.len() * size_of::<ByteString>()
            + parts.iter().map(ByteString::len).sum::<usize>()
    });
    if let Some(parts) = parts {
        check(&quota, || slicer.join(&parts, Some(input.delim)), |out| {
            out.len()
        });
    }

    check(&quota, || slicer.match_indices(&s, &pat), |hits| {
        hits.len() * size_of::<usize>()
    });
    check(&quota, || slicer.replace(&s, &pat, &rep), |out| out.len());
    check(&quota, || slicer.to_byte_array(&s), |codes| {
        codes.len() * size_of::<u32>()
    });

    // Counting is a pure scan; the gate must never hear about it.
    let before = quota.used();
    let _ = slicer.count_matches(&s, &pat);
    assert_eq!(quota.used(), before);
});
