//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::sync::Arc;

use crate::alloc::ByteQuota;
use crate::slicer::Slicer;
use crate::types::ByteString;

/// Build a sequence from a literal.
///
/// This is the canonical conversion used across all tests; it pins the
/// element type where `.into()` would be ambiguous.
pub fn bs(s: &str) -> ByteString {
    ByteString::from(s)
}

/// Build a sequence array from literals.
pub fn seq(parts: &[&str]) -> Vec<ByteString> {
    parts.iter().map(|p| ByteString::from(*p)).collect()
}

/// A slicer whose gate declines everything past `limit` live bytes,
/// returned together with the quota for inspection.
pub fn quota_slicer(limit: usize) -> (Slicer, Arc<ByteQuota>) {
    let quota = Arc::new(ByteQuota::new(limit));
    (Slicer::with_gate(quota.clone()), quota)
}
