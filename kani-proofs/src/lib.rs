// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for culter's slicing primitives.
//!
//! This standalone crate extracts the index-validated buffer math behind
//! dual-direction slicing and splicing and provides mathematical proofs of
//! its correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: slice_inclusive and splice_at never panic for any input
//! 2. **Validation**: out-of-range endpoints always fail, naming the offender
//! 3. **Length laws**: `abs(from - to) + 1` for slices, `base + insert` for
//!    splices

/// Largest symbolic buffer the proofs explore. Buffer math has no
/// length-dependent branches past this size.
pub const MAX_BUF: usize = 6;

// ============================================================================
// SLICING PRIMITIVES (copied from src/construct.rs)
// ============================================================================

/// Error type for failed buffer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceError {
    OutOfRange { index: usize, len: usize },
}

/// The inclusive slice of `bytes` between positions `from` and `to`.
///
/// `from <= to` yields the bytes in order, `from > to` yields them reversed.
/// Both endpoints must name a byte, so the empty buffer rejects everything.
/// `from` is validated before `to`.
pub fn slice_inclusive(bytes: &[u8], from: usize, to: usize) -> Result<Vec<u8>, SliceError> {
    let len = bytes.len();
    if from >= len {
        return Err(SliceError::OutOfRange { index: from, len });
    }
    if to >= len {
        return Err(SliceError::OutOfRange { index: to, len });
    }

    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    let mut out = bytes[lo..=hi].to_vec();
    if from > to {
        out.reverse();
    }
    Ok(out)
}

/// `base` with `insert` spliced in so that it starts at position `index`.
///
/// `index` ranges over `0..=base.len()`: 0 prepends, `base.len()` appends.
pub fn splice_at(base: &[u8], insert: &[u8], index: usize) -> Result<Vec<u8>, SliceError> {
    if index > base.len() {
        return Err(SliceError::OutOfRange {
            index,
            len: base.len(),
        });
    }

    let mut out = Vec::with_capacity(base.len() + insert.len());
    out.extend_from_slice(&base[..index]);
    out.extend_from_slice(insert);
    out.extend_from_slice(&base[index..]);
    Ok(out)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn symbolic_buffer() -> ([u8; MAX_BUF], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_BUF);
        let mut bytes = [0u8; MAX_BUF];
        for i in 0..len {
            bytes[i] = kani::any();
        }
        (bytes, len)
    }

    /// slice_inclusive never panics, for endpoints anywhere in usize.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_slice_no_panic() {
        let (buf, len) = symbolic_buffer();
        let from: usize = kani::any();
        let to: usize = kani::any();

        // This must not panic (may return Err, that's fine)
        match slice_inclusive(&buf[..len], from, to) {
            Ok(out) => {
                kani::assert(from < len && to < len, "Ok requires in-range endpoints");
                kani::assert(
                    out.len() == from.abs_diff(to) + 1,
                    "Slice length must be abs(from - to) + 1",
                );
            }
            Err(SliceError::OutOfRange { index, len: n }) => {
                kani::assert(n == len, "Error must carry the checked length");
                kani::assert(index >= len, "Reported index must be out of range");
                // from is validated first, so it wins when both offend.
                let expected = if from >= len { from } else { to };
                kani::assert(index == expected, "Error must name the first offender");
            }
        }
    }

    /// Forward slices reproduce the buffer bytes positionally.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_slice_forward_exact() {
        let (buf, len) = symbolic_buffer();
        let from: usize = kani::any_where(|&n| n < MAX_BUF);
        let to: usize = kani::any_where(|&n| n < MAX_BUF);
        kani::assume(from <= to && to < len);

        let out = slice_inclusive(&buf[..len], from, to).unwrap();
        for k in 0..out.len() {
            kani::assert(out[k] == buf[from + k], "Forward slice must copy in order");
        }
    }

    /// Swapping the endpoints reverses the slice exactly.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_slice_direction_flip() {
        let (buf, len) = symbolic_buffer();
        let from: usize = kani::any_where(|&n| n < MAX_BUF);
        let to: usize = kani::any_where(|&n| n < MAX_BUF);
        kani::assume(from < len && to < len);

        let fwd = slice_inclusive(&buf[..len], from, to).unwrap();
        let bwd = slice_inclusive(&buf[..len], to, from).unwrap();
        kani::assert(fwd.len() == bwd.len(), "Both directions have one length");
        for k in 0..fwd.len() {
            kani::assert(
                fwd[k] == bwd[fwd.len() - 1 - k],
                "Flipped endpoints must mirror the bytes",
            );
        }
    }

    /// splice_at never panics and accepts exactly the indexes 0..=len.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_splice_no_panic() {
        let (base, base_len) = symbolic_buffer();
        let (ins, ins_len) = symbolic_buffer();
        let index: usize = kani::any();

        match splice_at(&base[..base_len], &ins[..ins_len], index) {
            Ok(out) => {
                kani::assert(index <= base_len, "Ok requires index <= base length");
                kani::assert(
                    out.len() == base_len + ins_len,
                    "Splice length must be base + insert",
                );
            }
            Err(SliceError::OutOfRange { index: i, len: n }) => {
                kani::assert(i == index && n == base_len, "Error must echo the inputs");
                kani::assert(index > base_len, "Only past-the-end indexes fail");
            }
        }
    }

    /// A splice keeps both inputs intact and in position.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_splice_preserves_order() {
        let (base, base_len) = symbolic_buffer();
        let (ins, ins_len) = symbolic_buffer();
        let index: usize = kani::any_where(|&n| n <= MAX_BUF);
        kani::assume(index <= base_len);

        let out = splice_at(&base[..base_len], &ins[..ins_len], index).unwrap();
        for k in 0..index {
            kani::assert(out[k] == base[k], "Prefix bytes must be untouched");
        }
        for k in 0..ins_len {
            kani::assert(out[index + k] == ins[k], "Inserted bytes must start at index");
        }
        for k in index..base_len {
            kani::assert(out[ins_len + k] == base[k], "Suffix bytes must shift right");
        }
    }
}
