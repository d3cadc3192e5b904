//! The operation handle: a [`Slicer`] bundles an allocation gate with the
//! constructing operations.
//!
//! Everything that builds a new sequence goes through a `Slicer`, so every
//! byte of output is accounted to exactly one gate. Operations that only
//! read (`len`, equality, the prefix/suffix predicates, `count_matches`) live
//! on [`ByteString`] itself and never touch the gate.
//!
//! The constructing operations are spread over the modules that own their
//! algorithms: slicing and splicing in `construct`, scan-and-rewrite in
//! `pattern`, segmentation in `split`, letter mapping in `case`. This module
//! holds the handle, the gate plumbing, and the single-byte and byte-code
//! conversions.

use std::sync::Arc;

use crate::alloc::{AllocGate, SystemAlloc};
use crate::types::{ByteString, StringError};

// =============================================================================
// SLICER
// =============================================================================

/// Handle through which all constructing operations run.
///
/// A `Slicer` is cheap to clone (the gate is shared behind an [`Arc`]) and
/// holds no other state; clones account against the same gate. It is `Send`
/// and `Sync` because gates are.
#[derive(Clone)]
pub struct Slicer {
    gate: Arc<dyn AllocGate>,
}

impl Slicer {
    /// A slicer on the default gate ([`SystemAlloc`]), which always grants.
    pub fn new() -> Self {
        Slicer::with_gate(Arc::new(SystemAlloc))
    }

    /// A slicer that accounts every construction against `gate`.
    pub fn with_gate(gate: Arc<dyn AllocGate>) -> Self {
        Slicer { gate }
    }

    /// The installed gate.
    #[inline]
    pub fn gate(&self) -> &Arc<dyn AllocGate> {
        &self.gate
    }

    // ------------------------------------------------------------------
    // Gate plumbing shared by the operation modules.
    // ------------------------------------------------------------------

    /// Charge `bytes` to the gate or fail with `AllocationFailure`.
    pub(crate) fn grant(&self, bytes: usize) -> Result<(), StringError> {
        if self.gate.allocate(bytes) {
            Ok(())
        } else {
            Err(StringError::AllocationFailure { requested: bytes })
        }
    }

    /// Charge `bytes` of zeroed array storage or fail with
    /// `AllocationFailure`.
    pub(crate) fn grant_zeroed(&self, bytes: usize) -> Result<(), StringError> {
        if self.gate.allocate_zeroed(bytes) {
            Ok(())
        } else {
            Err(StringError::AllocationFailure { requested: bytes })
        }
    }

    /// Resize a standing charge from `old` to `new` bytes. On decline the
    /// old charge stands and the caller keeps its buffer.
    pub(crate) fn regrant(&self, old: usize, new: usize) -> Result<(), StringError> {
        if self.gate.reallocate(old, new) {
            Ok(())
        } else {
            Err(StringError::AllocationFailure { requested: new })
        }
    }

    /// Return a charge for scratch storage the operation is done with.
    pub(crate) fn refund(&self, bytes: usize) {
        self.gate.release(bytes);
    }

    // ------------------------------------------------------------------
    // Single-byte and byte-code conversions.
    // ------------------------------------------------------------------

    /// The byte at `index` as a fresh length-1 sequence.
    ///
    /// Fails `IndexOutOfRange` when `index >= s.len()`, which covers the
    /// empty sequence. The non-allocating sibling is
    /// [`ByteString::byte_at`].
    pub fn char_at(&self, s: &ByteString, index: usize) -> Result<ByteString, StringError> {
        match s.byte_at(index) {
            Some(b) => self.from_byte(b),
            None => Err(StringError::IndexOutOfRange {
                index,
                len: s.len(),
            }),
        }
    }

    /// A fresh length-1 sequence holding `byte`.
    pub fn from_byte(&self, byte: u8) -> Result<ByteString, StringError> {
        self.grant(1)?;
        Ok(ByteString::from(&[byte][..]))
    }

    /// The sequence as an array of byte codes, one `u32` per byte.
    pub fn to_byte_array(&self, s: &ByteString) -> Result<Vec<u32>, StringError> {
        self.grant_zeroed(s.len() * std::mem::size_of::<u32>())?;
        Ok(s.as_bytes().iter().map(|&b| u32::from(b)).collect())
    }

    /// A sequence rebuilt from byte codes. Each code is truncated to its low
    /// byte, so round-tripping holds exactly for codes below 256.
    pub fn from_byte_array(&self, codes: &[u32]) -> Result<ByteString, StringError> {
        self.grant(codes.len())?;
        let bytes: Vec<u8> = codes.iter().map(|&c| c as u8).collect();
        Ok(ByteString::from(bytes))
    }
}

impl Default for Slicer {
    fn default() -> Self {
        Slicer::new()
    }
}
