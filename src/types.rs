// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types everything else is built on.
//!
//! A [`ByteString`] is an owned, immutable run of single-byte characters with
//! an explicit length. There is no terminator byte and no hidden capacity:
//! what you see is exactly what was allocated. Every operation in this crate
//! borrows its inputs read-only and hands back a fresh `ByteString`, so two
//! values never alias the same storage.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ByteString**: `len() == bytes.len()`. Length is structural, O(1),
//!   and can never exceed the backing storage.
//! - **No interior mutation**: the byte slice is boxed and never exposed
//!   mutably. A constructed value holds the same bytes forever.
//! - **Error payloads**: every `IndexOutOfRange` carries the offending index
//!   and the length it was checked against, so callers can report precisely.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// BYTE STRING
// =============================================================================

/// An owned, immutable sequence of single-byte characters.
///
/// `ByteString` makes no claim about encoding: it is a run of bytes, usually
/// ASCII text, and all operations treat one byte as one character. Build one
/// from a `&str`, a byte slice, or a `Vec<u8>`; read it back with
/// [`as_bytes`](ByteString::as_bytes) or lossily via `Display`.
///
/// Equality is positional byte equality (same length, same byte at every
/// position). Ordering is lexicographic by byte value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteString {
    bytes: Box<[u8]>,
}

impl ByteString {
    /// The empty sequence.
    #[inline]
    pub fn new() -> Self {
        ByteString {
            bytes: Box::default(),
        }
    }

    /// Number of bytes in the sequence. O(1); `len()` of the empty sequence
    /// is 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True iff the sequence holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The byte at position `index`, or `None` past the end.
    ///
    /// This is the non-allocating companion to [`Slicer::char_at`]; use it
    /// when you want the byte value rather than a fresh length-1 sequence.
    ///
    /// [`Slicer::char_at`]: crate::Slicer::char_at
    #[inline]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// The final byte, or `None` for the empty sequence.
    #[inline]
    pub fn last_byte(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    /// Consume the sequence and take ownership of its bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl Default for ByteString {
    fn default() -> Self {
        ByteString::new()
    }
}

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        ByteString {
            bytes: value.as_bytes().into(),
        }
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        ByteString {
            bytes: value.into(),
        }
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        ByteString {
            bytes: value.into_boxed_slice(),
        }
    }
}

impl AsRef<[u8]> for ByteString {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

/// Lossy text rendering: non-UTF-8 runs come out as U+FFFD. The bytes
/// themselves are never altered; this is display only.
impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"")?;
        for &b in self.bytes.iter() {
            match b {
                b'"' => write!(f, "\\\"")?,
                b'\\' => write!(f, "\\\\")?,
                b'\n' => write!(f, "\\n")?,
                b'\r' => write!(f, "\\r")?,
                b'\t' => write!(f, "\\t")?,
                0x20..=0x7e => write!(f, "{}", b as char)?,
                _ => write!(f, "\\x{:02x}", b)?,
            }
        }
        write!(f, "\"")
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error type for failed sequence operations.
///
/// None of these are retried internally: they are precondition violations or
/// storage exhaustion, surfaced immediately. Nothing here is fatal to a host
/// process; every failure leaves the inputs untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringError {
    /// The allocation gate declined the request, or the result size
    /// overflowed `usize`.
    AllocationFailure { requested: usize },
    /// An index or range endpoint fell outside the sequence.
    IndexOutOfRange { index: usize, len: usize },
    /// A zero-length pattern was handed to a scan operation.
    EmptyPattern,
    /// A zero-length sequence was handed to an operation that needs at least
    /// one byte.
    EmptyInput,
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringError::AllocationFailure { requested } => {
                write!(f, "allocation of {} bytes declined", requested)
            }
            StringError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for sequence of length {}", index, len)
            }
            StringError::EmptyPattern => {
                write!(f, "pattern must contain at least one byte")
            }
            StringError::EmptyInput => {
                write!(f, "input sequence must contain at least one byte")
            }
        }
    }
}

impl std::error::Error for StringError {}
