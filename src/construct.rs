//! Slicing and splicing: the operations that build a new sequence from the
//! bytes of existing ones.
//!
//! All of these compute the exact output length up front, charge it to the
//! gate, then write every byte exactly once. None of them look at byte
//! values; they move bytes by position only.

use crate::contracts;
use crate::slicer::Slicer;
use crate::types::{ByteString, StringError};

impl Slicer {
    /// A fresh sequence with the same bytes as `s`.
    pub fn copy(&self, s: &ByteString) -> Result<ByteString, StringError> {
        self.grant(s.len())?;
        Ok(ByteString::from(s.as_bytes()))
    }

    /// `s` repeated `times` times, back to back.
    ///
    /// `times == 0` yields the empty sequence. A product that does not fit
    /// in `usize` is reported as `AllocationFailure` before anything is
    /// charged; the `requested` payload is saturated in that case.
    pub fn repeat(&self, s: &ByteString, times: usize) -> Result<ByteString, StringError> {
        let total = s
            .len()
            .checked_mul(times)
            .ok_or(StringError::AllocationFailure {
                requested: usize::MAX,
            })?;
        self.grant(total)?;

        let mut out = Vec::with_capacity(total);
        for _ in 0..times {
            out.extend_from_slice(s.as_bytes());
        }
        contracts::check_repeat_length(s.len(), times, out.len());
        Ok(ByteString::from(out))
    }

    /// The inclusive slice of `s` between positions `from` and `to`.
    ///
    /// Direction follows the endpoints: `from <= to` yields
    /// `s[from..=to]` in order, `from > to` yields `s[to..=from]`
    /// *reversed*. Either way the result holds `abs(from - to) + 1` bytes,
    /// so a full reversal is `substring(s, len - 1, 0)`.
    ///
    /// Both endpoints must name a byte; the empty sequence has none, so any
    /// call on it fails `IndexOutOfRange`.
    pub fn substring(
        &self,
        s: &ByteString,
        from: usize,
        to: usize,
    ) -> Result<ByteString, StringError> {
        let len = s.len();
        if from >= len {
            return Err(StringError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(StringError::IndexOutOfRange { index: to, len });
        }

        let out_len = from.abs_diff(to) + 1;
        self.grant(out_len)?;

        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        let mut out = s.as_bytes()[lo..=hi].to_vec();
        if from > to {
            out.reverse();
        }
        contracts::check_substring_length(from, to, out.len());
        Ok(ByteString::from(out))
    }

    /// `a` followed by `b`.
    pub fn concat(&self, a: &ByteString, b: &ByteString) -> Result<ByteString, StringError> {
        let total = a.len() + b.len();
        self.grant(total)?;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(a.as_bytes());
        out.extend_from_slice(b.as_bytes());
        contracts::check_concat_length(a.len(), b.len(), out.len());
        Ok(ByteString::from(out))
    }

    /// `base` with `insert` spliced in so that it starts at position
    /// `index`.
    ///
    /// `index` ranges over `0..=base.len()`: 0 prepends, `base.len()`
    /// appends. Anything past that fails `IndexOutOfRange`.
    pub fn insert(
        &self,
        base: &ByteString,
        insert: &ByteString,
        index: usize,
    ) -> Result<ByteString, StringError> {
        if index > base.len() {
            return Err(StringError::IndexOutOfRange {
                index,
                len: base.len(),
            });
        }

        let total = base.len() + insert.len();
        self.grant(total)?;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&base.as_bytes()[..index]);
        out.extend_from_slice(insert.as_bytes());
        out.extend_from_slice(&base.as_bytes()[index..]);
        contracts::check_concat_length(base.len(), insert.len(), out.len());
        Ok(ByteString::from(out))
    }

    /// The bytes of `s` in reverse order.
    pub fn reverse(&self, s: &ByteString) -> Result<ByteString, StringError> {
        self.grant(s.len())?;

        let mut out = s.as_bytes().to_vec();
        out.reverse();
        Ok(ByteString::from(out))
    }
}
