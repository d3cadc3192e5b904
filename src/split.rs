//! Segmentation and joining.
//!
//! [`split`](crate::Slicer::split) cuts at every occurrence of a single
//! delimiter byte. The edge rules are part of the contract and deliberately
//! asymmetric:
//!
//! - consecutive delimiters produce empty segments between them,
//! - a leading delimiter produces an empty first segment,
//! - a trailing delimiter produces **no** empty last segment,
//! - the empty sequence produces an empty array.
//!
//! So `"a,b,,c"` has four segments but `"a,b,c,"` has three.
//! [`join`](crate::Slicer::join) is the near-inverse: it never adds a
//! delimiter before the first or after the last part, which is why a
//! trailing delimiter cannot round-trip.
//!
//! Both charge the gate once for everything they will build, so a declined
//! grant can never leave a half-built array behind.

use crate::contracts;
use crate::slicer::Slicer;
use crate::types::{ByteString, StringError};

impl Slicer {
    /// The segments of `s` between occurrences of `delim`.
    ///
    /// Edge rules are in the module docs; the short version is that every
    /// delimiter ends a segment, and the end of the sequence ends one more
    /// unless a delimiter just did.
    pub fn split(&self, s: &ByteString, delim: u8) -> Result<Vec<ByteString>, StringError> {
        if s.is_empty() {
            return Ok(Vec::new());
        }
        let bytes = s.as_bytes();

        let delims = bytes.iter().filter(|&&b| b == delim).count();
        let segments = if bytes[bytes.len() - 1] == delim {
            delims
        } else {
            delims + 1
        };

        // One charge for the array spine, one for every segment byte. The
        // delimiters themselves are the only bytes that do not reappear.
        let spine = segments * std::mem::size_of::<ByteString>();
        let content = bytes.len() - delims;
        self.grant_zeroed(spine)?;
        if let Err(e) = self.grant(content) {
            self.refund(spine);
            return Err(e);
        }

        let mut out = Vec::with_capacity(segments);
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if b == delim {
                out.push(ByteString::from(&bytes[start..i]));
                start = i + 1;
            }
        }
        if start < bytes.len() {
            out.push(ByteString::from(&bytes[start..]));
        }
        contracts::check_split_segments(s, delim, &out);
        Ok(out)
    }

    /// [`split`](Slicer::split) on the newline byte `b'\n'`.
    pub fn split_lines(&self, s: &ByteString) -> Result<Vec<ByteString>, StringError> {
        self.split(s, b'\n')
    }

    /// All parts concatenated in order, with `delim` between consecutive
    /// parts when given.
    ///
    /// The delimiter appears strictly between parts: never before the
    /// first, never after the last, and not at all for zero or one part.
    /// An empty `parts` yields the empty sequence.
    pub fn join(
        &self,
        parts: &[ByteString],
        delim: Option<u8>,
    ) -> Result<ByteString, StringError> {
        let seams = if delim.is_some() {
            parts.len().saturating_sub(1)
        } else {
            0
        };
        let total = parts
            .iter()
            .try_fold(seams, |acc, p| acc.checked_add(p.len()))
            .ok_or(StringError::AllocationFailure {
                requested: usize::MAX,
            })?;
        self.grant(total)?;

        let mut out = Vec::with_capacity(total);
        for (i, part) in parts.iter().enumerate() {
            out.extend_from_slice(part.as_bytes());
            if let Some(d) = delim {
                if i != parts.len() - 1 {
                    out.push(d);
                }
            }
        }
        contracts::check_join_length(parts, delim, out.len());
        Ok(ByteString::from(out))
    }
}
