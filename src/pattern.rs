//! Pattern scanning: counting, locating, and rewriting matches.
//!
//! One scan policy rules this module. A *qualifying start* is a position `i`
//! with `i + len(pat) <= len(s)` whose window `s[i..i + len(pat)]` equals
//! the pattern byte for byte. [`count_matches`](crate::Slicer::count_matches)
//! and [`match_indices`](crate::Slicer::match_indices) see every qualifying
//! start, including overlapping ones (`"aa"` occurs twice in `"aaa"`).
//! [`replace`](crate::Slicer::replace) deliberately does not: each match it
//! consumes advances the scan past the whole pattern, so its matches never
//! overlap and `replace("aaa", "aa", "b")` is `"ba"`, not `"bb"`. Both
//! policies are part of the contract; tests pin the asymmetry.
//!
//! Zero-length patterns qualify everywhere and mean nothing; every scan
//! rejects them with [`EmptyPattern`](crate::StringError::EmptyPattern)
//! instead of guessing.
//!
//! The prefix/suffix predicates live directly on [`ByteString`]: they
//! allocate nothing and need no gate.

use crate::contracts;
use crate::slicer::Slicer;
use crate::types::{ByteString, StringError};

// =============================================================================
// PREDICATES
// =============================================================================

impl ByteString {
    /// True iff the first `pattern.len()` bytes equal `pattern`.
    ///
    /// The empty pattern is a prefix of everything; a pattern longer than
    /// the sequence is a prefix of nothing.
    #[inline]
    pub fn starts_with(&self, pattern: &ByteString) -> bool {
        self.as_bytes().starts_with(pattern.as_bytes())
    }

    /// True iff the trailing `pattern.len()` bytes equal `pattern`.
    ///
    /// Empty and oversized patterns behave as in
    /// [`starts_with`](ByteString::starts_with).
    #[inline]
    pub fn ends_with(&self, pattern: &ByteString) -> bool {
        self.as_bytes().ends_with(pattern.as_bytes())
    }

    /// True iff the final byte equals `byte`. The empty sequence has no
    /// final byte and fails `EmptyInput`.
    pub fn ends_with_byte(&self, byte: u8) -> Result<bool, StringError> {
        match self.last_byte() {
            Some(last) => Ok(last == byte),
            None => Err(StringError::EmptyInput),
        }
    }
}

// =============================================================================
// SCANS
// =============================================================================

impl Slicer {
    /// Number of qualifying starts of `pattern` in `s`, overlaps included.
    ///
    /// A pure scan: nothing is allocated and the gate is not consulted.
    pub fn count_matches(
        &self,
        s: &ByteString,
        pattern: &ByteString,
    ) -> Result<usize, StringError> {
        if pattern.is_empty() {
            return Err(StringError::EmptyPattern);
        }
        let hay = s.as_bytes();
        let pat = pattern.as_bytes();
        if pat.len() > hay.len() {
            return Ok(0);
        }

        let mut matches = 0;
        for i in 0..=(hay.len() - pat.len()) {
            if &hay[i..i + pat.len()] == pat {
                matches += 1;
            }
        }
        Ok(matches)
    }

    /// Every qualifying start of `pattern` in `s`, ascending.
    ///
    /// Agrees with [`count_matches`](Slicer::count_matches) by construction:
    /// the returned vector's length is exactly the match count. The index
    /// storage is charged at its worst case up front and resized down to
    /// the matches actually found before returning.
    pub fn match_indices(
        &self,
        s: &ByteString,
        pattern: &ByteString,
    ) -> Result<Vec<usize>, StringError> {
        if pattern.is_empty() {
            return Err(StringError::EmptyPattern);
        }
        let hay = s.as_bytes();
        let pat = pattern.as_bytes();
        if pat.len() > hay.len() {
            return Ok(Vec::new());
        }

        let slots = hay.len() - pat.len() + 1;
        let spine = slots * std::mem::size_of::<usize>();
        self.grant_zeroed(spine)?;

        let mut indices = Vec::with_capacity(slots);
        for i in 0..slots {
            if &hay[i..i + pat.len()] == pat {
                indices.push(i);
            }
        }

        let kept = indices.len() * std::mem::size_of::<usize>();
        if let Err(e) = self.regrant(spine, kept) {
            self.refund(spine);
            return Err(e);
        }
        contracts::check_match_indices(s, pattern, &indices);
        Ok(indices)
    }

    /// `s` with every non-overlapping occurrence of `pattern` replaced by
    /// `replacement`, scanning left to right.
    ///
    /// Each consumed match advances the scan past the full pattern, so
    /// fewer occurrences may be consumed than
    /// [`count_matches`](Slicer::count_matches) reports when matches
    /// overlap. With `m` consumed matches the result length is exactly
    /// `s.len() - m * pattern.len() + m * replacement.len()`.
    pub fn replace(
        &self,
        s: &ByteString,
        pattern: &ByteString,
        replacement: &ByteString,
    ) -> Result<ByteString, StringError> {
        if pattern.is_empty() {
            return Err(StringError::EmptyPattern);
        }
        let hay = s.as_bytes();
        let pat = pattern.as_bytes();
        let rep = replacement.as_bytes();

        // Pass 1: count consumed matches without allocating.
        let mut consumed = 0usize;
        let mut i = 0;
        while i + pat.len() <= hay.len() {
            if &hay[i..i + pat.len()] == pat {
                consumed += 1;
                i += pat.len();
            } else {
                i += 1;
            }
        }

        let out_len = consumed
            .checked_mul(rep.len())
            .and_then(|grown| (hay.len() - consumed * pat.len()).checked_add(grown))
            .ok_or(StringError::AllocationFailure {
                requested: usize::MAX,
            })?;

        // Pass 2: record the match starts in scratch storage.
        let scratch = consumed * std::mem::size_of::<usize>();
        self.grant(scratch)?;
        let mut starts = Vec::with_capacity(consumed);
        let mut i = 0;
        while i + pat.len() <= hay.len() {
            if &hay[i..i + pat.len()] == pat {
                starts.push(i);
                i += pat.len();
            } else {
                i += 1;
            }
        }

        // Pass 3: splice the output.
        if let Err(e) = self.grant(out_len) {
            self.refund(scratch);
            return Err(e);
        }
        let mut out = Vec::with_capacity(out_len);
        let mut next = starts.iter().copied().peekable();
        let mut i = 0;
        while i < hay.len() {
            if next.peek() == Some(&i) {
                out.extend_from_slice(rep);
                i += pat.len();
                next.next();
            } else {
                out.push(hay[i]);
                i += 1;
            }
        }

        self.refund(scratch);
        contracts::check_replace_length(hay.len(), pat.len(), rep.len(), consumed, out.len());
        Ok(ByteString::from(out))
    }
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// These proofs cover the scan policy on small symbolic inputs. Run with:
// cargo kani
//
// Verified properties:
// 1. count_matches never panics and never reports more starts than exist
// 2. match_indices returns ascending, in-bounds, full-match starts
// 3. replace output length obeys the length law for consumed matches

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const MAX_HAY: usize = 6;
    const MAX_PAT: usize = 3;

    fn symbolic_sequence(max: usize) -> ByteString {
        let len: usize = kani::any_where(|&n| n <= max);
        let mut bytes = [0u8; MAX_HAY];
        for i in 0..len {
            bytes[i] = kani::any();
        }
        ByteString::from(&bytes[..len])
    }

    /// count_matches is bounded by the number of windows.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_count_matches_bounded() {
        let hay = symbolic_sequence(MAX_HAY);
        let pat = symbolic_sequence(MAX_PAT);

        match Slicer::new().count_matches(&hay, &pat) {
            Ok(count) => {
                kani::assert(!pat.is_empty(), "Ok only for non-empty patterns");
                kani::assert(
                    count <= hay.len(),
                    "Match count cannot exceed window count",
                );
            }
            Err(e) => {
                kani::assert(
                    e == StringError::EmptyPattern && pat.is_empty(),
                    "Only the empty pattern is rejected",
                );
            }
        }
    }

    /// Every reported index is an in-bounds, byte-exact match start.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_match_indices_exact() {
        let hay = symbolic_sequence(MAX_HAY);
        let pat = symbolic_sequence(MAX_PAT);
        kani::assume(!pat.is_empty());

        let indices = Slicer::new().match_indices(&hay, &pat).unwrap();
        let mut prev: Option<usize> = None;
        for &i in &indices {
            kani::assert(
                i + pat.len() <= hay.len(),
                "Reported window must fit in the haystack",
            );
            kani::assert(
                &hay.as_bytes()[i..i + pat.len()] == pat.as_bytes(),
                "Reported start must be a full match",
            );
            if let Some(p) = prev {
                kani::assert(p < i, "Indices must be strictly ascending");
            }
            prev = Some(i);
        }
    }

    /// Length law: len(out) == len(hay) - m*len(pat) + m*len(rep).
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_replace_length_law() {
        let hay = symbolic_sequence(MAX_HAY);
        let pat = symbolic_sequence(MAX_PAT);
        let rep = symbolic_sequence(MAX_PAT);
        kani::assume(!pat.is_empty());

        let slicer = Slicer::new();
        let out = slicer.replace(&hay, &pat, &rep).unwrap();

        // Recount consumed matches the way replace defines them.
        let mut m = 0usize;
        let mut i = 0;
        while i + pat.len() <= hay.len() {
            if &hay.as_bytes()[i..i + pat.len()] == pat.as_bytes() {
                m += 1;
                i += pat.len();
            } else {
                i += 1;
            }
        }

        kani::assert(
            out.len() == hay.len() - m * pat.len() + m * rep.len(),
            "Replace output length must obey the length law",
        );
    }
}
