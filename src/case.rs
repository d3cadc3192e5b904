//! ASCII letter mapping.
//!
//! Strictly the twenty-six ASCII letters in each direction: bytes in
//! `b'a'..=b'z'` and `b'A'..=b'Z'` are shifted by 32, every other byte is
//! copied verbatim. Accented letters, bytes past 127, digits and punctuation
//! all pass through untouched. Output length always equals input length.

use crate::slicer::Slicer;
use crate::types::{ByteString, StringError};

impl Slicer {
    /// `s` with every ASCII lowercase letter uppercased.
    pub fn to_uppercase(&self, s: &ByteString) -> Result<ByteString, StringError> {
        self.grant(s.len())?;
        let out: Vec<u8> = s.as_bytes().iter().map(|b| b.to_ascii_uppercase()).collect();
        Ok(ByteString::from(out))
    }

    /// `s` with every ASCII uppercase letter lowercased.
    pub fn to_lowercase(&self, s: &ByteString) -> Result<ByteString, StringError> {
        self.grant(s.len())?;
        let out: Vec<u8> = s.as_bytes().iter().map(|b| b.to_ascii_lowercase()).collect();
        Ok(ByteString::from(out))
    }

    /// `s` with its first byte uppercased and the remainder copied as-is.
    ///
    /// The empty sequence capitalizes to itself.
    pub fn capitalize(&self, s: &ByteString) -> Result<ByteString, StringError> {
        self.grant(s.len())?;
        let mut out = s.as_bytes().to_vec();
        if let Some(first) = out.first_mut() {
            *first = first.to_ascii_uppercase();
        }
        Ok(ByteString::from(out))
    }
}
