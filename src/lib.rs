//! Safe byte-string slicing, splicing and search with a pluggable allocation
//! gate.
//!
//! This crate works on [`ByteString`]s: owned, immutable runs of single-byte
//! characters. Every operation borrows its inputs, builds a fresh output, and
//! asks an [`AllocGate`] for permission before constructing anything, so
//! storage exhaustion is an ordinary, testable error instead of an abort.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  types.rs   │────▶│  slicer.rs   │────▶│ construct / pattern  │
//! │ (ByteString,│     │   (Slicer,   │     │ / split / case       │
//! │ StringError)│     │  gate hooks) │     │  (the operations)    │
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//!        │                    ▲                       │
//!        ▼                    │                       ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │ contracts.rs│     │   alloc.rs   │     │     Kani proofs      │
//! │ (debug-mode │     │ (AllocGate,  │     │  (scan policy laws   │
//! │  law checks)│     │  ByteQuota)  │     │ on symbolic inputs)  │
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//! ```
//!
//! # Law Correspondence
//!
//! Each operation module is pinned by laws checked in two places:
//!
//! | Rust Module | Checked By                     | Key Properties            |
//! |-------------|--------------------------------|---------------------------|
//! | `construct` | `contracts`, property tests    | Length laws, involution   |
//! | `pattern`   | `contracts`, Kani proofs       | Scan policy, replace law  |
//! | `split`     | `contracts`, property tests    | Byte conservation         |
//! | `case`      | compile-time asserts           | ASCII ranges, case shift  |
//! | `alloc`     | property tests                 | Quota conservation        |
//!
//! # Usage
//!
//! ```
//! use culter::{ByteString, Slicer};
//!
//! let slicer = Slicer::new();
//! let s = ByteString::from("hello, world");
//!
//! let loud = slicer.to_uppercase(&s)?;
//! assert_eq!(loud, "HELLO, WORLD");
//!
//! let parts = slicer.split(&s, b',')?;
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0], "hello");
//!
//! assert_eq!(slicer.substring(&s, 4, 0)?, "olleh");
//! # Ok::<(), culter::StringError>(())
//! ```

// Module declarations
pub mod alloc;
mod case;
mod construct;
pub mod contracts;
mod pattern;
mod slicer;
mod split;
pub mod testing;
mod types;

// Re-exports for public API
pub use alloc::{AllocGate, ByteQuota, SystemAlloc};
pub use slicer::Slicer;
pub use types::{ByteString, StringError};
