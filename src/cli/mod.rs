// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the culter command-line interface.
//!
//! Six subcommands covering the operation families: `find` and `replace` for
//! pattern work, `split` and `join` for segmentation, `slice` for inclusive
//! dual-direction ranges, and `case` for ASCII letter case. Input comes from
//! a file argument or stdin; `--max-bytes` installs a byte quota so oversized
//! constructions fail with an error instead of exhausting memory.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "culter",
    about = "Byte-string slicing and search with gated allocation",
    version
)]
pub struct Cli {
    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Cap construction at this many bytes (quota-gated allocation)
    #[arg(long, global = true)]
    pub max_bytes: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count and locate pattern occurrences (overlapping scan)
    Find {
        /// Pattern bytes to look for
        pattern: String,

        /// Input file (stdin if omitted)
        file: Option<String>,

        /// Print the count only, skip the index list
        #[arg(long)]
        count_only: bool,
    },

    /// Replace pattern occurrences left to right (non-overlapping)
    Replace {
        /// Pattern bytes to replace
        pattern: String,

        /// Replacement bytes (may be empty to delete matches)
        replacement: String,

        /// Input file (stdin if omitted)
        file: Option<String>,
    },

    /// Split input on a single-byte delimiter
    Split {
        /// Delimiter byte: a single character or an escape like \t, \n, \0
        delimiter: String,

        /// Input file (stdin if omitted)
        file: Option<String>,
    },

    /// Join arguments into one byte string
    Join {
        /// Delimiter byte placed between parts (none concatenates directly)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Parts to join, in order
        parts: Vec<String>,
    },

    /// Extract an inclusive byte range; from > to slices backwards
    Slice {
        /// First endpoint (0-based, inclusive)
        from: usize,

        /// Second endpoint (0-based, inclusive)
        to: usize,

        /// Input file (stdin if omitted)
        file: Option<String>,
    },

    /// Convert ASCII letter case
    Case {
        /// Which conversion to apply
        #[arg(value_enum)]
        mode: CaseMode,

        /// Input file (stdin if omitted)
        file: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CaseMode {
    /// Uppercase every ASCII letter
    Upper,
    /// Lowercase every ASCII letter
    Lower,
    /// Uppercase the first byte only
    Capitalize,
}

/// Parse a delimiter argument into a single byte.
///
/// Accepts one literal character (ASCII only, since operations work on
/// single-byte characters) or one of the escapes `\t`, `\n`, `\r`, `\0`,
/// `\\`.
pub fn parse_delimiter(arg: &str) -> Result<u8, String> {
    match arg.as_bytes() {
        [b] => Ok(*b),
        [b'\\', b't'] => Ok(b'\t'),
        [b'\\', b'n'] => Ok(b'\n'),
        [b'\\', b'r'] => Ok(b'\r'),
        [b'\\', b'0'] => Ok(0),
        [b'\\', b'\\'] => Ok(b'\\'),
        _ => Err(format!(
            "delimiter must be a single byte or escape (\\t, \\n, \\r, \\0), got {:?}",
            arg
        )),
    }
}
