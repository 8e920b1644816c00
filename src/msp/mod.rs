//! # MSP Reader Module
//!
//! Parses NIST-style MSP spectral library text. An MSP file is a sequence of
//! entries separated by a blank line; each entry holds `Key: value` metadata
//! lines and whitespace-separated `<mz> <intensity>` peak lines.
//!
//! ```rust
//! use msp2mgf::msp::{parse_entry, EntrySplitter};
//!
//! let text = "Name: Caffeine\nPrecursorMZ: 195.0877\n85.0 10.5\n138.0 100.0\n";
//! let records: Vec<_> = EntrySplitter::new(text).map(parse_entry).collect();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].compound.name.as_deref(), Some("Caffeine"));
//! assert_eq!(records[0].peak_count(), 2);
//! ```

mod models;
mod parser;
mod splitter;

pub use models::{Compound, MspKey, MspRecord, Peak, MISSING_VALUE};
pub use parser::{parse_entry, parse_peak_line};
pub use splitter::{
    count_entries, normalize_line_endings, split_entries, EntrySplitter, ENTRY_SEPARATOR,
};
