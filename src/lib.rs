//! # msp2mgf - MSP to MGF Spectral Library Conversion
//!
//! `msp2mgf` converts NIST-style MSP spectral libraries into Mascot Generic
//! Format (MGF) files that search engines and molecular networking tools can
//! read.
//!
//! ## Pipeline
//!
//! 1. The whole MSP file is loaded and split into entries on blank lines.
//! 2. Each entry is parsed into a typed [`msp::Compound`] and its
//!    [`msp::Peak`] list. Lines that are neither `Key: value` metadata nor a
//!    two-number peak are skipped.
//! 3. Each entry is written as one `BEGIN IONS` .. `END IONS` block, with a
//!    1-based sequence number feeding the `FILENAME` and `SCANS` fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use msp2mgf::MspToMgfConverter;
//!
//! let msp = "Name: Caffeine\nPrecursorMZ: 195.0877\n85.0 10.5\n138.0 100.0\n";
//! let (mgf, stats) = MspToMgfConverter::new().convert_str(msp)?;
//!
//! assert!(mgf.contains("PEPMASS=195.0877\n"));
//! assert!(mgf.contains("85.0\t10.5\n"));
//! assert_eq!(stats.entries_converted, 1);
//! # Ok::<(), msp2mgf::ConvertError>(())
//! ```
//!
//! Files are converted with [`MspToMgfConverter::convert`]:
//!
//! ```rust,no_run
//! use msp2mgf::MspToMgfConverter;
//!
//! let stats = MspToMgfConverter::new().convert("library.msp", "library.mgf")?;
//! println!("{}", stats);
//! # Ok::<(), msp2mgf::ConvertError>(())
//! ```

pub mod converter;
pub mod error;
pub mod mgf;
pub mod msp;

pub use converter::{read_msp, ConversionConfig, ConversionStats, MspToMgfConverter};
pub use error::ConvertError;
