//! # MGF Writer Module
//!
//! Writes spectra in Mascot Generic Format. Metadata from MSP entries is
//! remapped onto MGF keys in a fixed order:
//!
//! | MGF key           | Source                                  |
//! |-------------------|-----------------------------------------|
//! | `PEPMASS`         | `PrecursorMZ`                           |
//! | `CHARGE`          | always `1+`                             |
//! | `MSLEVEL`         | always `2`                              |
//! | `TITLE`           | `Notes`                                 |
//! | `FILENAME`        | `<prefix>_<NNN>.mgf` from the sequence  |
//! | `SEQ`             | always `*..*`                           |
//! | `IONMODE`         | `Ion_mode`                              |
//! | `NAME`            | `Name` + `Precursor_type`               |
//! | `SMILES`          | `SMILES`                                |
//! | `INCHI`           | `InChIKey`                              |
//! | `FORMULA`         | `Formula`                               |
//! | `CASNO`           | `CASNO`                                 |
//! | `COLLISIONENERGY` | `Collision_energy`                      |
//! | `SPECTRUMID`      | first `key=value` of `Comment`          |
//! | `SCANS`           | the sequence number                     |
//!
//! Optional fields are omitted when the source key is absent. `NAME` uses
//! `N/A` for a missing `Name` and is omitted when nothing else is left.
//! `SPECTRUMID` is written as `N/A` when there is no `Comment` at all.

mod format;
mod writer;

pub use format::{format_value, push_value};
pub use crate::msp::MISSING_VALUE;
pub use writer::{spectrum_id, MgfWriter, CHARGE, DEFAULT_FILENAME_PREFIX, MS_LEVEL, SEQ_WILDCARD};
