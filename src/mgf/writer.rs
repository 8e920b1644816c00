use std::fmt::{Display, Write as _};
use std::io::{self, Write};

use crate::msp::{Compound, MspRecord, Peak, MISSING_VALUE};

use super::format::push_value;

/// Charge written for every spectrum
pub const CHARGE: &str = "1+";

/// MS level written for every spectrum
pub const MS_LEVEL: u8 = 2;

/// Peptide sequence placeholder written for every spectrum
pub const SEQ_WILDCARD: &str = "*..*";

/// Default prefix of the synthesized FILENAME field
pub const DEFAULT_FILENAME_PREFIX: &str = "Training";

/// Writer for MGF (Mascot Generic Format) blocks.
///
/// Each call to [`MgfWriter::write_record`] emits one
/// `BEGIN IONS` .. `END IONS` block followed by two blank lines.
pub struct MgfWriter<W: Write> {
    handle: W,
    filename_prefix: String,
    records_written: usize,
    peaks_written: usize,
    bytes_written: u64,
    line: String,
}

impl<W: Write> MgfWriter<W> {
    /// Create a writer using the default FILENAME prefix
    pub fn new(handle: W) -> Self {
        Self::with_filename_prefix(handle, DEFAULT_FILENAME_PREFIX)
    }

    /// Create a writer with a custom FILENAME prefix
    pub fn with_filename_prefix(handle: W, prefix: impl Into<String>) -> Self {
        Self {
            handle,
            filename_prefix: prefix.into(),
            records_written: 0,
            peaks_written: 0,
            bytes_written: 0,
            line: String::new(),
        }
    }

    /// Number of blocks written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Number of peak lines written so far
    pub fn peaks_written(&self) -> usize {
        self.peaks_written
    }

    /// Number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Write one parsed record as an MGF block.
    ///
    /// `index` is the 1-based sequence number used for FILENAME and SCANS.
    pub fn write_record(&mut self, record: &MspRecord, index: usize) -> io::Result<()> {
        self.write_spectrum(&record.compound, &record.peaks, index)
    }

    /// Write metadata and peaks as an MGF block
    pub fn write_spectrum(
        &mut self,
        compound: &Compound,
        peaks: &[Peak],
        index: usize,
    ) -> io::Result<()> {
        self.write_line("BEGIN IONS")?;
        self.write_optional("PEPMASS", compound.precursor_mz.as_deref())?;
        self.write_field("CHARGE", CHARGE)?;
        self.write_field("MSLEVEL", MS_LEVEL)?;
        self.write_optional("TITLE", compound.notes.as_deref())?;
        let filename = format!("{}_{:03}.mgf", self.filename_prefix, index);
        self.write_field("FILENAME", filename)?;
        self.write_field("SEQ", SEQ_WILDCARD)?;
        self.write_optional("IONMODE", compound.ion_mode.as_deref())?;
        self.write_optional("NAME", compound.display_name().as_deref())?;
        self.write_optional("SMILES", compound.smiles.as_deref())?;
        self.write_optional("INCHI", compound.inchikey.as_deref())?;
        self.write_optional("FORMULA", compound.formula.as_deref())?;
        self.write_optional("CASNO", compound.casno.as_deref())?;
        self.write_optional("COLLISIONENERGY", compound.collision_energy.as_deref())?;
        match compound.comment.as_deref() {
            Some(comment) => self.write_optional("SPECTRUMID", spectrum_id(comment))?,
            None => self.write_field("SPECTRUMID", MISSING_VALUE)?,
        }
        self.write_field("SCANS", index)?;

        for peak in peaks {
            self.line.clear();
            push_value(&mut self.line, peak.mz);
            self.line.push('\t');
            push_value(&mut self.line, peak.intensity);
            self.line.push('\n');
            self.handle.write_all(self.line.as_bytes())?;
            self.bytes_written += self.line.len() as u64;
        }

        self.write_line("END IONS\n\n")?;
        self.records_written += 1;
        self.peaks_written += peaks.len();
        Ok(())
    }

    /// Flush the underlying handle
    pub fn flush(&mut self) -> io::Result<()> {
        self.handle.flush()
    }

    /// Consume the writer and return the underlying handle
    pub fn into_inner(self) -> W {
        self.handle
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.handle.write_all(text.as_bytes())?;
        self.handle.write_all(b"\n")?;
        self.bytes_written += text.len() as u64 + 1;
        Ok(())
    }

    fn write_field(&mut self, key: &str, value: impl Display) -> io::Result<()> {
        self.line.clear();
        let _ = writeln!(self.line, "{}={}", key, value);
        self.handle.write_all(self.line.as_bytes())?;
        self.bytes_written += self.line.len() as u64;
        Ok(())
    }

    fn write_optional(&mut self, key: &str, value: Option<&str>) -> io::Result<()> {
        match value {
            Some(value) => self.write_field(key, value),
            None => Ok(()),
        }
    }
}

/// Extract the spectrum identifier from an MSP `Comment` value.
///
/// The comment is split on `;` and the token after the first `=` of the
/// first segment is returned, e.g. `DB#=MoNA001; origin=x` gives `MoNA001`.
pub fn spectrum_id(comment: &str) -> Option<&str> {
    let first = comment.split(';').next()?;
    first.split('=').nth(1)
}
