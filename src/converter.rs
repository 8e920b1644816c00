//! MSP to MGF conversion pipeline.
//!
//! The whole input is read into memory, split into entries and each entry is
//! parsed and written in order. The 1-based sequence number used for the
//! `FILENAME` and `SCANS` fields is carried through a fold over the entries.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::ConvertError;
use crate::mgf::{MgfWriter, DEFAULT_FILENAME_PREFIX};
use crate::msp::{normalize_line_endings, parse_entry, EntrySplitter};

/// Configuration for MSP to MGF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Prefix of the synthesized `FILENAME` field
    pub filename_prefix: String,

    /// Log progress every this many entries (0 disables progress logging)
    pub progress_interval: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            progress_interval: 1000,
        }
    }
}

/// Statistics from a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of MSP entries converted (one MGF block each)
    pub entries_converted: usize,
    /// Number of peak lines written
    pub peaks_written: usize,
    /// Lines that were neither metadata nor valid peaks
    pub lines_skipped: usize,
    /// Size of the MGF output in bytes
    pub bytes_written: u64,
}

impl std::fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Converted {} entries with {} peaks ({} bytes, {} lines skipped)",
            self.entries_converted, self.peaks_written, self.bytes_written, self.lines_skipped
        )
    }
}

/// Converter from MSP spectral libraries to MGF
#[derive(Debug, Clone, Default)]
pub struct MspToMgfConverter {
    config: ConversionConfig,
}

impl MspToMgfConverter {
    /// Create a converter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Set the `FILENAME` prefix
    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.filename_prefix = prefix.into();
        self
    }

    /// Set the progress logging interval
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.config.progress_interval = interval;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert an MSP file to an MGF file
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConversionStats, ConvertError> {
        let text = read_msp(input.as_ref())?;
        self.convert_text_to_file(&text, output)
    }

    /// Convert already-loaded MSP text into an MGF file
    pub fn convert_text_to_file<Q: AsRef<Path>>(
        &self,
        text: &str,
        output: Q,
    ) -> Result<ConversionStats, ConvertError> {
        let output = output.as_ref();
        let file = File::create(output).map_err(|source| ConvertError::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;
        let stats = self.convert_to_writer(text, BufWriter::new(file))?;

        info!("{} -> {}", stats, output.display());
        Ok(stats)
    }

    /// Convert MSP text into an MGF string
    pub fn convert_str(&self, text: &str) -> Result<(String, ConversionStats), ConvertError> {
        let mut buffer = Vec::new();
        let stats = self.convert_to_writer(text, &mut buffer)?;
        // Only UTF-8 text is ever written
        let output = String::from_utf8_lossy(&buffer).into_owned();
        Ok((output, stats))
    }

    /// Convert MSP text, writing MGF blocks to `sink`
    pub fn convert_to_writer<W: Write>(
        &self,
        text: &str,
        sink: W,
    ) -> Result<ConversionStats, ConvertError> {
        let text = normalize_line_endings(text);
        let mut writer = MgfWriter::with_filename_prefix(sink, self.config.filename_prefix.as_str());
        let interval = self.config.progress_interval;

        let (next_index, lines_skipped) = EntrySplitter::new(&text).try_fold(
            (1usize, 0usize),
            |(index, skipped), entry| -> Result<_, ConvertError> {
                let record = parse_entry(entry);
                if record.skipped_lines > 0 {
                    debug!(
                        "Entry {}: skipped {} unrecognized lines",
                        index, record.skipped_lines
                    );
                }
                writer.write_record(&record, index)?;

                if interval > 0 && index % interval == 0 {
                    info!("  Processed {} entries...", index);
                }
                Ok((index + 1, skipped + record.skipped_lines))
            },
        )?;
        writer.flush()?;

        if lines_skipped > 0 {
            warn!(
                "Skipped {} lines that were neither metadata nor valid peaks",
                lines_skipped
            );
        }

        Ok(ConversionStats {
            entries_converted: next_index - 1,
            peaks_written: writer.peaks_written(),
            lines_skipped,
            bytes_written: writer.bytes_written(),
        })
    }
}

/// Read a whole MSP file into memory
pub fn read_msp<P: AsRef<Path>>(input: P) -> Result<String, ConvertError> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }
    let text = fs::read_to_string(input)?;
    info!("Read {} bytes from {}", text.len(), input.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_counter_increments_per_entry() {
        let converter = MspToMgfConverter::new();
        let text = "Name: A\n1 2\n\nName: B\n\nName: C\n3 4\n5 6";
        let (output, stats) = converter.convert_str(text).unwrap();

        assert_eq!(stats.entries_converted, 3);
        assert_eq!(stats.peaks_written, 3);
        for i in 1..=3 {
            assert!(output.contains(&format!("FILENAME=Training_{:03}.mgf\n", i)));
            assert!(output.contains(&format!("SCANS={}\n", i)));
        }
        assert!(!output.contains("SCANS=4"));
        assert_eq!(output.matches("BEGIN IONS").count(), 3);
    }

    #[test]
    fn test_empty_input_converts_one_block() {
        let (output, stats) = MspToMgfConverter::new().convert_str("").unwrap();
        assert_eq!(stats.entries_converted, 1);
        assert_eq!(stats.peaks_written, 0);
        assert!(output.starts_with("BEGIN IONS\n"));
        assert!(output.contains("SCANS=1\n"));
        assert!(output.contains("SPECTRUMID=N/A\n"));
    }

    #[test]
    fn test_skipped_lines_counted() {
        let (_, stats) = MspToMgfConverter::new()
            .convert_str("Name: A\n1 2\nnot a peak\n3 4 5\n\nName: B\nfoo")
            .unwrap();
        assert_eq!(stats.lines_skipped, 3);
        assert_eq!(stats.peaks_written, 1);
    }

    #[test]
    fn test_crlf_input() {
        let (output, stats) = MspToMgfConverter::new()
            .convert_str("Name: A\r\n1 2\r\n\r\nName: B\r\n3 4\r\n")
            .unwrap();
        assert_eq!(stats.entries_converted, 2);
        assert!(output.contains("NAME=A\n"));
        assert!(output.contains("NAME=B\n"));
    }

    #[test]
    fn test_builder_config() {
        let converter = MspToMgfConverter::new()
            .with_filename_prefix("Library")
            .with_progress_interval(0);
        assert_eq!(converter.config().filename_prefix, "Library");
        assert_eq!(converter.config().progress_interval, 0);

        let (output, stats) = converter.convert_str("Name: A").unwrap();
        assert!(output.contains("FILENAME=Library_001.mgf\n"));
        assert_eq!(stats.bytes_written, output.len() as u64);
    }

    #[test]
    fn test_stats_display() {
        let stats = ConversionStats {
            entries_converted: 2,
            peaks_written: 10,
            lines_skipped: 1,
            bytes_written: 300,
        };
        assert_eq!(
            stats.to_string(),
            "Converted 2 entries with 10 peaks (300 bytes, 1 lines skipped)"
        );
    }
}
