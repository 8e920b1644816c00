use log::debug;

use super::models::{MspRecord, Peak};

/// Parse one MSP entry block.
///
/// Lines containing a colon are metadata (split on the first colon).
/// Every other line must hold exactly two whitespace-separated numbers to
/// count as a peak; anything else is skipped and tallied in
/// [`MspRecord::skipped_lines`].
pub fn parse_entry(entry: &str) -> MspRecord {
    let mut record = MspRecord::default();

    for line in entry.trim().split('\n') {
        if let Some((key, value)) = line.split_once(':') {
            record.compound.insert(key.trim(), value.trim());
            continue;
        }

        // Whitespace-only lines are neither metadata nor peaks
        if line.trim().is_empty() {
            continue;
        }

        match parse_peak_line(line) {
            Some(peak) => record.peaks.push(peak),
            None => {
                debug!("Skipping unrecognized MSP line: {:?}", line);
                record.skipped_lines += 1;
            }
        }
    }

    record
}

/// Parse a `<mz> <intensity>` line
pub fn parse_peak_line(line: &str) -> Option<Peak> {
    let mut tokens = line.split_whitespace();
    let (mz, intensity) = (tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }
    Some(Peak::new(mz.parse().ok()?, intensity.parse().ok()?))
}
