//! Data types for parsed MSP entries

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Placeholder used where an identifying value is missing
pub const MISSING_VALUE: &str = "N/A";

/// Metadata keys recognized in MSP entries.
///
/// Keys are matched exactly as they appear in the source file, so
/// `precursormz` is not the same key as `PrecursorMZ`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MspKey {
    /// `Name`
    Name,
    /// `Precursor_type`
    PrecursorType,
    /// `PrecursorMZ`
    PrecursorMz,
    /// `Notes`
    Notes,
    /// `Ion_mode`
    IonMode,
    /// `SMILES`
    Smiles,
    /// `InChIKey`
    InChIKey,
    /// `Formula`
    Formula,
    /// `CASNO`
    CasNo,
    /// `Collision_energy`
    CollisionEnergy,
    /// `Comment`
    Comment,
}

impl MspKey {
    /// All recognized keys
    pub const ALL: [MspKey; 11] = [
        MspKey::Name,
        MspKey::PrecursorType,
        MspKey::PrecursorMz,
        MspKey::Notes,
        MspKey::IonMode,
        MspKey::Smiles,
        MspKey::InChIKey,
        MspKey::Formula,
        MspKey::CasNo,
        MspKey::CollisionEnergy,
        MspKey::Comment,
    ];

    /// The key text as written in MSP files
    pub fn as_str(&self) -> &'static str {
        match self {
            MspKey::Name => "Name",
            MspKey::PrecursorType => "Precursor_type",
            MspKey::PrecursorMz => "PrecursorMZ",
            MspKey::Notes => "Notes",
            MspKey::IonMode => "Ion_mode",
            MspKey::Smiles => "SMILES",
            MspKey::InChIKey => "InChIKey",
            MspKey::Formula => "Formula",
            MspKey::CasNo => "CASNO",
            MspKey::CollisionEnergy => "Collision_energy",
            MspKey::Comment => "Comment",
        }
    }
}

impl fmt::Display for MspKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MspKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MspKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unrecognized MSP key '{}'", s))
    }
}

/// Metadata of one MSP entry.
///
/// Recognized keys land in typed slots, anything else is kept in `other`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    /// Compound name
    pub name: Option<String>,
    /// Precursor adduct, e.g. `[M+H]+`
    pub precursor_type: Option<String>,
    /// Precursor m/z, kept verbatim
    pub precursor_mz: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Ionization mode
    pub ion_mode: Option<String>,
    /// SMILES structure
    pub smiles: Option<String>,
    /// InChIKey
    pub inchikey: Option<String>,
    /// Molecular formula
    pub formula: Option<String>,
    /// CAS registry number
    pub casno: Option<String>,
    /// Collision energy
    pub collision_energy: Option<String>,
    /// Comment line, usually `;`-separated `key=value` pairs
    pub comment: Option<String>,
    /// Unrecognized keys
    pub other: HashMap<String, String>,
}

impl Compound {
    /// Create an empty compound
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for a recognized key
    pub fn get(&self, key: MspKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    /// Store a value, replacing any earlier value for the same key
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        match key.parse::<MspKey>() {
            Ok(known) => *self.slot_mut(known) = Some(value.into()),
            Err(_) => {
                self.other.insert(key.to_string(), value.into());
            }
        }
    }

    /// Returns true when no metadata line was seen
    pub fn is_empty(&self) -> bool {
        self.other.is_empty() && MspKey::ALL.iter().all(|k| self.slot(*k).is_none())
    }

    /// Display name: `Name` and `Precursor_type` joined by a space.
    ///
    /// An absent `Name` renders as [`MISSING_VALUE`] and an absent
    /// `Precursor_type` as nothing. Returns `None` when the trimmed result is
    /// exactly [`MISSING_VALUE`].
    pub fn display_name(&self) -> Option<String> {
        let joined = format!(
            "{} {}",
            self.name.as_deref().unwrap_or(MISSING_VALUE),
            self.precursor_type.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();
        (joined != MISSING_VALUE).then(|| joined.to_string())
    }

    fn slot(&self, key: MspKey) -> &Option<String> {
        match key {
            MspKey::Name => &self.name,
            MspKey::PrecursorType => &self.precursor_type,
            MspKey::PrecursorMz => &self.precursor_mz,
            MspKey::Notes => &self.notes,
            MspKey::IonMode => &self.ion_mode,
            MspKey::Smiles => &self.smiles,
            MspKey::InChIKey => &self.inchikey,
            MspKey::Formula => &self.formula,
            MspKey::CasNo => &self.casno,
            MspKey::CollisionEnergy => &self.collision_energy,
            MspKey::Comment => &self.comment,
        }
    }

    fn slot_mut(&mut self, key: MspKey) -> &mut Option<String> {
        match key {
            MspKey::Name => &mut self.name,
            MspKey::PrecursorType => &mut self.precursor_type,
            MspKey::PrecursorMz => &mut self.precursor_mz,
            MspKey::Notes => &mut self.notes,
            MspKey::IonMode => &mut self.ion_mode,
            MspKey::Smiles => &mut self.smiles,
            MspKey::InChIKey => &mut self.inchikey,
            MspKey::Formula => &mut self.formula,
            MspKey::CasNo => &mut self.casno,
            MspKey::CollisionEnergy => &mut self.collision_energy,
            MspKey::Comment => &mut self.comment,
        }
    }
}

/// A single (m/z, intensity) measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Mass-to-charge ratio
    pub mz: f64,
    /// Intensity
    pub intensity: f64,
}

impl Peak {
    /// Create a peak from its m/z and intensity
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

/// One parsed MSP entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MspRecord {
    /// Entry metadata
    pub compound: Compound,
    /// Peaks in input order
    pub peaks: Vec<Peak>,
    /// Lines that were neither metadata nor a valid peak
    pub skipped_lines: usize,
}

impl MspRecord {
    /// Number of peaks in the entry
    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }

    /// Split into metadata and peaks
    pub fn into_parts(self) -> (Compound, Vec<Peak>) {
        (self.compound, self.peaks)
    }
}
