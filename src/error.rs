use std::path::PathBuf;

/// Errors that can occur while converting MSP to MGF
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// I/O error reading the input or writing the output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input file does not exist
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    /// The output file could not be created
    #[error("Failed to create output file {}: {source}", path.display())]
    CreateOutput {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
