use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use msp2mgf::msp::count_entries;
use msp2mgf::{read_msp, ConversionConfig, ConversionStats, MspToMgfConverter};

use super::config::Config;

/// Convert an MSP file to MGF
pub fn run(
    input: PathBuf,
    output: PathBuf,
    config_path: Option<PathBuf>,
    filename_prefix: Option<String>,
    progress_interval: Option<usize>,
) -> Result<()> {
    let file_config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let config = resolve_config(file_config, filename_prefix, progress_interval);

    info!("msp2mgf - MSP to MGF");
    info!("====================");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    if let Some(path) = &config_path {
        info!("Config: {}", path.display());
    }
    info!("Filename prefix: {}", config.filename_prefix);

    let text = read_msp(&input).context("Failed to load MSP file")?;

    println!(
        "Converting {} entries from {} to {}",
        count_entries(&text),
        input.display(),
        output.display()
    );

    let stats = MspToMgfConverter::with_config(config)
        .convert_text_to_file(&text, &output)
        .context("Conversion failed")?;

    print_summary(&stats);
    Ok(())
}

/// Flags win over the config file, which wins over built-in defaults
fn resolve_config(
    file_config: Config,
    filename_prefix: Option<String>,
    progress_interval: Option<usize>,
) -> ConversionConfig {
    let defaults = ConversionConfig::default();
    let section = file_config.conversion;
    ConversionConfig {
        filename_prefix: filename_prefix
            .or(section.filename_prefix)
            .unwrap_or(defaults.filename_prefix),
        progress_interval: progress_interval
            .or(section.progress_interval)
            .unwrap_or(defaults.progress_interval),
    }
}

fn print_summary(stats: &ConversionStats) {
    info!("  Entries converted: {}", stats.entries_converted);
    info!("  Peaks written: {}", stats.peaks_written);
    info!(
        "  Output size: {} bytes ({:.2} MB)",
        stats.bytes_written,
        stats.bytes_written as f64 / 1024.0 / 1024.0
    );

    #[cfg(feature = "colorized_output")]
    {
        println!(
            "{}",
            style("Conversion complete. The MGF file has been written.").green()
        );
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("Conversion complete. The MGF file has been written.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(Config::default(), None, None);
        assert_eq!(config.filename_prefix, "Training");
        assert_eq!(config.progress_interval, 1000);
    }

    #[test]
    fn test_flags_override_file() {
        let file = Config::from_str(
            r#"
            [conversion]
            filename_prefix = "FromFile"
            progress_interval = 5
        "#,
        )
        .unwrap();
        let config = resolve_config(file, Some("FromFlag".to_string()), None);
        assert_eq!(config.filename_prefix, "FromFlag");
        assert_eq!(config.progress_interval, 5);
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.msp");
        let output = dir.path().join("output.mgf");
        std::fs::write(&input, "Name: A\n1 2\n\nName: B\n3 4\n").unwrap();

        run(input, output.clone(), None, None, None).unwrap();

        let mgf = std::fs::read_to_string(output).unwrap();
        assert_eq!(mgf.matches("END IONS").count(), 2);
    }

    #[test]
    fn test_run_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path().join("missing.msp"),
            dir.path().join("out.mgf"),
            None,
            None,
            None,
        );
        assert!(result.is_err());
        assert!(!dir.path().join("out.mgf").exists());
    }
}
