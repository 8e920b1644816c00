use anyhow::Result;
use clap::Parser;
use log::warn;
use std::path::PathBuf;

mod config;
mod convert;

/// msp2mgf - MSP to MGF Spectral Library Converter
#[derive(Parser, Debug)]
#[command(name = "msp2mgf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input MSP file path
    #[arg(value_name = "INPUT", default_value = "input.msp")]
    input: PathBuf,

    /// Output MGF file path
    #[arg(value_name = "OUTPUT", default_value = "output.mgf")]
    output: PathBuf,

    /// Extra positional arguments are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true)]
    ignored: Vec<String>,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    // === Advanced tuning flags (hidden from --help) ===
    /// Prefix of the synthesized FILENAME field (default: Training)
    #[arg(long, hide = true)]
    filename_prefix: Option<String>,

    /// Log progress every N entries (0 disables)
    #[arg(long, hide = true)]
    progress_interval: Option<usize>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    if !cli.ignored.is_empty() {
        warn!("Ignoring extra arguments: {}", cli.ignored.join(" "));
    }
    convert::run(
        cli.input,
        cli.output,
        cli.config,
        cli.filename_prefix,
        cli.progress_interval,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cli = Cli::try_parse_from(["msp2mgf"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input.msp"));
        assert_eq!(cli.output, PathBuf::from("output.mgf"));
        assert_eq!(cli.verbosity(), 0);
        assert!(cli.config.is_none());
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["msp2mgf", "lib.msp"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("lib.msp"));
        assert_eq!(cli.output, PathBuf::from("output.mgf"));

        let cli = Cli::try_parse_from(["msp2mgf", "-vv", "lib.msp", "out/lib.mgf"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out/lib.mgf"));
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn test_hidden_flags() {
        let cli = Cli::try_parse_from([
            "msp2mgf",
            "--filename-prefix",
            "Library",
            "--progress-interval",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.filename_prefix.as_deref(), Some("Library"));
        assert_eq!(cli.progress_interval, Some(50));
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let cli = Cli::try_parse_from(["msp2mgf", "a.msp", "b.mgf", "c", "d"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.msp"));
        assert_eq!(cli.output, PathBuf::from("b.mgf"));
        assert_eq!(cli.ignored, vec!["c".to_string(), "d".to_string()]);
    }
}
