//! # msp2mgf
//!
//! A command-line tool for converting MSP spectral libraries to MGF.
//!
//! ## Usage
//!
//! ```bash
//! # Convert input.msp to output.mgf in the current directory
//! msp2mgf
//!
//! # Convert explicit files, logging progress
//! msp2mgf -v library.msp library.mgf
//!
//! # Load settings from a TOML config file
//! msp2mgf --config msp2mgf.toml library.msp library.mgf
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
