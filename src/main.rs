//! # sm2117
//!
//! A command-line tool for I/Q recordings stored per Rec. ITU-R SM.2117-0.
//!
//! ## Usage
//!
//! ```bash
//! # Import a CSV of I/Q columns
//! sm2117 import capture.csv survey --sampling-frequency 2e6 --group site/roof
//!
//! # Show the group tree and attributes
//! sm2117 info survey.sm2117
//!
//! # Export one dataset back to CSV
//! sm2117 export survey.sm2117 Dataset_0 --group site/roof --output capture_out.csv
//!
//! # Generate a synthetic two-channel recording
//! sm2117 demo demo.sm2117
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
