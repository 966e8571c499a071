use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod export;
mod import;
mod info;

/// sm2117 - I/Q recordings per Rec. ITU-R SM.2117-0
#[derive(Parser)]
#[command(name = "sm2117")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a CSV of (I, Q) column pairs as a dataset
    Import {
        /// CSV file: one row per sample, two columns (I, Q) per channel
        #[arg(value_name = "CSV")]
        input: PathBuf,

        /// Target container (.sm2117 is appended when missing)
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Load metadata and write settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Sampling frequency in Hz
        #[arg(short = 's', long)]
        sampling_frequency: Option<f64>,

        /// Target group as a/b/c (root when omitted)
        #[arg(short, long)]
        group: Option<String>,

        /// Explicit dataset name (next Dataset_<n> when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Channel suffix, once per channel
        #[arg(long = "suffix", value_name = "SUFFIX")]
        suffixes: Vec<String>,

        /// Replace the container instead of appending to it
        #[arg(long)]
        overwrite: bool,
    },

    /// Export one dataset as CSV
    Export {
        /// Container file
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Dataset name
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Group of the dataset as a/b/c (root when omitted)
        #[arg(short, long)]
        group: Option<String>,

        /// Output CSV file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display the groups, datasets and attributes of a container
    Info {
        /// Container file
        #[arg(value_name = "TARGET")]
        target: PathBuf,
    },

    /// Generate a synthetic two-channel recording
    Demo {
        /// Output container
        #[arg(value_name = "TARGET", default_value = "demo.sm2117")]
        target: PathBuf,

        /// Samples per channel
        #[arg(short = 'n', long, default_value = "4096")]
        samples: usize,
    },
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
    match cli.command {
        Commands::Import {
            input,
            target,
            config,
            sampling_frequency,
            group,
            name,
            suffixes,
            overwrite,
        } => import::run(import::ImportArgs {
            input,
            target,
            config,
            sampling_frequency,
            group,
            name,
            suffixes,
            overwrite,
        }),
        Commands::Export {
            target,
            dataset,
            group,
            output,
        } => export::run(target, dataset, group, output),
        Commands::Info { target } => info::run(target),
        Commands::Demo { target, samples } => demo::run(target, samples),
    }
}
