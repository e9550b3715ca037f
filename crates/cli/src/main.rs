//! fieldlog - arithmetic in GF(p^n) and baby-step giant-step discrete logarithms
//!
//! Builds a finite field from a prime and a modulus polynomial, then exposes
//! element arithmetic, generator search and discrete-log solving on top of it.

mod commands;
mod config;
mod error;
mod formats;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use commands::Commands;
use config::Config;

#[derive(Parser)]
#[command(
    name = "fieldlog",
    version,
    about = "fieldlog - finite field arithmetic and discrete logarithms",
    long_about = "Computes in GF(p^n), given a prime p and an irreducible polynomial of \
                  degree n, and solves discrete logarithms in its multiplicative group \
                  with the baby-step giant-step algorithm."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging and full error chains
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress logging and error messages
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    fn run(&self) -> anyhow::Result<()> {
        let config = Config::load(self.config.as_deref())?;
        self.command.execute(&config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                report_error(&e, cli.verbose);
            }
            ExitCode::FAILURE
        }
    }
}

fn report_error(error: &anyhow::Error, verbose: bool) {
    eprintln!("Error: {}", error);
    if verbose {
        for cause in error.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
