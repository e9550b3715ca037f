//! Command implementations for the fieldlog CLI

mod calc;
mod dlog;
mod element;
mod generator;
mod info;

pub use calc::CalcCommand;
pub use dlog::DlogCommand;
pub use element::ElementCommand;
pub use generator::GeneratorCommand;
pub use info::InfoCommand;

use crate::config::Config;
use crate::error::CliError;
use crate::utils;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use fieldlog_galois::FiniteField;

#[derive(Subcommand)]
pub enum Commands {
    /// Display information about a field
    Info(InfoCommand),

    /// Inspect a single field element
    Element(ElementCommand),

    /// Combine two field elements
    Calc(CalcCommand),

    /// Find a generator of the multiplicative group
    Generator(GeneratorCommand),

    /// Solve a discrete logarithm with baby-step giant-step
    Dlog(DlogCommand),
}

impl Commands {
    pub fn execute(&self, config: &Config) -> Result<()> {
        match self {
            Commands::Info(cmd) => cmd.execute(config),
            Commands::Element(cmd) => cmd.execute(config),
            Commands::Calc(cmd) => cmd.execute(config),
            Commands::Generator(cmd) => cmd.execute(config),
            Commands::Dlog(cmd) => cmd.execute(config),
        }
    }
}

/// Field selection shared by every command
#[derive(Args, Clone, Debug)]
pub struct FieldArgs {
    /// Prime characteristic p
    #[arg(short = 'p', long, value_name = "P")]
    pub prime: Option<u64>,

    /// Modulus polynomial coefficients, lowest degree first (e.g. "3,6,1")
    #[arg(short = 'm', long, value_name = "COEFFS", allow_hyphen_values = true)]
    pub modulus: Option<String>,
}

impl FieldArgs {
    /// Build the field from flags, falling back to the config defaults
    pub fn build(&self, config: &Config) -> Result<FiniteField> {
        let prime = self
            .prime
            .or(config.defaults.prime)
            .ok_or(CliError::MissingField)?;

        let modulus = match &self.modulus {
            Some(text) => utils::parse_coefficients(text)?,
            None => config
                .defaults
                .modulus
                .clone()
                .ok_or(CliError::MissingField)?,
        };

        log::debug!("building GF({}) from modulus {:?}", prime, modulus);

        let field = FiniteField::new(prime, &modulus)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to build field over GF({})", prime))?;

        log::debug!("using {}", field);
        Ok(field)
    }
}
