//! Generator command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::FieldArgs;
use crate::config::Config;
use crate::formats::{ElementData, OutputFormat};

#[derive(Args)]
pub struct GeneratorCommand {
    #[command(flatten)]
    pub field: FieldArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct GeneratorInfo {
    #[serde(flatten)]
    generator: ElementData,
    order: u64,
}

impl GeneratorCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let field = self.field.build(config)?;
        let format = OutputFormat::resolve(self.output_format, config)?;

        log::info!("Searching for a generator of {}", field);
        let generator = field
            .find_generator()
            .context("Failed to find a generator")?;

        let info = GeneratorInfo {
            generator: ElementData::from(&generator),
            order: field.field_size() - 1,
        };

        format.emit(&info, |info| {
            println!("Generator: {}", info.generator.describe());
            println!("Order: {}", info.order);
        })
    }
}
