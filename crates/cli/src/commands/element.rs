//! Element command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::FieldArgs;
use crate::config::Config;
use crate::formats::{ElementData, OutputFormat};
use crate::utils;

#[derive(Args)]
pub struct ElementCommand {
    /// Element coefficients, lowest degree first (e.g. "1,3")
    #[arg(value_name = "COEFFS", allow_hyphen_values = true)]
    pub coefficients: String,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Also compute the multiplicative order
    #[arg(long)]
    pub order: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct ElementInfo {
    #[serde(flatten)]
    element: ElementData,
    /// Rows of the multiplication matrix
    matrix: Vec<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inverse: Option<ElementData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<u64>,
}

impl ElementCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let field = self.field.build(config)?;
        let format = OutputFormat::resolve(self.output_format, config)?;

        let coeffs = utils::parse_coefficients(&self.coefficients)?;
        let element = field.element(&coeffs)?;

        let inverse = if element.is_zero() {
            None
        } else {
            Some(ElementData::from(&element.inverse()?))
        };

        let order = if self.order && !element.is_zero() {
            log::debug!("computing the order of {}", element);
            Some(element.multiplicative_order()?)
        } else {
            None
        };

        let info = ElementInfo {
            element: ElementData::from(&element),
            matrix: element.matrix().rows().map(<[u64]>::to_vec).collect(),
            inverse,
            order,
        };

        let matrix = element.matrix().to_string();
        format.emit(&info, |info| {
            println!("Element: {}", info.element.describe());
            println!("Multiplication matrix:");
            for line in matrix.lines() {
                println!("  {}", line);
            }
            match &info.inverse {
                Some(inverse) => println!("Inverse: {}", inverse.describe()),
                None => println!("Inverse: none (zero element)"),
            }
            if let Some(order) = info.order {
                println!("Multiplicative order: {}", order);
            } else if self.order {
                println!("Multiplicative order: undefined for zero");
            }
        })
    }
}
