//! Info command implementation

use anyhow::Result;
use clap::Args;
use fieldlog_galois::primes::exact_sqrt;
use fieldlog_galois::FiniteField;
use serde::Serialize;

use super::FieldArgs;
use crate::config::Config;
use crate::formats::{ElementData, OutputFormat};
use crate::utils::format_coefficients;

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub field: FieldArgs,

    /// List the first COUNT elements of the field
    #[arg(short, long, value_name = "COUNT")]
    pub list: Option<usize>,

    /// Output format for information
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct FieldInfo {
    prime: u64,
    degree: usize,
    field_size: u64,
    group_order: u64,
    modulus: Vec<u64>,
    monic_modulus: Vec<u64>,
    reduction: Vec<u64>,
    /// Baby-step count when the field size is a perfect square
    bsgs_step: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    elements: Vec<ElementData>,
}

impl InfoCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let field = self.field.build(config)?;
        let format = OutputFormat::resolve(self.output_format, config)?;

        let info = self.analyze_field(&field);
        format.emit(&info, output_table)
    }

    fn analyze_field(&self, field: &FiniteField) -> FieldInfo {
        let elements = match self.list {
            Some(count) => field
                .elements()
                .take(count)
                .map(|e| ElementData::from(&e))
                .collect(),
            None => Vec::new(),
        };

        FieldInfo {
            prime: field.prime(),
            degree: field.degree(),
            field_size: field.field_size(),
            group_order: field.field_size() - 1,
            modulus: field.modulus().to_vec(),
            monic_modulus: field.monic().to_vec(),
            reduction: field.reduction().to_vec(),
            bsgs_step: exact_sqrt(field.field_size()),
            elements,
        }
    }
}

fn output_table(info: &FieldInfo) {
    println!("Field Information");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("Field: GF({}^{})", info.prime, info.degree);
    println!("Size: {}", info.field_size);
    println!("Multiplicative group order: {}", info.group_order);
    println!("Modulus: {}", format_coefficients(&info.modulus));
    println!("Monic modulus: {}", format_coefficients(&info.monic_modulus));
    println!("Reduction vector: {}", format_coefficients(&info.reduction));

    match info.bsgs_step {
        Some(m) => println!("Discrete log: supported (m = {})", m),
        None => println!("Discrete log: ⚠️  field size is not a perfect square"),
    }

    if !info.elements.is_empty() {
        println!("\nElements:");
        for (index, element) in info.elements.iter().enumerate() {
            println!("  {:>4}  {}", index, element.describe());
        }
    }
}
