//! Calc command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use fieldlog_galois::{FiniteField, FiniteFieldElement};
use serde::Serialize;

use super::FieldArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::formats::{ElementData, OutputFormat};
use crate::utils;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    /// Raise LHS to the integer power RHS
    Pow,
}

impl Operation {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

#[derive(Args)]
pub struct CalcCommand {
    /// Operation to apply
    #[arg(value_enum)]
    pub operation: Operation,

    /// Left operand coefficients
    #[arg(value_name = "LHS", allow_hyphen_values = true)]
    pub lhs: String,

    /// Right operand coefficients, or the exponent for `pow`
    #[arg(value_name = "RHS", allow_hyphen_values = true)]
    pub rhs: String,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct CalcResult {
    operation: Operation,
    lhs: ElementData,
    rhs: String,
    result: ElementData,
}

impl CalcCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let field = self.field.build(config)?;
        let format = OutputFormat::resolve(self.output_format, config)?;

        let lhs = element_from(&field, &self.lhs)?;
        let (rhs, result) = self.apply(&field, &lhs)?;

        let report = CalcResult {
            operation: self.operation,
            lhs: ElementData::from(&lhs),
            rhs,
            result: ElementData::from(&result),
        };

        format.emit(&report, |report| {
            println!(
                "({}) {} ({}) = {}",
                report.lhs.polynomial,
                report.operation.symbol(),
                report.rhs,
                report.result.polynomial
            );
            println!(
                "Coefficients: {}",
                utils::format_coefficients(&report.result.coefficients)
            );
        })
    }

    fn apply<'f>(
        &self,
        field: &'f FiniteField,
        lhs: &FiniteFieldElement<'f>,
    ) -> Result<(String, FiniteFieldElement<'f>)> {
        if self.operation == Operation::Pow {
            let exp: i64 = self
                .rhs
                .trim()
                .parse()
                .map_err(|_| CliError::InvalidExponent(self.rhs.clone()))?;
            return Ok((exp.to_string(), lhs.pow(exp)?));
        }

        let rhs = element_from(field, &self.rhs)?;
        let result = match self.operation {
            Operation::Add => lhs.try_add(&rhs)?,
            Operation::Sub => lhs.try_sub(&rhs)?,
            Operation::Mul => lhs.try_mul(&rhs)?,
            Operation::Div => lhs.try_div(&rhs)?,
            Operation::Pow => unreachable!("handled above"),
        };

        Ok((rhs.poly_string(), result))
    }
}

fn element_from<'f>(field: &'f FiniteField, text: &str) -> Result<FiniteFieldElement<'f>> {
    let coeffs = utils::parse_coefficients(text)?;
    Ok(field.element(&coeffs)?)
}
