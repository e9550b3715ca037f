//! Dlog command implementation

use anyhow::{Context, Result};
use clap::Args;
use fieldlog_galois::{bsgs, FiniteField, FiniteFieldElement};
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;

use super::FieldArgs;
use crate::config::Config;
use crate::formats::{ElementData, OutputFormat};
use crate::utils;

#[derive(Args)]
pub struct DlogCommand {
    /// Target element h (a random non-zero element if omitted)
    #[arg(value_name = "TARGET", allow_hyphen_values = true)]
    pub target: Option<String>,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Base element g (the first generator found if omitted)
    #[arg(short = 'g', long, value_name = "COEFFS", allow_hyphen_values = true)]
    pub generator: Option<String>,

    /// Custom seed for choosing the random target (hex encoded)
    #[arg(long, value_name = "HEX")]
    pub seed: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct DlogResult {
    generator: ElementData,
    target: ElementData,
    exponent: u64,
    /// Whether `generator^exponent` reproduces the target
    verified: bool,
}

impl DlogCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let field = self.field.build(config)?;
        let format = OutputFormat::resolve(self.output_format, config)?;

        let generator = match &self.generator {
            Some(text) => {
                let coeffs = utils::parse_coefficients(text)?;
                field.element(&coeffs)?
            }
            None => field
                .find_generator()
                .context("Failed to find a generator")?,
        };

        let target = self.target_element(&field)?;

        log::info!("Solving {} = ({})^x", target, generator);
        let exponent = bsgs(&field, &generator, &target).context("Discrete log failed")?;

        let check = generator.pow(i64::try_from(exponent)?)?;
        let result = DlogResult {
            generator: ElementData::from(&generator),
            target: ElementData::from(&target),
            exponent,
            verified: check == target,
        };

        format.emit(&result, |result| {
            println!("g = {}", result.generator.describe());
            println!("h = {}", result.target.describe());
            println!("x = {}", result.exponent);
            if result.verified {
                println!("✅ g^{} = h", result.exponent);
            } else {
                println!("❌ g^{} != h", result.exponent);
            }
        })
    }

    fn target_element<'f>(&self, field: &'f FiniteField) -> Result<FiniteFieldElement<'f>> {
        if let Some(text) = &self.target {
            let coeffs = utils::parse_coefficients(text)?;
            return Ok(field.element(&coeffs)?);
        }

        let target = if let Some(seed_hex) = &self.seed {
            let seed = utils::parse_seed(seed_hex)?;
            let mut rng = rand_chacha::ChaCha8Rng::from_seed(seed);
            random_nonzero(field, &mut rng)
        } else {
            random_nonzero(field, &mut rand::thread_rng())
        };

        log::info!("Picked random target {}", target);
        Ok(target)
    }
}

fn random_nonzero<'f, R: Rng + ?Sized>(
    field: &'f FiniteField,
    rng: &mut R,
) -> FiniteFieldElement<'f> {
    loop {
        let candidate = field.random_element(rng);
        if !candidate.is_zero() {
            return candidate;
        }
    }
}
