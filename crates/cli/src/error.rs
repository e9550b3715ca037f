//! Error handling

use fieldlog_galois::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid coefficients '{input}': {reason}")]
    InvalidCoefficients { input: String, reason: String },

    #[error("Invalid exponent '{0}'")]
    InvalidExponent(String),

    #[error("No field given: pass --prime and --modulus or set them under [defaults] in the config file")]
    MissingField,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
