//! Output format handling

use anyhow::Result;
use clap::ValueEnum;
use fieldlog_galois::FiniteFieldElement;
use serde::Serialize;

use crate::config::Config;
use crate::error::CliError;
use crate::utils;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Pick the explicit flag if given, otherwise the configured default
    pub fn resolve(explicit: Option<Self>, config: &Config) -> Result<Self, CliError> {
        match explicit {
            Some(format) => Ok(format),
            None => Self::from_str(&config.defaults.format, true).map_err(|_| {
                CliError::Config(format!(
                    "unknown output format '{}' (expected table, json or yaml)",
                    config.defaults.format
                ))
            }),
        }
    }

    /// Print `report` in this format; `table` renders the human-readable form.
    pub fn emit<T: Serialize>(&self, report: &T, table: impl FnOnce(&T)) -> Result<()> {
        match self {
            Self::Json => {
                let json = serde_json::to_string_pretty(report)
                    .map_err(|e| CliError::Serialization(e.to_string()))?;
                println!("{}", json);
            }
            Self::Yaml => {
                let yaml = serde_yaml::to_string(report)
                    .map_err(|e| CliError::Serialization(e.to_string()))?;
                print!("{}", yaml);
            }
            Self::Table => table(report),
        }
        Ok(())
    }
}

/// Serializable view of a field element
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    /// Polynomial form, e.g. `1 + 3x`
    pub polynomial: String,

    /// Coefficients, lowest degree first, padded to the field degree
    pub coefficients: Vec<u64>,
}

impl From<&FiniteFieldElement<'_>> for ElementData {
    fn from(element: &FiniteFieldElement<'_>) -> Self {
        Self {
            polynomial: element.poly_string(),
            coefficients: element.coefficients().to_vec(),
        }
    }
}

impl ElementData {
    pub fn describe(&self) -> String {
        format!(
            "{}  {}",
            self.polynomial,
            utils::format_coefficients(&self.coefficients)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use fieldlog_galois::FiniteField;

    #[test]
    fn test_resolve_prefers_flag() {
        let config = Config {
            defaults: Defaults {
                format: "yaml".to_string(),
                ..Defaults::default()
            },
        };
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Json), &config).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::resolve(None, &config).unwrap(),
            OutputFormat::Yaml
        );
        assert_eq!(
            OutputFormat::resolve(None, &Config::default()).unwrap(),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_format() {
        let config = Config {
            defaults: Defaults {
                format: "xml".to_string(),
                ..Defaults::default()
            },
        };
        assert!(matches!(
            OutputFormat::resolve(None, &config),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_element_data() {
        let field = FiniteField::new(7, &[3, 6, 1]).unwrap();
        let element = field.element(&[1, 3]).unwrap();
        let data = ElementData::from(&element);
        assert_eq!(data.polynomial, "1 + 3x");
        assert_eq!(data.coefficients, vec![1, 3]);
        assert_eq!(data.describe(), "1 + 3x  [1, 3]");

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["coefficients"], serde_json::json!([1, 3]));
    }
}
