//! Utility functions

use anyhow::{bail, Context, Result};

use crate::error::CliError;

/// Parse a coefficient list, lowest degree first.
///
/// Accepts `1,3`, `[1, 3]` and `1 3`. Negative entries are allowed.
pub fn parse_coefficients(input: &str) -> Result<Vec<i64>, CliError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let coeffs = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| CliError::InvalidCoefficients {
                    input: input.to_string(),
                    reason: format!("'{}': {}", token, e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if coeffs.is_empty() {
        return Err(CliError::InvalidCoefficients {
            input: input.to_string(),
            reason: "no coefficients given".to_string(),
        });
    }

    Ok(coeffs)
}

/// Format a coefficient vector as `[1, 3]`
pub fn format_coefficients(coeffs: &[u64]) -> String {
    let items: Vec<String> = coeffs.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Decode a 32-byte hex seed
pub fn parse_seed(seed_hex: &str) -> Result<[u8; 32]> {
    let seed_bytes = hex::decode(seed_hex.trim()).context("Invalid hex seed")?;
    if seed_bytes.len() != 32 {
        bail!("Seed must be exactly 32 bytes (64 hex characters)");
    }
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&seed_bytes);
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coefficients() {
        assert_eq!(parse_coefficients("1,3").unwrap(), vec![1, 3]);
        assert_eq!(parse_coefficients("[3, 6, 1]").unwrap(), vec![3, 6, 1]);
        assert_eq!(parse_coefficients(" 4 5 ").unwrap(), vec![4, 5]);
        assert_eq!(parse_coefficients("-1,0,1").unwrap(), vec![-1, 0, 1]);
        assert_eq!(parse_coefficients("0").unwrap(), vec![0]);
    }

    #[test]
    fn test_parse_coefficients_rejects_garbage() {
        assert!(matches!(
            parse_coefficients("1,x"),
            Err(CliError::InvalidCoefficients { .. })
        ));
        assert!(parse_coefficients("").is_err());
        assert!(parse_coefficients("[]").is_err());
        assert!(parse_coefficients("1.5").is_err());
    }

    #[test]
    fn test_format_coefficients() {
        assert_eq!(format_coefficients(&[1, 3]), "[1, 3]");
        assert_eq!(format_coefficients(&[]), "[]");
    }

    #[test]
    fn test_parse_seed() {
        let seed = parse_seed(&"ab".repeat(32)).unwrap();
        assert_eq!(seed, [0xab; 32]);
        assert!(parse_seed("abcd").is_err());
        assert!(parse_seed("zz").is_err());
    }
}
