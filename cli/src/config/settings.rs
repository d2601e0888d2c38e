use crate::catalog;
use crate::error::{Error, Result};
use crate::units::{QuantityKind, DEFAULT_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Largest precision `toPrecision` accepts
pub const MAX_DIGITS: usize = 21;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    // Per-calculator overrides, keyed by slug
    #[serde(default)]
    pub calculators: HashMap<String, CalculatorOverride>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Shown instead of a value that could not be formatted
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Global fallback precision
    #[serde(default)]
    pub digits: Option<usize>,

    // Precision per quantity kind, keyed by kind name ("resistance", "time", ...)
    #[serde(default)]
    pub kinds: HashMap<String, usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            digits: None,
            kinds: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CalculatorOverride {
    /// Precision for every output of the calculator
    #[serde(default)]
    pub digits: Option<usize>,

    // Precision per output name
    #[serde(default)]
    pub outputs: HashMap<String, usize>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn check_digits(digits: usize, what: &str) -> Result<()> {
    if (1..=MAX_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(Error::config(format!(
            "{} must be between 1 and {} digits, got {}",
            what, MAX_DIGITS, digits
        )))
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Reject precisions outside 1..=21 and keys that name nothing.
    pub fn validate(&self) -> Result<()> {
        if let Some(digits) = self.display.digits {
            check_digits(digits, "display.digits")?;
        }

        for (kind, &digits) in &self.display.kinds {
            if QuantityKind::from_name(kind).is_none() {
                return Err(Error::config(format!("unknown quantity kind '{}'", kind)));
            }
            check_digits(digits, &format!("display.kinds.{}", kind))?;
        }

        for (slug, calc) in &self.calculators {
            let spec = catalog::find(slug)
                .ok_or_else(|| Error::config(format!("unknown calculator '{}'", slug)))?;

            if let Some(digits) = calc.digits {
                check_digits(digits, &format!("calculators.{}.digits", slug))?;
            }
            for (output, &digits) in &calc.outputs {
                if spec.output(output).is_none() {
                    return Err(Error::config(format!(
                        "calculator '{}' has no output '{}'",
                        slug, output
                    )));
                }
                check_digits(digits, &format!("calculators.{}.outputs.{}", slug, output))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.display.placeholder, "---");
        assert!(config.display.digits.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
            [display]
            placeholder = "n/a"
            digits = 5

            [display.kinds]
            resistance = 4

            [calculators.lc_resonance]
            digits = 6

            [calculators.ohms_law.outputs]
            power = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.display.placeholder, "n/a");
        assert_eq!(config.display.digits, Some(5));
        assert_eq!(config.display.kinds["resistance"], 4);
        assert_eq!(config.calculators["lc_resonance"].digits, Some(6));
        assert_eq!(config.calculators["ohms_law"].outputs["power"], 2);
    }

    #[test]
    fn test_rejects_out_of_range_digits() {
        let err = Config::load_from_str("[display]\ndigits = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::load_from_str("[display.kinds]\ntime = 22").unwrap_err();
        assert!(err.to_string().contains("display.kinds.time"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::load_from_str("[display.kinds]\nflux = 3").is_err());
        assert!(Config::load_from_str("[calculators.flux_capacitor]\ndigits = 3").is_err());
        assert!(Config::load_from_str("[calculators.ohms_law.outputs]\ntorque = 3").is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::load_from_str("[display\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
